//! Terminal preview of the reminders calendar widget.
//!
//! Composes the library end to end: configuration from environment
//! variables, one authenticated fetch, then a text rendering of the month
//! view. Pass a `YYYY-MM-DD` argument to select a day and print its detail
//! panel.
//!
//! Environment:
//! - `REMINDERS_USER_ID` - Telegram user id
//! - `REMINDERS_TOKEN` - bearer token
//! - `REMINDERS_API_URL` - reminders endpoint
//! - `STATIC_ASSET_BASE` - icon/avatar base URL (optional)

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use calendar::{AssetResolver, Calendar, GridCell, ReminderFetcher, WidgetConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let user_id = std::env::var("REMINDERS_USER_ID").ok();
    let token = std::env::var("REMINDERS_TOKEN").ok();
    let endpoint =
        std::env::var("REMINDERS_API_URL").context("REMINDERS_API_URL not set")?;
    let asset_base =
        std::env::var("STATIC_ASSET_BASE").unwrap_or_else(|_| "/static".to_string());

    let config = WidgetConfig::from_params(user_id.as_deref(), token.as_deref(), endpoint)?;

    let today = Utc::now().date_naive();
    let mut widget = Calendar::new(AssetResolver::with_base(asset_base), today);

    let fetcher = ReminderFetcher::new(config);
    widget.apply_fetch(fetcher.fetch().await);
    if let Some(err) = widget.last_error() {
        warn!("showing an empty calendar: {}", err);
    }

    match std::env::args().nth(1) {
        Some(raw) => {
            let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .context("expected selected date as YYYY-MM-DD")?;
            widget.select_day(date);
        }
        None => widget.go_to_today(today),
    }

    print_month(&widget)?;
    Ok(())
}

/// Print the month grid and, when a day is selected, its detail panel.
fn print_month(widget: &Calendar) -> anyhow::Result<()> {
    let view = widget.month_view()?;

    println!("{}", view.title);
    for label in view.weekdays {
        print!("{:>4}", label);
    }
    println!();

    let mut column = 0;
    for cell in &view.grid.cells {
        match cell {
            GridCell::Blank => print!("    "),
            GridCell::Day(day) => {
                let marker = if day.selected {
                    '<'
                } else if day.event_count() > 0 {
                    '*'
                } else {
                    ' '
                };
                print!("{:>3}{}", day.day, marker);
            }
        }
        column += 1;
        if column == 7 {
            println!();
            column = 0;
        }
    }
    if column > 0 {
        println!();
    }

    if let Some(detail) = &view.detail {
        println!();
        println!("{}", detail.heading);
        if detail.events.is_empty() {
            println!("{}", widget.locale().no_events_message);
        } else {
            for event in detail.events {
                println!("  {}  {}", event.time, event.title);
            }
        }
    }

    Ok(())
}
