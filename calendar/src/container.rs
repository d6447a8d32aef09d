//! Calendar container: owns the widget state and composes view models.

use chrono::{Datelike, NaiveDate};
use tracing::{error, info};

use crate::assets::{icons, AssetResolver};
use crate::grid::MonthGrid;
use crate::index::EventIndex;
use crate::locale::Locale;
use crate::models::CalendarEvent;
use crate::view::ViewState;
use crate::{Error, Result};

/// Resolved icon URLs for the header and collapse controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavIcons {
    pub previous: String,
    pub next: String,
    /// Expand icon while collapsed, collapse icon while expanded
    pub collapse_toggle: String,
}

/// Detail panel for the selected day.
///
/// An empty `events` slice means the host renders the locale's no-events
/// message instead of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDetail<'a> {
    pub heading: String,
    pub events: &'a [CalendarEvent],
    /// Bullet icon shown next to each listed event
    pub bullet_icon: String,
}

/// The full render model for one visible month.
#[derive(Debug)]
pub struct MonthView<'a> {
    /// Localized month title, e.g. "Март 2025"
    pub title: String,
    /// Weekday header labels, Monday first
    pub weekdays: [&'static str; 7],
    pub today_label: &'static str,
    pub avatar_url: Option<&'a str>,
    pub nav: NavIcons,
    pub collapsed: bool,
    pub grid: MonthGrid<'a>,
    /// Present only while a day is selected
    pub detail: Option<DayDetail<'a>>,
}

/// The widget container.
///
/// Owns the event index and the view state; all mutation goes through the
/// navigation methods, so no illegal state is reachable.
#[derive(Debug)]
pub struct Calendar {
    view: ViewState,
    events: EventIndex,
    locale: Locale,
    assets: AssetResolver,
    avatar_url: Option<String>,
    last_error: Option<Error>,
}

impl Calendar {
    /// Create a container showing today's month, with no events loaded yet.
    pub fn new(assets: AssetResolver, today: NaiveDate) -> Self {
        Self {
            view: ViewState::new(today),
            events: EventIndex::new(),
            locale: Locale::default(),
            assets,
            avatar_url: None,
            last_error: None,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn events(&self) -> &EventIndex {
        &self.events
    }

    /// The error recorded by the last failed fetch, if any.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Install a freshly fetched index.
    pub fn set_events(&mut self, events: EventIndex) {
        info!("loaded {} events on {} dates", events.total_events(), events.dates().count());
        self.events = events;
        self.last_error = None;
    }

    /// Apply a fetch outcome.
    ///
    /// On failure the index is replaced with an empty one so stale data is
    /// never shown next to an error banner.
    pub fn apply_fetch(&mut self, result: Result<EventIndex>) {
        match result {
            Ok(events) => self.set_events(events),
            Err(err) => {
                error!("reminder fetch failed: {}", err);
                self.events = EventIndex::new();
                self.last_error = Some(err);
            }
        }
    }

    pub fn go_to_previous_month(&mut self) {
        self.view = self.view.previous_month();
    }

    pub fn go_to_next_month(&mut self) {
        self.view = self.view.next_month();
    }

    /// Jump to (and select) the given current date.
    ///
    /// The caller supplies "today" so the container never reads the clock
    /// itself.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.view = self.view.today(today);
    }

    pub fn select_day(&mut self, date: NaiveDate) {
        self.view = self.view.select(date);
    }

    pub fn toggle_collapsed(&mut self) {
        self.view = self.view.toggle_collapsed();
    }

    /// Compose the render model for the currently visible month.
    pub fn month_view(&self) -> Result<MonthView<'_>> {
        let grid = MonthGrid::build(self.view.month0, self.view.year, &self.events, self.view.selected)?;

        let detail = self.view.selected.map(|date| DayDetail {
            heading: self.locale.day_heading(date.month0(), date.day()),
            events: self.events.events_for(date),
            bullet_icon: self.assets.url(icons::EVENT_BULLET),
        });

        let collapse_toggle = if self.view.collapsed {
            self.assets.url(icons::EXPAND)
        } else {
            self.assets.url(icons::COLLAPSE)
        };

        Ok(MonthView {
            title: self.locale.month_title(self.view.month0, self.view.year),
            weekdays: self.locale.weekdays,
            today_label: self.locale.today_label,
            avatar_url: self.avatar_url.as_deref(),
            nav: NavIcons {
                previous: self.assets.url(icons::PREVIOUS),
                next: self.assets.url(icons::NEXT),
                collapse_toggle,
            },
            collapsed: self.view.collapsed,
            grid,
            detail,
        })
    }
}
