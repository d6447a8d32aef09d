//! Date-keyed event index built from raw reminders.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::IndexMap;
use tracing::warn;

use crate::models::{CalendarEvent, ReminderRecord};

/// Title substituted when a reminder carries no text.
pub const MISSING_TITLE: &str = "No title";

/// Mapping from calendar date to the ordered events on that date.
///
/// Rebuilt wholesale per fetch; never partially mutated. Key order is
/// first-seen order, per-key event order is backend iteration order.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    by_date: IndexMap<NaiveDate, Vec<CalendarEvent>>,
}

impl EventIndex {
    /// Empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group raw reminders into an index.
    ///
    /// A record whose timestamp is absent or unparseable is skipped with a
    /// warning; one bad record never aborts the pass. The input is not
    /// mutated.
    pub fn from_reminders(reminders: &IndexMap<String, ReminderRecord>) -> Self {
        let mut by_date: IndexMap<NaiveDate, Vec<CalendarEvent>> = IndexMap::new();

        for (key, record) in reminders {
            let Some(raw_datetime) = record.reminder_on_datetime.as_deref() else {
                warn!("reminder {} has no datetime, skipping", key);
                continue;
            };

            let Some(datetime) = parse_reminder_datetime(raw_datetime) else {
                warn!("reminder {} has unparseable datetime {:?}, skipping", key, raw_datetime);
                continue;
            };

            let title = match record.reminder_text.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => text.to_string(),
                _ => MISSING_TITLE.to_string(),
            };

            let id = record.id.clone().unwrap_or_else(|| key.clone());
            let date = datetime.date_naive();

            by_date.entry(date).or_default().push(CalendarEvent {
                id,
                title,
                date,
                time: datetime.format("%H:%M").to_string(),
            });
        }

        Self { by_date }
    }

    /// Events on the given date, in backend order. Empty for unknown dates.
    pub fn events_for(&self, date: NaiveDate) -> &[CalendarEvent] {
        self.by_date.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Number of events on the given date.
    pub fn event_count(&self, date: NaiveDate) -> usize {
        self.events_for(date).len()
    }

    /// Dates that have at least one event, in first-seen order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date.keys().copied()
    }

    /// Total number of events across all dates.
    pub fn total_events(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// Parse a reminder timestamp into a UTC instant.
///
/// Accepts RFC3339 first, then naive datetime variants treated as UTC, then
/// a bare date (midnight UTC). Returns `None` for anything else.
fn parse_reminder_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(DateTime::from_naive_utc_and_offset(ndt, Utc));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }

    None
}
