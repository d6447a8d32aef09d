//! Wire and display data models.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Request body for the reminders endpoint.
#[derive(Debug, Serialize)]
pub struct RemindersRequest {
    pub t_user_id: i64,
}

/// Raw reminder record as the backend ships it.
///
/// Every field is optional: one sparse record must not fail deserialization
/// of the whole response. The key the record sits under in the response map
/// doubles as its id when the `id` field is absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub reminder_text: Option<String>,
    #[serde(default)]
    pub reminder_on_datetime: Option<String>,
}

/// Success envelope of the reminders endpoint.
///
/// `IndexMap` keeps the backend's iteration order, which fixes the relative
/// order of events that fall on the same date.
#[derive(Debug, Deserialize)]
pub struct RemindersResponse {
    pub status: String,
    #[serde(default)]
    pub reminders: IndexMap<String, ReminderRecord>,
}

/// Normalized, display-ready form of a reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    /// UTC calendar date the reminder falls on; serializes as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// UTC time of day, `HH:MM`
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_record_deserializes() {
        let record: ReminderRecord = serde_json::from_str("{}").unwrap();
        assert!(record.id.is_none());
        assert!(record.reminder_text.is_none());
        assert!(record.reminder_on_datetime.is_none());
    }

    #[test]
    fn test_response_preserves_reminder_order() {
        let raw = r#"{
            "status": "ok",
            "reminders": {
                "9": {"reminder_text": "first", "reminder_on_datetime": "2025-03-25T13:00:00Z"},
                "2": {"reminder_text": "second", "reminder_on_datetime": "2025-03-25T14:00:00Z"},
                "7": {"reminder_text": "third", "reminder_on_datetime": "2025-03-25T15:00:00Z"}
            }
        }"#;
        let response: RemindersResponse = serde_json::from_str(raw).unwrap();
        let keys: Vec<&str> = response.reminders.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["9", "2", "7"]);
    }

    #[test]
    fn test_event_date_serializes_as_iso() {
        let event = CalendarEvent {
            id: "4".to_string(),
            title: "Sync".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 25).unwrap(),
            time: "13:00".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["date"], "2025-03-25");
    }
}
