//! Navigation, selection and collapse state.
//!
//! Transitions are pure: each returns a new `ViewState`, so they unit-test
//! without any rendering surface attached.

use chrono::{Datelike, NaiveDate};

/// The container's view state.
///
/// `month0` stays in `[0, 11]`; the year adjusts by exactly one when a
/// navigation wraps past January or December.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Zero-based visible month (January = 0)
    pub month0: u32,
    pub year: i32,
    pub selected: Option<NaiveDate>,
    pub collapsed: bool,
}

impl ViewState {
    /// Initial state: today's month visible, nothing selected, expanded.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month0: today.month0(),
            year: today.year(),
            selected: None,
            collapsed: false,
        }
    }

    /// Go back one month; clears the selection.
    pub fn previous_month(self) -> Self {
        let (month0, year) = if self.month0 == 0 {
            (11, self.year - 1)
        } else {
            (self.month0 - 1, self.year)
        };
        Self {
            month0,
            year,
            selected: None,
            ..self
        }
    }

    /// Go forward one month; clears the selection.
    pub fn next_month(self) -> Self {
        let (month0, year) = if self.month0 == 11 {
            (0, self.year + 1)
        } else {
            (self.month0 + 1, self.year)
        };
        Self {
            month0,
            year,
            selected: None,
            ..self
        }
    }

    /// Jump to today's month and select today.
    ///
    /// The selection happens unconditionally. An earlier incarnation only
    /// selected when today's month was already visible before the jump,
    /// which made the "today" button a no-op from any other month.
    pub fn today(self, today: NaiveDate) -> Self {
        Self {
            month0: today.month0(),
            year: today.year(),
            selected: Some(today),
            ..self
        }
    }

    /// Select a day; the visible month does not change.
    pub fn select(self, date: NaiveDate) -> Self {
        Self {
            selected: Some(date),
            ..self
        }
    }

    /// Flip the collapsed flag; nothing else changes.
    pub fn toggle_collapsed(self) -> Self {
        Self {
            collapsed: !self.collapsed,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_previous_month_wraps_january() {
        let state = ViewState::new(date(2025, 1, 10));
        let back = state.previous_month();
        assert_eq!((back.month0, back.year), (11, 2024));
    }

    #[test]
    fn test_next_month_wraps_december() {
        let state = ViewState::new(date(2025, 12, 10));
        let forward = state.next_month();
        assert_eq!((forward.month0, forward.year), (0, 2026));
    }

    #[test]
    fn test_twelve_next_months_is_one_year() {
        for start in [date(2025, 1, 1), date(2025, 6, 15), date(2025, 12, 31)] {
            let mut state = ViewState::new(start);
            let origin = (state.month0, state.year);
            for _ in 0..12 {
                state = state.next_month();
            }
            assert_eq!((state.month0, state.year), (origin.0, origin.1 + 1));
        }
    }

    #[test]
    fn test_navigation_clears_selection() {
        let state = ViewState::new(date(2025, 3, 1)).select(date(2025, 3, 25));
        assert!(state.previous_month().selected.is_none());
        assert!(state.next_month().selected.is_none());
    }

    #[test]
    fn test_today_always_selects_today() {
        let today = date(2025, 3, 26);

        // Already viewing the current month.
        let same_month = ViewState::new(today).today(today);
        assert_eq!((same_month.month0, same_month.year), (2, 2025));
        assert_eq!(same_month.selected, Some(today));

        // Viewing a different month: the jump selects today too.
        let elsewhere = ViewState::new(today).next_month().next_month().today(today);
        assert_eq!((elsewhere.month0, elsewhere.year), (2, 2025));
        assert_eq!(elsewhere.selected, Some(today));
    }

    #[test]
    fn test_select_keeps_visible_month() {
        let state = ViewState::new(date(2025, 3, 1)).select(date(2025, 3, 25));
        assert_eq!((state.month0, state.year), (2, 2025));
        assert_eq!(state.selected, Some(date(2025, 3, 25)));
    }

    #[test]
    fn test_toggle_collapsed_touches_nothing_else() {
        let state = ViewState::new(date(2025, 3, 1)).select(date(2025, 3, 25));
        let toggled = state.toggle_collapsed();
        assert!(toggled.collapsed);
        assert_eq!(toggled.selected, state.selected);
        assert_eq!((toggled.month0, toggled.year), (state.month0, state.year));
        assert!(!toggled.toggle_collapsed().collapsed);
    }
}
