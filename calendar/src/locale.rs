//! Display strings for the widget chrome.
//!
//! The original app ships Russian labels; that stays the default here.
//! Month names come in two forms because Russian detail headings need the
//! genitive case ("25 марта") while the header uses the nominative
//! ("Март 2025").

/// Localized strings used by the month view and the detail panel.
#[derive(Debug, Clone)]
pub struct Locale {
    /// Month names for the header, January first
    pub month_names: [&'static str; 12],
    /// Month names for the detail heading (genitive where the language
    /// needs it)
    pub month_names_heading: [&'static str; 12],
    /// Weekday abbreviations, Monday first
    pub weekdays: [&'static str; 7],
    pub today_label: &'static str,
    pub no_events_message: &'static str,
    /// Detail heading puts the day number before the month name
    day_first: bool,
}

impl Locale {
    pub fn russian() -> Self {
        Self {
            month_names: [
                "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь",
                "Июль", "Август", "Сентябрь", "Октябрь", "Ноябрь", "Декабрь",
            ],
            month_names_heading: [
                "января", "февраля", "марта", "апреля", "мая", "июня",
                "июля", "августа", "сентября", "октября", "ноября", "декабря",
            ],
            weekdays: ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"],
            today_label: "Сегодня",
            no_events_message: "Нет событий на этот день.",
            day_first: true,
        }
    }

    pub fn english() -> Self {
        Self {
            month_names: [
                "January", "February", "March", "April", "May", "June",
                "July", "August", "September", "October", "November", "December",
            ],
            month_names_heading: [
                "January", "February", "March", "April", "May", "June",
                "July", "August", "September", "October", "November", "December",
            ],
            weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            today_label: "Today",
            no_events_message: "No events on this day.",
            day_first: false,
        }
    }

    /// Header title for a visible month, e.g. "Март 2025".
    pub fn month_title(&self, month0: u32, year: i32) -> String {
        let name = self
            .month_names
            .get(month0 as usize)
            .copied()
            .unwrap_or_default();
        format!("{} {}", name, year)
    }

    /// Detail-panel heading for a selected day, e.g. "25 марта".
    pub fn day_heading(&self, month0: u32, day: u32) -> String {
        let name = self
            .month_names_heading
            .get(month0 as usize)
            .copied()
            .unwrap_or_default();
        if self.day_first {
            format!("{} {}", day, name)
        } else {
            format!("{} {}", name, day)
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::russian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_month_title() {
        assert_eq!(Locale::russian().month_title(2, 2025), "Март 2025");
    }

    #[test]
    fn test_russian_day_heading_uses_genitive() {
        assert_eq!(Locale::russian().day_heading(2, 25), "25 марта");
    }

    #[test]
    fn test_english_day_heading_is_month_first() {
        assert_eq!(Locale::english().day_heading(2, 15), "March 15");
    }

    #[test]
    fn test_default_is_russian() {
        assert_eq!(Locale::default().today_label, "Сегодня");
    }
}
