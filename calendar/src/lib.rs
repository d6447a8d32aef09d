//! Calendar widget core for the reminders Mini App.
//!
//! This crate holds the rendering-surface-free logic of the embedded
//! calendar: reminder normalization into a date-keyed event index, month
//! grid construction, navigation/selection state, and the single
//! authenticated fetch against the reminders backend. Hosts render the
//! view models this crate produces; nothing here touches a UI toolkit.

pub mod assets;
pub mod config;
pub mod container;
pub mod error;
pub mod fetch;
pub mod grid;
pub mod index;
pub mod locale;
pub mod models;
pub mod view;

pub use assets::AssetResolver;
pub use config::WidgetConfig;
pub use container::{Calendar, DayDetail, MonthView, NavIcons};
pub use error::{Error, Result};
pub use fetch::ReminderFetcher;
pub use grid::{DayCell, GridCell, Indicator, MonthGrid};
pub use index::EventIndex;
pub use locale::Locale;
pub use models::{CalendarEvent, ReminderRecord, RemindersResponse};
pub use view::ViewState;
