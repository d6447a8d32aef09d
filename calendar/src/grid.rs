//! Month grid construction.
//!
//! A grid covers exactly one month, Monday-first: leading blank cells up to
//! the weekday of day 1, then one cell per day. No trailing padding is
//! appended, so the cell count is `leading_blanks + days_in_month`.

use chrono::{Datelike, NaiveDate};

use crate::index::EventIndex;
use crate::models::CalendarEvent;
use crate::{Error, Result};

/// Sizing of the event-count indicator shown on a day cell.
///
/// Cosmetic, but part of the contract: hosts reproduce these numbers in
/// visual regression tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub width: u32,
    pub height: u32,
    pub corner_radius: u32,
}

/// One selectable day in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    /// Day of month, 1-based
    pub day: u32,
    pub date: NaiveDate,
    /// Events on this day, in index order
    pub events: &'a [CalendarEvent],
    pub selected: bool,
}

impl DayCell<'_> {
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Indicator sizing, or `None` when the day has no events.
    ///
    /// Width grows with the event count and clamps at 20.
    pub fn indicator(&self) -> Option<Indicator> {
        let count = self.events.len() as u32;
        if count == 0 {
            return None;
        }
        Some(Indicator {
            width: (3 + count * 2).min(20),
            height: 3,
            corner_radius: 2,
        })
    }
}

/// One slot in the grid sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell<'a> {
    /// Placeholder before day 1
    Blank,
    Day(DayCell<'a>),
}

impl<'a> GridCell<'a> {
    pub fn as_day(&self) -> Option<&DayCell<'a>> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(cell) => Some(cell),
        }
    }
}

/// The ordered cell sequence for one visible month.
#[derive(Debug, Clone)]
pub struct MonthGrid<'a> {
    /// Zero-based visible month (January = 0)
    pub month0: u32,
    pub year: i32,
    pub leading_blanks: u32,
    pub cells: Vec<GridCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Build the grid for `(month0, year)`, looking day events up in
    /// `index` and flagging the cell matching `selected`.
    pub fn build(
        month0: u32,
        year: i32,
        index: &'a EventIndex,
        selected: Option<NaiveDate>,
    ) -> Result<Self> {
        let first = first_of_month(month0, year)?;
        let leading_blanks = first.weekday().num_days_from_monday();
        let total_days = days_in_month(month0, year)?;

        let mut cells = Vec::with_capacity((leading_blanks + total_days) as usize);
        for _ in 0..leading_blanks {
            cells.push(GridCell::Blank);
        }

        for day in 1..=total_days {
            let date = first
                .with_day(day)
                .ok_or_else(|| Error::Data(format!("invalid day {} in {}/{}", day, month0, year)))?;
            cells.push(GridCell::Day(DayCell {
                day,
                date,
                events: index.events_for(date),
                selected: selected == Some(date),
            }));
        }

        Ok(Self {
            month0,
            year,
            leading_blanks,
            cells,
        })
    }

    /// Day cells only, skipping the leading blanks.
    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.cells.iter().filter_map(GridCell::as_day)
    }
}

/// First day of the given zero-based month.
pub fn first_of_month(month0: u32, year: i32) -> Result<NaiveDate> {
    if month0 > 11 {
        return Err(Error::Data(format!("month out of range: {}", month0)));
    }
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .ok_or_else(|| Error::Data(format!("unrepresentable month {}/{}", month0, year)))
}

/// Number of days in the given zero-based month, proleptic Gregorian.
pub fn days_in_month(month0: u32, year: i32) -> Result<u32> {
    let first = first_of_month(month0, year)?;
    let next = if month0 == 11 {
        first_of_month(0, year + 1)?
    } else {
        first_of_month(month0 + 1, year)?
    };
    Ok(next.signed_duration_since(first).num_days() as u32)
}
