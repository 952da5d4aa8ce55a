//! Monday-aligned seven-day viewing window.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekWindow {
    week_start: NaiveDate,
}

impl WeekWindow {
    /// The week (Monday to Sunday) that contains `date`.
    ///
    /// Within the first days of chrono's calendar range, where the Monday is
    /// not representable, the window starts at `date` itself.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_monday());
        let week_start = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
        Self { week_start }
    }

    /// The following week. Stays put at the end of the calendar range.
    pub fn next(&self) -> Self {
        self.week_start
            .checked_add_days(Days::new(7))
            .map(|week_start| Self { week_start })
            .unwrap_or(*self)
    }

    /// The preceding week. Stays put at the start of the calendar range.
    pub fn prev(&self) -> Self {
        self.week_start
            .checked_sub_days(Days::new(7))
            .map(|week_start| Self { week_start })
            .unwrap_or(*self)
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    /// Sunday of the window.
    pub fn week_end(&self) -> NaiveDate {
        self.week_start
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX)
    }

    /// The seven dates of the window, Monday first.
    pub fn days(&self) -> [NaiveDate; 7] {
        std::array::from_fn(|i| {
            self.week_start
                .checked_add_days(Days::new(i as u64))
                .unwrap_or(NaiveDate::MAX)
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.week_start <= date && date <= self.week_end()
    }

    /// Header text, e.g. "May 5 - May 11, 2025".
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.week_start.format("%b %-d"),
            self.week_end().format("%b %-d, %Y")
        )
    }
}
