use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::trace;

use crate::models::{Professional, TimeOfDay, Weekday};
use crate::week::WeekWindow;

/// Slots shown per day in the compact week grid.
pub const WEEK_VIEW_VISIBLE_SLOTS: usize = 3;

// --- Availability Logic ---

/// Slots `professional` offers on `date`, in template order.
///
/// Looks up the civil weekday of `date` in the availability template. A day
/// without an entry yields an empty slice; that is a normal outcome, not an
/// error.
pub fn resolve(professional: &Professional, date: NaiveDate) -> &[TimeOfDay] {
    professional.availability.slots(Weekday::of(date))
}

/// Compact availability of one day in the week grid.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub weekday: Weekday,
    /// The first slots of the day, at most the visible limit.
    pub visible: Vec<TimeOfDay>,
    /// Slots not shown: `max(0, total - visible limit)`.
    pub overflow_count: usize,
    pub total: usize,
}

impl DaySlots {
    fn new(date: NaiveDate, slots: &[TimeOfDay], limit: usize) -> Self {
        let total = slots.len();
        Self {
            date,
            weekday: Weekday::of(date),
            visible: slots.iter().take(limit).copied().collect(),
            overflow_count: total.saturating_sub(limit),
            total,
        }
    }

    pub fn has_slots(&self) -> bool {
        self.total > 0
    }

    pub fn has_more(&self) -> bool {
        self.overflow_count > 0
    }

    /// Weekend columns are shaded in the grid.
    pub fn is_weekend(&self) -> bool {
        self.weekday.is_weekend()
    }

    /// Footer text under the visible slots: "+2 more", "No slots" or nothing.
    pub fn label(&self) -> Option<String> {
        if !self.has_slots() {
            Some("No slots".to_string())
        } else if self.has_more() {
            Some(format!("+{} more", self.overflow_count))
        } else {
            None
        }
    }
}

/// Per-day availability of a week window, keyed and ordered by date.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WeekAvailability {
    pub week_start: NaiveDate,
    pub days: BTreeMap<NaiveDate, DaySlots>,
}

impl WeekAvailability {
    pub fn get(&self, date: NaiveDate) -> Option<&DaySlots> {
        self.days.get(&date)
    }

    /// Days Monday to Sunday.
    pub fn iter(&self) -> impl Iterator<Item = &DaySlots> {
        self.days.values()
    }

    pub fn total_slots(&self) -> usize {
        self.days.values().map(|day| day.total).sum()
    }
}

/// Week grid for `professional` with the default visible limit of three.
pub fn resolve_week(professional: &Professional, week: &WeekWindow) -> WeekAvailability {
    resolve_week_with_limit(professional, week, WEEK_VIEW_VISIBLE_SLOTS)
}

/// Week grid for `professional` showing at most `limit` slots per day.
pub fn resolve_week_with_limit(
    professional: &Professional,
    week: &WeekWindow,
    limit: usize,
) -> WeekAvailability {
    let days: BTreeMap<NaiveDate, DaySlots> = week
        .days()
        .into_iter()
        .map(|date| (date, DaySlots::new(date, resolve(professional, date), limit)))
        .collect();

    let availability = WeekAvailability {
        week_start: week.week_start(),
        days,
    };
    trace!(
        "Resolved week of {} for professional {}: {} slots",
        availability.week_start,
        professional.id,
        availability.total_slots()
    );
    availability
}
