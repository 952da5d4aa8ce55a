// --- File: crates/lexbook_booking/src/models.rs ---
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use lexbook_common::Notice;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::BookingError;

/// Identifier of a professional in the attorney directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfessionalId(pub u32);

impl fmt::Display for ProfessionalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, Monday first.
///
/// Template keys are this closed set, so a lookup can never miss on an
/// unrecognised day name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Civil-calendar weekday of `date`.
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Three-letter label used in the week grid header ("Mon").
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// A bookable wall-clock time with minute precision, written `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// `None` when hour or minute is out of range.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(TimeOfDay)
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    pub fn as_naive_time(self) -> NaiveTime {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(TimeOfDay)
            .map_err(|_| BookingError::InvalidTime(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Weekly recurring slots of one professional.
///
/// Day lists are kept exactly as supplied: no sorting, no de-duplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailabilityTemplate(BTreeMap<Weekday, Vec<TimeOfDay>>);

impl AvailabilityTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any previous list for `day`.
    pub fn with_day(mut self, day: Weekday, slots: Vec<TimeOfDay>) -> Self {
        self.0.insert(day, slots);
        self
    }

    /// Slots offered on `day`; empty when the day has no entry.
    pub fn slots(&self, day: Weekday) -> &[TimeOfDay] {
        self.0.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days whose list is not strictly ascending (unsorted or duplicated).
    pub fn unordered_days(&self) -> Vec<Weekday> {
        self.0
            .iter()
            .filter(|(_, slots)| slots.windows(2).any(|pair| pair[0] >= pair[1]))
            .map(|(day, _)| *day)
            .collect()
    }
}

impl FromIterator<(Weekday, Vec<TimeOfDay>)> for AvailabilityTemplate {
    fn from_iter<I: IntoIterator<Item = (Weekday, Vec<TimeOfDay>)>>(iter: I) -> Self {
        AvailabilityTemplate(iter.into_iter().collect())
    }
}

/// An attorney offering consultations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    pub id: ProfessionalId,
    pub name: String,
    pub specialization: String,
    /// Display only, e.g. "15 years".
    pub experience: String,
    pub rating: f32,
    #[serde(alias = "reviews")]
    pub review_count: u32,
    #[serde(default)]
    pub languages: Vec<String>,
    pub location: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub availability: AvailabilityTemplate,
}

impl Professional {
    /// Avatar fallback letters, "Jennifer Blackwell" -> "JB".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// How the consultation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationType {
    #[default]
    VideoCall,
    PhoneCall,
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsultationType::VideoCall => write!(f, "Video Call"),
            ConsultationType::PhoneCall => write!(f, "Phone Call"),
        }
    }
}

/// Duration and fee shown in the consultation summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationTerms {
    pub duration_minutes: u32,
    /// Fee in the smallest currency unit (e.g., cents).
    pub fee_cents: i64,
    pub currency: String,
}

impl ConsultationTerms {
    /// "USD 150.00"
    pub fn fee_label(&self) -> String {
        format!(
            "{} {}.{:02}",
            self.currency,
            self.fee_cents / 100,
            (self.fee_cents % 100).abs()
        )
    }
}

impl Default for ConsultationTerms {
    fn default() -> Self {
        Self {
            duration_minutes: 30,
            fee_cents: 15_000,
            currency: "USD".to_string(),
        }
    }
}

impl From<&lexbook_config::ConsultationConfig> for ConsultationTerms {
    fn from(config: &lexbook_config::ConsultationConfig) -> Self {
        Self {
            duration_minutes: config.duration_minutes,
            fee_cents: config.fee_cents,
            currency: config.currency.clone(),
        }
    }
}

/// A finalized booking, handed to the notification sink and then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub professional_id: ProfessionalId,
    pub professional_name: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub consultation_type: ConsultationType,
}

impl Confirmation {
    pub const NOTICE_TITLE: &'static str = "Consultation Booked!";

    /// User-facing toast for this booking.
    pub fn notice(&self) -> Notice {
        Notice::new(
            Self::NOTICE_TITLE,
            format!(
                "Your appointment with {} is confirmed for {} at {}.",
                self.professional_name,
                self.date.format("%B %-d, %Y"),
                self.time
            ),
        )
    }
}
