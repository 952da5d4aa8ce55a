// --- File: crates/lexbook_booking/src/error.rs ---
use chrono::NaiveDate;
use lexbook_common::LexbookError;
use thiserror::Error;

use crate::models::{ProfessionalId, TimeOfDay};

/// Rejections raised by the selection state machine and the confirmer.
///
/// All of them leave the selection untouched and can be shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Professional not found: {0}")]
    NotFound(ProfessionalId),

    #[error("{time} is not an available slot on {date}")]
    InvalidSelection { date: NaiveDate, time: TimeOfDay },

    #[error("No date selected")]
    MissingDate,

    #[error("No time selected")]
    MissingTime,

    #[error("{time} on {date} is no longer available")]
    StaleTime { date: NaiveDate, time: TimeOfDay },

    #[error("Attorney directory is empty")]
    EmptyDirectory,

    #[error("Confirmation was superseded by a newer selection")]
    Superseded,

    #[error("No confirmation is pending")]
    NoPendingConfirmation,

    #[error("Invalid time of day: {0:?} (expected HH:MM)")]
    InvalidTime(String),
}

impl BookingError {
    /// The selection field the rejection is about, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BookingError::NotFound(_) | BookingError::EmptyDirectory => Some("professional"),
            BookingError::MissingDate => Some("date"),
            BookingError::InvalidSelection { .. }
            | BookingError::MissingTime
            | BookingError::StaleTime { .. }
            | BookingError::InvalidTime(_) => Some("time"),
            BookingError::Superseded | BookingError::NoPendingConfirmation => None,
        }
    }
}

/// Convert BookingError to LexbookError
impl From<BookingError> for LexbookError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::NotFound(id) => {
                LexbookError::NotFoundError(format!("professional {}", id))
            }
            BookingError::EmptyDirectory => LexbookError::ConfigError(err.to_string()),
            BookingError::Superseded => LexbookError::CancelledError(err.to_string()),
            BookingError::InvalidTime(_) => LexbookError::ParseError(err.to_string()),
            BookingError::InvalidSelection { .. }
            | BookingError::MissingDate
            | BookingError::MissingTime
            | BookingError::StaleTime { .. }
            | BookingError::NoPendingConfirmation => {
                LexbookError::ValidationError(err.to_string())
            }
        }
    }
}
