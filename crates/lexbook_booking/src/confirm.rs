use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::BookingError;
use crate::logic::resolve;
use crate::models::{Confirmation, TimeOfDay};
use crate::selection::SelectionState;

/// Turns a complete selection into a [`Confirmation`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BookingConfirmer;

impl BookingConfirmer {
    pub fn new() -> Self {
        Self
    }

    /// Checks date, time and that the time is still offered, in that order.
    ///
    /// The time is resolved again rather than trusted from the selection.
    pub fn validate(
        &self,
        selection: &SelectionState,
    ) -> Result<(NaiveDate, TimeOfDay), BookingError> {
        let date = selection.selected_date().ok_or(BookingError::MissingDate)?;
        let time = selection.selected_time().ok_or(BookingError::MissingTime)?;
        if !resolve(selection.professional(), date).contains(&time) {
            warn!(
                "Stale selection: {} on {} no longer offered by professional {}",
                time,
                date,
                selection.professional_id()
            );
            return Err(BookingError::StaleTime { date, time });
        }
        Ok((date, time))
    }

    /// Validates and confirms, then clears only the selected time.
    ///
    /// On error the selection is left untouched.
    pub fn confirm(&self, selection: &mut SelectionState) -> Result<Confirmation, BookingError> {
        let (date, time) = self.validate(selection)?;
        let professional = selection.professional();
        let confirmation = Confirmation {
            professional_id: professional.id,
            professional_name: professional.name.clone(),
            date,
            time,
            consultation_type: selection.consultation_type(),
        };
        selection.clear_time();
        info!(
            "Confirmed {} with {} on {} at {}",
            confirmation.consultation_type, confirmation.professional_name, date, time
        );
        Ok(confirmation)
    }
}
