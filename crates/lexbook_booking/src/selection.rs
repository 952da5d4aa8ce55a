//! The professional × date × time selection and its transition guards.
//!
//! Invariants kept by every mutation:
//! - changing the date clears the time;
//! - changing the professional clears the time;
//! - a time is only ever set if it is one of the slots resolved for the
//!   current professional and date.
//!
//! `restore` is the one way to obtain a time that was not checked here; the
//! confirmer re-validates it before anything is booked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::directory::AttorneyDirectory;
use crate::error::BookingError;
use crate::logic::resolve;
use crate::models::{ConsultationType, Professional, ProfessionalId, TimeOfDay};

/// Whether the selected date has anything to book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AvailabilityStatus {
    DateNotSelected,
    /// A date is selected but the professional offers nothing on it.
    NoSlots { date: NaiveDate },
    Available { date: NaiveDate, count: usize },
}

/// Plain copy of a selection, e.g. to carry it across a page reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub professional_id: ProfessionalId,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeOfDay>,
    #[serde(default)]
    pub consultation_type: ConsultationType,
}

#[derive(Debug, Clone)]
pub struct SelectionState {
    directory: Arc<AttorneyDirectory>,
    // index into directory.list(); the directory never changes
    professional: usize,
    date: Option<NaiveDate>,
    time: Option<TimeOfDay>,
    consultation_type: ConsultationType,
    revision: u64,
}

impl SelectionState {
    /// Starts with the first professional of the directory, no date, no time.
    pub fn new(directory: Arc<AttorneyDirectory>) -> Result<Self, BookingError> {
        if directory.is_empty() {
            return Err(BookingError::EmptyDirectory);
        }
        Ok(Self {
            directory,
            professional: 0,
            date: None,
            time: None,
            consultation_type: ConsultationType::default(),
            revision: 0,
        })
    }

    /// Rebuilds a selection from a snapshot.
    ///
    /// The professional must exist. The time is taken as-is and may be stale.
    pub fn restore(
        directory: Arc<AttorneyDirectory>,
        snapshot: SelectionSnapshot,
    ) -> Result<Self, BookingError> {
        let professional = directory
            .position(snapshot.professional_id)
            .ok_or(BookingError::NotFound(snapshot.professional_id))?;
        Ok(Self {
            directory,
            professional,
            date: snapshot.date,
            // a time without a date is meaningless
            time: snapshot.date.and(snapshot.time),
            consultation_type: snapshot.consultation_type,
            revision: 0,
        })
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            professional_id: self.professional_id(),
            date: self.date,
            time: self.time,
            consultation_type: self.consultation_type,
        }
    }

    pub fn directory(&self) -> &Arc<AttorneyDirectory> {
        &self.directory
    }

    pub fn professional(&self) -> &Professional {
        &self.directory.list()[self.professional]
    }

    pub fn professional_id(&self) -> ProfessionalId {
        self.professional().id
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn selected_time(&self) -> Option<TimeOfDay> {
        self.time
    }

    pub fn consultation_type(&self) -> ConsultationType {
        self.consultation_type
    }

    /// Bumped by every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    pub fn select_professional(&mut self, id: ProfessionalId) -> Result<(), BookingError> {
        let index = self
            .directory
            .position(id)
            .ok_or(BookingError::NotFound(id))?;
        self.professional = index;
        self.time = None;
        self.touch();
        debug!("Selected professional {}", id);
        Ok(())
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
        self.time = None;
        self.touch();
        debug!("Selected date {}", date);
    }

    pub fn clear_date(&mut self) {
        self.date = None;
        self.time = None;
        self.touch();
        debug!("Cleared date");
    }

    pub fn select_time(&mut self, time: TimeOfDay) -> Result<(), BookingError> {
        let date = self.date.ok_or(BookingError::MissingDate)?;
        if !resolve(self.professional(), date).contains(&time) {
            debug!(
                "Rejected {} on {} for professional {}",
                time,
                date,
                self.professional_id()
            );
            return Err(BookingError::InvalidSelection { date, time });
        }
        self.time = Some(time);
        self.touch();
        debug!("Selected time {} on {}", time, date);
        Ok(())
    }

    pub fn select_consultation_type(&mut self, consultation_type: ConsultationType) {
        self.consultation_type = consultation_type;
        self.touch();
    }

    /// Slots for the current professional on the selected date.
    pub fn available_times(&self) -> &[TimeOfDay] {
        match self.date {
            Some(date) => resolve(self.professional(), date),
            None => &[],
        }
    }

    pub fn availability_status(&self) -> AvailabilityStatus {
        match self.date {
            None => AvailabilityStatus::DateNotSelected,
            Some(date) => match resolve(self.professional(), date).len() {
                0 => AvailabilityStatus::NoSlots { date },
                count => AvailabilityStatus::Available { date, count },
            },
        }
    }

    pub(crate) fn clear_time(&mut self) {
        self.time = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
