//! Booking session service.
//!
//! A `BookingSession` owns one user's selection and week window and drives
//! confirmation through a short "booking in progress" delay. The delay runs
//! as a tokio task; any successful selection change while it is pending
//! aborts it, so a confirmation requested for an older selection can never
//! commit.

use chrono::NaiveDate;
use lexbook_common::{log_error, NotificationService};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::confirm::BookingConfirmer;
use crate::directory::AttorneyDirectory;
use crate::error::BookingError;
use crate::logic::{resolve_week_with_limit, WeekAvailability, WEEK_VIEW_VISIBLE_SLOTS};
use crate::models::{
    Confirmation, ConsultationTerms, ConsultationType, Professional, ProfessionalId, TimeOfDay,
};
use crate::selection::{AvailabilityStatus, SelectionState};
use crate::week::WeekWindow;

/// Tunables of a booking session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub visible_slots_per_day: usize,
    pub confirmation_delay: Duration,
    pub select_today_on_start: bool,
    pub consultation: ConsultationTerms,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            visible_slots_per_day: WEEK_VIEW_VISIBLE_SLOTS,
            confirmation_delay: Duration::from_millis(1_500),
            select_today_on_start: true,
            consultation: ConsultationTerms::default(),
        }
    }
}

impl From<&lexbook_config::BookingConfig> for SessionSettings {
    fn from(config: &lexbook_config::BookingConfig) -> Self {
        Self {
            visible_slots_per_day: config.visible_slots_per_day,
            confirmation_delay: Duration::from_millis(config.confirmation_delay_ms),
            select_today_on_start: config.select_today_on_start,
            consultation: ConsultationTerms::from(&config.consultation),
        }
    }
}

struct PendingConfirmation {
    revision: u64,
    delay: JoinHandle<()>,
    superseded: bool,
}

pub struct BookingSession<N: NotificationService> {
    selection: SelectionState,
    week: WeekWindow,
    confirmer: BookingConfirmer,
    notifier: Arc<N>,
    settings: SessionSettings,
    pending: Option<PendingConfirmation>,
}

impl<N: NotificationService> BookingSession<N> {
    /// Opens a session on the first professional with the week of `today` shown.
    pub fn new(
        directory: Arc<AttorneyDirectory>,
        notifier: Arc<N>,
        settings: SessionSettings,
        today: NaiveDate,
    ) -> Result<Self, BookingError> {
        let mut selection = SelectionState::new(directory)?;
        if settings.select_today_on_start {
            selection.select_date(today);
        }
        info!(
            "Booking session opened for {} with {} professionals",
            today,
            selection.directory().len()
        );
        Ok(Self {
            selection,
            week: WeekWindow::containing(today),
            confirmer: BookingConfirmer::new(),
            notifier,
            settings,
            pending: None,
        })
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn week(&self) -> WeekWindow {
        self.week
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn consultation_terms(&self) -> &ConsultationTerms {
        &self.settings.consultation
    }

    pub fn professionals(&self) -> &[Professional] {
        self.selection.directory().list()
    }

    pub fn professional(&self) -> &Professional {
        self.selection.professional()
    }

    // --- Selection ---

    pub fn select_professional(&mut self, id: ProfessionalId) -> Result<(), BookingError> {
        self.selection.select_professional(id)?;
        self.supersede_pending();
        Ok(())
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selection.select_date(date);
        self.supersede_pending();
    }

    pub fn clear_date(&mut self) {
        self.selection.clear_date();
        self.supersede_pending();
    }

    pub fn select_time(&mut self, time: TimeOfDay) -> Result<(), BookingError> {
        self.selection.select_time(time)?;
        self.supersede_pending();
        Ok(())
    }

    pub fn select_consultation_type(&mut self, consultation_type: ConsultationType) {
        self.selection.select_consultation_type(consultation_type);
        self.supersede_pending();
    }

    pub fn available_times(&self) -> &[TimeOfDay] {
        self.selection.available_times()
    }

    pub fn availability_status(&self) -> AvailabilityStatus {
        self.selection.availability_status()
    }

    // --- Week navigation ---

    pub fn next_week(&mut self) -> WeekWindow {
        self.week = self.week.next();
        self.week
    }

    pub fn prev_week(&mut self) -> WeekWindow {
        self.week = self.week.prev();
        self.week
    }

    /// Jumps the window to the week containing `date`.
    pub fn show_week_of(&mut self, date: NaiveDate) -> WeekWindow {
        self.week = WeekWindow::containing(date);
        self.week
    }

    /// Week grid for the selected professional in the current window.
    pub fn week_availability(&self) -> WeekAvailability {
        resolve_week_with_limit(
            self.selection.professional(),
            &self.week,
            self.settings.visible_slots_per_day,
        )
    }

    // --- Confirmation ---

    /// Validates the selection and starts the booking delay.
    ///
    /// Replaces any confirmation already pending. Must be called from within
    /// a Tokio runtime.
    pub fn request_confirmation(&mut self) -> Result<(), BookingError> {
        self.confirmer.validate(&self.selection)?;
        if let Some(previous) = self.pending.take() {
            previous.delay.abort();
        }
        let delay = self.settings.confirmation_delay;
        self.pending = Some(PendingConfirmation {
            revision: self.selection.revision(),
            delay: tokio::spawn(async move {
                tokio::time::sleep(delay).await;
            }),
            superseded: false,
        });
        debug!("Confirmation pending for {:?}", delay);
        Ok(())
    }

    /// True while a requested confirmation can still complete.
    pub fn is_confirmation_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| !p.superseded)
    }

    /// Drops a pending confirmation without committing it.
    pub fn cancel_confirmation(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                pending.delay.abort();
                debug!("Pending confirmation cancelled");
                true
            }
            None => false,
        }
    }

    /// Waits out the booking delay and commits the confirmation.
    ///
    /// Fails with `Superseded` if the selection changed since the request.
    /// The confirmation is re-validated at this point, then handed to the
    /// notification service; a delivery failure is logged but does not undo
    /// the booking.
    pub async fn complete_confirmation(&mut self) -> Result<Confirmation, BookingError> {
        let pending = self
            .pending
            .take()
            .ok_or(BookingError::NoPendingConfirmation)?;
        if pending.superseded {
            return Err(BookingError::Superseded);
        }
        if let Err(e) = pending.delay.await {
            debug!("Confirmation delay did not finish: {}", e);
            return Err(BookingError::Superseded);
        }
        if pending.revision != self.selection.revision() {
            return Err(BookingError::Superseded);
        }

        let confirmation = self.confirmer.confirm(&mut self.selection)?;
        match self.notifier.notify(confirmation.notice()).await {
            Ok(result) => debug!("Confirmation notice {} {}", result.id, result.status),
            Err(e) => log_error(e, "Failed to deliver confirmation notice"),
        }
        Ok(confirmation)
    }

    /// Requests and completes a confirmation in one go.
    pub async fn confirm(&mut self) -> Result<Confirmation, BookingError> {
        self.request_confirmation()?;
        self.complete_confirmation().await
    }

    fn supersede_pending(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            if !pending.superseded {
                pending.delay.abort();
                pending.superseded = true;
                info!("Pending confirmation superseded by a new selection");
            }
        }
    }
}

impl<N: NotificationService> Drop for BookingSession<N> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.delay.abort();
        }
    }
}
