//! Tests for the booking session service.

#[cfg(test)]
mod tests {
    use crate::directory::AttorneyDirectory;
    use crate::error::BookingError;
    use crate::models::{ConsultationType, ProfessionalId, TimeOfDay};
    use crate::selection::AvailabilityStatus;
    use crate::service::{BookingSession, SessionSettings};
    use chrono::NaiveDate;
    use lexbook_common::services::mock::MockNotificationService;
    use std::sync::Arc;
    use std::time::Duration;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 5).unwrap()
    }

    fn session_with(
        notifier: Arc<MockNotificationService>,
        settings: SessionSettings,
    ) -> BookingSession<MockNotificationService> {
        BookingSession::new(
            Arc::new(AttorneyDirectory::builtin()),
            notifier,
            settings,
            monday(),
        )
        .unwrap()
    }

    fn session() -> (BookingSession<MockNotificationService>, Arc<MockNotificationService>) {
        let notifier = Arc::new(MockNotificationService::new());
        (
            session_with(notifier.clone(), SessionSettings::default()),
            notifier,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_starts_on_today() {
        let (session, _) = session();
        assert_eq!(session.selection().selected_date(), Some(monday()));
        assert_eq!(session.week().week_start(), monday());
        assert_eq!(session.professional().name, "Jennifer Blackwell");
        assert_eq!(session.professionals().len(), 3);
        assert_eq!(session.consultation_terms().fee_label(), "USD 150.00");
        assert_eq!(
            session.availability_status(),
            AvailabilityStatus::Available {
                date: monday(),
                count: 5
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_without_initial_date() {
        let notifier = Arc::new(MockNotificationService::new());
        let settings = SessionSettings {
            select_today_on_start: false,
            ..SessionSettings::default()
        };
        let session = session_with(notifier, settings);
        assert_eq!(session.selection().selected_date(), None);
        assert_eq!(session.week().week_start(), monday());
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirm_delivers_notice() {
        let (mut session, notifier) = session();
        session.select_time(t("10:00")).unwrap();

        session.request_confirmation().unwrap();
        assert!(session.is_confirmation_pending());
        let confirmation = session.complete_confirmation().await.unwrap();

        assert_eq!(confirmation.professional_name, "Jennifer Blackwell");
        assert_eq!(confirmation.time, t("10:00"));
        assert!(!session.is_confirmation_pending());
        assert_eq!(session.selection().selected_time(), None);

        let delivered = notifier.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(
            delivered[0].description,
            "Your appointment with Jennifer Blackwell is confirmed for May 5, 2025 at 10:00."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirmation_waits_for_delay() {
        let (mut session, _) = session();
        session.select_time(t("09:00")).unwrap();
        let started = tokio::time::Instant::now();
        session.confirm().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1_500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_request_rejects_incomplete_selection() {
        let (mut session, notifier) = session();
        assert_eq!(
            session.request_confirmation().unwrap_err(),
            BookingError::MissingTime
        );
        session.clear_date();
        assert_eq!(
            session.request_confirmation().unwrap_err(),
            BookingError::MissingDate
        );
        assert!(!session.is_confirmation_pending());
        assert_eq!(
            session.complete_confirmation().await.unwrap_err(),
            BookingError::NoPendingConfirmation
        );
        assert!(notifier.delivered().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_selection_supersedes_pending() {
        let (mut session, notifier) = session();
        session.select_time(t("09:00")).unwrap();
        session.request_confirmation().unwrap();

        // user picks another slot while the booking spinner is showing
        session.select_time(t("14:00")).unwrap();
        assert!(!session.is_confirmation_pending());

        assert_eq!(
            session.complete_confirmation().await.unwrap_err(),
            BookingError::Superseded
        );
        assert_eq!(session.selection().selected_time(), Some(t("14:00")));
        assert!(notifier.delivered().is_empty());

        // the newer selection can still be booked
        let confirmation = session.confirm().await.unwrap();
        assert_eq!(confirmation.time, t("14:00"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_supersede_after_delay_elapsed() {
        let (mut session, notifier) = session();
        session.select_time(t("09:00")).unwrap();
        session.request_confirmation().unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;

        session.select_professional(ProfessionalId(2)).unwrap();
        assert_eq!(
            session.complete_confirmation().await.unwrap_err(),
            BookingError::Superseded
        );
        assert!(notifier.delivered().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_action_keeps_pending() {
        let (mut session, _) = session();
        session.select_time(t("09:00")).unwrap();
        session.request_confirmation().unwrap();

        assert!(session.select_time(t("12:00")).is_err());
        assert!(session.select_professional(ProfessionalId(77)).is_err());
        assert!(session.is_confirmation_pending());

        let confirmation = session.complete_confirmation().await.unwrap();
        assert_eq!(confirmation.time, t("09:00"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_week_navigation_does_not_supersede() {
        let (mut session, _) = session();
        session.select_time(t("09:00")).unwrap();
        session.request_confirmation().unwrap();

        let next = session.next_week();
        assert_eq!(next.week_start(), NaiveDate::from_ymd_opt(2025, 5, 12).unwrap());
        assert_eq!(session.prev_week().week_start(), monday());
        assert!(session.is_confirmation_pending());
        assert!(session.complete_confirmation().await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_confirmation() {
        let (mut session, notifier) = session();
        session.select_time(t("09:00")).unwrap();
        session.request_confirmation().unwrap();
        assert!(session.cancel_confirmation());
        assert!(!session.cancel_confirmation());
        assert_eq!(
            session.complete_confirmation().await.unwrap_err(),
            BookingError::NoPendingConfirmation
        );
        assert_eq!(session.selection().selected_time(), Some(t("09:00")));
        assert!(notifier.delivered().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_failure_keeps_confirmation() {
        let notifier = Arc::new(MockNotificationService::failing());
        let mut session = session_with(notifier, SessionSettings::default());
        session.select_consultation_type(ConsultationType::PhoneCall);
        session.select_time(t("15:00")).unwrap();

        let confirmation = session.confirm().await.unwrap();
        assert_eq!(confirmation.consultation_type, ConsultationType::PhoneCall);
        assert_eq!(session.selection().selected_time(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_week_availability_uses_settings_limit() {
        let notifier = Arc::new(MockNotificationService::new());
        let settings = SessionSettings {
            visible_slots_per_day: 1,
            ..SessionSettings::default()
        };
        let mut session = session_with(notifier, settings);
        let grid = session.week_availability();
        let monday_slots = grid.get(monday()).unwrap();
        assert_eq!(monday_slots.visible, vec![t("09:00")]);
        assert_eq!(monday_slots.overflow_count, 4);

        let jump = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(
            session.show_week_of(jump).week_start(),
            NaiveDate::from_ymd_opt(2025, 12, 29).unwrap()
        );
        assert!(session.week_availability().get(jump).is_some());
    }
}
