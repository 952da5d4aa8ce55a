// --- File: crates/lexbook_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! The booking core hands finished confirmations to a notification sink that
//! it does not own. The trait decouples the core from whatever displays them.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use tracing::info;
use uuid::Uuid;

use crate::error::LexbookError;
use crate::models::Notice;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A trait for notification service operations.
pub trait NotificationService: Send + Sync {
    /// Error type returned by notification service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deliver a notice to the user.
    fn notify(&self, notice: Notice) -> BoxFuture<'_, NotificationResult, Self::Error>;
}

/// Represents the result of a notification operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// The ID of the notification.
    pub id: String,
    /// The status of the notification.
    pub status: String,
}

/// Notification sink that writes notices to the tracing log.
///
/// Used when no UI collaborator is attached.
#[derive(Debug, Default, Clone)]
pub struct TracingNotificationService;

impl NotificationService for TracingNotificationService {
    type Error = LexbookError;

    fn notify(&self, notice: Notice) -> BoxFuture<'_, NotificationResult, Self::Error> {
        Box::pin(async move {
            let id = Uuid::new_v4().to_string();
            info!(notification_id = %id, title = %notice.title, "{}", notice.description);
            Ok(NotificationResult {
                id,
                status: "delivered".to_string(),
            })
        })
    }
}

pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Mock notification service for testing.
    ///
    /// Records every delivered notice; can be switched to fail deliveries.
    #[derive(Debug, Default)]
    pub struct MockNotificationService {
        delivered: Mutex<Vec<Notice>>,
        fail: bool,
    }

    impl MockNotificationService {
        /// Create a new mock notification service.
        pub fn new() -> Self {
            Self::default()
        }

        /// A service whose every delivery fails.
        pub fn failing() -> Self {
            Self {
                delivered: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        /// Notices delivered so far, oldest first.
        pub fn delivered(&self) -> Vec<Notice> {
            match self.delivered.lock() {
                Ok(guard) => guard.clone(),
                Err(poisoned) => poisoned.into_inner().clone(),
            }
        }
    }

    impl NotificationService for MockNotificationService {
        type Error = LexbookError;

        fn notify(&self, notice: Notice) -> BoxFuture<'_, NotificationResult, Self::Error> {
            Box::pin(async move {
                if self.fail {
                    return Err(LexbookError::NotificationError(
                        "mock delivery failure".to_string(),
                    ));
                }
                let mut delivered = self
                    .delivered
                    .lock()
                    .map_err(|e| LexbookError::InternalError(e.to_string()))?;
                delivered.push(notice);
                Ok(NotificationResult {
                    id: format!("mock-{}", delivered.len()),
                    status: "delivered".to_string(),
                })
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockNotificationService;
    use super::*;

    #[tokio::test]
    async fn test_mock_records_notices() {
        let service = MockNotificationService::new();
        let result = service
            .notify(Notice::new("Consultation Booked!", "See you soon."))
            .await
            .unwrap();

        assert_eq!(result.id, "mock-1");
        assert_eq!(result.status, "delivered");
        let delivered = service.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].title, "Consultation Booked!");
    }

    #[tokio::test]
    async fn test_failing_mock_records_nothing() {
        let service = MockNotificationService::failing();
        let err = service
            .notify(Notice::new("t", "d"))
            .await
            .unwrap_err();
        assert!(matches!(err, LexbookError::NotificationError(_)));
        assert!(service.delivered().is_empty());
    }

    #[tokio::test]
    async fn test_tracing_service_delivers() {
        let result = TracingNotificationService
            .notify(Notice::new("t", "d"))
            .await
            .unwrap();
        assert_eq!(result.status, "delivered");
        assert!(!result.id.is_empty());
    }
}
