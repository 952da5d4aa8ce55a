// File: crates/lexbook_booking/src/factory.rs
//! Builds sessions from the application configuration.

use chrono::NaiveDate;
use lexbook_common::{LexbookError, NotificationService};
use lexbook_config::{AppConfig, DirectoryConfig};
use std::sync::Arc;
use tracing::info;

use crate::directory::AttorneyDirectory;
use crate::service::{BookingSession, SessionSettings};

/// The configured roster file, or the built-in roster when none is set.
pub fn load_directory(config: &DirectoryConfig) -> Result<Arc<AttorneyDirectory>, LexbookError> {
    let directory = match config.path.as_deref() {
        Some(path) => AttorneyDirectory::from_json_file(path)?,
        None => {
            info!("No roster path configured, using the built-in roster");
            AttorneyDirectory::builtin()
        }
    };
    Ok(Arc::new(directory))
}

/// A session over the configured directory and booking settings.
pub fn session_from_config<N: NotificationService>(
    config: &AppConfig,
    notifier: Arc<N>,
    today: NaiveDate,
) -> Result<BookingSession<N>, LexbookError> {
    let directory = load_directory(&config.directory)?;
    let settings = SessionSettings::from(&config.booking);
    Ok(BookingSession::new(directory, notifier, settings, today)?)
}
