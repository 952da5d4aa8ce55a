// --- File: crates/lexbook_common/src/models.rs ---

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short user-facing message, rendered by the host as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// The headline, e.g. "Consultation Booked!".
    pub title: String,

    /// The body text.
    pub description: String,

    /// When the notice was produced.
    pub created_at: DateTime<Utc>,
}

impl Notice {
    /// Create a notice stamped with the current time.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}
