// --- File: crates/lexbook_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, internal_error, not_found, parse_error, validation_error, Context,
    LexbookError,
};

// Re-export logging utilities for easier access
pub use logging::{init, init_from_str, init_with_level, log_error, log_result};

pub use models::Notice;
pub use services::{BoxFuture, NotificationResult, NotificationService};

// This crate provides functionality shared by the Lexbook crates:
// the workspace error type, tracing bootstrap and the notification sink abstraction.
