use std::fmt;
use thiserror::Error;

/// The base error type for all Lexbook errors.
///
/// Each crate keeps its own error enum and implements `From<SpecificError>`
/// for `LexbookError` so callers at the edge only deal with one type.
#[derive(Error, Debug)]
pub enum LexbookError {
    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// A pending operation was replaced before it could complete
    #[error("Cancelled: {0}")]
    CancelledError(String),

    /// Error occurred while delivering a notification
    #[error("Notification error: {0}")]
    NotificationError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl LexbookError {
    /// Whether the session can carry on after this error.
    ///
    /// Everything except internal failures is a user-facing rejection.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, LexbookError::InternalError(_))
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, LexbookError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, LexbookError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, LexbookError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| LexbookError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, LexbookError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| LexbookError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<serde_json::Error> for LexbookError {
    fn from(err: serde_json::Error) -> Self {
        LexbookError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for LexbookError {
    fn from(err: std::io::Error) -> Self {
        LexbookError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> LexbookError {
    LexbookError::ConfigError(message.to_string())
}

pub fn parse_error<T: fmt::Display>(message: T) -> LexbookError {
    LexbookError::ParseError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> LexbookError {
    LexbookError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> LexbookError {
    LexbookError::NotFoundError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> LexbookError {
    LexbookError::InternalError(message.to_string())
}
