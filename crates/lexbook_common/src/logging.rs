//! Logging utilities for the Lexbook crates.
//!
//! Provides one way of initialising the tracing subscriber so that every
//! entry point (tests, embedding applications) formats log lines the same way.

use tracing::{error, info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use lexbook_common::logging;
///
/// // Initialize with default log level (INFO)
/// logging::init();
///
/// // Initialize with a specific log level
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` directives still apply on top of the `lexbook` directive.
/// Calling this more than once is harmless: the first subscriber wins.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for target in ["lexbook_common", "lexbook_config", "lexbook_booking"] {
        match format!("{}={}", target, level).parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("Invalid log directive for {}: {}", target, e),
        }
    }

    // try_init: a global default subscriber may already be set (tests)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Initialize from a textual level such as the `logging.level` config value.
///
/// Unknown values fall back to INFO with a warning.
pub fn init_from_str(level: &str) {
    match level.parse::<Level>() {
        Ok(parsed) => init_with_level(parsed),
        Err(_) => {
            init_with_level(Level::INFO);
            warn!("Unknown log level '{}', using INFO", level);
        }
    }
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result, so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}
