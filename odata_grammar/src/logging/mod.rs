//! Global logging for the matcher library
//!
//! Thread-safe global logging with structured events and a clean macro
//! interface. Matchers themselves are pure; logging is advisory
//! diagnostics and never changes a match result.

pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

// Re-export main types
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Initialize global logging from runtime preferences.
pub fn init_global_logging() -> Result<(), String> {
    let service = Arc::new(service::create_configured_service());
    init_global_logging_with_service(service)
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())?;
    crate::log_info!("global logging initialized");
    Ok(())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Log with context (used by the logging macros). A no-op when the
/// global logger has not been initialized.
pub fn log_with_context(level: LogLevel, message: &str, context: Vec<(&str, String)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };
    if level > logger.min_level() {
        return;
    }

    let mut event = match level {
        LogLevel::Error => LogEvent::error(message),
        LogLevel::Warning => LogEvent::warning(message),
        LogLevel::Info => LogEvent::info(message),
        LogLevel::Debug => LogEvent::debug(message),
    };
    for (key, value) in context {
        event = event.with_context(key, &value);
    }
    logger.log_event(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_before_init_is_a_noop() {
        // Must not panic whether or not another test initialized the
        // global service first.
        log_with_context(LogLevel::Debug, "early event", vec![]);
    }

    #[test]
    fn test_global_initialization_is_single_shot() {
        let service = Arc::new(LoggingService::new(
            Box::new(MemoryLogger::new()),
            LogLevel::Debug,
        ));

        let first = init_global_logging_with_service(service.clone());
        if first.is_ok() {
            assert!(is_initialized());
            assert!(init_global_logging_with_service(service).is_err());
        } else {
            // Another test won the race; the global is still usable.
            assert!(is_initialized());
        }
    }
}
