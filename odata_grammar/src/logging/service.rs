//! Logging sinks and the level-filtering service

use std::sync::Mutex;

use crate::logging::events::{LogEvent, LogLevel};

/// A sink for log events.
pub trait Logger: Send + Sync {
    fn log_event(&self, event: &LogEvent);
}

/// Writes events to stderr.
#[derive(Debug, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log_event(&self, event: &LogEvent) {
        eprintln!("{}", event);
    }
}

/// Buffers events in memory, primarily for tests.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything logged so far.
    pub fn snapshot(&self) -> Vec<LogEvent> {
        self.events.lock().expect("logger poisoned").clone()
    }
}

impl Logger for MemoryLogger {
    fn log_event(&self, event: &LogEvent) {
        self.events.lock().expect("logger poisoned").push(event.clone());
    }
}

/// Level-filtering front for a sink.
pub struct LoggingService {
    sink: Box<dyn Logger>,
    min_level: LogLevel,
}

impl LoggingService {
    pub fn new(sink: Box<dyn Logger>, min_level: LogLevel) -> Self {
        Self { sink, min_level }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn log_event(&self, event: LogEvent) {
        if event.level <= self.min_level {
            self.sink.log_event(&event);
        }
    }
}

/// Build a service from the runtime logging preferences.
pub fn create_configured_service() -> LoggingService {
    let preferences = crate::config::LoggingPreferences::default();
    let sink: Box<dyn Logger> = if preferences.enable_console_logging {
        Box::new(ConsoleLogger)
    } else {
        Box::new(MemoryLogger::new())
    };
    LoggingService::new(sink, preferences.min_log_level)
}
