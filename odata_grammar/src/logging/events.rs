//! Log event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

/// A single structured log event with key/value context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub context: Vec<(String, String)>,
}

impl LogEvent {
    fn new(level: LogLevel, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
            context: Vec::new(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self::new(LogLevel::Error, message)
    }

    pub fn warning(message: &str) -> Self {
        Self::new(LogLevel::Warning, message)
    }

    pub fn info(message: &str) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn debug(message: &str) -> Self {
        Self::new(LogLevel::Debug, message)
    }

    pub fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.push((key.to_string(), value.to_string()));
        self
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.level.as_str(),
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.message
        )?;
        for (key, value) in &self.context {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug > LogLevel::Info);
        assert!(LogLevel::Info > LogLevel::Warning);
        assert!(LogLevel::Warning > LogLevel::Error);
    }

    #[test]
    fn test_event_display_includes_context() {
        let event = LogEvent::debug("lookup miss").with_context("name", "Widget");
        let rendered = event.to_string();
        assert!(rendered.contains("[DEBUG]"));
        assert!(rendered.contains("lookup miss"));
        assert!(rendered.contains("name=Widget"));
    }
}
