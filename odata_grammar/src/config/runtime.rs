// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::sync::OnceLock;

use crate::logging::LogLevel;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherPreferences {
    /// Whether to log identifiers that matched lexically but were
    /// rejected by metadata lookup
    pub log_lookup_misses: bool,

    /// Whether to include the matched raw text in log context
    pub include_raw_in_logs: bool,
}

impl Default for MatcherPreferences {
    fn default() -> Self {
        Self {
            log_lookup_misses: env_flag(env_vars::MATCHER_LOG_LOOKUP_MISSES, false),
            include_raw_in_logs: env_flag(env_vars::MATCHER_INCLUDE_RAW_IN_LOGS, true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to enable console output (user preference)
    pub enable_console_logging: bool,

    /// Minimum log level
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            enable_console_logging: env_flag(env_vars::LOGGING_ENABLE_CONSOLE, false),
            min_log_level: match env::var(env_vars::LOGGING_MIN_LEVEL) {
                Ok(raw) => parse_log_level(&raw).unwrap_or_else(|| {
                    crate::log_warning!(
                        "ignoring unparseable environment override",
                        "var" => env_vars::LOGGING_MIN_LEVEL,
                        "value" => raw
                    );
                    LogLevel::Info
                }),
                Err(_) => LogLevel::Info,
            },
        }
    }
}

/// Boolean environment override; a value that is present but not a
/// boolean is reported and ignored.
fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            crate::log_warning!(
                "ignoring unparseable environment override",
                "var" => name,
                "value" => raw
            );
            default
        }),
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub matcher: MatcherPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Load configuration from a TOML file. Missing keys fall back to
    /// their environment-variable-backed defaults.
    pub fn from_toml_file(path: &Path) -> Result<RuntimeConfig, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}

static MATCHER_PREFERENCES: OnceLock<MatcherPreferences> = OnceLock::new();

/// Process-wide matcher preferences, resolved from the environment on
/// first use.
pub fn matcher_preferences() -> &'static MatcherPreferences {
    MATCHER_PREFERENCES.get_or_init(MatcherPreferences::default)
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    pub const MATCHER_LOG_LOOKUP_MISSES: &str = "ODATA_MATCHER_LOG_LOOKUP_MISSES";
    pub const MATCHER_INCLUDE_RAW_IN_LOGS: &str = "ODATA_MATCHER_INCLUDE_RAW_IN_LOGS";
    pub const LOGGING_ENABLE_CONSOLE: &str = "ODATA_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "ODATA_LOGGING_MIN_LEVEL";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("WARN"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("2"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_env_flag_ignores_unparseable_values() {
        env::set_var("ODATA_RUNTIME_TEST_FLAG", "definitely");
        assert!(env_flag("ODATA_RUNTIME_TEST_FLAG", true));
        env::set_var("ODATA_RUNTIME_TEST_FLAG", "false");
        assert!(!env_flag("ODATA_RUNTIME_TEST_FLAG", true));
        env::remove_var("ODATA_RUNTIME_TEST_FLAG");
        assert!(env_flag("ODATA_RUNTIME_TEST_FLAG", true));
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "[matcher]\nlog_lookup_misses = true\n\n[logging]\nmin_log_level = \"Debug\"\n"
        )
        .expect("write config");

        let config = RuntimeConfig::from_toml_file(file.path()).expect("load config");
        assert!(config.matcher.log_lookup_misses);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[matcher\nbroken").expect("write config");

        let result = RuntimeConfig::from_toml_file(file.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}
