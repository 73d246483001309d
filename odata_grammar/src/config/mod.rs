//! Configuration for the matcher library
//!
//! Compile-time bounds live in [`constants`]; user-tunable logging and
//! diagnostics preferences live in [`runtime`] and are read from
//! environment variables with an optional TOML file override.

pub mod constants;
pub mod runtime;

pub use runtime::{
    matcher_preferences, ConfigError, LoggingPreferences, MatcherPreferences, RuntimeConfig,
};
