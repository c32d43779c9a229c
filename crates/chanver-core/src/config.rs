//! Runtime configuration for conversion diagnostics.
//!
//! Conversion semantics are fixed; these flags only control what the engine
//! reports through `tracing` while it works. Flags can be toggled with
//! environment variables so operators can quiet or widen the output without
//! a rebuild.

use crate::defaults::{ENV_TRACE_SUBSCRIBERS, ENV_WARN_ON_LOSS};
use std::env;

/// Flags controlling conversion diagnostics.
///
/// # Example
/// ```
/// use chanver_core::ConversionConfig;
///
/// let config = ConversionConfig::default();
/// assert!(config.warn_on_loss);
/// assert!(!config.trace_subscribers);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Emit a WARN event when a conversion discards data.
    /// Default: true.
    pub warn_on_loss: bool,

    /// Emit a TRACE event for every subscriber entry mapped.
    /// Default: false (high volume).
    pub trace_subscribers: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            warn_on_loss: true,
            trace_subscribers: false,
        }
    }
}

impl ConversionConfig {
    /// Constructs flags from environment variables.
    ///
    /// Environment variables:
    /// - `CHANVER_WARN_ON_LOSS` (default: true)
    /// - `CHANVER_TRACE_SUBSCRIBERS` (default: false)
    ///
    /// Values are parsed as booleans: "true", "1", "yes", "on" (case-insensitive)
    /// are truthy, "false", "0", "no", "off" are falsy. Anything else keeps
    /// the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            warn_on_loss: parse_bool_env(ENV_WARN_ON_LOSS, defaults.warn_on_loss),
            trace_subscribers: parse_bool_env(ENV_TRACE_SUBSCRIBERS, defaults.trace_subscribers),
        }
    }

    /// Returns a configuration with every diagnostic disabled.
    #[inline]
    pub fn quiet() -> Self {
        Self {
            warn_on_loss: false,
            trace_subscribers: false,
        }
    }
}

/// Parses a boolean environment variable with a default fallback.
fn parse_bool_env(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|val| parse_bool(&val))
        .unwrap_or(default)
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
