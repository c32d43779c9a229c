//! Per-call conversion context.

use crate::config::ConversionConfig;

/// Opaque carrier threaded through every conversion call.
///
/// Conversions never suspend, so the context holds no deadline or
/// cancellation state. It carries the caller's correlation id and the
/// diagnostics configuration into the engine's log events.
#[derive(Debug, Clone, Default)]
pub struct Context {
    request_id: Option<String>,
    config: ConversionConfig,
}

impl Context {
    /// Context with default configuration and no correlation id.
    pub fn background() -> Self {
        Self::default()
    }

    /// Context using the given diagnostics configuration.
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            request_id: None,
            config,
        }
    }

    /// Attach a correlation id that shows up as `request_id` in log events.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}
