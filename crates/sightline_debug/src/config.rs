//! Configuration for the observability system.

use crate::trace::{TraceOutput, TracerConfig};

/// Configuration for access tracing.
#[derive(Clone, Debug)]
pub struct ObservabilityConfig {
    /// Whether tracing is enabled (false = zero overhead).
    pub enabled: bool,
    /// Number of trace records to retain.
    pub history_size: usize,
    /// Echo records through the `log` facade.
    pub log_output: bool,
    /// Record only accessor events, not firing boundaries.
    pub access_only: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            history_size: 1000,
            log_output: false,
            access_only: false,
        }
    }
}

impl ObservabilityConfig {
    /// Creates a configuration with tracing enabled.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Tracing with log output, for development.
    #[must_use]
    pub fn development() -> Self {
        Self {
            enabled: true,
            history_size: 1000,
            log_output: true,
            access_only: false,
        }
    }

    /// Large history of accessor events only, for chasing one rule.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            enabled: true,
            history_size: 50_000,
            log_output: true,
            access_only: true,
        }
    }

    /// Builder method to set enabled state.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder method to set history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Builder method to toggle log output.
    #[must_use]
    pub fn with_log_output(mut self, log_output: bool) -> Self {
        self.log_output = log_output;
        self
    }

    /// The tracer configuration these settings describe.
    #[must_use]
    pub fn tracer_config(&self) -> TracerConfig {
        let mut config = TracerConfig::new().with_buffer_size(self.history_size);
        config.enabled = self.enabled;
        if self.log_output {
            config.output = TraceOutput::Log;
        }
        if self.access_only {
            config.event_filter = ["evaluated", "mutated", "rejected"]
                .into_iter()
                .map(String::from)
                .collect();
        }
        config
    }
}
