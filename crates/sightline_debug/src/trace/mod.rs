//! Tracing of accessor calls.
//!
//! A `Tracer` wraps accessor calls made by a rule runner and records how
//! each was answered: from the event's slot, suppressed by a type filter,
//! or looked up per entity. Recording is skipped entirely when disabled.

pub mod buffer;
pub mod record;

pub use buffer::TraceBuffer;
pub use record::{TraceEvent, TraceRecord};

use sightline_engine::{ChangeMode, EventContext, MutationReport, PropertyAccessor};
use sightline_foundation::{EntityId, Result};
use sightline_storage::World;

const LOG_TARGET: &str = "sightline::trace";

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Where trace records are echoed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// Buffer only.
    #[default]
    None,
    /// Also emit each record through the `log` facade at info level.
    Log,
}

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in the buffer.
    pub buffer_size: usize,
    /// Where to echo records.
    pub output: TraceOutput,
    /// Event types to keep (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10_000,
            output: TraceOutput::None,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to echo records to the log.
    #[must_use]
    pub fn to_log(mut self) -> Self {
        self.output = TraceOutput::Log;
        self
    }

    /// Builder method to keep only some event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records accessor activity across firings.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    firing: u64,
}

impl Tracer {
    /// Creates a tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer = TraceBuffer::new(config.buffer_size);
        Self {
            config,
            buffer,
            firing: 0,
        }
    }

    /// Creates a disabled tracer.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// The recorded history.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Starts a new firing for `ctx` and returns its number.
    pub fn begin_firing(&mut self, ctx: &EventContext) -> u64 {
        self.firing += 1;
        self.record(TraceEvent::FiringStart {
            firing: self.firing,
            event: ctx.kind(),
        });
        self.firing
    }

    /// Defers the rest of the current firing on behalf of the scheduler.
    pub fn defer(&mut self, ctx: &mut EventContext) {
        ctx.mark_deferred();
        self.record(TraceEvent::Deferred {
            firing: self.firing,
        });
    }

    /// Evaluates `accessor` and records the outcome.
    pub fn evaluate(
        &mut self,
        accessor: &PropertyAccessor,
        ctx: &EventContext,
        world: &World,
    ) -> Vec<EntityId> {
        if !self.is_enabled() {
            return accessor.evaluate(ctx, world);
        }
        let evaluation = accessor.evaluate_traced(ctx, world);
        self.record(TraceEvent::Evaluated {
            expression: accessor.to_string(),
            path: evaluation.path,
            results: evaluation.values.clone(),
        });
        evaluation.values
    }

    /// Changes `accessor` and records where the change went.
    pub fn mutate(
        &mut self,
        accessor: &PropertyAccessor,
        ctx: &mut EventContext,
        world: &mut World,
        delta: Option<EntityId>,
        mode: ChangeMode,
    ) -> Result<MutationReport> {
        let outcome = accessor.mutate(ctx, world, delta, mode);
        if self.is_enabled() {
            let event = match &outcome {
                Ok(report) => TraceEvent::Mutated {
                    expression: accessor.to_string(),
                    mode,
                    report: *report,
                },
                Err(err) => TraceEvent::Rejected {
                    expression: accessor.to_string(),
                    reason: err.to_string(),
                },
            };
            self.record(event);
        }
        outcome
    }

    /// Records an event. Returns immediately when tracing is disabled.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }
        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|kept| kept == event.event_type())
        {
            return;
        }

        // Echo before pushing; a full buffer may evict the record at once.
        if self.config.output == TraceOutput::Log {
            let record = TraceRecord {
                id: self.buffer.next_id(),
                firing: self.firing,
                event,
            };
            log::info!(target: LOG_TARGET, "{record}");
            self.buffer.push(record.firing, record.event);
        } else {
            self.buffer.push(self.firing, event);
        }
    }
}
