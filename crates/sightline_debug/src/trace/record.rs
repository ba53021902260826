//! Trace event and record types.

use std::fmt;

use sightline_engine::{AccessPath, ChangeMode, EventKind, MutationReport};
use sightline_foundation::EntityId;

// =============================================================================
// Trace Event
// =============================================================================

/// Things that can be traced while rule statements run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// An event started firing.
    FiringStart {
        /// The firing number.
        firing: u64,
        /// The kind of event that fired.
        event: EventKind,
    },

    /// An accessor was evaluated.
    Evaluated {
        /// Description of the accessor.
        expression: String,
        /// How the values were obtained.
        path: AccessPath,
        /// The values produced.
        results: Vec<EntityId>,
    },

    /// An accessor was changed.
    Mutated {
        /// Description of the accessor.
        expression: String,
        /// The change mode.
        mode: ChangeMode,
        /// Where the change was written.
        report: MutationReport,
    },

    /// A change was refused.
    Rejected {
        /// Description of the accessor.
        expression: String,
        /// Why it was refused.
        reason: String,
    },

    /// The rest of a firing was deferred to a later tick.
    Deferred {
        /// The firing number.
        firing: u64,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::FiringStart { .. } => "firing-start",
            Self::Evaluated { .. } => "evaluated",
            Self::Mutated { .. } => "mutated",
            Self::Rejected { .. } => "rejected",
            Self::Deferred { .. } => "deferred",
        }
    }

    /// Returns true if this event came from an accessor call.
    #[must_use]
    pub fn is_access_event(&self) -> bool {
        matches!(
            self,
            Self::Evaluated { .. } | Self::Mutated { .. } | Self::Rejected { .. }
        )
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FiringStart { firing, event } => write!(f, "firing {firing} ({event})"),
            Self::Evaluated {
                expression,
                path,
                results,
            } => write!(f, "{expression} = {results:?} via {path}"),
            Self::Mutated {
                expression,
                mode,
                report,
            } => match report {
                MutationReport::DirectSlot => write!(f, "{mode} {expression} via direct-slot"),
                MutationReport::PerObject { written, skipped } => write!(
                    f,
                    "{mode} {expression} via per-object ({written} written, {skipped} skipped)"
                ),
            },
            Self::Rejected { expression, reason } => write!(f, "{expression} rejected: {reason}"),
            Self::Deferred { firing } => write!(f, "firing {firing} deferred"),
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A numbered trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique, increasing record ID.
    pub id: u64,
    /// The firing this record belongs to.
    pub firing: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{:04} [{:06}] {}", self.firing, self.id, self.event)
    }
}

// =============================================================================
// Tests
// =============================================================================
