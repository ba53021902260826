//! Temporal gating of direct event-slot access.
//!
//! An expression may read or write the event's own slot only while that
//! slot still describes reality: not before the event, only when the
//! expression still refers to the event's own subject, and only until the
//! firing is deferred to a later tick.

use std::fmt;

use crate::event::{EventContext, EventKind};

/// When an expression observes its event.
///
/// Negative values look at the state before the event's effect, zero at
/// it, positive after it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeIndex(pub i32);

impl TimeIndex {
    /// `past target`
    pub const BEFORE: TimeIndex = TimeIndex(-1);
    /// The default.
    pub const NOW: TimeIndex = TimeIndex(0);
    /// `future target`
    pub const AFTER: TimeIndex = TimeIndex(1);

    /// Returns true if this index is strictly before the event.
    #[must_use]
    pub const fn is_before(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for TimeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.signum() {
            -1 => f.write_str("past"),
            0 => f.write_str("present"),
            _ => f.write_str("future"),
        }
    }
}

/// Outcome of a gate check. Only `Open` permits direct slot access; the
/// others name the first condition that failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GateDecision {
    /// The direct slot may be used.
    Open,
    /// The expression is declared to observe state before the event.
    BeforeEvent,
    /// The event carries no slot for this accessor's event kind.
    NoDirectSlot,
    /// The author named a source explicitly.
    ExplicitSource,
    /// The firing was deferred past the event's own evaluation point.
    Deferred,
}

impl GateDecision {
    /// Returns true for [`GateDecision::Open`].
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Short name used in traces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::BeforeEvent => "before-event",
            Self::NoDirectSlot => "no-direct-slot",
            Self::ExplicitSource => "explicit-source",
            Self::Deferred => "deferred",
        }
    }
}

impl fmt::Display for GateDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decides whether an accessor may use the direct slot of `event`-kind
/// events.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EventTimeGate {
    event: EventKind,
}

impl EventTimeGate {
    /// A gate for accessors bound to `event`'s slot.
    #[must_use]
    pub const fn new(event: EventKind) -> Self {
        Self { event }
    }

    /// The event kind whose slot this gate guards.
    #[must_use]
    pub const fn event(&self) -> EventKind {
        self.event
    }

    /// Checks every condition, reporting the first that fails.
    #[must_use]
    pub fn decide(&self, ctx: &EventContext, time: TimeIndex, default_source: bool) -> GateDecision {
        if time.is_before() {
            GateDecision::BeforeEvent
        } else if ctx.direct_slot(self.event).is_none() {
            GateDecision::NoDirectSlot
        } else if !default_source {
            GateDecision::ExplicitSource
        } else if ctx.is_deferred() {
            GateDecision::Deferred
        } else {
            GateDecision::Open
        }
    }

    /// Returns true iff [`EventTimeGate::decide`] is `Open`.
    #[must_use]
    pub fn can_use_direct_slot(
        &self,
        ctx: &EventContext,
        time: TimeIndex,
        default_source: bool,
    ) -> bool {
        self.decide(ctx, time, default_source).is_open()
    }
}
