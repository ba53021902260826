//! Event contexts handed to rule statements.
//!
//! An `EventContext` describes one firing of an event. It is created by the
//! dispatch layer, passed by reference to every bound statement, and then
//! dropped. Nothing in the engine keeps a reference to it past a call.

use std::fmt;

use sightline_foundation::EntityId;

/// The canonical kinds of events a rule can listen to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A creature picks (or drops) something to attack or follow.
    EntityTarget,
    /// An entity is damaged by another entity.
    EntityDamage,
    /// An entity enters the world.
    EntitySpawn,
    /// An entity dies.
    EntityDeath,
    /// A periodic tick with no subject.
    Tick,
}

impl EventKind {
    /// Returns true if events of this kind carry a writable entity slot.
    ///
    /// For `EntityTarget` the slot is the new target; for `EntityDamage`
    /// it is the damager.
    #[must_use]
    pub const fn has_direct_slot(self) -> bool {
        matches!(self, Self::EntityTarget | Self::EntityDamage)
    }

    /// Script-facing name of the event.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EntityTarget => "entity target",
            Self::EntityDamage => "damage",
            Self::EntitySpawn => "spawn",
            Self::EntityDeath => "death",
            Self::Tick => "tick",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What just happened, for the duration of one firing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventContext {
    kind: EventKind,
    subject: Option<EntityId>,
    /// Present iff `kind.has_direct_slot()`; the inner option is the value.
    slot: Option<Option<EntityId>>,
    deferred: bool,
}

impl EventContext {
    /// Creates a context with an empty direct slot (if the kind has one).
    #[must_use]
    pub fn new(kind: EventKind, subject: Option<EntityId>) -> Self {
        Self {
            kind,
            subject,
            slot: kind.has_direct_slot().then_some(None),
            deferred: false,
        }
    }

    /// Shorthand for an `EntityTarget` event.
    ///
    /// `target` is `None` for untarget events, where the creature stops
    /// following whatever it was after.
    #[must_use]
    pub fn entity_target(subject: EntityId, target: Option<EntityId>) -> Self {
        Self::new(EventKind::EntityTarget, Some(subject)).with_slot(target)
    }

    /// Fills the direct slot. Ignored for kinds without one.
    #[must_use]
    pub fn with_slot(mut self, value: Option<EntityId>) -> Self {
        if self.slot.is_some() {
            self.slot = Some(value);
        }
        self
    }

    /// The kind of this event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The entity this event is about, if any.
    #[must_use]
    pub fn subject(&self) -> Option<EntityId> {
        self.subject
    }

    /// Reads the direct slot as seen by an accessor expecting `expected`.
    ///
    /// Returns `None` when this event has no slot of that shape, and
    /// `Some(None)` when the slot exists but is empty.
    #[must_use]
    pub fn direct_slot(&self, expected: EventKind) -> Option<Option<EntityId>> {
        if self.kind == expected { self.slot } else { None }
    }

    /// Writes the direct slot. Returns false if this event has no slot of
    /// the expected shape.
    pub fn set_direct_slot(&mut self, expected: EventKind, value: Option<EntityId>) -> bool {
        match &mut self.slot {
            Some(slot) if self.kind == expected => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    /// Marks the remaining statements of this firing as resumed later.
    ///
    /// Called by the scheduler; the flag is never cleared.
    pub fn mark_deferred(&mut self) {
        self.deferred = true;
    }

    /// Returns true once the firing has been deferred.
    #[must_use]
    pub fn is_deferred(&self) -> bool {
        self.deferred
    }
}
