//! The `target` property accessor.
//!
//! `the target of %livingentities%` reads what each source entity is
//! aiming at. Inside an entity target event, the implicit form (`the
//! target`) answers from the event itself instead, since the event knows
//! the new target before the creature does. Writes follow the same rule.
//! They go into the event when the event's slot is usable. Otherwise they
//! go to each creature.

use std::fmt;

use sightline_foundation::{EntityId, EntityKind, Error, ErrorKind, Result, Type};
use sightline_storage::World;

use crate::capability;
use crate::change::ChangeMode;
use crate::event::{EventContext, EventKind};
use crate::filter::TypeFilter;
use crate::gate::{EventTimeGate, GateDecision, TimeIndex};
use crate::source::SourceResolver;
use crate::syntax::{ExpressionInfo, ExpressionType, ParseResult, Slot};

const LOG_TARGET: &str = "sightline::access";

// =============================================================================
// Outcomes
// =============================================================================

/// Which path an evaluation took.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccessPath {
    /// Answered from the event's direct slot.
    DirectSlot,
    /// The direct slot held a value that failed the type filter.
    Suppressed,
    /// Answered by looking up each source entity. Carries the gate's
    /// decision; `Open` here means the slot was usable but empty.
    PerObject(GateDecision),
}

impl fmt::Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectSlot => write!(f, "direct-slot"),
            Self::Suppressed => write!(f, "suppressed"),
            Self::PerObject(decision) => write!(f, "per-object ({decision})"),
        }
    }
}

/// Values produced by one evaluation, with the path that produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// The results, in source order.
    pub values: Vec<EntityId>,
    /// How they were obtained.
    pub path: AccessPath,
}

/// Where one mutation was written. Exactly one path is taken per call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MutationReport {
    /// The event's direct slot was written; no entity was touched.
    DirectSlot,
    /// Source entities were written; the direct slot was untouched.
    PerObject {
        /// Entities whose target was replaced.
        written: usize,
        /// Entities that could not hold a target.
        skipped: usize,
    },
}

// =============================================================================
// Property Accessor
// =============================================================================

/// A bound `target` expression.
///
/// Built once per rule statement. Only the time index may change after
/// construction, and only once.
#[derive(Debug)]
pub struct PropertyAccessor {
    filter: TypeFilter,
    source: SourceResolver,
    time: TimeIndex,
    time_declared: bool,
    gate: EventTimeGate,
}

impl PropertyAccessor {
    /// Registration record for the `target` expression.
    pub const INFO: ExpressionInfo = ExpressionInfo {
        name: "Target",
        description: "For players this is the entity at the crosshair, while for mobs \
                      it represents the entity they are attacking/following (if any).",
        examples: &[
            "on entity target:",
            "    entity's target is a player",
            "    send \"You're being followed by an %entity%!\" to target of entity",
        ],
        expression_type: ExpressionType::Property,
        return_kind: EntityKind::Entity,
        patterns: &[
            "[the] target[[ed] %-*entitydata%] [of %livingentities%]",
            "%livingentities%'[s] target[[ed] %-*entitydata%]",
        ],
    };

    /// Creates an accessor, validating the optional filter kind against
    /// the expression's return kind.
    pub fn new(filter: Option<EntityKind>, source: SourceResolver) -> Result<Self> {
        let filter = match filter {
            Some(kind) => TypeFilter::of(kind, Self::INFO.return_kind)?,
            None => TypeFilter::none(Self::INFO.return_kind),
        };
        Ok(Self {
            filter,
            source,
            time: TimeIndex::NOW,
            time_declared: false,
            gate: EventTimeGate::new(EventKind::EntityTarget),
        })
    }

    /// Binds a pattern match.
    ///
    /// In pattern 0 the filter comes first; in pattern 1 the source does.
    /// An omitted source is the event's subject.
    pub fn init(mut parse: ParseResult) -> Result<Self> {
        let pattern = parse.matched_pattern;
        if pattern >= Self::INFO.patterns.len() {
            return Err(Error::invalid_slot(pattern, 0, "no such pattern"));
        }
        let (filter_index, source_index) = (pattern, 1 - pattern);

        let filter = match parse.take(filter_index) {
            None => None,
            Some(Slot::Literal(value)) => Some(value.as_kind().ok_or_else(|| {
                Error::invalid_slot(
                    pattern,
                    filter_index,
                    format!("expected entity data, got {}", value.value_type()),
                )
            })?),
            Some(Slot::Source(_)) => {
                return Err(Error::invalid_slot(
                    pattern,
                    filter_index,
                    "entity data must be a literal",
                ));
            }
        };

        let source = match parse.take(source_index) {
            None => SourceResolver::implicit(),
            Some(Slot::Source(expr)) => SourceResolver::explicit(expr),
            Some(Slot::Literal(value)) => {
                return Err(Error::invalid_slot(
                    pattern,
                    source_index,
                    format!("expected living entities, got {value}"),
                ));
            }
        };

        Self::new(filter, source)
    }

    /// The type filter.
    #[must_use]
    pub fn filter(&self) -> &TypeFilter {
        &self.filter
    }

    /// The source resolver.
    #[must_use]
    pub fn source(&self) -> &SourceResolver {
        &self.source
    }

    /// When this expression observes its event.
    #[must_use]
    pub fn time(&self) -> TimeIndex {
        self.time
    }

    /// Returns true if the author left the source implicit.
    #[must_use]
    pub fn is_default_source(&self) -> bool {
        self.source.is_default()
    }

    /// The most specific kind this expression can return.
    #[must_use]
    pub fn return_type(&self) -> EntityKind {
        self.filter.result_type()
    }

    /// Applies a `past`/`future` clause while parsing a trigger for
    /// `current_event`.
    ///
    /// Only the implicit form inside entity target events has a past and a
    /// future; anywhere else the clause is rejected.
    pub fn set_time(&mut self, time: TimeIndex, current_event: EventKind) -> Result<()> {
        if self.time_declared {
            return Err(Error::time_already_set(self.to_string()));
        }
        if current_event != self.gate.event() || !self.source.is_default() {
            log::debug!(target: LOG_TARGET, "rejected {time} time for {self} in {current_event} event");
            return Err(Error::time_not_applicable(self.to_string(), current_event));
        }
        self.time = time;
        self.time_declared = true;
        Ok(())
    }

    /// Evaluates against one firing.
    #[must_use]
    pub fn evaluate(&self, ctx: &EventContext, world: &World) -> Vec<EntityId> {
        self.evaluate_traced(ctx, world).values
    }

    /// Evaluates and reports which path produced the values.
    #[must_use]
    pub fn evaluate_traced(&self, ctx: &EventContext, world: &World) -> Evaluation {
        let decision = self.decide(ctx);
        if decision.is_open() {
            if let Some(Some(slot)) = ctx.direct_slot(self.gate.event()) {
                if !self.filter.is_instance(world, slot) {
                    log::trace!(target: LOG_TARGET, "{self}: direct slot {slot} is not a {}", self.filter);
                    return Evaluation {
                        values: Vec::new(),
                        path: AccessPath::Suppressed,
                    };
                }
                log::trace!(target: LOG_TARGET, "{self}: direct slot {slot}");
                return Evaluation {
                    values: vec![slot],
                    path: AccessPath::DirectSlot,
                };
            }
        }

        let values: Vec<EntityId> = self
            .source
            .resolve(ctx, world)
            .into_iter()
            .filter_map(|source| capability::lookup_target(world, source, &self.filter))
            .collect();
        log::trace!(target: LOG_TARGET, "{self}: {} per-object result(s), gate {decision}", values.len());
        Evaluation {
            values,
            path: AccessPath::PerObject(decision),
        }
    }

    /// Types accepted by a change with `mode`, or `None` if the mode is
    /// not supported.
    #[must_use]
    pub fn accepted_change_types(&self, mode: ChangeMode) -> Option<Vec<Type>> {
        match mode {
            ChangeMode::Set | ChangeMode::Delete => {
                Some(vec![Type::Entity(EntityKind::LivingEntity)])
            }
            _ => None,
        }
    }

    /// Parse-time form of [`PropertyAccessor::accepted_change_types`].
    pub fn check_change(&self, mode: ChangeMode) -> Result<Vec<Type>> {
        self.accepted_change_types(mode).ok_or_else(|| {
            log::debug!(target: LOG_TARGET, "rejected {mode} change of {self}");
            Error::unsupported_change(self.to_string(), mode)
        })
    }

    /// Sets (`Some`) or clears (`None` / [`ChangeMode::Delete`]) the target.
    ///
    /// The mode and value are checked against
    /// [`PropertyAccessor::accepted_change_types`] before anything is written.
    ///
    /// If the event's slot is usable the new target goes there and no
    /// entity is touched. Otherwise every source creature is retargeted and
    /// sources that can't hold a target are skipped.
    pub fn mutate(
        &self,
        ctx: &mut EventContext,
        world: &mut World,
        delta: Option<EntityId>,
        mode: ChangeMode,
    ) -> Result<MutationReport> {
        let accepted = self.check_change(mode)?;
        let value = if mode == ChangeMode::Delete { None } else { delta };
        if let Some(target) = value {
            let actual = Type::Entity(
                world
                    .kind_of(target)
                    .ok_or_else(|| Error::entity_not_found(target))?,
            );
            if !accepted.iter().any(|expected| expected.accepts(&actual)) {
                let expected = accepted.first().copied().unwrap_or(Type::Nil);
                return Err(Error::type_mismatch(expected, actual));
            }
        }

        if self.decide(ctx).is_open() {
            if !ctx.set_direct_slot(self.gate.event(), value) {
                return Err(Error::new(ErrorKind::Internal(format!(
                    "gate opened for {self} without a direct slot"
                ))));
            }
            log::trace!(target: LOG_TARGET, "{self}: {mode} direct slot");
            return Ok(MutationReport::DirectSlot);
        }

        let mut written = 0;
        let mut skipped = 0;
        for source in self.source.resolve(ctx, world) {
            if capability::write_target(world, source, value) {
                written += 1;
            } else {
                skipped += 1;
            }
        }
        log::trace!(target: LOG_TARGET, "{self}: {mode} wrote {written}, skipped {skipped}");
        Ok(MutationReport::PerObject { written, skipped })
    }

    /// Lists the current values for debug output.
    #[must_use]
    pub fn describe_values(&self, ctx: &EventContext, world: &World) -> String {
        let values = self.evaluate(ctx, world);
        if values.is_empty() {
            return "<none>".to_string();
        }
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn decide(&self, ctx: &EventContext) -> GateDecision {
        self.gate.decide(ctx, self.time, self.source.is_default())
    }
}

impl fmt::Display for PropertyAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the target")?;
        if let Some(kind) = self.filter.declared() {
            write!(f, "ed {kind}")?;
        }
        write!(f, " of {}", self.source.describe())
    }
}

// =============================================================================
// Tests
// =============================================================================
