//! Source expressions: which entities a property is read from.

use std::fmt;

use sightline_foundation::{EntityId, EntityKind};
use sightline_storage::World;

use crate::event::EventContext;

/// An expression producing the entities a property is looked up on.
///
/// Implementations only supply candidates, in order. They never filter by
/// type or consult the event's timing.
pub trait SourceExpr: fmt::Debug {
    /// Produces the current candidates. May be empty.
    fn resolve(&self, ctx: &EventContext, world: &World) -> Vec<EntityId>;

    /// Script-facing description.
    fn describe(&self) -> String;
}

/// The entity the event is about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventSubject;

impl SourceExpr for EventSubject {
    fn resolve(&self, ctx: &EventContext, world: &World) -> Vec<EntityId> {
        ctx.subject()
            .filter(|subject| world.exists(*subject))
            .into_iter()
            .collect()
    }

    fn describe(&self) -> String {
        "the entity".to_string()
    }
}

/// A fixed list of entities, e.g. from a variable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entities(pub Vec<EntityId>);

impl SourceExpr for Entities {
    fn resolve(&self, _ctx: &EventContext, _world: &World) -> Vec<EntityId> {
        self.0.clone()
    }

    fn describe(&self) -> String {
        if self.0.is_empty() {
            return "nothing".to_string();
        }
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

/// Every live entity of a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllOfKind(pub EntityKind);

impl SourceExpr for AllOfKind {
    fn resolve(&self, _ctx: &EventContext, world: &World) -> Vec<EntityId> {
        world.entities_of_kind(self.0)
    }

    fn describe(&self) -> String {
        format!("every {}", self.0)
    }
}

/// Wraps a source expression together with whether the author left it
/// implicit.
///
/// Default-ness is fixed at construction. An author who writes `the
/// entity` explicitly gets the same entities as the implicit form, but the
/// resolver is not default and so never unlocks the event's direct slot.
#[derive(Debug)]
pub struct SourceResolver {
    expr: Box<dyn SourceExpr>,
    default: bool,
}

impl SourceResolver {
    /// The source used when the author omitted one: the event's subject.
    #[must_use]
    pub fn implicit() -> Self {
        Self {
            expr: Box::new(EventSubject),
            default: true,
        }
    }

    /// A source the author named.
    #[must_use]
    pub fn explicit(expr: Box<dyn SourceExpr>) -> Self {
        Self {
            expr,
            default: false,
        }
    }

    /// Returns true if the author left the source implicit.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.default
    }

    /// Produces the current candidates.
    #[must_use]
    pub fn resolve(&self, ctx: &EventContext, world: &World) -> Vec<EntityId> {
        self.expr.resolve(ctx, world)
    }

    /// Script-facing description of the wrapped expression.
    #[must_use]
    pub fn describe(&self) -> String {
        self.expr.describe()
    }
}
