//! Declared sub-kind narrowing (`the targeted zombie`).

use std::fmt;

use sightline_foundation::{EntityId, EntityKind, Error, Result};
use sightline_storage::World;

/// Narrows an entity-valued expression to a declared sub-kind.
///
/// A filter with no declared kind accepts everything and reports the base
/// kind as its result type. A declared kind must be a descendant of the
/// base, so anything that passes [`TypeFilter::is_instance`] is always
/// assignable to [`TypeFilter::result_type`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeFilter {
    declared: Option<EntityKind>,
    base: EntityKind,
}

impl TypeFilter {
    /// A filter that does no narrowing.
    #[must_use]
    pub const fn none(base: EntityKind) -> Self {
        Self {
            declared: None,
            base,
        }
    }

    /// A filter narrowing `base` to `kind`.
    ///
    /// Fails when `kind` can never be produced by an expression returning
    /// `base`.
    pub fn of(kind: EntityKind, base: EntityKind) -> Result<Self> {
        if !kind.is_a(base) {
            return Err(Error::impossible_filter(kind, base));
        }
        Ok(Self {
            declared: Some(kind),
            base,
        })
    }

    /// The declared kind, if any.
    #[must_use]
    pub const fn declared(&self) -> Option<EntityKind> {
        self.declared
    }

    /// The most specific kind the filtered expression can return.
    #[must_use]
    pub fn result_type(&self) -> EntityKind {
        self.declared.unwrap_or(self.base)
    }

    /// Returns true if an entity of `kind` passes the filter.
    #[must_use]
    pub fn matches_kind(&self, kind: EntityKind) -> bool {
        self.declared.is_none_or(|declared| kind.is_a(declared))
    }

    /// Returns true if `id` passes the filter.
    ///
    /// With no declared kind this is always true. Otherwise the entity must
    /// be live and of the declared kind.
    #[must_use]
    pub fn is_instance(&self, world: &World, id: EntityId) -> bool {
        match self.declared {
            None => true,
            Some(_) => world.kind_of(id).is_some_and(|kind| self.matches_kind(kind)),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.declared {
            Some(kind) => write!(f, "{kind}"),
            None => write!(f, "any {}", self.base),
        }
    }
}
