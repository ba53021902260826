//! Literal values bound into parsed expression slots.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::kind::EntityKind;
use crate::types::Type;

/// A literal value.
///
/// The parser binds these into slots that expect constants, such as the
/// `%entitydata%` filter of a property expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Absence of a value.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// Text value.
    Text(Arc<str>),
    /// Entity reference.
    Entity(EntityId),
    /// Entity kind descriptor.
    Kind(EntityKind),
}

impl Value {
    /// Returns the static type of this value.
    ///
    /// Entity references report the root kind since the concrete kind lives
    /// in the world, not in the reference.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match self {
            Self::Nil => Type::Nil,
            Self::Bool(_) => Type::Bool,
            Self::Int(_) => Type::Int,
            Self::Text(_) => Type::Text,
            Self::Entity(_) => Type::Entity(EntityKind::Entity),
            Self::Kind(_) => Type::Kind,
        }
    }

    /// Returns the kind if this is a kind literal.
    #[must_use]
    pub const fn as_kind(&self) -> Option<EntityKind> {
        match self {
            Self::Kind(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::Entity(id) => write!(f, "{id}"),
            Self::Kind(kind) => write!(f, "{kind}"),
        }
    }
}

impl From<EntityKind> for Value {
    fn from(kind: EntityKind) -> Self {
        Self::Kind(kind)
    }
}

impl From<EntityId> for Value {
    fn from(id: EntityId) -> Self {
        Self::Entity(id)
    }
}
