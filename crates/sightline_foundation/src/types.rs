//! Static type descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::kind::EntityKind;

/// Type descriptor for slot literals and change deltas.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The nil type.
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// Text.
    Text,
    /// An entity kind descriptor (what `%entitydata%` binds).
    Kind,
    /// A reference to an entity of at least the given kind.
    Entity(EntityKind),
}

impl Type {
    /// Checks if a value of `value_type` is accepted where `self` is expected.
    ///
    /// Entity types are covariant: `entity<creature>` accepts `entity<zombie>`.
    #[must_use]
    pub fn accepts(&self, value_type: &Type) -> bool {
        match (self, value_type) {
            (Self::Entity(expected), Self::Entity(actual)) => actual.is_a(*expected),
            (Self::Nil, Self::Nil)
            | (Self::Bool, Self::Bool)
            | (Self::Int, Self::Int)
            | (Self::Text, Self::Text)
            | (Self::Kind, Self::Kind) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Text => write!(f, "text"),
            Self::Kind => write!(f, "entity-data"),
            Self::Entity(kind) => write!(f, "entity<{kind}>"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
