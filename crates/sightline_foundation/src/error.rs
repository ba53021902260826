//! Error types for the Sightline system.
//!
//! Uses `thiserror` for ergonomic error definition.
//! Static validation failures (bad slots, unsupported change modes, time
//! clauses on the wrong event) are all reported through this type when a
//! rule statement is bound, never as a panic.

use std::fmt;

use thiserror::Error;

use crate::entity::EntityId;
use crate::kind::EntityKind;
use crate::types::Type;

/// The main error type for Sightline operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(id: EntityId) -> Self {
        Self::new(ErrorKind::EntityNotFound(id))
    }

    /// Creates a stale entity reference error.
    #[must_use]
    pub fn stale_entity(id: EntityId) -> Self {
        Self::new(ErrorKind::StaleEntity(id))
    }

    /// Creates an unsupported change mode error.
    #[must_use]
    pub fn unsupported_change(expression: impl Into<String>, mode: impl fmt::Display) -> Self {
        Self::new(ErrorKind::UnsupportedChangeMode {
            expression: expression.into(),
            mode: mode.to_string(),
        })
    }

    /// Creates an error for a time clause used outside its events.
    #[must_use]
    pub fn time_not_applicable(expression: impl Into<String>, event: impl fmt::Display) -> Self {
        Self::new(ErrorKind::TimeNotApplicable {
            expression: expression.into(),
            event: event.to_string(),
        })
    }

    /// Creates an error for a second time clause on the same expression.
    #[must_use]
    pub fn time_already_set(expression: impl Into<String>) -> Self {
        Self::new(ErrorKind::TimeAlreadySet {
            expression: expression.into(),
        })
    }

    /// Creates an impossible type filter error.
    #[must_use]
    pub fn impossible_filter(filter: EntityKind, base: EntityKind) -> Self {
        Self::new(ErrorKind::ImpossibleFilter { filter, base })
    }

    /// Creates an invalid slot binding error.
    #[must_use]
    pub fn invalid_slot(pattern: usize, index: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSlot {
            pattern,
            index,
            message: message.into(),
        })
    }

    /// Returns true if this error is a static validation failure.
    ///
    /// These reject the rule statement when it is bound rather than at
    /// evaluation time.
    #[must_use]
    pub fn is_static(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnsupportedChangeMode { .. }
                | ErrorKind::TimeNotApplicable { .. }
                | ErrorKind::TimeAlreadySet { .. }
                | ErrorKind::ImpossibleFilter { .. }
                | ErrorKind::InvalidSlot { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value had the wrong type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// Entity was not found in storage.
    #[error("entity not found: {0:?}")]
    EntityNotFound(EntityId),

    /// Entity reference is stale (generation mismatch).
    #[error("stale entity reference: {0:?}")]
    StaleEntity(EntityId),

    /// The expression cannot be changed with this mode.
    #[error("{expression} can't be changed with mode '{mode}'")]
    UnsupportedChangeMode {
        /// Description of the expression.
        expression: String,
        /// The rejected change mode.
        mode: String,
    },

    /// A time clause was used in an event the expression doesn't support.
    #[error("{expression} has no past or future state in {event} events")]
    TimeNotApplicable {
        /// Description of the expression.
        expression: String,
        /// The event being parsed.
        event: String,
    },

    /// A time clause was applied twice.
    #[error("time of {expression} was already declared")]
    TimeAlreadySet {
        /// Description of the expression.
        expression: String,
    },

    /// A type filter names a kind that can never be returned.
    #[error("type filter {filter} is not a kind of {base}")]
    ImpossibleFilter {
        /// The declared filter kind.
        filter: EntityKind,
        /// The expression's base return kind.
        base: EntityKind,
    },

    /// A parsed slot held something the expression can't bind.
    #[error("invalid slot {index} in pattern {pattern}: {message}")]
    InvalidSlot {
        /// The matched pattern index.
        pattern: usize,
        /// The slot index.
        index: usize,
        /// What was wrong with it.
        message: String,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
