//! Core types, entity kinds, and errors for Sightline.
//!
//! This crate provides:
//! - [`EntityId`] - Generational entity identifiers
//! - [`EntityKind`] - The entity kind taxonomy used for type narrowing
//! - [`Type`] - Static type descriptors for slot values and change deltas
//! - [`Value`] - Literal values bound into parsed expression slots
//! - [`Error`] - Error types with categorized kinds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod kind;
pub mod types;
pub mod value;

pub use entity::EntityId;
pub use error::{Error, ErrorKind};
pub use kind::{EntityKind, UnknownKind};
pub use types::Type;
pub use value::Value;

/// Result type alias using Sightline's error type.
pub type Result<T> = std::result::Result<T, Error>;
