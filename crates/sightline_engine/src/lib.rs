//! Temporal property accessors for Sightline.
//!
//! This crate provides:
//! - [`PropertyAccessor`] - The `target` expression: reads and writes
//! - [`TypeFilter`] - Declared sub-kind narrowing
//! - [`EventTimeGate`] - When the event's own slot may be used
//! - [`SourceResolver`] - The entities a property is read from
//! - [`EventContext`] - One firing of an event

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod accessor;
pub mod capability;
pub mod change;
pub mod event;
pub mod filter;
pub mod gate;
pub mod source;
pub mod syntax;

pub use accessor::{AccessPath, Evaluation, MutationReport, PropertyAccessor};
pub use change::ChangeMode;
pub use event::{EventContext, EventKind};
pub use filter::TypeFilter;
pub use gate::{EventTimeGate, GateDecision, TimeIndex};
pub use source::{AllOfKind, Entities, EventSubject, SourceExpr, SourceResolver};
pub use syntax::{ExpressionInfo, ExpressionType, ParseResult, Slot};
