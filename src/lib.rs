//! Sightline - temporal property access for event-driven rules
//!
//! This crate re-exports all layers of the Sightline system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: sightline_debug      - Access tracing
//! Layer 2: sightline_engine     - Type filters, event-time gate, the target accessor
//! Layer 1: sightline_storage    - Entity records, targets, sight lines
//! Layer 0: sightline_foundation - Core types (EntityId, EntityKind, Value, Error)
//! ```

pub use sightline_debug as debug;
pub use sightline_engine as engine;
pub use sightline_foundation as foundation;
pub use sightline_storage as storage;
