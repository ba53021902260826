//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: EntityId, EntityKind, Type, Value, and Error.

mod kinds;
