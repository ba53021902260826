//! Integration tests for Layer 1: Storage
//!
//! Tests for entity stores and world state.

mod world;
