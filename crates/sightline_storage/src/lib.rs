//! Entity storage and per-entity targeting state for Sightline.
//!
//! This crate provides:
//! - [`EntityStore`] - Generational entity allocation
//! - [`World`] - Entity kinds, targets, and sight lines

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod world;

pub use entity::EntityStore;
pub use world::{EntityRecord, World};
