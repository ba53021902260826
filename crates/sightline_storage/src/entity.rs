//! Entity lifecycle management with generational indices.
//!
//! The `EntityStore` hands out ids and remembers, per slot, which
//! generation is current and whether it is occupied.

// Allow u64 to usize casts - we target 64-bit systems
#![allow(clippy::cast_possible_truncation)]

use sightline_foundation::{EntityId, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One slot of the store.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Slot {
    generation: u32,
    alive: bool,
}

/// Allocates entity ids and tracks which ones are live.
///
/// Freed slots are reused newest-first with a bumped generation, so ids
/// held across a destroy/spawn cycle stop validating.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityStore {
    slots: Vec<Slot>,
    free: Vec<u64>,
    live: usize,
}

impl EntityStore {
    /// Creates a new empty entity store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new live entity.
    pub fn spawn(&mut self) -> EntityId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation += 1;
            slot.alive = true;
            return EntityId::new(index, slot.generation);
        }
        let index = self.slots.len() as u64;
        self.slots.push(Slot {
            generation: 1,
            alive: true,
        });
        EntityId::new(index, 1)
    }

    /// Releases a live entity.
    pub fn destroy(&mut self, id: EntityId) -> Result<()> {
        self.validate(id)?;
        self.slots[id.index as usize].alive = false;
        self.free.push(id.index);
        self.live -= 1;
        Ok(())
    }

    /// Returns true if `id` refers to a live entity.
    #[must_use]
    pub fn exists(&self, id: EntityId) -> bool {
        self.validate(id).is_ok()
    }

    /// Distinguishes ids that never existed (or were freed) from ids whose
    /// slot has since been reused.
    pub fn validate(&self, id: EntityId) -> Result<()> {
        let Some(slot) = self.slots.get(id.index as usize) else {
            return Err(Error::entity_not_found(id));
        };
        if slot.generation != id.generation {
            return Err(Error::stale_entity(id));
        }
        if !slot.alive {
            return Err(Error::entity_not_found(id));
        }
        Ok(())
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if no entity is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live entity ids in index order.
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.alive)
            .map(|(index, slot)| EntityId::new(index as u64, slot.generation))
    }
}
