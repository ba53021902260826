//! World state: live entities and what each of them is aiming at.
//!
//! Records live in a persistent map, so cloning a `World` is a cheap
//! snapshot. Rules mutate the world in place during a firing.

use im::HashMap;
use sightline_foundation::{EntityId, EntityKind, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entity::EntityStore;

/// Per-entity state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityRecord {
    /// The entity's kind.
    pub kind: EntityKind,
    /// What a creature is attacking or following.
    pub target: Option<EntityId>,
    /// Entities under a player's crosshair, nearest first.
    pub sight_line: Vec<EntityId>,
}

impl EntityRecord {
    fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            target: None,
            sight_line: Vec::new(),
        }
    }
}

/// All entity state for one simulation.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct World {
    entities: EntityStore,
    records: HashMap<EntityId, EntityRecord>,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns an entity of the given kind.
    pub fn spawn(&mut self, kind: EntityKind) -> EntityId {
        let id = self.entities.spawn();
        self.records.insert(id, EntityRecord::new(kind));
        id
    }

    /// Destroys an entity and forgets every reference to it.
    pub fn destroy(&mut self, id: EntityId) -> Result<()> {
        self.entities.destroy(id)?;
        self.records.remove(&id);

        let referencing: Vec<EntityId> = self
            .records
            .iter()
            .filter(|(_, record)| record.target == Some(id) || record.sight_line.contains(&id))
            .map(|(other, _)| *other)
            .collect();
        for other in referencing {
            if let Some(record) = self.records.get_mut(&other) {
                if record.target == Some(id) {
                    record.target = None;
                }
                record.sight_line.retain(|seen| *seen != id);
            }
        }
        Ok(())
    }

    /// Returns true if `id` is live.
    #[must_use]
    pub fn exists(&self, id: EntityId) -> bool {
        self.entities.exists(id)
    }

    /// Returns the record for a live entity.
    #[must_use]
    pub fn record(&self, id: EntityId) -> Option<&EntityRecord> {
        self.records.get(&id)
    }

    /// Returns the kind of a live entity.
    #[must_use]
    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        self.record(id).map(|record| record.kind)
    }

    /// Live entities that are `kind` or a sub-kind of it, in index order.
    #[must_use]
    pub fn entities_of_kind(&self, kind: EntityKind) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|id| self.kind_of(*id).is_some_and(|k| k.is_a(kind)))
            .collect()
    }

    /// What `id` is attacking or following, if that entity is still live.
    #[must_use]
    pub fn target(&self, id: EntityId) -> Option<EntityId> {
        self.record(id)
            .and_then(|record| record.target)
            .filter(|target| self.exists(*target))
    }

    /// Points `id` at `target`, or clears its target with `None`.
    ///
    /// This is the raw store operation; it does not check whether the
    /// entity's kind can hold a target.
    pub fn set_target(&mut self, id: EntityId, target: Option<EntityId>) -> Result<()> {
        self.entities.validate(id)?;
        if let Some(target) = target {
            self.entities.validate(target)?;
        }
        self.record_mut(id)?.target = target;
        Ok(())
    }

    /// Entities under `id`'s crosshair, nearest first.
    #[must_use]
    pub fn sight_line(&self, id: EntityId) -> &[EntityId] {
        self.record(id)
            .map_or(&[][..], |record| record.sight_line.as_slice())
    }

    /// Replaces what `id` currently sees.
    pub fn set_sight_line(&mut self, id: EntityId, seen: Vec<EntityId>) -> Result<()> {
        self.entities.validate(id)?;
        for other in &seen {
            self.entities.validate(*other)?;
        }
        self.record_mut(id)?.sight_line = seen;
        Ok(())
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the world has no live entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Live entity ids in index order.
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter()
    }

    fn record_mut(&mut self, id: EntityId) -> Result<&mut EntityRecord> {
        self.records
            .get_mut(&id)
            .ok_or_else(|| Error::entity_not_found(id))
    }
}
