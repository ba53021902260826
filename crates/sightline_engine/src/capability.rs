//! Per-entity targeting capabilities.
//!
//! Players aim with their crosshair and cannot be told what to target.
//! Creatures hold a target of their own that rules may read and replace.
//! Every other kind has no target at all.

use sightline_foundation::{EntityId, EntityKind};
use sightline_storage::World;

use crate::filter::TypeFilter;

/// Looks up what `source` is targeting, narrowed by `filter`.
///
/// A player's target is the nearest entity under its crosshair that passes
/// the filter. A creature's target counts only if it passes the filter.
#[must_use]
pub fn lookup_target(world: &World, source: EntityId, filter: &TypeFilter) -> Option<EntityId> {
    let kind = world.kind_of(source)?;
    if kind.is_a(EntityKind::Player) {
        world
            .sight_line(source)
            .iter()
            .copied()
            .find(|seen| filter.is_instance(world, *seen))
    } else if kind.is_creature() {
        world
            .target(source)
            .filter(|target| filter.is_instance(world, *target))
    } else {
        None
    }
}

/// Returns true if `id` is live and can be given a target.
#[must_use]
pub fn can_hold_target(world: &World, id: EntityId) -> bool {
    world.kind_of(id).is_some_and(EntityKind::is_creature)
}

/// Points `source` at `target`. Returns false, leaving the world untouched,
/// when `source` cannot hold a target or `target` is gone.
pub fn write_target(world: &mut World, source: EntityId, target: Option<EntityId>) -> bool {
    if !can_hold_target(world, source) {
        return false;
    }
    match world.set_target(source, target) {
        Ok(()) => true,
        Err(err) => {
            log::debug!(target: "sightline::capability", "target of {source} not written: {err}");
            false
        }
    }
}
