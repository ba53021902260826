//! Integration tests for world state
//!
//! Tests targets, sight lines, reference cleanup, and snapshots.

use sightline_foundation::{EntityId, EntityKind};
use sightline_storage::World;

#[test]
fn targets_are_validated() {
    let mut world = World::new();
    let wolf = world.spawn(EntityKind::Wolf);
    let cow = world.spawn(EntityKind::Cow);

    world.set_target(wolf, Some(cow)).unwrap();
    assert_eq!(world.target(wolf), Some(cow));

    assert!(world.set_target(wolf, Some(EntityId::new(50, 1))).is_err());
    assert!(world.set_target(EntityId::new(50, 1), None).is_err());
    assert_eq!(world.target(wolf), Some(cow));
}

#[test]
fn destroy_clears_references() {
    let mut world = World::new();
    let wolf = world.spawn(EntityKind::Wolf);
    let player = world.spawn(EntityKind::Player);
    let cow = world.spawn(EntityKind::Cow);
    let zombie = world.spawn(EntityKind::Zombie);

    world.set_target(wolf, Some(cow)).unwrap();
    world.set_sight_line(player, vec![cow, zombie]).unwrap();
    world.destroy(cow).unwrap();

    assert_eq!(world.target(wolf), None);
    assert_eq!(world.record(wolf).unwrap().target, None);
    assert_eq!(world.sight_line(player), &[zombie]);
    assert_eq!(world.len(), 3);
}

#[test]
fn entities_of_kind_follow_hierarchy() {
    let mut world = World::new();
    let zombie = world.spawn(EntityKind::Zombie);
    let player = world.spawn(EntityKind::Player);
    let cow = world.spawn(EntityKind::Cow);
    let _arrow = world.spawn(EntityKind::Arrow);

    assert_eq!(world.entities_of_kind(EntityKind::Creature), vec![zombie, cow]);
    assert_eq!(
        world.entities_of_kind(EntityKind::LivingEntity),
        vec![zombie, player, cow]
    );
    assert_eq!(world.entities_of_kind(EntityKind::Entity).len(), 4);
}

#[test]
fn clones_are_independent_snapshots() {
    let mut world = World::new();
    let wolf = world.spawn(EntityKind::Wolf);
    let cow = world.spawn(EntityKind::Cow);
    let snapshot = world.clone();

    world.set_target(wolf, Some(cow)).unwrap();
    assert_eq!(world.target(wolf), Some(cow));
    assert_eq!(snapshot.target(wolf), None);
}
