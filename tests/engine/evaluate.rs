//! Integration tests for evaluating the `target` accessor

use sightline_engine::{
    AccessPath, AllOfKind, Entities, EventContext, EventKind, GateDecision, PropertyAccessor,
    SourceResolver, TimeIndex,
};
use sightline_foundation::{EntityId, EntityKind};
use sightline_storage::World;

fn implicit(filter: Option<EntityKind>) -> PropertyAccessor {
    PropertyAccessor::new(filter, SourceResolver::implicit()).unwrap()
}

fn explicit(filter: Option<EntityKind>, ids: Vec<EntityId>) -> PropertyAccessor {
    PropertyAccessor::new(filter, SourceResolver::explicit(Box::new(Entities(ids)))).unwrap()
}

// =============================================================================
// Direct Slot
// =============================================================================

#[test]
fn direct_slot_answers_implicit_form() {
    let mut world = World::new();
    let zombie = world.spawn(EntityKind::Zombie);
    let player = world.spawn(EntityKind::Player);
    let cow = world.spawn(EntityKind::Cow);
    // The creature still remembers its old target.
    world.set_target(zombie, Some(cow)).unwrap();

    let ctx = EventContext::entity_target(zombie, Some(player));
    let evaluation = implicit(None).evaluate_traced(&ctx, &world);
    assert_eq!(evaluation.values, vec![player]);
    assert_eq!(evaluation.path, AccessPath::DirectSlot);
}

#[test]
fn filtered_out_slot_yields_nothing() {
    let mut world = World::new();
    let zombie = world.spawn(EntityKind::Zombie);
    let cow = world.spawn(EntityKind::Cow);
    world.set_target(zombie, Some(cow)).unwrap();

    let ctx = EventContext::entity_target(zombie, Some(cow));
    let accessor = implicit(Some(EntityKind::Player));
    let evaluation = accessor.evaluate_traced(&ctx, &world);
    assert!(evaluation.values.is_empty());
    assert_eq!(evaluation.path, AccessPath::Suppressed);
    assert_eq!(accessor.evaluate(&ctx, &world), accessor.evaluate(&ctx, &world));
}

#[test]
fn filter_accepts_sub_kinds() {
    let mut world = World::new();
    let wolf = world.spawn(EntityKind::Wolf);
    let zombie = world.spawn(EntityKind::Zombie);
    let ctx = EventContext::entity_target(wolf, Some(zombie));
    assert_eq!(implicit(Some(EntityKind::Monster)).evaluate(&ctx, &world), vec![zombie]);
}

#[test]
fn empty_slot_falls_back_to_the_creature() {
    let mut world = World::new();
    let zombie = world.spawn(EntityKind::Zombie);
    let player = world.spawn(EntityKind::Player);
    world.set_target(zombie, Some(player)).unwrap();

    let ctx = EventContext::entity_target(zombie, None);
    let evaluation = implicit(None).evaluate_traced(&ctx, &world);
    assert_eq!(evaluation.values, vec![player]);
    assert_eq!(evaluation.path, AccessPath::PerObject(GateDecision::Open));
}

// =============================================================================
// Per-Object Lookup
// =============================================================================

#[test]
fn before_time_reads_the_creature() {
    let mut world = World::new();
    let zombie = world.spawn(EntityKind::Zombie);
    let player = world.spawn(EntityKind::Player);
    let cow = world.spawn(EntityKind::Cow);
    world.set_target(zombie, Some(cow)).unwrap();

    let mut accessor = implicit(None);
    accessor.set_time(TimeIndex::BEFORE, EventKind::EntityTarget).unwrap();

    let ctx = EventContext::entity_target(zombie, Some(player));
    let evaluation = accessor.evaluate_traced(&ctx, &world);
    assert_eq!(evaluation.values, vec![cow]);
    assert_eq!(evaluation.path, AccessPath::PerObject(GateDecision::BeforeEvent));
}

#[test]
fn explicit_subject_reads_the_creature() {
    let mut world = World::new();
    let zombie = world.spawn(EntityKind::Zombie);
    let player = world.spawn(EntityKind::Player);

    let ctx = EventContext::entity_target(zombie, Some(player));
    let evaluation = explicit(None, vec![zombie]).evaluate_traced(&ctx, &world);
    assert!(evaluation.values.is_empty());
    assert_eq!(evaluation.path, AccessPath::PerObject(GateDecision::ExplicitSource));
}

#[test]
fn other_events_read_the_creature() {
    let mut world = World::new();
    let zombie = world.spawn(EntityKind::Zombie);
    let player = world.spawn(EntityKind::Player);
    let cow = world.spawn(EntityKind::Cow);
    world.set_target(zombie, Some(cow)).unwrap();

    let damage = EventContext::new(EventKind::EntityDamage, Some(zombie)).with_slot(Some(player));
    assert_eq!(implicit(None).evaluate(&damage, &world), vec![cow]);

    let spawn = EventContext::new(EventKind::EntitySpawn, Some(zombie));
    let evaluation = implicit(None).evaluate_traced(&spawn, &world);
    assert_eq!(evaluation.values, vec![cow]);
    assert_eq!(evaluation.path, AccessPath::PerObject(GateDecision::NoDirectSlot));
}

#[test]
fn players_target_what_they_look_at() {
    let mut world = World::new();
    let player = world.spawn(EntityKind::Player);
    let item = world.spawn(EntityKind::Item);
    let cow = world.spawn(EntityKind::Cow);
    world.set_sight_line(player, vec![item, cow]).unwrap();

    let tick = EventContext::new(EventKind::Tick, None);
    assert_eq!(explicit(None, vec![player]).evaluate(&tick, &world), vec![item]);
    assert_eq!(
        explicit(Some(EntityKind::LivingEntity), vec![player]).evaluate(&tick, &world),
        vec![cow]
    );
}

#[test]
fn every_of_kind_source() {
    let mut world = World::new();
    let wolf = world.spawn(EntityKind::Wolf);
    let cow = world.spawn(EntityKind::Cow);
    let zombie = world.spawn(EntityKind::Zombie);
    let player = world.spawn(EntityKind::Player);
    world.set_target(wolf, Some(cow)).unwrap();
    world.set_target(zombie, Some(player)).unwrap();

    let accessor = PropertyAccessor::new(
        Some(EntityKind::Player),
        SourceResolver::explicit(Box::new(AllOfKind(EntityKind::Creature))),
    )
    .unwrap();
    let tick = EventContext::new(EventKind::Tick, None);
    assert_eq!(accessor.evaluate(&tick, &world), vec![player]);
    assert_eq!(accessor.describe_values(&tick, &world), "Entity(3)");
}

#[test]
fn missing_subject_yields_nothing() {
    let world = World::new();
    let tick = EventContext::new(EventKind::Tick, None);
    assert!(implicit(None).evaluate(&tick, &world).is_empty());
    assert_eq!(implicit(None).describe_values(&tick, &world), "<none>");
}
