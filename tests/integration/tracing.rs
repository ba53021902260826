//! Tracing accessor activity across firings

use sightline::debug::{ObservabilityConfig, TraceEvent, Tracer};
use sightline::engine::{
    AccessPath, ChangeMode, EventContext, GateDecision, MutationReport, PropertyAccessor,
    SourceResolver,
};
use sightline::foundation::EntityKind;
use sightline::storage::World;

#[test]
fn trace_of_a_deferred_firing() {
    let mut world = World::new();
    let zombie = world.spawn(EntityKind::Zombie);
    let player = world.spawn(EntityKind::Player);
    let cow = world.spawn(EntityKind::Cow);

    let accessor = PropertyAccessor::new(None, SourceResolver::implicit()).unwrap();
    let mut tracer = Tracer::new(ObservabilityConfig::enabled().tracer_config());
    let mut ctx = EventContext::entity_target(zombie, Some(player));

    let firing = tracer.begin_firing(&ctx);
    assert_eq!(tracer.evaluate(&accessor, &ctx, &world), vec![player]);
    tracer.defer(&mut ctx);
    let report = tracer
        .mutate(&accessor, &mut ctx, &mut world, Some(cow), ChangeMode::Set)
        .unwrap();
    assert_eq!(report, MutationReport::PerObject { written: 1, skipped: 0 });
    assert_eq!(tracer.evaluate(&accessor, &ctx, &world), vec![cow]);

    let types: Vec<&str> = tracer
        .buffer()
        .records_for_firing(firing)
        .iter()
        .map(|r| r.event_type())
        .collect();
    assert_eq!(
        types,
        vec!["firing-start", "evaluated", "deferred", "mutated", "evaluated"]
    );

    let last = tracer.buffer().recent(1)[0];
    assert_eq!(
        last.event,
        TraceEvent::Evaluated {
            expression: "the target of the entity".to_string(),
            path: AccessPath::PerObject(GateDecision::Deferred),
            results: vec![cow],
        }
    );
}

#[test]
fn access_only_config_skips_firing_boundaries() {
    let mut world = World::new();
    let wolf = world.spawn(EntityKind::Wolf);
    let accessor = PropertyAccessor::new(None, SourceResolver::implicit()).unwrap();
    let mut tracer = Tracer::new(ObservabilityConfig::debug().tracer_config());
    let mut ctx = EventContext::entity_target(wolf, None);

    tracer.begin_firing(&ctx);
    tracer.defer(&mut ctx);
    let _ = tracer.mutate(&accessor, &mut ctx, &mut world, None, ChangeMode::Reset);

    assert_eq!(tracer.buffer().len(), 1);
    assert!(tracer.buffer().iter().all(|r| r.event.is_access_event()));
}
