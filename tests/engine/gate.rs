//! Integration tests for the event-time gate

use sightline_engine::{EventContext, EventKind, EventTimeGate, GateDecision, TimeIndex};
use sightline_foundation::EntityId;

fn gate() -> EventTimeGate {
    EventTimeGate::new(EventKind::EntityTarget)
}

fn target_event() -> EventContext {
    EventContext::entity_target(EntityId::new(0, 1), Some(EntityId::new(1, 1)))
}

#[test]
fn first_failing_condition_is_reported() {
    let mut ctx = target_event();
    ctx.mark_deferred();

    // Every condition fails; time is checked first.
    let tick = EventContext::new(EventKind::Tick, None);
    assert_eq!(gate().decide(&tick, TimeIndex::BEFORE, false), GateDecision::BeforeEvent);
    assert_eq!(gate().decide(&tick, TimeIndex::NOW, false), GateDecision::NoDirectSlot);
    assert_eq!(gate().decide(&ctx, TimeIndex::NOW, false), GateDecision::ExplicitSource);
    assert_eq!(gate().decide(&ctx, TimeIndex::NOW, true), GateDecision::Deferred);
}

#[test]
fn future_time_still_opens() {
    assert!(gate().can_use_direct_slot(&target_event(), TimeIndex::AFTER, true));
}

#[test]
fn empty_slot_still_counts_as_present() {
    let ctx = EventContext::entity_target(EntityId::new(0, 1), None);
    assert_eq!(gate().decide(&ctx, TimeIndex::NOW, true), GateDecision::Open);
}

#[test]
fn slot_of_another_event_kind_is_not_used() {
    let damage = EventContext::new(EventKind::EntityDamage, Some(EntityId::new(0, 1)))
        .with_slot(Some(EntityId::new(1, 1)));
    assert_eq!(gate().decide(&damage, TimeIndex::NOW, true), GateDecision::NoDirectSlot);
}

#[test]
fn deferral_is_sticky() {
    let mut ctx = target_event();
    assert!(!ctx.is_deferred());
    ctx.mark_deferred();
    ctx.mark_deferred();
    assert!(ctx.is_deferred());
    assert!(!gate().can_use_direct_slot(&ctx, TimeIndex::NOW, true));
}
