//! Integration tests for the entity kind taxonomy

use sightline_foundation::{EntityKind, Type};

#[test]
fn every_kind_is_an_entity() {
    for kind in EntityKind::ALL {
        assert!(kind.is_a(EntityKind::Entity), "{kind}");
    }
}

#[test]
fn creatures_are_living() {
    for kind in EntityKind::ALL {
        if kind.is_creature() {
            assert!(kind.is_living(), "{kind}");
        }
    }
}

#[test]
fn names_round_trip_through_from_str() {
    for kind in EntityKind::ALL {
        assert_eq!(kind.name().parse::<EntityKind>(), Ok(kind));
    }
    assert_eq!("Experience-Orb".parse::<EntityKind>(), Ok(EntityKind::ExperienceOrb));
    assert_eq!("living_entity".parse::<EntityKind>(), Ok(EntityKind::LivingEntity));
    assert!("dragon".parse::<EntityKind>().is_err());
}

#[test]
fn entity_types_are_covariant() {
    let living = Type::Entity(EntityKind::LivingEntity);
    assert!(living.accepts(&Type::Entity(EntityKind::Zombie)));
    assert!(living.accepts(&Type::Entity(EntityKind::Player)));
    assert!(!living.accepts(&Type::Entity(EntityKind::Arrow)));
    assert!(!living.accepts(&Type::Kind));
}
