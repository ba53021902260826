//! Entity kind taxonomy.
//!
//! Kinds form a single-parent tree rooted at [`EntityKind::Entity`]. Type
//! filters and change-type checks are answered by walking this tree.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of an entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntityKind {
    /// Root of the hierarchy; every entity is an `Entity`.
    Entity,
    /// Anything with health.
    LivingEntity,
    /// Living entities that can hold a target of their own.
    Creature,
    /// Hostile creatures.
    Monster,
    /// Passive or tameable creatures.
    Animal,
    /// A zombie.
    Zombie,
    /// A skeleton.
    Skeleton,
    /// A creeper.
    Creeper,
    /// A wolf.
    Wolf,
    /// A cow.
    Cow,
    /// A connected player. Living, but not a creature.
    Player,
    /// An experience orb.
    ExperienceOrb,
    /// A dropped item.
    Item,
    /// A fired arrow.
    Arrow,
}

impl EntityKind {
    /// Every kind, parents before children.
    pub const ALL: [EntityKind; 14] = [
        Self::Entity,
        Self::LivingEntity,
        Self::Creature,
        Self::Monster,
        Self::Animal,
        Self::Zombie,
        Self::Skeleton,
        Self::Creeper,
        Self::Wolf,
        Self::Cow,
        Self::Player,
        Self::ExperienceOrb,
        Self::Item,
        Self::Arrow,
    ];

    /// Returns the direct parent kind, or `None` for the root.
    #[must_use]
    pub const fn parent(self) -> Option<EntityKind> {
        match self {
            Self::Entity => None,
            Self::LivingEntity | Self::ExperienceOrb | Self::Item | Self::Arrow => {
                Some(Self::Entity)
            }
            Self::Creature | Self::Player => Some(Self::LivingEntity),
            Self::Monster | Self::Animal => Some(Self::Creature),
            Self::Zombie | Self::Skeleton | Self::Creeper => Some(Self::Monster),
            Self::Wolf | Self::Cow => Some(Self::Animal),
        }
    }

    /// Returns true if `self` is `other` or a descendant of it.
    #[must_use]
    pub fn is_a(self, other: EntityKind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Returns true for kinds under [`EntityKind::LivingEntity`].
    #[must_use]
    pub fn is_living(self) -> bool {
        self.is_a(Self::LivingEntity)
    }

    /// Returns true for kinds under [`EntityKind::Creature`].
    #[must_use]
    pub fn is_creature(self) -> bool {
        self.is_a(Self::Creature)
    }

    /// Script-facing name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::LivingEntity => "living entity",
            Self::Creature => "creature",
            Self::Monster => "monster",
            Self::Animal => "animal",
            Self::Zombie => "zombie",
            Self::Skeleton => "skeleton",
            Self::Creeper => "creeper",
            Self::Wolf => "wolf",
            Self::Cow => "cow",
            Self::Player => "player",
            Self::ExperienceOrb => "experience orb",
            Self::Item => "item",
            Self::Arrow => "arrow",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a kind name does not match any known kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown entity kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
