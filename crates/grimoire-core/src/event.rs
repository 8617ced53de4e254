//! Events emitted by action handlers.
//!
//! Each handler call returns an ordered, append-only list of [`Event`]s
//! describing what happened. Events are render-only: the engine never reads
//! them back to make decisions.
//!
//! [`Event`] is `#[non_exhaustive]`, so renderers outside this crate keep a
//! fallback arm and survive new variants.
//!
//! # Example
//!
//! ```
//! use grimoire_core::event::{Combatant, Event};
//!
//! let hit = Event::DamageDealt {
//!     source: Combatant::Player,
//!     target: Combatant::enemy("goblin"),
//!     amount: 3,
//!     hp_left: 5,
//! };
//! assert_eq!(hit.kind(), "damage_dealt");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered events produced by one action.
pub type Events = Vec<Event>;

// =============================================================================
// Supporting Types
// =============================================================================

/// A side in combat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combatant {
    /// The player character.
    Player,
    /// An enemy, by template id.
    Enemy(String),
}

impl Combatant {
    /// Creates an enemy combatant.
    #[must_use]
    pub fn enemy(id: &str) -> Self {
        Self::Enemy(id.to_string())
    }

    /// Returns true for [`Combatant::Player`].
    #[must_use]
    pub const fn is_player(&self) -> bool {
        matches!(self, Self::Player)
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Enemy(id) => write!(f, "{id}"),
        }
    }
}

/// Non-combat outcome of an exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorationKind {
    /// Gold and an item.
    Treasure,
    /// A single item.
    Item,
    /// A handful of gold.
    Gold,
    /// Nothing happened.
    Nothing,
}

impl ExplorationKind {
    /// Returns the wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Treasure => "treasure",
            Self::Item => "item",
            Self::Gold => "gold",
            Self::Nothing => "nothing",
        }
    }
}

impl fmt::Display for ExplorationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Event
// =============================================================================

/// A single observable change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Event {
    /// Combat began against an enemy.
    EncounterStarted {
        /// Enemy template id
        enemy_id: String,
    },
    /// One side hit the other.
    DamageDealt {
        /// Attacker
        source: Combatant,
        /// Defender
        target: Combatant,
        /// Damage dealt
        amount: u32,
        /// Defender HP after the hit
        hp_left: u32,
    },
    /// The enemy was defeated.
    EnemyDefeated {
        /// Enemy template id
        enemy_id: String,
        /// Base XP reward
        xp: u32,
        /// Base gold reward
        gold: u32,
    },
    /// The player reached 0 HP.
    PlayerDefeated,
    /// XP was awarded.
    XpGained {
        /// XP added
        amount: u32,
    },
    /// The player gained a level.
    LevelUp {
        /// Level after the increase
        new_level: u32,
        /// Max HP after the increase
        new_max_hp: u32,
    },
    /// Items entered the inventory.
    ItemAdded {
        /// Canonical item id
        item_id: String,
        /// Quantity added
        count: u32,
    },
    /// Items left the inventory.
    ItemRemoved {
        /// Canonical item id
        item_id: String,
        /// Quantity removed
        count: u32,
    },
    /// Gold was gained.
    GoldGained {
        /// Gold added
        amount: u32,
    },
    /// SP was spent.
    SpSpent {
        /// SP removed
        amount: u32,
    },
    /// HP was restored. Carries the raw gain before clamping to max HP.
    HpRestored {
        /// HP added before clamping
        amount: u32,
    },
    /// An exploration resolved without combat.
    ExplorationResult {
        /// What was found
        kind: ExplorationKind,
    },
}

impl Event {
    /// Returns the stable snake-case name of this variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EncounterStarted { .. } => "encounter_started",
            Self::DamageDealt { .. } => "damage_dealt",
            Self::EnemyDefeated { .. } => "enemy_defeated",
            Self::PlayerDefeated => "player_defeated",
            Self::XpGained { .. } => "xp_gained",
            Self::LevelUp { .. } => "level_up",
            Self::ItemAdded { .. } => "item_added",
            Self::ItemRemoved { .. } => "item_removed",
            Self::GoldGained { .. } => "gold_gained",
            Self::SpSpent { .. } => "sp_spent",
            Self::HpRestored { .. } => "hp_restored",
            Self::ExplorationResult { .. } => "exploration_result",
        }
    }

    /// Creates an [`Event::ItemAdded`] for a single item.
    #[must_use]
    pub fn item_added(item_id: &str) -> Self {
        Self::ItemAdded {
            item_id: item_id.to_string(),
            count: 1,
        }
    }
}
