//! The player character.

use serde::{Deserialize, Serialize};

use super::DEFAULT_MAX_HP;
use crate::inventory::Inventory;

/// Player stats and inventory.
///
/// # Invariants
///
/// - `hp <= max_hp`
/// - `level >= 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Display class.
    pub class: String,
    /// Gold carried.
    pub gold: u32,
    /// Current HP; 0 means the player is down.
    pub hp: u32,
    /// HP ceiling.
    pub max_hp: u32,
    /// SP available for hunting and resting.
    pub sp: u32,
    /// Character level, starting at 1.
    pub level: u32,
    /// XP toward the next level; consumed on level-up.
    pub xp: u32,
    /// Stacked items by canonical id.
    #[serde(default)]
    pub inventory: Inventory,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: "Traveller".to_string(),
            class: "Adventurer".to_string(),
            gold: 50,
            hp: DEFAULT_MAX_HP,
            max_hp: DEFAULT_MAX_HP,
            sp: 10,
            level: 1,
            xp: 0,
            inventory: [("torch", 1), ("rusty_dagger", 1)].into_iter().collect(),
        }
    }
}

impl Player {
    /// Returns true while HP is above zero.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Clamps HP down to max HP.
    pub fn clamp_hp(&mut self) {
        self.hp = self.hp.min(self.max_hp);
    }

    /// Adds HP, clamped to max HP.
    pub fn heal(&mut self, amount: u32) {
        self.hp = self.hp.saturating_add(amount);
        self.clamp_hp();
    }
}
