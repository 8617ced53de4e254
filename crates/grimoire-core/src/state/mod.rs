//! Game state: the single mutable root every handler works on.
//!
//! - [`State`]: root record, owned by the caller for the whole process
//! - [`Player`]: character stats and inventory
//! - [`Meta`]: location and bookkeeping counters
//!
//! # Example
//!
//! ```
//! use grimoire_core::state::State;
//!
//! let state = State::default();
//! assert_eq!(state.player.name, "Traveller");
//! assert_eq!(state.player.hp, 100);
//! assert_eq!(state.player.inventory.count("torch"), 1);
//! ```

pub mod player;

use serde::{Deserialize, Serialize};

pub use player::Player;

// =============================================================================
// Rule Constants
// =============================================================================

/// Max HP of a fresh character.
pub const DEFAULT_MAX_HP: u32 = 100;

/// SP every hunt costs before any stake.
pub const HUNT_BASE_SP: u32 = 1;

/// Largest extra SP a hunt will accept; larger stakes are clamped.
pub const HUNT_EXTRA_SP_MAX: u32 = 5;

/// HP restored per SP spent resting.
pub const REST_HP_PER_SP: u32 = 25;

/// XP needed per level; the threshold for level `L` is `L * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u32 = 100;

/// Max HP gained on each level-up.
pub const LEVEL_UP_MAX_HP_GAIN: u32 = 10;

/// HP healed on each level-up, clamped to the new max.
pub const LEVEL_UP_HEAL: u32 = 10;

// =============================================================================
// State
// =============================================================================

/// Root game state. [`State::default`] is the canonical new game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// The player character.
    pub player: Player,
    /// Location and counters.
    pub meta: Meta,
}

impl State {
    /// Repairs values that may arrive out of range from storage.
    ///
    /// Floors level at 1 and clamps HP into `[0, max_hp]`. Inventory keys are
    /// already canonical once deserialized.
    pub fn sanitize(&mut self) {
        self.player.level = self.player.level.max(1);
        self.player.clamp_hp();
    }
}

/// Location and bookkeeping counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Current location name.
    pub location: String,
    /// Quests completed so far.
    #[serde(default)]
    pub quests_completed: u32,
    /// Explore and hunt commands issued.
    #[serde(default)]
    pub command_count: u64,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            location: "Starting Village".to_string(),
            quests_completed: 0,
            command_count: 0,
        }
    }
}
