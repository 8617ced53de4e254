//! Exploration: one percentile roll against a banded outcome table.

use super::{choose_enemy, claim_rewards, ensure_alive};
use crate::error::ActionResult;
use crate::event::{Event, Events, ExplorationKind};
use crate::resolver::CombatResolver;
use crate::rng::{Randomness, Span};
use crate::state::State;

/// Gold found in a treasure cache.
const TREASURE_GOLD: Span = Span::new(100, 500);

/// Gold found lying around.
const LOOSE_GOLD: Span = Span::new(5, 50);

/// Items a treasure cache may hold.
const TREASURE_ITEMS: [&str; 3] = ["healing_potion", "rusty_dagger", "torch"];

/// Items that may simply be found.
const FOUND_ITEMS: [&str; 2] = ["healing_potion", "torch"];

/// Band of the exploration table a roll landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
    /// Rolls 1-2: gold and an item.
    Treasure,
    /// Rolls 3-10: a common item.
    Item,
    /// Rolls 11-30: a little gold.
    Gold,
    /// Rolls 31-50: a fight.
    Encounter,
    /// Rolls 51-100.
    Nothing,
}

impl Discovery {
    /// Maps a percentile roll in `[1, 100]` to its band.
    ///
    /// ```
    /// use grimoire_core::action::Discovery;
    ///
    /// assert_eq!(Discovery::from_roll(2), Discovery::Treasure);
    /// assert_eq!(Discovery::from_roll(31), Discovery::Encounter);
    /// assert_eq!(Discovery::from_roll(100), Discovery::Nothing);
    /// ```
    #[must_use]
    pub const fn from_roll(roll: u32) -> Self {
        match roll {
            0..=2 => Self::Treasure,
            3..=10 => Self::Item,
            11..=30 => Self::Gold,
            31..=50 => Self::Encounter,
            _ => Self::Nothing,
        }
    }
}

/// Explores the current location.
///
/// Draws the roll first, then whatever the band needs: gold then item for
/// treasure, one item pick, one gold amount, or enemy selection followed by
/// combat. An encounter emits the combat events instead of an
/// [`Event::ExplorationResult`].
///
/// # Errors
///
/// [`ActionError::PlayerDown`](crate::error::ActionError::PlayerDown) if the player has 0 HP.
pub fn explore<R: Randomness + ?Sized>(state: &mut State, rng: &mut R) -> ActionResult<Events> {
    ensure_alive(&state.player)?;
    state.meta.command_count += 1;

    let roll = rng.next_int(100) + 1;
    let discovery = Discovery::from_roll(roll);
    tracing::debug!(roll, ?discovery, "explore");

    let player = &mut state.player;
    let mut events = Events::new();
    match discovery {
        Discovery::Treasure => {
            let gold = TREASURE_GOLD.draw(rng);
            let item_id = pick(&TREASURE_ITEMS, rng);
            player.gold = player.gold.saturating_add(gold);
            player.inventory.add(item_id, 1);
            events.push(Event::ExplorationResult {
                kind: ExplorationKind::Treasure,
            });
            events.push(Event::GoldGained { amount: gold });
            events.push(Event::item_added(item_id));
        }
        Discovery::Item => {
            let item_id = pick(&FOUND_ITEMS, rng);
            player.inventory.add(item_id, 1);
            events.push(Event::ExplorationResult {
                kind: ExplorationKind::Item,
            });
            events.push(Event::item_added(item_id));
        }
        Discovery::Gold => {
            let gold = LOOSE_GOLD.draw(rng);
            player.gold = player.gold.saturating_add(gold);
            events.push(Event::ExplorationResult {
                kind: ExplorationKind::Gold,
            });
            events.push(Event::GoldGained { amount: gold });
        }
        Discovery::Encounter => {
            let enemy = choose_enemy(player.level, 0, rng);
            let (result, fight) = CombatResolver::new().resolve(player, enemy, rng);
            events.extend(fight);
            if result.is_win() {
                events.extend(claim_rewards(state, result.xp, result.gold, &result.loot));
            }
        }
        Discovery::Nothing => {
            events.push(Event::ExplorationResult {
                kind: ExplorationKind::Nothing,
            });
        }
    }

    Ok(events)
}

fn pick<R: Randomness + ?Sized>(choices: &[&'static str], rng: &mut R) -> &'static str {
    let len = u32::try_from(choices.len()).unwrap_or(u32::MAX);
    let index = rng.next_int(len) as usize;
    choices.get(index).copied().unwrap_or(choices[0])
}
