//! Player action handlers.
//!
//! Each handler follows the same shape:
//! 1. Validate preconditions, returning an [`ActionError`] with nothing changed
//! 2. Mutate [`State`], delegating fights to
//!    [`CombatResolver`](crate::resolver::CombatResolver) and XP to [`grant_xp`]
//! 3. Return the ordered [`Events`] describing the mutation
//!
//! # Available Actions
//!
//! - [`explore`]: roll on the exploration table
//! - [`hunt`]: spend SP to pick a fight, optionally staking extra SP
//! - [`rest`]: convert SP into HP
//! - [`use_item`]: consume an item for its effect

mod encounter;
mod explore;
mod hunt;
mod rest;
mod use_item;

pub use encounter::{choose_enemy, encounter_weights};
pub use explore::{explore, Discovery};
pub use hunt::{hunt, staked_reward};
pub use rest::rest;
pub use use_item::use_item;

use crate::error::{ActionError, ActionResult};
use crate::event::{Event, Events};
use crate::resolver::grant_xp;
use crate::state::{Player, State};

/// Rejects actions that need a conscious player.
fn ensure_alive(player: &Player) -> ActionResult<()> {
    if player.is_alive() {
        Ok(())
    } else {
        Err(ActionError::PlayerDown)
    }
}

/// Pays out a victory: XP (with level-ups), then gold, then one item per drop.
fn claim_rewards(state: &mut State, xp: u32, gold: u32, loot: &[&'static str]) -> Events {
    let player = &mut state.player;
    let mut events = grant_xp(player, xp);

    player.gold = player.gold.saturating_add(gold);
    events.push(Event::GoldGained { amount: gold });

    for item_id in loot {
        player.inventory.add(item_id, 1);
        events.push(Event::item_added(item_id));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_alive_rejects_zero_hp() {
        let mut player = Player::default();
        assert!(ensure_alive(&player).is_ok());
        player.hp = 0;
        assert_eq!(ensure_alive(&player), Err(ActionError::PlayerDown));
    }

    #[test]
    fn rewards_apply_in_order() {
        let mut state = State::default();
        let events = claim_rewards(&mut state, 5, 3, &["meat", "meat"]);

        assert_eq!(state.player.xp, 5);
        assert_eq!(state.player.gold, 53);
        assert_eq!(state.player.inventory.count("meat"), 2);
        assert_eq!(
            events,
            vec![
                Event::XpGained { amount: 5 },
                Event::GoldGained { amount: 3 },
                Event::item_added("meat"),
                Event::item_added("meat"),
            ]
        );
    }
}
