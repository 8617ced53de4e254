//! Hunting: pay SP to pick a fight, optionally staking extra SP for a
//! tougher enemy and a bigger payout.

use super::{choose_enemy, claim_rewards, ensure_alive};
use crate::error::{ActionError, ActionResult};
use crate::event::{Event, Events};
use crate::resolver::CombatResolver;
use crate::rng::Randomness;
use crate::state::{State, HUNT_BASE_SP, HUNT_EXTRA_SP_MAX};

/// Scales a base reward by `1 + 0.25 * stake`, truncating toward zero.
///
/// ```
/// use grimoire_core::action::staked_reward;
///
/// assert_eq!(staked_reward(5, 0), 5);
/// assert_eq!(staked_reward(5, 2), 7);
/// assert_eq!(staked_reward(3, 1), 3);
/// ```
#[must_use]
pub fn staked_reward(base: u32, stake: u32) -> u32 {
    let scaled = u64::from(base) * (4 + u64::from(stake)) / 4;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Hunts for a fight.
///
/// `extra_sp` is clamped into `[0, HUNT_EXTRA_SP_MAX]`. The hunt costs
/// `HUNT_BASE_SP + stake` SP, which is spent before the fight whatever its
/// result. A win pays XP and gold scaled by [`staked_reward`]; loot is never
/// scaled.
///
/// # Errors
///
/// - [`ActionError::PlayerDown`] if the player has 0 HP
/// - [`ActionError::InsufficientResource`] if SP is below the cost
pub fn hunt<R: Randomness + ?Sized>(
    state: &mut State,
    extra_sp: i32,
    rng: &mut R,
) -> ActionResult<Events> {
    ensure_alive(&state.player)?;

    let stake = u32::try_from(extra_sp).unwrap_or(0).min(HUNT_EXTRA_SP_MAX);
    let cost = HUNT_BASE_SP + stake;
    if state.player.sp < cost {
        return Err(ActionError::InsufficientResource {
            needed: cost,
            available: state.player.sp,
        });
    }

    state.player.sp -= cost;
    state.meta.command_count += 1;
    tracing::debug!(stake, cost, sp_left = state.player.sp, "hunt");

    let mut events = vec![Event::SpSpent { amount: cost }];
    let enemy = choose_enemy(state.player.level, stake, rng);
    let (result, fight) = CombatResolver::new().resolve(&mut state.player, enemy, rng);
    events.extend(fight);

    if result.is_win() {
        let xp = staked_reward(result.xp, stake);
        let gold = staked_reward(result.gold, stake);
        events.extend(claim_rewards(state, xp, gold, &result.loot));
        revive_after_win(state, &mut events);
    }

    Ok(events)
}

/// A won hunt never leaves the player at 0 HP.
fn revive_after_win(state: &mut State, events: &mut Events) {
    if state.player.hp == 0 {
        state.player.hp = 1;
        events.push(Event::HpRestored { amount: 1 });
    }
}
