//! Resting converts SP into HP.

use crate::error::{ActionError, ActionResult};
use crate::event::{Event, Events};
use crate::state::{State, REST_HP_PER_SP};

/// Spends `sp` SP to restore `sp * REST_HP_PER_SP` HP, clamped to max HP.
///
/// The [`Event::HpRestored`] amount is the unclamped gain.
///
/// # Errors
///
/// - [`ActionError::InvalidInput`] if `sp` is not positive
/// - [`ActionError::InsufficientResource`] if the player has fewer than `sp` SP
pub fn rest(state: &mut State, sp: i32) -> ActionResult<Events> {
    let spend = match u32::try_from(sp) {
        Ok(spend) if spend > 0 => spend,
        _ => return Err(ActionError::InvalidInput(format!("rest needs a positive SP amount, got {sp}"))),
    };

    let player = &mut state.player;
    if player.sp < spend {
        return Err(ActionError::InsufficientResource {
            needed: spend,
            available: player.sp,
        });
    }

    let gain = spend.saturating_mul(REST_HP_PER_SP);
    player.sp -= spend;
    player.heal(gain);
    tracing::debug!(spend, gain, hp = player.hp, "rest");

    Ok(vec![
        Event::SpSpent { amount: spend },
        Event::HpRestored { amount: gain },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_scenario_clamps_hp() {
        let mut state = State::default();
        state.player.hp = 80;
        state.player.sp = 3;

        let events = rest(&mut state, 2).unwrap();

        assert_eq!(state.player.sp, 1);
        assert_eq!(state.player.hp, 100);
        assert_eq!(
            events,
            vec![Event::SpSpent { amount: 2 }, Event::HpRestored { amount: 50 }]
        );
    }

    #[test]
    fn rejects_non_positive_amounts() {
        let mut state = State::default();
        for sp in [0, -3] {
            assert!(matches!(
                rest(&mut state, sp),
                Err(ActionError::InvalidInput(_))
            ));
        }
        assert_eq!(state, State::default());
    }

    #[test]
    fn rejects_more_than_available() {
        let mut state = State::default();
        state.player.hp = 10;
        let before = state.clone();

        let err = rest(&mut state, 11).unwrap_err();

        assert_eq!(
            err,
            ActionError::InsufficientResource {
                needed: 11,
                available: 10
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn downed_player_may_rest() {
        let mut state = State::default();
        state.player.hp = 0;
        rest(&mut state, 1).unwrap();
        assert_eq!(state.player.hp, 25);
    }
}
