//! Consuming items for their use effect.

use crate::catalog;
use crate::error::{ActionError, ActionResult};
use crate::event::{Event, Events};
use crate::inventory::normalize_item_id;
use crate::rng::Randomness;
use crate::state::State;

/// Uses one unit of `raw_id`.
///
/// The id is normalized first, so `"Healing-Potion"` finds `healing_potion`.
/// HP is drawn before SP; both are applied but only the HP gain is evented.
///
/// # Errors
///
/// Checked in this order:
/// - [`ActionError::InvalidInput`] if the id normalizes to nothing
/// - [`ActionError::ItemNotOwned`] if the inventory has none
/// - [`ActionError::UnknownItem`] if the catalog has no such item
/// - [`ActionError::NoUseEffect`] if the item cannot be used
pub fn use_item<R: Randomness + ?Sized>(
    state: &mut State,
    raw_id: &str,
    rng: &mut R,
) -> ActionResult<Events> {
    let item_id = normalize_item_id(raw_id);
    if item_id.is_empty() {
        return Err(ActionError::InvalidInput("item id is empty".to_string()));
    }

    let player = &mut state.player;
    if !player.inventory.has(&item_id, 1) {
        return Err(ActionError::ItemNotOwned(item_id));
    }
    let Some(item) = catalog::item(&item_id) else {
        return Err(ActionError::UnknownItem(item_id));
    };
    let Some(effect) = item.effect else {
        return Err(ActionError::NoUseEffect(item_id));
    };

    let hp_gain = effect.hp.draw(rng);
    let sp_gain = effect.sp.draw(rng);
    player.heal(hp_gain);
    player.sp = player.sp.saturating_add(sp_gain);
    player.inventory.remove(&item_id, 1);
    tracing::debug!(item = item.id, hp_gain, sp_gain, "item used");

    Ok(vec![
        Event::ItemRemoved {
            item_id,
            count: 1,
        },
        Event::HpRestored { amount: hp_gain },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    fn with_potions(count: u32) -> State {
        let mut state = State::default();
        state.player.inventory.add("healing_potion", count);
        state
    }

    mod effect_tests {
        use super::*;

        #[test]
        fn potion_heals_and_restores_sp() {
            let mut state = with_potions(2);
            state.player.hp = 50;
            let mut rng = ScriptedRng::ints([5, 2]);

            let events = use_item(&mut state, "Healing-Potion", &mut rng).unwrap();

            assert_eq!(state.player.hp, 65);
            assert_eq!(state.player.sp, 13);
            assert_eq!(state.player.inventory.count("healing_potion"), 1);
            assert_eq!(
                events,
                vec![
                    Event::ItemRemoved {
                        item_id: "healing_potion".into(),
                        count: 1
                    },
                    Event::HpRestored { amount: 15 },
                ]
            );
        }

        #[test]
        fn last_unit_removes_the_stack() {
            let mut state = with_potions(1);
            use_item(&mut state, "healing potion", &mut ScriptedRng::minimum()).unwrap();
            assert_eq!(state.player.inventory.count("healing_potion"), 0);
            assert_eq!(state.player.inventory.len(), 2);
        }

        #[test]
        fn event_reports_unclamped_gain() {
            let mut state = with_potions(1);
            let events = use_item(&mut state, "healing_potion", &mut ScriptedRng::minimum()).unwrap();
            assert_eq!(state.player.hp, 100);
            assert_eq!(events[1], Event::HpRestored { amount: 10 });
        }

        #[test]
        fn meat_is_edible() {
            let mut state = State::default();
            state.player.hp = 10;
            state.player.inventory.add("meat", 1);
            use_item(&mut state, "meat", &mut ScriptedRng::minimum()).unwrap();
            assert_eq!(state.player.hp, 50);
            assert_eq!(state.player.sp, 12);
        }
    }

    mod failure_tests {
        use super::*;

        fn rejects(state: &mut State, raw_id: &str) -> ActionError {
            let before = state.clone();
            let err = use_item(state, raw_id, &mut ScriptedRng::minimum()).unwrap_err();
            assert_eq!(*state, before);
            err
        }

        #[test]
        fn blank_id() {
            let err = rejects(&mut State::default(), "  - ");
            assert!(matches!(err, ActionError::InvalidInput(_)));
        }

        #[test]
        fn not_owned() {
            let err = rejects(&mut State::default(), "healing_potion");
            assert_eq!(err, ActionError::ItemNotOwned("healing_potion".into()));
        }

        #[test]
        fn owned_but_not_in_catalog() {
            let mut state = State::default();
            state.player.inventory.add("mystery_box", 1);
            let err = rejects(&mut state, "Mystery Box");
            assert_eq!(err, ActionError::UnknownItem("mystery_box".into()));
        }

        #[test]
        fn no_effect() {
            let err = rejects(&mut State::default(), "torch");
            assert_eq!(err, ActionError::NoUseEffect("torch".into()));
        }

        #[test]
        fn downed_player_may_still_drink() {
            let mut state = with_potions(1);
            state.player.hp = 0;
            use_item(&mut state, "healing_potion", &mut ScriptedRng::minimum()).unwrap();
            assert_eq!(state.player.hp, 10);
        }
    }
}
