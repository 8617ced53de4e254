//! End-to-end scenarios through the session facade and the JSON store.

use tempfile::TempDir;

use crate::error::ActionError;
use crate::event::{Combatant, Event};
use crate::state::State;
use crate::store::{JsonStore, Store, StoreError};

use super::helpers::{
    count_kind, last_heal, long_script, run_script, scripted_session, seeded_session, state_with,
};

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn rest_scenario() {
    let mut session = scripted_session(state_with(1, 80, 3), []);

    let events = session.rest(2).unwrap();

    assert_eq!(session.state().player.sp, 1);
    assert_eq!(session.state().player.hp, 100);
    assert_eq!(
        events,
        vec![Event::SpSpent { amount: 2 }, Event::HpRestored { amount: 50 }]
    );
}

#[test]
fn veteran_one_shots_goblin() {
    // Hunt roll 0 picks the goblin; minimum damage at level 10 is 11.
    let mut session = scripted_session(state_with(10, 100, 10), [0]);

    let events = session.hunt(0).unwrap();

    assert_eq!(session.state().player.hp, 100);
    let hits: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, Event::DamageDealt { .. }))
        .collect();
    assert_eq!(hits.len(), 1);
    assert!(matches!(
        hits[0],
        Event::DamageDealt {
            source: Combatant::Player,
            amount: 11,
            hp_left: 0,
            ..
        }
    ));
}

#[test]
fn hunt_then_level_up_then_rest() {
    // Start 1 XP short of level 2, hunt a goblin, then rest.
    let mut state = state_with(1, 60, 10);
    state.player.xp = 99;
    let mut session = scripted_session(state, [0]);

    let hunt = session.hunt(0).unwrap();
    assert_eq!(count_kind(&[hunt.clone()], "level_up"), 1);
    assert_eq!(session.state().player.level, 2);
    assert_eq!(session.state().player.max_hp, 110);
    // Goblin fight at minimum rolls: 3 damage taken, then the level-up heals 10.
    assert_eq!(session.state().player.hp, 67);

    let rest = session.rest(1).unwrap();
    assert_eq!(last_heal(&rest), Some(25));
    assert_eq!(session.state().player.hp, 92);
}

#[test]
fn downed_player_recovers_by_resting() {
    let mut session = scripted_session(state_with(1, 0, 5), []);

    assert_eq!(session.explore(), Err(ActionError::PlayerDown));
    assert_eq!(session.hunt(0), Err(ActionError::PlayerDown));
    session.rest(1).unwrap();
    assert!(session.state().player.is_alive());
    session.explore().unwrap();
}

#[test]
fn long_run_produces_every_kind_of_outcome() {
    let mut session = seeded_session(2024);
    let log = run_script(&mut session, &long_script());

    for kind in ["encounter_started", "exploration_result", "sp_spent", "hp_restored"] {
        assert!(count_kind(&log, kind) > 0, "no {kind} events");
    }
    assert!(session.state().meta.command_count > 0);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn session_survives_save_and_load() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path().join("grimoire.json"));

    let mut session = seeded_session(5);
    run_script(&mut session, &long_script()[..40]);
    store.save(session.state()).unwrap();

    let report = store.load();
    assert!(report.warning.is_none());
    assert_eq!(&report.state, session.state());
}

#[test]
fn corrupt_save_starts_new_game_and_next_save_is_clean() {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path().join("grimoire.json"));
    std::fs::write(store.path(), b"\xff\x01garbage").unwrap();

    let report = store.load();
    let Some(StoreError::Corrupt { backup, .. }) = &report.warning else {
        panic!("expected corrupt warning, got {:?}", report.warning);
    };
    assert_eq!(report.state, State::default());

    store.save(&report.state).unwrap();
    assert_eq!(std::fs::read(backup).unwrap(), b"\xff\x01garbage");
    let again = store.load();
    assert!(again.warning.is_none());
}
