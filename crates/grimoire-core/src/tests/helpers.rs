//! Test helper functions for building players, sessions and command scripts.

use crate::event::{Event, Events};
use crate::rng::{ScriptedRng, SeededRng};
use crate::session::Session;
use crate::state::State;

// =============================================================================
// State Setup
// =============================================================================

/// New-game state with the given level, HP and SP.
pub fn state_with(level: u32, hp: u32, sp: u32) -> State {
    let mut state = State::default();
    state.player.level = level;
    state.player.hp = hp;
    state.player.sp = sp;
    state
}

/// Session on a new game with a seeded generator.
pub fn seeded_session(seed: u64) -> Session<SeededRng> {
    Session::new(State::default(), SeededRng::from_seed(seed))
}

/// Session on `state` replaying `ints`, with every float draw at `0.0`.
pub fn scripted_session(state: State, ints: impl IntoIterator<Item = u32>) -> Session<ScriptedRng> {
    Session::new(state, ScriptedRng::ints(ints))
}

// =============================================================================
// Command Scripts
// =============================================================================

/// A front-end command, as a test script step.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    Explore,
    Hunt(i32),
    Rest(i32),
    UsePotion,
}

/// A mixed script long enough to reach combat, level-ups and failures.
pub fn long_script() -> Vec<Step> {
    let cycle = [
        Step::Explore,
        Step::Explore,
        Step::Hunt(0),
        Step::Rest(1),
        Step::Hunt(2),
        Step::UsePotion,
        Step::Explore,
        Step::Rest(2),
    ];
    cycle.iter().copied().cycle().take(200).collect()
}

/// Runs `steps`, recording every command's events. Failed commands record
/// an empty list.
pub fn run_script<R: crate::rng::Randomness>(session: &mut Session<R>, steps: &[Step]) -> Vec<Events> {
    steps
        .iter()
        .map(|step| {
            let result = match *step {
                Step::Explore => session.explore(),
                Step::Hunt(extra) => session.hunt(extra),
                Step::Rest(sp) => session.rest(sp),
                Step::UsePotion => session.use_item("healing_potion"),
            };
            result.unwrap_or_default()
        })
        .collect()
}

/// Counts events of one kind across a whole run.
pub fn count_kind(log: &[Events], kind: &str) -> usize {
    log.iter().flatten().filter(|event| event.kind() == kind).count()
}

/// Checks the state invariants that must hold after every command.
pub fn assert_invariants(state: &State) {
    let player = &state.player;
    assert!(player.hp <= player.max_hp, "hp {} > max {}", player.hp, player.max_hp);
    assert!(player.level >= 1);
    assert!(player.xp < crate::resolver::xp_to_next(player.level));
    for (id, count) in player.inventory.iter() {
        assert!(count > 0, "zero stack for {id}");
        assert_eq!(crate::inventory::normalize_item_id(id), id);
    }
}

/// Returns the last `HpRestored` amount, if any.
pub fn last_heal(events: &[Event]) -> Option<u32> {
    events.iter().rev().find_map(|event| match event {
        Event::HpRestored { amount } => Some(*amount),
        _ => None,
    })
}
