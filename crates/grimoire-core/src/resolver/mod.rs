//! Resolvers turn a request into state mutations plus the events describing them.
//!
//! Handlers in [`crate::action`] validate input and then hand off here:
//!
//! - [`CombatResolver`]: runs a fight to completion against one enemy template
//! - [`progression`]: converts XP grants into level-ups
//!
//! # Invariants
//!
//! - Resolvers MUST be deterministic given the same state and randomness stream
//! - Resolvers consume randomness in a fixed order so scripted replays line up
//! - Every loop terminates: each attack deals at least 1 damage

mod combat;
pub mod progression;

pub use combat::{CombatResolver, CombatResult, Outcome};
pub use progression::{grant_xp, xp_to_next};
