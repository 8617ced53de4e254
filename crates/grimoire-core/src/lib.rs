//! # Grimoire Core
//!
//! Deterministic rules engine for the Grimoire text adventure.
//!
//! Action handlers mutate one [`State`] and return the ordered [`Event`]s
//! describing what happened. Chance always comes from a caller-supplied
//! [`Randomness`] source, so a seeded or scripted source replays exactly.
//!
//! ## Layout
//!
//! - **Data**: [`state`], [`inventory`], [`catalog`]
//! - **Rules**: [`resolver`] (combat, XP), [`action`] (explore, hunt, rest, use)
//! - **Output**: [`event`], [`error`]
//! - **Boundaries**: [`rng`], [`session`], [`store`]
//!
//! ## Usage
//!
//! ```
//! use grimoire_core::{ScriptedRng, Session, State};
//!
//! let mut session = Session::new(State::default(), ScriptedRng::ints([99]));
//! let events = session.explore().unwrap();
//! assert_eq!(events[0].kind(), "exploration_result");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod catalog;
pub mod error;
pub mod event;
pub mod inventory;
pub mod resolver;
pub mod rng;
pub mod session;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{ActionError, ActionResult};
pub use event::{Event, Events};
pub use inventory::Inventory;
pub use rng::{Randomness, ScriptedRng, SeededRng};
pub use session::Session;
pub use state::{Player, State};
pub use store::{JsonStore, LoadReport, Store, StoreError};
