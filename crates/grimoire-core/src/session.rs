//! Session facade: one live [`State`] plus the randomness that drives it.
//!
//! `Session` is the command surface for front ends. It owns the state for the
//! life of the process, dispatches each command to its handler in
//! [`crate::action`], and hands back the ordered events for rendering.
//!
//! # Determinism
//!
//! Two sessions built from equal states and equally seeded generators produce
//! identical states and event sequences for the same command sequence.
//!
//! # Example
//!
//! ```
//! use grimoire_core::rng::SeededRng;
//! use grimoire_core::session::Session;
//! use grimoire_core::state::State;
//!
//! let mut session = Session::new(State::default(), SeededRng::from_seed(42));
//!
//! let events = session.rest(1).unwrap();
//! assert_eq!(events.len(), 2);
//! assert_eq!(session.state().player.sp, 9);
//! ```

use std::fmt;

use crate::action;
use crate::error::ActionResult;
use crate::event::Events;
use crate::rng::Randomness;
use crate::state::State;

// =============================================================================
// Session
// =============================================================================

/// A running game: the state being played and its randomness source.
pub struct Session<R: Randomness> {
    state: State,
    rng: R,
}

impl<R: Randomness> fmt::Debug for Session<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<R: Randomness> Session<R> {
    /// Starts a session on `state`, drawing chance from `rng`.
    #[must_use]
    pub fn new(state: State, rng: R) -> Self {
        Self { state, rng }
    }

    /// Read access for status display.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Explores the current location. See [`action::explore`].
    ///
    /// # Errors
    ///
    /// Propagates the handler's [`ActionError`](crate::error::ActionError).
    pub fn explore(&mut self) -> ActionResult<Events> {
        tracing::debug!("dispatch explore");
        action::explore(&mut self.state, &mut self.rng)
    }

    /// Hunts, staking `extra_sp` SP. See [`action::hunt`].
    ///
    /// # Errors
    ///
    /// Propagates the handler's [`ActionError`](crate::error::ActionError).
    pub fn hunt(&mut self, extra_sp: i32) -> ActionResult<Events> {
        tracing::debug!(extra_sp, "dispatch hunt");
        action::hunt(&mut self.state, extra_sp, &mut self.rng)
    }

    /// Rests, spending `sp` SP. See [`action::rest`].
    ///
    /// # Errors
    ///
    /// Propagates the handler's [`ActionError`](crate::error::ActionError).
    pub fn rest(&mut self, sp: i32) -> ActionResult<Events> {
        tracing::debug!(sp, "dispatch rest");
        action::rest(&mut self.state, sp)
    }

    /// Uses one unit of an item. See [`action::use_item`].
    ///
    /// # Errors
    ///
    /// Propagates the handler's [`ActionError`](crate::error::ActionError).
    pub fn use_item(&mut self, item_id: &str) -> ActionResult<Events> {
        tracing::debug!(item_id, "dispatch use");
        action::use_item(&mut self.state, item_id, &mut self.rng)
    }

    /// Replaces the state with a new game. The randomness source carries on.
    pub fn reset(&mut self) {
        tracing::debug!("reset to new game");
        self.state = State::default();
    }

    /// Consumes the session, returning its state and randomness source.
    #[must_use]
    pub fn into_parts(self) -> (State, R) {
        (self.state, self.rng)
    }
}
