//! Action failures.
//!
//! Every handler validates before it mutates, so an [`ActionError`] always
//! means the state and the event list are untouched.

use thiserror::Error;

/// Why an action was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The player has 0 HP.
    #[error("player is down (HP 0)")]
    PlayerDown,

    /// Not enough SP for the requested action.
    #[error("not enough SP (need {needed}, have {available})")]
    InsufficientResource {
        /// SP the action costs
        needed: u32,
        /// SP the player has
        available: u32,
    },

    /// Malformed argument, such as a non-positive rest amount or a blank item id.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The item is not in the inventory.
    #[error("item not in inventory: {0}")]
    ItemNotOwned(String),

    /// The item is not in the catalog.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// The item exists but cannot be used.
    #[error("item has no use effect: {0}")]
    NoUseEffect(String),
}

/// Result alias for action handlers.
pub type ActionResult<T> = Result<T, ActionError>;
