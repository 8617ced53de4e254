//! Cross-module test suites.
//!
//! - `determinism.rs`: seeded replays produce identical runs
//! - `integration.rs`: end-to-end scenarios through the session and the store
//! - `properties.rs`: proptest checks of rules that hold for all inputs
//! - `helpers.rs`: state builders and command scripts

mod helpers;
mod integration;
