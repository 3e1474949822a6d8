//! Shared types for zoomtrack.
//!
//! Everything that crosses the boundary between the race engine and a
//! presentation layer lives here: the animal catalog, bet denominations,
//! race phase and outcome, session statistics, the leaderboard projection,
//! and the action/event vocabulary.

mod actions;
pub mod race;
mod seed;

pub use actions::{Action, Event};
pub use seed::Seed;
