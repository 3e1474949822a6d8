//! Race engine for zoomtrack.

pub mod engine;
pub mod rng;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

#[cfg(test)]
mod integration_tests;

pub use engine::{payout_for, Engine, EngineConfig, Snapshot};
pub use rng::RaceRng;
