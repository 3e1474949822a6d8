//! Test fixtures for the race engine.

use crate::{Engine, EngineConfig};
use commonware_cryptography::{sha256::Sha256, Hasher};
use zoomtrack_types::{race::SessionStats, Seed};

/// Creates a deterministic seed from a small integer.
pub fn create_seed(n: u64) -> Seed {
    let mut hasher = Sha256::new();
    hasher.update(&n.to_be_bytes());
    Seed(hasher.finalize().0)
}

/// Engine configuration over the built-in catalog with zeroed statistics,
/// so assertions can count from zero.
pub fn test_config() -> EngineConfig {
    EngineConfig {
        initial_stats: SessionStats::default(),
        ..EngineConfig::default()
    }
}

/// Creates an engine over [`test_config`] seeded from `n`.
pub fn create_engine(n: u64) -> Engine {
    Engine::new(test_config(), create_seed(n))
}
