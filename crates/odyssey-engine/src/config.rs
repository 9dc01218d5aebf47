//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the session RNG. Two sessions with the same seed and the
    /// same inputs play out identically.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl GameConfig {
    /// Default configuration with a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_is_stable() {
        assert_eq!(GameConfig::default().seed, 42);
    }

    #[test]
    fn with_seed_overrides() {
        assert_eq!(GameConfig::with_seed(7).seed, 7);
    }
}
