//! Configuration for the Engram HRR engine.

use serde::{Deserialize, Serialize};

/// Main configuration for the Engram engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HRR engine configuration.
    pub engine: EngineConfig,

    /// Query/cleanup configuration.
    pub query: QueryConfig,
}

/// HRR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Dimension of all concept vectors.
    ///
    /// HRR recovery quality degrades with noise; 1024 is a practical
    /// minimum, 2048 works cleanly for small knowledge bases.
    /// Default: 2048.
    pub dimension: usize,

    /// Random seed for reproducible concept generation.
    /// Default: None (random).
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dimension: 2048,
            seed: None,
        }
    }
}

/// Query/cleanup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Minimum similarity score for a candidate to be surfaced in
    /// query output. Display filter only; the best match is always
    /// chosen over the full candidate set.
    /// Default: 0.1.
    pub score_threshold: f64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            score_threshold: 0.1,
        }
    }
}
