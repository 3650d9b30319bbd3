use serde::{Deserialize, Serialize};

use super::defaults;

/// Statistical discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Cumulative observations required before any edge is discovered.
    pub min_observations: usize,
    /// Edges are added for pairs with |r| strictly above this.
    pub correlation_threshold: f64,
    /// Confidence assigned to discovered edges.
    pub edge_confidence: f64,
    /// Minimum co-occurring numeric samples for a pair to be evaluated.
    pub min_pair_samples: usize,
    /// Suffix of the companion key carrying a variable's timestamp.
    pub time_suffix: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            min_observations: defaults::DEFAULT_MIN_OBSERVATIONS,
            correlation_threshold: defaults::DEFAULT_CORRELATION_THRESHOLD,
            edge_confidence: defaults::DEFAULT_DISCOVERED_EDGE_CONFIDENCE,
            min_pair_samples: defaults::DEFAULT_MIN_PAIR_SAMPLES,
            time_suffix: defaults::DEFAULT_TIME_SUFFIX.to_string(),
        }
    }
}
