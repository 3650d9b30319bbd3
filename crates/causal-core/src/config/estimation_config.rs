use serde::{Deserialize, Serialize};

use super::defaults;

/// Effect estimation and explanation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationConfig {
    /// Stratify on the adjustment set when one is supplied.
    /// When false the adjustment set is accepted but ignored.
    pub backdoor_adjustment: bool,
    /// How many top causes are considered for necessity.
    pub max_necessary_causes: usize,
    /// Contributions above this are sufficient causes.
    pub sufficient_threshold: f64,
    /// Contributions above this (and not sufficient) are contributing factors.
    pub contributing_threshold: f64,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            backdoor_adjustment: defaults::DEFAULT_BACKDOOR_ADJUSTMENT,
            max_necessary_causes: defaults::DEFAULT_MAX_NECESSARY_CAUSES,
            sufficient_threshold: defaults::DEFAULT_SUFFICIENT_THRESHOLD,
            contributing_threshold: defaults::DEFAULT_CONTRIBUTING_THRESHOLD,
        }
    }
}
