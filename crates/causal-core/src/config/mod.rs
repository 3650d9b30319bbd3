//! Configuration, loadable from TOML. Every section falls back to defaults.

mod cognition_config;
pub mod defaults;
mod discovery_config;
mod estimation_config;
mod graph_config;
mod intervention_config;
mod observability_config;

pub use cognition_config::{BackendKind, CognitionConfig};
pub use discovery_config::DiscoveryConfig;
pub use estimation_config::EstimationConfig;
pub use graph_config::{DSeparationMode, GraphConfig};
pub use intervention_config::{InterventionConfig, PropagationMode};
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{CausalError, CausalResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalConfig {
    pub graph: GraphConfig,
    pub discovery: DiscoveryConfig,
    pub estimation: EstimationConfig,
    pub intervention: InterventionConfig,
    pub cognition: CognitionConfig,
    pub observability: ObservabilityConfig,
}

impl CausalConfig {
    /// Parse configuration from a TOML string. Missing sections and fields keep defaults.
    pub fn from_toml(input: &str) -> CausalResult<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values outside their meaningful ranges.
    pub fn validate(&self) -> CausalResult<()> {
        let unit_fields = [
            ("discovery.correlation_threshold", self.discovery.correlation_threshold),
            ("discovery.edge_confidence", self.discovery.edge_confidence),
            ("intervention.effect_confidence", self.intervention.effect_confidence),
            (
                "intervention.counterfactual_probability",
                self.intervention.counterfactual_probability,
            ),
            ("cognition.necessity_confidence", self.cognition.necessity_confidence),
            ("cognition.sufficiency_confidence", self.cognition.sufficiency_confidence),
        ];
        for (name, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(CausalError::ConfigError {
                    reason: format!("{name} = {value} is outside [0, 1]"),
                });
            }
        }
        if self.discovery.min_pair_samples < 2 {
            return Err(CausalError::ConfigError {
                reason: "discovery.min_pair_samples must be at least 2".to_string(),
            });
        }
        if self.graph.max_paths == 0 {
            return Err(CausalError::ConfigError {
                reason: "graph.max_paths must be positive".to_string(),
            });
        }
        Ok(())
    }
}
