use serde::{Deserialize, Serialize};

use super::defaults;

/// How an intervention's effect reaches descendants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagationMode {
    /// Only direct edges carry effect; indirect descendants report 0.0.
    #[default]
    DirectOnly,
    /// Indirect descendants get the strongest product of strengths over paths.
    StrongestPath,
}

/// Intervention and counterfactual configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterventionConfig {
    pub propagation: PropagationMode,
    /// Confidence reported for every predicted effect.
    pub effect_confidence: f64,
    /// Placeholder probability attached to counterfactual scenarios.
    pub counterfactual_probability: f64,
}

impl Default for InterventionConfig {
    fn default() -> Self {
        Self {
            propagation: PropagationMode::default(),
            effect_confidence: defaults::DEFAULT_INTERVENTION_CONFIDENCE,
            counterfactual_probability: defaults::DEFAULT_COUNTERFACTUAL_PROBABILITY,
        }
    }
}
