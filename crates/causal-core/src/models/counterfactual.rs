use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Context, ObservedValue, PredictedEffect, Variable};

/// A variable's value in a counterfactual world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PredictedValue {
    /// Set directly by an intervention.
    Forced(ObservedValue),
    /// Predicted to shift as a consequence of an intervention.
    Effect(PredictedEffect),
}

/// A "what if X had been different" scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterfactualScenario {
    /// Short random identifier.
    pub scenario_id: String,
    pub description: String,
    pub interventions: Vec<(Variable, ObservedValue)>,
    pub predicted_outcomes: BTreeMap<Variable, PredictedValue>,
    pub observed_outcome: Option<Context>,
    pub probability: f64,
    pub assumptions: Vec<String>,
}
