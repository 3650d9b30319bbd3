use serde::{Deserialize, Serialize};

use super::{ObservedValue, Variable};

/// A cause ranked by its contribution to an outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CauseContribution {
    pub variable: Variable,
    /// Signed estimated effect on the outcome.
    pub contribution: f64,
    pub confidence: f64,
}

/// Why an outcome occurred, as reconstructed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalExplanation {
    pub outcome_variable: Variable,
    pub outcome_value: ObservedValue,
    pub description: String,
    pub primary_explanation: String,
    /// Sorted by absolute contribution, descending.
    pub actual_causes: Vec<CauseContribution>,
    pub necessary_causes: Vec<Variable>,
    pub sufficient_causes: Vec<Variable>,
    pub contributing_factors: Vec<Variable>,
    pub alternative_explanations: Vec<String>,
    pub confidence: f64,
}

impl CausalExplanation {
    /// An explanation that identified no causes.
    pub fn empty(outcome_variable: impl Into<Variable>, outcome_value: ObservedValue) -> Self {
        let outcome_variable = outcome_variable.into();
        Self {
            description: format!("{outcome_variable} = {outcome_value}"),
            primary_explanation: format!("No causal factors identified for {outcome_variable}."),
            outcome_variable,
            outcome_value,
            actual_causes: Vec::new(),
            necessary_causes: Vec::new(),
            sufficient_causes: Vec::new(),
            contributing_factors: Vec::new(),
            alternative_explanations: Vec::new(),
            confidence: 0.1,
        }
    }

    /// Contribution of a named cause, if it was identified.
    pub fn contribution_of(&self, variable: &str) -> Option<f64> {
        self.actual_causes
            .iter()
            .find(|c| c.variable == variable)
            .map(|c| c.contribution)
    }
}
