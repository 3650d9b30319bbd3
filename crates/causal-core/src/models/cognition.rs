//! Records produced by the metacognitive layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CauseContribution, Context, EvidenceQuality, ObservedValue, Variable};

/// A cause paired with the confidence of a necessity or sufficiency judgement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidentCause {
    pub variable: Variable,
    pub confidence: f64,
}

/// A competing account of the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeExplanation {
    pub description: String,
    pub plausibility: f64,
}

/// Explanation annotated with confidence, evidence quality, and a reasoning trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedCausalExplanation {
    pub outcome: String,
    pub primary_explanation: String,
    pub causes: Vec<CauseContribution>,
    pub necessary_causes: Vec<ConfidentCause>,
    pub sufficient_causes: Vec<ConfidentCause>,
    pub contributing_factors: Vec<CauseContribution>,
    pub alternative_explanations: Vec<AlternativeExplanation>,
    pub overall_confidence: f64,
    pub evidence_quality: EvidenceQuality,
    /// One line per pipeline phase, in order.
    pub reasoning_trace: Vec<String>,
    pub identified_gaps: Vec<String>,
    pub assumptions: Vec<String>,
}

/// How one variable differs between the factual and counterfactual worlds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDifference {
    pub factual: Option<ObservedValue>,
    pub counterfactual: Option<ObservedValue>,
    /// Numeric difference (counterfactual − factual) when both sides are numeric.
    pub delta: Option<f64>,
}

/// Factual vs. predicted-counterfactual outcomes with causal attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterfactualComparison {
    pub factual: Context,
    pub counterfactual: Context,
    pub interventions: Vec<(Variable, ObservedValue)>,
    pub differences: BTreeMap<Variable, VariableDifference>,
    pub causal_attribution: BTreeMap<Variable, f64>,
    pub confidence: f64,
    pub plausibility: f64,
}
