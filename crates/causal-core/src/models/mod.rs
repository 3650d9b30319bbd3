//! Records exchanged between the engine, the cognitive layer, and their callers.

pub mod cognition;
pub mod counterfactual;
pub mod edge;
pub mod explanation;
pub mod hypothesis;
pub mod intervention;
pub mod observation;

pub use cognition::{
    AlternativeExplanation, ConfidentCause, CounterfactualComparison, EnhancedCausalExplanation,
    VariableDifference,
};
pub use counterfactual::{CounterfactualScenario, PredictedValue};
pub use edge::CausalEdge;
pub use explanation::{CausalExplanation, CauseContribution};
pub use hypothesis::{CausalHypothesis, EvidenceQuality};
pub use intervention::{CausalIntervention, InterventionOutcome, PredictedEffect};
pub use observation::{Context, Observation, ObservedValue, Variable};
