use crate::errors::{CausalError, CausalResult};
use crate::models::{CausalExplanation, Context, InterventionOutcome, ObservedValue};

/// Causal reasoning capability consumed by the metacognitive layer.
///
/// Errors mean the backend could not answer at all; callers degrade to an
/// empty result rather than propagating.
pub trait ICausalBackend: Send {
    /// Explain why `outcome_variable` took `outcome_value` in `context`.
    fn explain_outcome(
        &self,
        outcome_variable: &str,
        outcome_value: &ObservedValue,
        context: &Context,
    ) -> CausalResult<CausalExplanation>;

    /// Apply `do(variable = value)` and predict the downstream effects.
    fn do_intervention(
        &mut self,
        variable: &str,
        value: ObservedValue,
        context: Option<&Context>,
    ) -> CausalResult<InterventionOutcome>;

    /// Number of observations the backend has learned from.
    fn observation_count(&self) -> usize;
}

/// Backend used when causal reasoning is disabled. Every query reports unavailability.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpBackend;

impl ICausalBackend for NoOpBackend {
    fn explain_outcome(
        &self,
        _outcome_variable: &str,
        _outcome_value: &ObservedValue,
        _context: &Context,
    ) -> CausalResult<CausalExplanation> {
        Err(CausalError::BackendUnavailable {
            reason: "causal reasoning disabled".to_string(),
        })
    }

    fn do_intervention(
        &mut self,
        _variable: &str,
        _value: ObservedValue,
        _context: Option<&Context>,
    ) -> CausalResult<InterventionOutcome> {
        Err(CausalError::BackendUnavailable {
            reason: "causal reasoning disabled".to_string(),
        })
    }

    fn observation_count(&self) -> usize {
        0
    }
}
