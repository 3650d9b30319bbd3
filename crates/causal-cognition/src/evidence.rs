//! Evidence-quality classification from context hints.

use causal_core::constants::{
    CONTROLS_KEY, COVARIATES_KEY, EXPERIMENT_PREFIX, N_OBSERVATIONS_KEY, RCT_PREFIX,
};
use causal_core::models::{Context, EvidenceQuality};

/// Observations behind the claim: the context's `n_observations` if readable,
/// otherwise `fallback`.
pub fn observation_count(context: &Context, fallback: usize) -> u64 {
    context
        .get(N_OBSERVATIONS_KEY)
        .and_then(|v| v.as_f64())
        .filter(|n| *n >= 0.0)
        .map(|n| n as u64)
        .unwrap_or(fallback as u64)
}

/// Experimental keys beat controls, which beat a bare sample size.
pub fn classify(context: &Context, fallback_observations: usize) -> EvidenceQuality {
    if context
        .keys()
        .any(|k| k.starts_with(EXPERIMENT_PREFIX) || k.starts_with(RCT_PREFIX))
    {
        return EvidenceQuality::Strong;
    }
    if context.contains_key(CONTROLS_KEY) || context.contains_key(COVARIATES_KEY) {
        return EvidenceQuality::Moderate;
    }
    match observation_count(context, fallback_observations) {
        n if n < 10 => EvidenceQuality::Speculative,
        n if n < 100 => EvidenceQuality::Weak,
        _ => EvidenceQuality::Moderate,
    }
}
