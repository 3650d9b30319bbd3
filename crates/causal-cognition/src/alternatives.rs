//! Competing explanations for an outcome.

use causal_core::models::{AlternativeExplanation, CauseContribution};

pub const COMBINED_PLAUSIBILITY: f64 = 0.7;
pub const CONFOUNDER_PLAUSIBILITY: f64 = 0.5;
pub const REVERSE_PLAUSIBILITY: f64 = 0.3;
pub const CHANCE_PLAUSIBILITY: f64 = 0.4;

/// Alternatives to the ranked causes (strongest first).
///
/// The joint hypothesis needs two causes and reverse causation needs one;
/// confounding and chance are always listed.
pub fn generate(outcome: &str, causes: &[CauseContribution]) -> Vec<AlternativeExplanation> {
    let mut alternatives = Vec::with_capacity(4);

    if let [first, second, ..] = causes {
        alternatives.push(AlternativeExplanation {
            description: format!(
                "{} and {} jointly produce {outcome} rather than either alone",
                first.variable, second.variable
            ),
            plausibility: COMBINED_PLAUSIBILITY,
        });
    }
    alternatives.push(AlternativeExplanation {
        description: format!("An unmeasured confounder drives both the identified causes and {outcome}"),
        plausibility: CONFOUNDER_PLAUSIBILITY,
    });
    if let Some(top) = causes.first() {
        alternatives.push(AlternativeExplanation {
            description: format!(
                "Reverse causation: {outcome} influences {} rather than the other way round",
                top.variable
            ),
            plausibility: REVERSE_PLAUSIBILITY,
        });
    }
    alternatives.push(AlternativeExplanation {
        description: "The observed association arose by chance".to_string(),
        plausibility: CHANCE_PLAUSIBILITY,
    });

    alternatives
}
