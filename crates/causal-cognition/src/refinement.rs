//! Hypothesis refinement from new evidence. Returns a revised copy.

use causal_core::constants::{CONFOUNDER_MARKERS, CONTRADICTION_MARKER};
use causal_core::models::{CausalHypothesis, Context};

pub const CORROBORATION_BONUS: f64 = 0.1;
pub const CONTRADICTION_PENALTY: f64 = 0.2;
/// Strength multiplier applied when confidence fell.
pub const STRENGTH_DECAY: f64 = 0.9;

pub fn refine(hypothesis: &CausalHypothesis, new_evidence: &Context) -> CausalHypothesis {
    let mut refined = hypothesis.clone();
    let stringified =
        serde_json::to_string(new_evidence).unwrap_or_else(|_| format!("{new_evidence:?}"));

    let mut confidence = hypothesis.confidence;
    if new_evidence.contains_key(&hypothesis.cause) && new_evidence.contains_key(&hypothesis.effect) {
        confidence += CORROBORATION_BONUS;
    }
    if stringified.contains(CONTRADICTION_MARKER) {
        confidence -= CONTRADICTION_PENALTY;
    }
    refined.confidence = confidence.clamp(0.0, 1.0);

    for key in new_evidence.keys() {
        if *key == hypothesis.cause || *key == hypothesis.effect {
            continue;
        }
        let lower = key.to_lowercase();
        let is_confounder = CONFOUNDER_MARKERS.iter().any(|m| lower.contains(m));
        if is_confounder && !refined.confounders_identified.contains(key) {
            refined.confounders_identified.push(key.clone());
        }
    }

    refined.supporting_evidence.push(stringified);

    if refined.confidence < hypothesis.confidence {
        refined.strength_estimate *= STRENGTH_DECAY;
    }

    tracing::debug!(
        cause = %hypothesis.cause,
        effect = %hypothesis.effect,
        before = hypothesis.confidence,
        after = refined.confidence,
        "hypothesis refined"
    );
    refined
}

#[cfg(test)]
mod tests {
    use super::*;
    use causal_core::models::ObservedValue;

    fn ctx(pairs: &[(&str, ObservedValue)]) -> Context {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn empty_evidence_keeps_confidence() {
        let h = CausalHypothesis::new("deploy", "latency").with_confidence(0.42);
        let refined = refine(&h, &Context::new());
        assert_eq!(refined.confidence, 0.42);
        assert_eq!(refined.strength_estimate, h.strength_estimate);
        assert_eq!(refined.supporting_evidence, vec!["{}".to_string()]);
    }

    #[test]
    fn contradiction_lowers_confidence_and_strength() {
        let h = CausalHypothesis::new("deploy", "latency");
        let refined = refine(&h, &ctx(&[("note", "contradiction observed".into())]));
        assert!((refined.confidence - 0.3).abs() < 1e-12);
        assert!((refined.strength_estimate - 0.45).abs() < 1e-12);
    }

    #[test]
    fn confounders_collected_once() {
        let h = CausalHypothesis::new("deploy", "latency");
        let evidence = ctx(&[("traffic_Control", "on".into()), ("deploy", true.into())]);
        let once = refine(&h, &evidence);
        let twice = refine(&once, &evidence);
        assert_eq!(twice.confounders_identified, vec!["traffic_Control".to_string()]);
        assert_eq!(twice.supporting_evidence.len(), 2);
        assert_eq!(h.confounders_identified.len(), 0);
    }
}
