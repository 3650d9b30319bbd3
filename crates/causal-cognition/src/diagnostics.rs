//! Gaps in an explanation and the assumptions it rests on.

use causal_core::constants::{CONTROLS_KEY, TEMPORAL_SUFFIXES};
use causal_core::models::{CauseContribution, Context, EvidenceQuality};

/// Weaknesses of the explanation that the caller should know about.
pub fn identify_gaps(
    causes: &[CauseContribution],
    context: &Context,
    observations: u64,
    explained_share_threshold: f64,
    small_sample_threshold: u64,
) -> Vec<String> {
    let mut gaps = Vec::new();

    let explained: f64 = causes.iter().map(|c| c.contribution.abs()).sum();
    if explained < explained_share_threshold {
        gaps.push(format!(
            "Identified causes explain only {:.0}% of the outcome",
            explained * 100.0
        ));
    }
    if !has_temporal_ordering(context) {
        gaps.push("No temporal ordering information; causal direction is assumed".to_string());
    }
    if observations < small_sample_threshold {
        gaps.push(format!(
            "Small sample ({observations} observations); estimates may not generalize"
        ));
    }

    gaps
}

/// Assumptions the explanation depends on. The first two always hold.
pub fn state_assumptions(quality: EvidenceQuality, context: &Context) -> Vec<String> {
    let mut assumptions = vec![
        "Causal structure is stable over the observed period".to_string(),
        "No unmeasured confounding beyond the identified variables".to_string(),
    ];
    if quality.is_weak() {
        assumptions.push(format!(
            "Conclusions rest on {quality} evidence and should be treated as provisional"
        ));
    }
    if !context.contains_key(CONTROLS_KEY) {
        assumptions.push("No control variables were applied to rule out confounding".to_string());
    }
    assumptions
}

fn has_temporal_ordering(context: &Context) -> bool {
    context
        .keys()
        .any(|k| TEMPORAL_SUFFIXES.iter().any(|suffix| k.ends_with(suffix)))
}
