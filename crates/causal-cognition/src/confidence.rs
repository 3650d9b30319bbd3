//! Per-cause and overall confidence scoring.

use causal_core::models::{CauseContribution, EvidenceQuality};

pub const BASE_CONFIDENCE: f64 = 0.5;
/// Weight of the contribution magnitude and the cap on what it can add.
pub const CONTRIBUTION_WEIGHT: f64 = 0.3;
pub const CONTRIBUTION_CAP: f64 = 0.2;
/// Bonus when the cause was observed in the supplied context.
pub const CONTEXT_BONUS: f64 = 0.1;
/// Confidence when nothing was found.
pub const NO_CAUSE_CONFIDENCE: f64 = 0.1;
/// Applied when more than three alternatives compete.
pub const CROWDED_ALTERNATIVES_FACTOR: f64 = 0.9;

/// `0.5 + quality bonus + min(0.2, |contribution| * 0.3) + 0.1 if observed`, clamped to [0, 1].
pub fn cause_confidence(contribution: f64, quality: EvidenceQuality, in_context: bool) -> f64 {
    let mut score = BASE_CONFIDENCE + quality.confidence_bonus();
    score += (contribution.abs() * CONTRIBUTION_WEIGHT).min(CONTRIBUTION_CAP);
    if in_context {
        score += CONTEXT_BONUS;
    }
    score.clamp(0.0, 1.0)
}

/// Mean confidence of the top three causes, scaled by evidence quality.
pub fn overall_confidence(
    causes: &[CauseContribution],
    quality: EvidenceQuality,
    alternatives: usize,
) -> f64 {
    let top: Vec<f64> = causes.iter().take(3).map(|c| c.confidence).collect();
    if top.is_empty() {
        return NO_CAUSE_CONFIDENCE;
    }
    let mut overall = top.iter().sum::<f64>() / top.len() as f64 * quality.quality_factor();
    if alternatives > 3 {
        overall *= CROWDED_ALTERNATIVES_FACTOR;
    }
    overall.clamp(0.0, 1.0)
}
