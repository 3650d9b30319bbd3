//! Primary-explanation sentences. Templates use `{cause}`, `{outcome}`,
//! `{effect}` and `{count}` as placeholders.

use causal_core::models::CauseContribution;

const NO_CAUSES: &str = "No causal factors identified for {outcome}.";
const SOLE_CAUSE: &str = "{outcome} is explained by {cause} (estimated effect {effect}).";
const SUFFICIENT_CAUSE: &str =
    "{cause} is sufficient to account for {outcome} (estimated effect {effect}), alongside {count} other factor(s).";
const LEADING_CAUSE: &str =
    "{cause} is the strongest of {count} identified causes of {outcome} (estimated effect {effect}).";

/// Render the headline sentence for ranked causes (strongest first).
pub fn primary_explanation(outcome: &str, causes: &[CauseContribution], sufficient_threshold: f64) -> String {
    let Some(top) = causes.first() else {
        return NO_CAUSES.replace("{outcome}", outcome);
    };

    let (template, count) = if causes.len() == 1 {
        (SOLE_CAUSE, 1)
    } else if top.contribution > sufficient_threshold {
        (SUFFICIENT_CAUSE, causes.len() - 1)
    } else {
        (LEADING_CAUSE, causes.len())
    };

    template
        .replace("{outcome}", outcome)
        .replace("{cause}", &top.variable)
        .replace("{effect}", &format!("{:+.2}", top.contribution))
        .replace("{count}", &count.to_string())
}
