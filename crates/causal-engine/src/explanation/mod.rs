//! Outcome explanation: rank the outcome's ancestors present in the context
//! by estimated effect and classify them.

pub mod confidence;
pub mod templates;

use std::cmp::Ordering;

use causal_core::config::EstimationConfig;
use causal_core::constants::BASELINE_ALTERNATIVES;
use causal_core::models::{
    CausalExplanation, CauseContribution, Context, Observation, ObservedValue, Variable,
};

use crate::estimation;
use crate::graph::CausalGraph;

pub use confidence::{cause_confidence, chain_confidence};

/// Build the explanation of `outcome_variable = outcome_value`.
pub fn explain(
    graph: &CausalGraph,
    observations: &[Observation],
    outcome_variable: &str,
    outcome_value: &ObservedValue,
    context: &Context,
    config: &EstimationConfig,
) -> CausalExplanation {
    let mut explanation = CausalExplanation::empty(outcome_variable, outcome_value.clone());

    let mut causes: Vec<CauseContribution> = graph
        .get_ancestors(outcome_variable)
        .into_iter()
        .filter(|ancestor| context.contains_key(ancestor))
        .filter_map(|ancestor| {
            let adjustment = config
                .backdoor_adjustment
                .then(|| graph.find_confounders(&ancestor, outcome_variable));
            let contribution = estimation::estimate(
                observations,
                &ancestor,
                outcome_variable,
                adjustment.as_ref(),
                config,
            );
            (contribution != 0.0).then(|| CauseContribution {
                confidence: cause_confidence(graph, &ancestor, outcome_variable),
                variable: ancestor,
                contribution,
            })
        })
        .collect();

    causes.sort_by(|a, b| {
        b.contribution
            .abs()
            .partial_cmp(&a.contribution.abs())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.variable.cmp(&b.variable))
    });

    explanation.necessary_causes = causes
        .iter()
        .filter(|c| survives_removal(graph, c, outcome_variable))
        .take(config.max_necessary_causes)
        .map(|c| c.variable.clone())
        .collect();
    explanation.sufficient_causes = select(&causes, |c| c > config.sufficient_threshold);
    explanation.contributing_factors = select(&causes, |c| {
        c > config.contributing_threshold && c < config.sufficient_threshold
    });
    explanation.alternative_explanations =
        BASELINE_ALTERNATIVES.iter().map(|s| s.to_string()).collect();
    explanation.primary_explanation =
        templates::primary_explanation(outcome_variable, &causes, config.sufficient_threshold);
    if !causes.is_empty() {
        explanation.confidence =
            causes.iter().map(|c| c.confidence).sum::<f64>() / causes.len() as f64;
    }
    explanation.actual_causes = causes;

    tracing::debug!(
        outcome = outcome_variable,
        causes = explanation.actual_causes.len(),
        necessary = explanation.necessary_causes.len(),
        "outcome explained"
    );
    explanation
}

/// Removing the cause would change the outcome: it has an effect and a path to the outcome.
fn survives_removal(graph: &CausalGraph, cause: &CauseContribution, outcome: &str) -> bool {
    cause.contribution != 0.0 && !graph.get_causal_paths(&cause.variable, outcome).is_empty()
}

fn select(causes: &[CauseContribution], keep: impl Fn(f64) -> bool) -> Vec<Variable> {
    causes
        .iter()
        .filter(|c| keep(c.contribution))
        .map(|c| c.variable.clone())
        .collect()
}
