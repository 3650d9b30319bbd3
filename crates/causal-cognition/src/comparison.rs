//! Factual vs. counterfactual comparison with causal attribution.

use std::collections::{BTreeMap, BTreeSet};

use causal_core::models::{
    Context, CounterfactualComparison, ObservedValue, Variable, VariableDifference,
};
use causal_core::traits::ICausalBackend;
use causal_core::tracing_setup::events;

pub const BASE_CONFIDENCE: f64 = 0.6;
/// Applied when more than two interventions compound each other's uncertainty.
pub const MULTI_INTERVENTION_FACTOR: f64 = 0.8;
pub const MODEL_UNCERTAINTY_FACTOR: f64 = 0.9;
pub const BASE_PLAUSIBILITY: f64 = 0.7;
pub const SINGLE_INTERVENTION_BONUS: f64 = 0.2;
/// Attribution for a variable that differs only as a downstream consequence.
pub const INDIRECT_ATTRIBUTION: f64 = 0.5;

/// Apply the interventions through the backend and compare the resulting world with `factual`.
///
/// Intervened variables take their forced value. Descendants shift by the sum
/// of predicted changes, starting from their factual numeric value (or 0 when
/// absent). Backend failures leave only the forced values in place.
pub fn compare(
    backend: &mut dyn ICausalBackend,
    factual: &Context,
    interventions: Vec<(Variable, ObservedValue)>,
    variables_of_interest: Option<&[Variable]>,
) -> CounterfactualComparison {
    let forced: BTreeSet<&str> = interventions.iter().map(|(v, _)| v.as_str()).collect();
    let mut shifts: BTreeMap<Variable, f64> = BTreeMap::new();

    for (variable, value) in &interventions {
        match backend.do_intervention(variable, value.clone(), Some(factual)) {
            Ok(outcome) => {
                for (name, effect) in outcome.effects {
                    if !forced.contains(name.as_str()) {
                        *shifts.entry(name).or_insert(0.0) += effect.expected_change;
                    }
                }
            }
            Err(e) => events::backend_unavailable("do_intervention", &e.to_string()),
        }
    }

    let mut counterfactual = factual.clone();
    for (name, shift) in shifts {
        if shift == 0.0 {
            continue;
        }
        match factual.get(&name) {
            Some(value) => {
                if let Some(base) = value.as_f64() {
                    counterfactual.insert(name, ObservedValue::Number(base + shift));
                }
            }
            None => {
                counterfactual.insert(name, ObservedValue::Number(shift));
            }
        }
    }
    for (variable, value) in &interventions {
        counterfactual.insert(variable.clone(), value.clone());
    }

    let selected: BTreeSet<Variable> = match variables_of_interest {
        Some(vars) => vars.iter().cloned().collect(),
        None => factual.keys().chain(counterfactual.keys()).cloned().collect(),
    };

    let mut differences = BTreeMap::new();
    let mut causal_attribution = BTreeMap::new();
    for name in selected {
        let before = factual.get(&name);
        let after = counterfactual.get(&name);
        if before == after {
            continue;
        }
        let delta = match (before.and_then(|v| v.as_f64()), after.and_then(|v| v.as_f64())) {
            (Some(b), Some(a)) => Some(a - b),
            _ => None,
        };
        let attribution = if forced.contains(name.as_str()) {
            1.0
        } else {
            INDIRECT_ATTRIBUTION
        };
        causal_attribution.insert(name.clone(), attribution);
        differences.insert(
            name,
            VariableDifference {
                factual: before.cloned(),
                counterfactual: after.cloned(),
                delta,
            },
        );
    }

    let mut confidence = BASE_CONFIDENCE;
    if interventions.len() > 2 {
        confidence *= MULTI_INTERVENTION_FACTOR;
    }
    confidence *= MODEL_UNCERTAINTY_FACTOR;

    let mut plausibility = BASE_PLAUSIBILITY;
    if interventions.len() == 1 {
        plausibility += SINGLE_INTERVENTION_BONUS;
    }

    tracing::debug!(
        interventions = interventions.len(),
        differences = differences.len(),
        "counterfactual comparison"
    );

    CounterfactualComparison {
        factual: factual.clone(),
        counterfactual,
        interventions,
        differences,
        causal_attribution,
        confidence,
        plausibility,
    }
}
