//! Counterfactual scenario assembly.

use std::collections::BTreeMap;

use causal_core::constants::COUNTERFACTUAL_ASSUMPTIONS;
use causal_core::models::{
    Context, CounterfactualScenario, InterventionOutcome, ObservedValue, PredictedValue, Variable,
};
use uuid::Uuid;

/// Short random scenario identifier.
pub fn scenario_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Merge per-intervention predictions. Forced values win over predicted effects.
pub fn merge_outcomes(outcomes: &[InterventionOutcome]) -> BTreeMap<Variable, PredictedValue> {
    let mut merged = BTreeMap::new();
    for outcome in outcomes {
        for (name, effect) in &outcome.effects {
            if !matches!(merged.get(name), Some(PredictedValue::Forced(_))) {
                merged.insert(name.clone(), PredictedValue::Effect(*effect));
            }
        }
    }
    for outcome in outcomes {
        merged.insert(
            outcome.variable.clone(),
            PredictedValue::Forced(outcome.value.clone()),
        );
    }
    merged
}

pub fn build_scenario(
    description: &str,
    interventions: Vec<(Variable, ObservedValue)>,
    outcomes: &[InterventionOutcome],
    observed_outcome: Option<Context>,
    probability: f64,
) -> CounterfactualScenario {
    CounterfactualScenario {
        scenario_id: scenario_id(),
        description: description.to_string(),
        interventions,
        predicted_outcomes: merge_outcomes(outcomes),
        observed_outcome,
        probability,
        assumptions: COUNTERFACTUAL_ASSUMPTIONS.iter().map(|s| s.to_string()).collect(),
    }
}
