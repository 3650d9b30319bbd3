//! Do-operator records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Context, ObservedValue, Variable};

/// Audit record of one do-operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalIntervention {
    pub variable: Variable,
    pub value: ObservedValue,
    pub timestamp: DateTime<Utc>,
    pub context: Context,
}

/// Predicted effect of an intervention on one descendant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedEffect {
    pub expected_change: f64,
    pub confidence: f64,
}

/// Result of `do(variable = value)`: the forced value plus one predicted effect per descendant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionOutcome {
    pub variable: Variable,
    pub value: ObservedValue,
    pub effects: BTreeMap<Variable, PredictedEffect>,
}

impl InterventionOutcome {
    /// An intervention with no downstream effects.
    pub fn forced_only(variable: impl Into<Variable>, value: ObservedValue) -> Self {
        Self {
            variable: variable.into(),
            value,
            effects: BTreeMap::new(),
        }
    }

    pub fn effect(&self, variable: &str) -> Option<&PredictedEffect> {
        self.effects.get(variable)
    }

    /// Flat map form: `{variable: value, descendant: {expected_change, confidence}, ..}`.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(
            self.variable.clone(),
            serde_json::to_value(&self.value).unwrap_or(serde_json::Value::Null),
        );
        for (name, effect) in &self.effects {
            map.insert(
                name.clone(),
                serde_json::json!({
                    "expected_change": effect.expected_change,
                    "confidence": effect.confidence,
                }),
            );
        }
        serde_json::Value::Object(map)
    }
}
