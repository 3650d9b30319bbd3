use serde::{Deserialize, Serialize};

use super::Variable;

/// A directed, weighted causal edge. At most one exists per ordered (cause, effect) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalEdge {
    pub cause: Variable,
    pub effect: Variable,
    /// Strength of the causal link, expected in [0, 1]. Not validated.
    pub strength: f64,
    /// Confidence in the link, expected in [0, 1]. Not validated.
    pub confidence: f64,
    #[serde(default)]
    pub mechanism: Option<String>,
    #[serde(default)]
    pub evidence: Vec<String>,
}

impl CausalEdge {
    pub fn new(
        cause: impl Into<Variable>,
        effect: impl Into<Variable>,
        strength: f64,
        confidence: f64,
    ) -> Self {
        Self {
            cause: cause.into(),
            effect: effect.into(),
            strength,
            confidence,
            mechanism: None,
            evidence: Vec::new(),
        }
    }

    pub fn with_mechanism(mut self, mechanism: impl Into<String>) -> Self {
        self.mechanism = Some(mechanism.into());
        self
    }

    pub fn with_evidence(mut self, evidence: Vec<String>) -> Self {
        self.evidence = evidence;
        self
    }
}
