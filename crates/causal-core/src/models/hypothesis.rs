//! Evidence quality and causal hypotheses.

use serde::{Deserialize, Serialize};

use super::Variable;

/// Quality of the evidence behind a causal claim. Ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceQuality {
    Speculative,
    Weak,
    Moderate,
    Strong,
}

impl EvidenceQuality {
    /// Additive bonus applied to per-cause confidence.
    pub fn confidence_bonus(&self) -> f64 {
        match self {
            Self::Strong => 0.3,
            Self::Moderate => 0.2,
            Self::Weak => 0.1,
            Self::Speculative => 0.0,
        }
    }

    /// Multiplicative factor applied to overall confidence.
    pub fn quality_factor(&self) -> f64 {
        match self {
            Self::Strong => 1.0,
            Self::Moderate => 0.85,
            Self::Weak => 0.7,
            Self::Speculative => 0.5,
        }
    }

    pub fn is_weak(&self) -> bool {
        matches!(self, Self::Weak | Self::Speculative)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::Speculative => "speculative",
        }
    }
}

impl std::fmt::Display for EvidenceQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate cause → effect claim. Owned by the caller; refinement returns a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalHypothesis {
    pub cause: Variable,
    pub effect: Variable,
    pub strength_estimate: f64,
    pub confidence: f64,
    pub evidence_quality: EvidenceQuality,
    pub supporting_evidence: Vec<String>,
    pub alternative_explanations: Vec<String>,
    pub confounders_identified: Vec<Variable>,
    pub mechanism: Option<String>,
}

impl CausalHypothesis {
    /// A fresh hypothesis with neutral strength and confidence.
    pub fn new(cause: impl Into<Variable>, effect: impl Into<Variable>) -> Self {
        Self {
            cause: cause.into(),
            effect: effect.into(),
            strength_estimate: 0.5,
            confidence: 0.5,
            evidence_quality: EvidenceQuality::Speculative,
            supporting_evidence: Vec::new(),
            alternative_explanations: Vec::new(),
            confounders_identified: Vec::new(),
            mechanism: None,
        }
    }

    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength_estimate = strength;
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_quality(mut self, quality: EvidenceQuality) -> Self {
        self.evidence_quality = quality;
        self
    }

    pub fn with_mechanism(mut self, mechanism: impl Into<String>) -> Self {
        self.mechanism = Some(mechanism.into());
        self
    }
}
