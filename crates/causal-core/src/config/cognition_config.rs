use serde::{Deserialize, Serialize};

use super::defaults;

/// Which backend the cognitive reasoner wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// A causal reasoning engine.
    #[default]
    Engine,
    /// No backend; explanations proceed with no causes.
    Disabled,
}

/// Metacognitive layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CognitionConfig {
    pub backend: BackendKind,
    /// Confidence attached to each necessary cause.
    pub necessity_confidence: f64,
    /// Confidence attached to each sufficient cause.
    pub sufficiency_confidence: f64,
    /// Below this total contribution an explanation gap is reported.
    pub explained_share_threshold: f64,
    /// Below this many observations a small-sample gap is reported.
    pub small_sample_threshold: u64,
}

impl Default for CognitionConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            necessity_confidence: defaults::DEFAULT_NECESSITY_CONFIDENCE,
            sufficiency_confidence: defaults::DEFAULT_SUFFICIENCY_CONFIDENCE,
            explained_share_threshold: defaults::DEFAULT_EXPLAINED_SHARE_THRESHOLD,
            small_sample_threshold: defaults::DEFAULT_SMALL_SAMPLE_THRESHOLD,
        }
    }
}
