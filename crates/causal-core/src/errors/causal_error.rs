use super::GraphError;

/// Top-level error for the causal reasoning workspace.
#[derive(Debug, thiserror::Error)]
pub enum CausalError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("invalid configuration: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("causal backend unavailable: {reason}")]
    BackendUnavailable { reason: String },

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

impl From<toml::de::Error> for CausalError {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigError {
            reason: e.to_string(),
        }
    }
}

impl CausalError {
    /// Whether the error reflects a rejected graph mutation rather than a
    /// failure of the host environment.
    pub fn is_graph_rejection(&self) -> bool {
        matches!(self, Self::Graph(GraphError::CycleDetected { .. }))
    }
}
