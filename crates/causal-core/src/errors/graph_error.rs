/// Causal graph errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("cycle detected in causal graph: {path}")]
    CycleDetected { path: String },

    #[error("traversal limit exceeded: {kind} capped at {limit}")]
    TraversalLimitExceeded { kind: String, limit: usize },

    #[error("unknown variable: {name}")]
    UnknownVariable { name: String },
}
