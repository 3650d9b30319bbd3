//! Error types. Analysis operations are fail-soft and never return these;
//! they surface only from config parsing, snapshots, opt-in DAG enforcement,
//! lock poisoning, and backend availability.

mod causal_error;
mod graph_error;

pub use causal_error::CausalError;
pub use graph_error::GraphError;

/// Result alias used across the workspace.
pub type CausalResult<T> = Result<T, CausalError>;
