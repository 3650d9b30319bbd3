//! # causal-core
//!
//! Foundation crate for the causal reasoning engine.
//! Defines the shared records, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CausalConfig;
pub use errors::{CausalError, CausalResult, GraphError};
pub use models::{CausalEdge, Context, EvidenceQuality, Observation, ObservedValue, Variable};
pub use traits::{ICausalBackend, NoOpBackend};
