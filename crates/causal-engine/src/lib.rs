//! # causal-engine
//!
//! The "why" engine. Maintains an in-memory causal graph (`petgraph`) and an
//! observation log; discovers edges statistically, estimates effects, simulates
//! interventions, builds counterfactual scenarios, and explains outcomes.
//!
//! Not thread-safe for concurrent writers. Hosts that share an engine across
//! requests should go through [`SharedCausalEngine`].

pub mod counterfactual;
pub mod discovery;
pub mod engine;
pub mod estimation;
pub mod explanation;
pub mod graph;
pub mod intervention;
pub mod responsibility;
pub mod shared;
pub mod traversal;

pub use discovery::DiscoveryReport;
pub use engine::CausalReasoningEngine;
pub use graph::snapshot::GraphSnapshot;
pub use graph::CausalGraph;
pub use shared::SharedCausalEngine;
pub use traversal::paths::PathSearch;
