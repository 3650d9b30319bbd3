//! # causal-cognition
//!
//! Metacognitive wrapper around a causal reasoning backend. Scores its own
//! uncertainty, proposes competing explanations, reports gaps and assumptions,
//! compares counterfactual worlds, and revises hypotheses from new evidence.
//!
//! The backend is an [`ICausalBackend`](causal_core::traits::ICausalBackend);
//! when it is disabled or fails, the reasoner still answers with low confidence.

pub mod alternatives;
pub mod comparison;
pub mod confidence;
pub mod diagnostics;
pub mod evidence;
pub mod factory;
pub mod reasoner;
pub mod refinement;

pub use factory::reasoner_from_config;
pub use reasoner::CognitiveCausalReasoner;
