//! Backend selection by configuration.

use causal_core::config::{BackendKind, CausalConfig};
use causal_engine::CausalReasoningEngine;

use crate::reasoner::CognitiveCausalReasoner;

/// Build a reasoner whose backend is chosen by `config.cognition.backend`.
///
/// `Engine` wraps the supplied engine, or a fresh one built from `config`.
/// `Disabled` wraps the no-op backend and drops any supplied engine.
pub fn reasoner_from_config(
    config: &CausalConfig,
    engine: Option<CausalReasoningEngine>,
) -> CognitiveCausalReasoner {
    match config.cognition.backend {
        BackendKind::Engine => {
            let engine = engine.unwrap_or_else(|| CausalReasoningEngine::with_config(config.clone()));
            CognitiveCausalReasoner::with_config(Box::new(engine), config.cognition.clone())
        }
        BackendKind::Disabled => {
            if engine.is_some() {
                tracing::info!("causal reasoning disabled; supplied engine is not used");
            }
            CognitiveCausalReasoner::with_config(
                Box::new(causal_core::traits::NoOpBackend),
                config.cognition.clone(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use causal_core::models::{CausalEdge, Context};

    #[test]
    fn engine_backend_keeps_supplied_engine() {
        let mut engine = CausalReasoningEngine::new();
        engine
            .add_domain_edge(CausalEdge::new("a", "b", 0.5, 0.5))
            .unwrap();
        let mut reasoner = reasoner_from_config(&CausalConfig::default(), Some(engine));
        let outcome = reasoner
            .backend_mut()
            .do_intervention("a", true.into(), None)
            .unwrap();
        assert!(outcome.effect("b").is_some());
    }

    #[test]
    fn disabled_backend_reports_unavailable() {
        let config = CausalConfig::from_toml("[cognition]\nbackend = \"disabled\"\n").unwrap();
        let reasoner = reasoner_from_config(&config, Some(CausalReasoningEngine::new()));
        assert!(reasoner
            .backend()
            .explain_outcome("x", &1.into(), &Context::new())
            .is_err());
    }
}
