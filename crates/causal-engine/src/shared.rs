//! Thread-safe handle around a single engine instance.
//!
//! Writers are serialised through the lock. Long reads (path enumeration over
//! a large graph) can work on a [`GraphSnapshot`] taken under the read lock.

use std::sync::{Arc, RwLock};

use causal_core::errors::{CausalError, CausalResult};
use causal_core::models::{CausalExplanation, Context, InterventionOutcome, ObservedValue};
use causal_core::traits::ICausalBackend;

use crate::engine::CausalReasoningEngine;
use crate::graph::snapshot::GraphSnapshot;

/// Cloneable, shared engine handle.
#[derive(Debug, Clone, Default)]
pub struct SharedCausalEngine {
    inner: Arc<RwLock<CausalReasoningEngine>>,
}

impl SharedCausalEngine {
    pub fn new(engine: CausalReasoningEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    /// Run `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut CausalReasoningEngine) -> R) -> CausalResult<R> {
        let mut guard = self
            .inner
            .write()
            .map_err(|e| CausalError::ConcurrencyError(e.to_string()))?;
        Ok(f(&mut guard))
    }

    /// Run `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&CausalReasoningEngine) -> R) -> CausalResult<R> {
        let guard = self
            .inner
            .read()
            .map_err(|e| CausalError::ConcurrencyError(e.to_string()))?;
        Ok(f(&guard))
    }

    /// Copy of the current edge set.
    pub fn graph_snapshot(&self) -> CausalResult<GraphSnapshot> {
        self.read(|engine| engine.graph().snapshot())
    }
}

impl ICausalBackend for SharedCausalEngine {
    fn explain_outcome(
        &self,
        outcome_variable: &str,
        outcome_value: &ObservedValue,
        context: &Context,
    ) -> CausalResult<CausalExplanation> {
        self.read(|engine| engine.explain_outcome(outcome_variable, outcome_value, context))
    }

    fn do_intervention(
        &mut self,
        variable: &str,
        value: ObservedValue,
        context: Option<&Context>,
    ) -> CausalResult<InterventionOutcome> {
        self.write(|engine| engine.do_intervention(variable, value, context))
    }

    /// Zero when the lock is poisoned.
    fn observation_count(&self) -> usize {
        self.read(|engine| engine.observation_count()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use causal_core::models::CausalEdge;
    use std::thread;

    #[test]
    fn writes_from_threads_are_serialised() {
        let shared = SharedCausalEngine::default();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared
                        .write(|e| e.add_domain_edge(CausalEdge::new(format!("c{i}"), "o", 0.5, 0.5)))
                        .unwrap()
                        .unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(shared.read(|e| e.graph().edge_count()).unwrap(), 4);
        assert_eq!(shared.graph_snapshot().unwrap().len(), 4);
    }

    #[test]
    fn poisoned_lock_reports_concurrency_error() {
        let shared = SharedCausalEngine::default();
        let clone = shared.clone();
        let _ = thread::spawn(move || {
            let _ = clone.write(|e| {
                if e.observation_count() == 0 {
                    panic!("writer died");
                }
            });
        })
        .join();
        let err = shared.read(|e| e.observation_count()).unwrap_err();
        assert!(matches!(err, CausalError::ConcurrencyError(_)));
        let backend: &dyn ICausalBackend = &shared;
        assert!(backend
            .explain_outcome("o", &1.into(), &Context::new())
            .is_err());
        assert_eq!(backend.observation_count(), 0);
    }

    #[test]
    fn backend_writes_go_through_the_lock() {
        let shared = SharedCausalEngine::default();
        shared
            .write(|e| e.add_domain_edge(CausalEdge::new("a", "b", 0.8, 0.9)))
            .unwrap()
            .unwrap();
        let mut backend: Box<dyn ICausalBackend> = Box::new(shared.clone());
        let outcome = backend.do_intervention("a", 1.into(), None).unwrap();
        assert_eq!(outcome.effect("b").map(|e| e.expected_change), Some(0.8));
        assert_eq!(shared.read(|e| e.intervention_history().len()).unwrap(), 1);
    }
}
