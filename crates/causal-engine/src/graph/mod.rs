//! CausalGraph: named variables joined by weighted, confidence-scored edges.
//!
//! Nodes exist exactly while they take part in at least one edge. Acyclicity is
//! not enforced unless [`GraphConfig::enforce_acyclic`] is set; every traversal
//! is cycle-safe either way.

pub mod dag_enforcement;
pub mod pruning;
pub mod snapshot;
pub mod stable_graph;

use std::collections::BTreeSet;

use causal_core::config::GraphConfig;
use causal_core::errors::{CausalResult, GraphError};
use causal_core::models::{CausalEdge, Variable};
use petgraph::Direction;

use crate::traversal::{self, d_separation, paths, structure, PathSearch};
use pruning::PruneResult;
use snapshot::GraphSnapshot;
use stable_graph::IndexedGraph;

/// In-memory causal graph.
#[derive(Debug, Clone, Default)]
pub struct CausalGraph {
    inner: IndexedGraph,
    config: GraphConfig,
}

impl CausalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            inner: IndexedGraph::new(),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Raw indexed graph, for algorithms that work on petgraph directly.
    pub fn indexed(&self) -> &IndexedGraph {
        &self.inner
    }

    // --- Mutation ---

    /// Insert or overwrite the edge `cause → effect`.
    ///
    /// Strength and confidence are not range-checked. Fails only when
    /// acyclicity is enforced and the edge would close a cycle.
    pub fn add_edge(
        &mut self,
        cause: &str,
        effect: &str,
        strength: f64,
        confidence: f64,
    ) -> CausalResult<()> {
        self.insert_edge(CausalEdge::new(cause, effect, strength, confidence))
    }

    /// Insert or overwrite an edge carrying mechanism and evidence.
    pub fn insert_edge(&mut self, edge: CausalEdge) -> CausalResult<()> {
        if let (Some(c), Some(e)) = (self.inner.get_node(&edge.cause), self.inner.get_node(&edge.effect)) {
            if let Some(existing) = self.inner.graph.find_edge(c, e) {
                if let Some(weight) = self.inner.graph.edge_weight_mut(existing) {
                    *weight = edge;
                }
                return Ok(());
            }
            if self.config.enforce_acyclic && dag_enforcement::would_create_cycle(&self.inner, c, e) {
                return Err(self.cycle_error(&edge.cause, &edge.effect).into());
            }
        } else if self.config.enforce_acyclic && edge.cause == edge.effect {
            return Err(self.cycle_error(&edge.cause, &edge.effect).into());
        }

        let c = self.inner.ensure_node(&edge.cause);
        let e = self.inner.ensure_node(&edge.effect);
        self.inner.graph.add_edge(c, e, edge);
        Ok(())
    }

    fn cycle_error(&self, cause: &str, effect: &str) -> GraphError {
        let mut path = paths::enumerate(&self.inner, effect, cause, &self.config)
            .paths
            .into_iter()
            .next()
            .unwrap_or_else(|| vec![effect.to_string()]);
        path.insert(0, cause.to_string());
        GraphError::CycleDetected {
            path: path.join(" -> "),
        }
    }

    /// Remove the edge `cause → effect`, dropping endpoints left without edges.
    pub fn remove_edge(&mut self, cause: &str, effect: &str) -> bool {
        let (Some(c), Some(e)) = (self.inner.get_node(cause), self.inner.get_node(effect)) else {
            return false;
        };
        let Some(idx) = self.inner.graph.find_edge(c, e) else {
            return false;
        };
        self.inner.graph.remove_edge(idx);
        for (name, node) in [(cause, c), (effect, e)] {
            if self.inner.graph.contains_node(node) && self.inner.is_isolated(node) {
                self.inner.remove_node(name);
            }
        }
        true
    }

    /// Drop edges weaker than `min_strength` and any nodes they orphan.
    pub fn prune_weak_edges(&mut self, min_strength: f64) -> PruneResult {
        pruning::prune_weak_edges(&mut self.inner, min_strength)
    }

    // --- Lookup ---

    pub fn get_edge(&self, cause: &str, effect: &str) -> Option<&CausalEdge> {
        let c = self.inner.get_node(cause)?;
        let e = self.inner.get_node(effect)?;
        let idx = self.inner.graph.find_edge(c, e)?;
        self.inner.graph.edge_weight(idx)
    }

    /// Variables with an edge into `effect`.
    pub fn get_direct_causes(&self, effect: &str) -> BTreeSet<Variable> {
        self.neighbors(effect, Direction::Incoming)
    }

    /// Variables `cause` has an edge into.
    pub fn get_direct_effects(&self, cause: &str) -> BTreeSet<Variable> {
        self.neighbors(cause, Direction::Outgoing)
    }

    fn neighbors(&self, node: &str, direction: Direction) -> BTreeSet<Variable> {
        let Some(idx) = self.inner.get_node(node) else {
            return BTreeSet::new();
        };
        self.inner
            .graph
            .neighbors_directed(idx, direction)
            .filter_map(|n| self.inner.name(n).map(str::to_string))
            .collect()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.inner.get_node(node).is_some()
    }

    pub fn nodes(&self) -> BTreeSet<Variable> {
        self.inner.node_index.keys().cloned().collect()
    }

    /// All edges, sorted by (cause, effect).
    pub fn edges(&self) -> Vec<&CausalEdge> {
        let mut edges: Vec<&CausalEdge> = self
            .inner
            .graph
            .edge_indices()
            .filter_map(|idx| self.inner.graph.edge_weight(idx))
            .collect();
        edges.sort_by(|a, b| (&a.cause, &a.effect).cmp(&(&b.cause, &b.effect)));
        edges
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.edge_count() == 0
    }

    // --- Structure ---

    /// Every node that can reach `node`, excluding `node` itself.
    pub fn get_ancestors(&self, node: &str) -> BTreeSet<Variable> {
        traversal::ancestors(&self.inner, node)
    }

    /// Every node reachable from `node`, excluding `node` itself.
    pub fn get_descendants(&self, node: &str) -> BTreeSet<Variable> {
        traversal::descendants(&self.inner, node)
    }

    /// Every simple directed path from `cause` to `effect`, within the configured caps.
    pub fn get_causal_paths(&self, cause: &str, effect: &str) -> Vec<Vec<Variable>> {
        self.get_causal_paths_bounded(cause, effect).paths
    }

    /// Like [`Self::get_causal_paths`] but also reports whether a cap truncated the search.
    pub fn get_causal_paths_bounded(&self, cause: &str, effect: &str) -> PathSearch {
        paths::enumerate(&self.inner, cause, effect, &self.config)
    }

    /// Strict path query: unknown endpoints and truncated searches are errors.
    pub fn try_causal_paths(&self, cause: &str, effect: &str) -> CausalResult<Vec<Vec<Variable>>> {
        for name in [cause, effect] {
            if !self.contains(name) {
                return Err(GraphError::UnknownVariable {
                    name: name.to_string(),
                }
                .into());
            }
        }
        let search = self.get_causal_paths_bounded(cause, effect);
        if search.truncated {
            return Err(GraphError::TraversalLimitExceeded {
                kind: "paths".to_string(),
                limit: self.config.max_paths,
            }
            .into());
        }
        Ok(search.paths)
    }

    pub fn find_confounders(&self, treatment: &str, outcome: &str) -> BTreeSet<Variable> {
        structure::confounders(self, treatment, outcome)
    }

    pub fn find_mediators(&self, cause: &str, effect: &str) -> BTreeSet<Variable> {
        structure::mediators(self, cause, effect)
    }

    pub fn find_colliders(&self, v1: &str, v2: &str) -> BTreeSet<Variable> {
        structure::colliders(self, v1, v2)
    }

    /// d-separation of `x` and `y` given `conditioning_set`, using the configured rule.
    pub fn is_d_separated(&self, x: &str, y: &str, conditioning_set: &BTreeSet<Variable>) -> bool {
        d_separation::is_d_separated(self, x, y, conditioning_set, self.config.d_separation)
    }

    /// Cycles currently present in the graph.
    pub fn find_cycles(&self) -> Vec<Vec<Variable>> {
        dag_enforcement::find_cycles(&self.inner)
    }

    // --- Snapshot ---

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::capture(self)
    }

    /// Rebuild a graph from a snapshot under the given config.
    pub fn from_snapshot(snapshot: &GraphSnapshot, config: GraphConfig) -> Self {
        snapshot.restore(config)
    }
}
