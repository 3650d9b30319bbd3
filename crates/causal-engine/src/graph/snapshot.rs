//! Serializable edge-set snapshot. Rebuilding a graph from a snapshot
//! reproduces the same direct causes and effects for every node.

use causal_core::config::GraphConfig;
use causal_core::errors::CausalResult;
use causal_core::models::CausalEdge;
use serde::{Deserialize, Serialize};

use super::CausalGraph;

/// Plain edge list, sorted by (cause, effect).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub edges: Vec<CausalEdge>,
}

impl GraphSnapshot {
    /// Capture every edge of a graph.
    pub fn capture(graph: &CausalGraph) -> Self {
        Self {
            edges: graph.edges().into_iter().cloned().collect(),
        }
    }

    /// Rebuild a graph. Edges that acyclicity enforcement rejects are skipped.
    pub fn restore(&self, config: GraphConfig) -> CausalGraph {
        let mut graph = CausalGraph::with_config(config);
        for edge in &self.edges {
            if let Err(e) = graph.insert_edge(edge.clone()) {
                tracing::warn!(
                    cause = %edge.cause,
                    effect = %edge.effect,
                    error = %e,
                    "snapshot edge rejected on restore"
                );
            }
        }
        graph
    }

    pub fn to_json(&self) -> CausalResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> CausalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
