//! petgraph::StableGraph wrapper keyed by variable name.

use std::collections::HashMap;

use causal_core::models::{CausalEdge, Variable};
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

/// The underlying directed graph type. Node weights are variable names.
pub type CausalStableGraph = StableGraph<Variable, CausalEdge, Directed>;

/// Wrapper providing indexed access to the causal graph.
#[derive(Debug, Clone, Default)]
pub struct IndexedGraph {
    /// The petgraph stable graph.
    pub graph: CausalStableGraph,
    /// Map from variable name → NodeIndex for O(1) lookup.
    pub node_index: HashMap<Variable, NodeIndex>,
}

impl IndexedGraph {
    /// Create an empty indexed graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node for a variable.
    pub fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_index.insert(name.to_string(), idx);
        idx
    }

    /// Look up a node index by variable name.
    pub fn get_node(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(name).copied()
    }

    /// Variable name stored at an index.
    pub fn name(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Remove a node and all its edges.
    pub fn remove_node(&mut self, name: &str) -> bool {
        if let Some(idx) = self.node_index.remove(name) {
            self.graph.remove_node(idx);
            true
        } else {
            false
        }
    }

    /// Whether a node has neither incoming nor outgoing edges.
    pub fn is_isolated(&self, idx: NodeIndex) -> bool {
        use petgraph::Direction;
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
            .is_none()
            && self
                .graph
                .neighbors_directed(idx, Direction::Outgoing)
                .next()
                .is_none()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
