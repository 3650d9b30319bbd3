//! Prune weak edges (strength < threshold) and the nodes they leave behind.

use petgraph::stable_graph::EdgeIndex;

use super::stable_graph::IndexedGraph;

/// Result of a pruning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneResult {
    /// Number of edges removed.
    pub edges_removed: usize,
    /// Number of orphaned nodes removed.
    pub nodes_removed: usize,
}

/// Prune all edges with strength below the threshold.
pub fn prune_weak_edges(graph: &mut IndexedGraph, min_strength: f64) -> PruneResult {
    let weak: Vec<EdgeIndex> = graph
        .graph
        .edge_indices()
        .filter(|&idx| {
            graph
                .graph
                .edge_weight(idx)
                .is_some_and(|w| w.strength < min_strength)
        })
        .collect();

    let edges_removed = weak.len();
    for idx in weak {
        graph.graph.remove_edge(idx);
    }

    let nodes_removed = remove_orphaned_nodes(graph);

    PruneResult {
        edges_removed,
        nodes_removed,
    }
}

/// Remove nodes with no incoming or outgoing edges.
pub fn remove_orphaned_nodes(graph: &mut IndexedGraph) -> usize {
    let orphans: Vec<String> = graph
        .graph
        .node_indices()
        .filter(|&idx| graph.is_isolated(idx))
        .filter_map(|idx| graph.name(idx).map(str::to_string))
        .collect();

    let count = orphans.len();
    for name in &orphans {
        graph.remove_node(name);
    }
    count
}
