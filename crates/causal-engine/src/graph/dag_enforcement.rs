//! Cycle detection. Only consulted when acyclicity is enforced; the default
//! graph accepts cycles and its traversals stay cycle-safe.

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::Dfs;

use causal_core::models::Variable;

use super::stable_graph::IndexedGraph;

/// Check whether adding an edge from `source` to `target` would create a cycle.
///
/// Returns `true` if a cycle would be created (edge should be rejected).
pub fn would_create_cycle(graph: &IndexedGraph, source: NodeIndex, target: NodeIndex) -> bool {
    // Self-loops are always cycles.
    if source == target {
        return true;
    }
    // Adding source→target closes a cycle iff target already reaches source.
    let mut dfs = Dfs::new(&graph.graph, target);
    while let Some(node) = dfs.next(&graph.graph) {
        if node == source {
            return true;
        }
    }
    false
}

/// All cycles in the graph: strongly connected components with more than one
/// node, plus self-loops. Members are sorted by name, components by first member.
pub fn find_cycles(graph: &IndexedGraph) -> Vec<Vec<Variable>> {
    let mut cycles: Vec<Vec<Variable>> = tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| {
            scc.len() > 1 || scc.iter().any(|&n| graph.graph.find_edge(n, n).is_some())
        })
        .map(|scc| {
            let mut names: Vec<Variable> = scc
                .into_iter()
                .filter_map(|idx| graph.name(idx).map(str::to_string))
                .collect();
            names.sort();
            names
        })
        .collect();
    cycles.sort();
    cycles
}
