//! Cycle-safe traversal: ancestor/descendant closures, path enumeration,
//! structural roles, and d-separation.

pub mod d_separation;
pub mod paths;
pub mod structure;

use std::collections::{BTreeSet, HashSet, VecDeque};

use causal_core::models::Variable;
use petgraph::Direction;

use crate::graph::stable_graph::IndexedGraph;

pub use paths::PathSearch;

/// Nodes that can reach `node` (breadth-first over incoming edges).
pub fn ancestors(graph: &IndexedGraph, node: &str) -> BTreeSet<Variable> {
    reachable(graph, node, Direction::Incoming)
}

/// Nodes reachable from `node` (breadth-first over outgoing edges).
pub fn descendants(graph: &IndexedGraph, node: &str) -> BTreeSet<Variable> {
    reachable(graph, node, Direction::Outgoing)
}

fn reachable(graph: &IndexedGraph, node: &str, direction: Direction) -> BTreeSet<Variable> {
    let mut result = BTreeSet::new();
    let Some(start) = graph.get_node(node) else {
        return result;
    };

    let mut visited = HashSet::new();
    visited.insert(start);
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.graph.neighbors_directed(current, direction) {
            if visited.insert(neighbor) {
                if let Some(name) = graph.name(neighbor) {
                    result.insert(name.to_string());
                }
                queue.push_back(neighbor);
            }
        }
    }

    result
}
