//! d-separation tests.
//!
//! `Simplified` looks only at directed paths from `x` to `y` and treats a
//! path as blocked when it passes through a conditioned non-collider. It never unblocks a collider through a
//! conditioned descendant. `Full` is the textbook criterion, computed with
//! the reachability ("Bayes ball") procedure.

use std::collections::{BTreeSet, HashSet};

use causal_core::config::DSeparationMode;
use causal_core::models::Variable;
use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use crate::graph::CausalGraph;

pub fn is_d_separated(
    graph: &CausalGraph,
    x: &str,
    y: &str,
    conditioning_set: &BTreeSet<Variable>,
    mode: DSeparationMode,
) -> bool {
    match mode {
        DSeparationMode::Simplified => simplified(graph, x, y, conditioning_set),
        DSeparationMode::Full => full(graph, x, y, conditioning_set),
    }
}

fn simplified(graph: &CausalGraph, x: &str, y: &str, z: &BTreeSet<Variable>) -> bool {
    graph
        .get_causal_paths(x, y)
        .iter()
        .all(|path| path_blocked(graph, path, z))
}

fn path_blocked(graph: &CausalGraph, path: &[Variable], z: &BTreeSet<Variable>) -> bool {
    path.windows(3).any(|w| {
        let (prev, node, next) = (&w[0], &w[1], &w[2]);
        let collider = graph.get_edge(prev, node).is_some() && graph.get_edge(next, node).is_some();
        !collider && z.contains(node)
    })
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Travel {
    /// Arrived from a child, moving against edge direction.
    Up,
    /// Arrived from a parent, moving along edge direction.
    Down,
}

fn full(graph: &CausalGraph, x: &str, y: &str, z: &BTreeSet<Variable>) -> bool {
    let indexed = graph.indexed();
    let (Some(start), Some(target)) = (indexed.get_node(x), indexed.get_node(y)) else {
        return true;
    };
    if start == target {
        return false;
    }

    let observed: HashSet<NodeIndex> = z.iter().filter_map(|v| indexed.get_node(v)).collect();
    // Conditioned nodes and their ancestors: colliders among these are unblocked.
    let mut observed_or_ancestor = observed.clone();
    for v in z {
        observed_or_ancestor.extend(
            graph
                .get_ancestors(v)
                .iter()
                .filter_map(|a| indexed.get_node(a)),
        );
    }

    let mut visited: HashSet<(NodeIndex, Travel)> = HashSet::new();
    let mut stack = vec![(start, Travel::Up)];

    while let Some((node, travel)) = stack.pop() {
        if !visited.insert((node, travel)) {
            continue;
        }
        let is_observed = observed.contains(&node);
        if node == target && !is_observed {
            return false;
        }
        let parents = indexed.graph.neighbors_directed(node, Direction::Incoming);
        let children = indexed.graph.neighbors_directed(node, Direction::Outgoing);
        match travel {
            Travel::Up if !is_observed => {
                stack.extend(parents.map(|p| (p, Travel::Up)));
                stack.extend(children.map(|c| (c, Travel::Down)));
            }
            Travel::Up => {}
            Travel::Down => {
                if !is_observed {
                    stack.extend(children.map(|c| (c, Travel::Down)));
                }
                if observed_or_ancestor.contains(&node) {
                    stack.extend(parents.map(|p| (p, Travel::Up)));
                }
            }
        }
    }

    true
}
