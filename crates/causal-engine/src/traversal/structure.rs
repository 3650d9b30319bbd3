//! Structural roles relative to a pair of variables.

use std::collections::BTreeSet;

use causal_core::models::Variable;

use crate::graph::CausalGraph;

/// Common ancestors of treatment and outcome.
pub fn confounders(graph: &CausalGraph, treatment: &str, outcome: &str) -> BTreeSet<Variable> {
    let t = graph.get_ancestors(treatment);
    let o = graph.get_ancestors(outcome);
    t.intersection(&o).cloned().collect()
}

/// Interior nodes of every causal path from cause to effect.
pub fn mediators(graph: &CausalGraph, cause: &str, effect: &str) -> BTreeSet<Variable> {
    graph
        .get_causal_paths(cause, effect)
        .into_iter()
        .flat_map(|path| {
            let len = path.len();
            path.into_iter().take(len.saturating_sub(1)).skip(1)
        })
        .filter(|node| node != cause && node != effect)
        .collect()
}

/// Common descendants of both variables.
pub fn colliders(graph: &CausalGraph, v1: &str, v2: &str) -> BTreeSet<Variable> {
    let a = graph.get_descendants(v1);
    let b = graph.get_descendants(v2);
    a.intersection(&b).cloned().collect()
}
