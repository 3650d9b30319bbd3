//! Property tests for graph and engine invariants on random (possibly cyclic) graphs.

use proptest::prelude::*;

use causal_core::config::GraphConfig;
use causal_core::models::{Observation, ObservedValue};
use causal_engine::{CausalGraph, CausalReasoningEngine};

fn node(i: usize) -> String {
    format!("n{i}")
}

/// Build a random graph over `n` nodes. Cycles and self-loops are allowed.
fn build_random_graph(edges: &[(usize, usize, f64)]) -> CausalGraph {
    let mut graph = CausalGraph::new();
    for &(src, tgt, strength) in edges {
        graph.add_edge(&node(src), &node(tgt), strength, 0.5).unwrap();
    }
    graph
}

// Strategy to generate random edges for a graph of size n.
fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    prop::collection::vec((0..n, 0..n, 0.0_f64..=1.0_f64), 0..n * 2)
}

// =============================================================================
// Edge registration
// =============================================================================
proptest! {
    #[test]
    fn added_edges_are_registered_both_ways(edges in edge_strategy(12)) {
        let graph = build_random_graph(&edges);
        for &(src, tgt, _) in &edges {
            prop_assert!(graph.get_direct_effects(&node(src)).contains(&node(tgt)));
            prop_assert!(graph.get_direct_causes(&node(tgt)).contains(&node(src)));
        }
        // Nodes exist exactly while they take part in an edge.
        for name in graph.nodes() {
            prop_assert!(
                !graph.get_direct_causes(&name).is_empty() || !graph.get_direct_effects(&name).is_empty()
            );
        }
    }
}

// =============================================================================
// Descendant transitivity
// =============================================================================
proptest! {
    #[test]
    fn descendants_are_transitive(edges in edge_strategy(10)) {
        let graph = build_random_graph(&edges);
        for a in graph.nodes() {
            let of_a = graph.get_descendants(&a);
            for b in &of_a {
                for c in graph.get_descendants(b) {
                    prop_assert!(c == a || of_a.contains(&c), "{c} reachable from {b} but not from {a}");
                }
            }
        }
    }
}

// =============================================================================
// Confounder identity
// =============================================================================
proptest! {
    #[test]
    fn confounders_are_common_ancestors(edges in edge_strategy(10), t in 0usize..10, o in 0usize..10) {
        let graph = build_random_graph(&edges);
        let (t, o) = (node(t), node(o));
        let expected: std::collections::BTreeSet<String> = graph
            .get_ancestors(&t)
            .intersection(&graph.get_ancestors(&o))
            .cloned()
            .collect();
        prop_assert_eq!(graph.find_confounders(&t, &o), expected);
    }
}

// =============================================================================
// Path enumeration stays within caps and yields simple paths
// =============================================================================
proptest! {
    #[test]
    fn paths_are_simple_and_capped(
        edges in edge_strategy(8),
        max_paths in 1usize..6,
        max_path_depth in 1usize..5,
    ) {
        let config = GraphConfig { max_paths, max_path_depth, ..GraphConfig::default() };
        let graph = CausalGraph::from_snapshot(&build_random_graph(&edges).snapshot(), config);
        for a in graph.nodes() {
            for b in graph.nodes() {
                let search = graph.get_causal_paths_bounded(&a, &b);
                prop_assert!(search.paths.len() <= max_paths);
                for path in &search.paths {
                    let unique: std::collections::BTreeSet<_> = path.iter().collect();
                    prop_assert_eq!(unique.len(), path.len());
                    prop_assert!(path.len() <= max_path_depth + 1);
                    prop_assert_eq!(path.first(), Some(&a));
                    prop_assert_eq!(path.last(), Some(&b));
                }
            }
        }
    }
}

// =============================================================================
// Snapshot round-trip
// =============================================================================
proptest! {
    #[test]
    fn snapshot_roundtrip_preserves_adjacency(edges in edge_strategy(10)) {
        let graph = build_random_graph(&edges);
        let json = graph.snapshot().to_json().unwrap();
        let snapshot = causal_engine::GraphSnapshot::from_json(&json).unwrap();
        let restored = CausalGraph::from_snapshot(&snapshot, GraphConfig::default());
        for name in graph.nodes() {
            prop_assert_eq!(restored.get_direct_causes(&name), graph.get_direct_causes(&name));
            prop_assert_eq!(restored.get_direct_effects(&name), graph.get_direct_effects(&name));
        }
    }
}

// =============================================================================
// Discovery threshold
// =============================================================================
proptest! {
    #[test]
    fn no_edges_below_ten_observations(
        rows in prop::collection::vec((-100.0_f64..100.0, -100.0_f64..100.0), 0..10),
    ) {
        let mut engine = CausalReasoningEngine::new();
        for (x, y) in rows {
            let obs: Observation = [
                ("x".to_string(), ObservedValue::from(x)),
                ("y".to_string(), ObservedValue::from(x * 2.0 + y * 0.01)),
            ]
            .into_iter()
            .collect();
            let report = engine.learn_from_observations(vec![obs]);
            prop_assert!(!report.threshold_met);
            prop_assert!(engine.graph().is_empty());
        }
    }
}
