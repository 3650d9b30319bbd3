//! Effect propagation for `do(variable = value)`.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use causal_core::config::{InterventionConfig, PropagationMode};
use causal_core::models::{PredictedEffect, Variable};
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::graph::CausalGraph;

/// Predicted effect on every descendant of `variable`.
///
/// Direct effects carry the edge strength. Indirect descendants get 0.0 under
/// `DirectOnly`, or the strongest product of strengths along any path under
/// `StrongestPath`.
pub fn propagate(
    graph: &CausalGraph,
    variable: &str,
    config: &InterventionConfig,
) -> BTreeMap<Variable, PredictedEffect> {
    let strongest = match config.propagation {
        PropagationMode::DirectOnly => HashMap::new(),
        PropagationMode::StrongestPath => strongest_products(graph, variable),
    };

    graph
        .get_descendants(variable)
        .into_iter()
        .map(|descendant| {
            let expected_change = match graph.get_edge(variable, &descendant) {
                Some(edge) => edge.strength,
                None => strongest.get(&descendant).copied().unwrap_or(0.0),
            };
            (
                descendant,
                PredictedEffect {
                    expected_change,
                    confidence: config.effect_confidence,
                },
            )
        })
        .collect()
}

#[derive(PartialEq)]
struct Candidate {
    product: f64,
    node: NodeIndex,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.product
            .total_cmp(&other.product)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-product search from `source`. Strengths are clamped to [0, 1], so a
/// product can only shrink along a path and the first settlement is the best.
fn strongest_products(graph: &CausalGraph, source: &str) -> HashMap<Variable, f64> {
    let indexed = graph.indexed();
    let mut best: HashMap<NodeIndex, f64> = HashMap::new();
    let Some(start) = indexed.get_node(source) else {
        return HashMap::new();
    };

    let mut settled = HashMap::new();
    let mut heap = BinaryHeap::new();
    heap.push(Candidate {
        product: 1.0,
        node: start,
    });

    while let Some(Candidate { product, node }) = heap.pop() {
        if settled.insert(node, product).is_some() {
            continue;
        }
        for edge in indexed.graph.edges_directed(node, Direction::Outgoing) {
            let next = edge.target();
            if settled.contains_key(&next) {
                continue;
            }
            let candidate = product * edge.weight().strength.clamp(0.0, 1.0);
            let known = best.entry(next).or_insert(f64::NEG_INFINITY);
            if candidate > *known {
                *known = candidate;
                heap.push(Candidate {
                    product: candidate,
                    node: next,
                });
            }
        }
    }

    settled
        .into_iter()
        .filter(|(idx, _)| *idx != start)
        .filter_map(|(idx, product)| indexed.name(idx).map(|name| (name.to_string(), product)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rain_graph() -> CausalGraph {
        let mut g = CausalGraph::new();
        g.add_edge("rain", "wet_ground", 0.9, 0.8).unwrap();
        g.add_edge("wet_ground", "slip", 0.7, 0.6).unwrap();
        g
    }

    #[test]
    fn direct_only_zeroes_transitive_descendants() {
        let effects = propagate(&rain_graph(), "rain", &InterventionConfig::default());
        assert_eq!(effects.len(), 2);
        assert_eq!(effects["wet_ground"].expected_change, 0.9);
        assert_eq!(effects["slip"].expected_change, 0.0);
        assert_eq!(effects["slip"].confidence, 0.6);
    }

    #[test]
    fn strongest_path_multiplies_strengths() {
        let config = InterventionConfig {
            propagation: PropagationMode::StrongestPath,
            ..InterventionConfig::default()
        };
        let mut g = rain_graph();
        g.add_edge("rain", "cloud", 0.5, 0.5).unwrap();
        g.add_edge("cloud", "slip", 0.2, 0.5).unwrap();
        let effects = propagate(&g, "rain", &config);
        assert!((effects["slip"].expected_change - 0.63).abs() < 1e-9);
        assert_eq!(effects["wet_ground"].expected_change, 0.9);
    }

    #[test]
    fn cyclic_graph_terminates() {
        let config = InterventionConfig {
            propagation: PropagationMode::StrongestPath,
            ..InterventionConfig::default()
        };
        let mut g = rain_graph();
        g.add_edge("slip", "rain", 0.5, 0.5).unwrap();
        let effects = propagate(&g, "rain", &config);
        assert!(!effects.contains_key("rain"));
        assert_eq!(effects.len(), 2);
    }

    #[test]
    fn unknown_variable_has_no_effects() {
        assert!(propagate(&CausalGraph::new(), "nothing", &InterventionConfig::default()).is_empty());
    }
}
