//! Chain confidence: 60% weakest edge + 40% average, with a depth penalty.

use crate::graph::CausalGraph;

/// Confidence of a causal chain given its per-edge confidences.
///
/// Formula: (0.6 * min + 0.4 * avg) * 0.95^depth.
pub fn chain_confidence(edge_confidences: &[f64], depth: usize) -> f64 {
    if edge_confidences.is_empty() {
        return 0.0;
    }

    let min = edge_confidences.iter().copied().fold(f64::INFINITY, f64::min);
    let avg = edge_confidences.iter().sum::<f64>() / edge_confidences.len() as f64;

    let base = 0.6 * min + 0.4 * avg;
    let depth_penalty = 0.95_f64.powi(depth as i32);

    (base * depth_penalty).clamp(0.0, 1.0)
}

/// Confidence that `cause` acts on `effect`: the direct edge's confidence if
/// there is one, else the most confident chain among enumerated paths.
pub fn cause_confidence(graph: &CausalGraph, cause: &str, effect: &str) -> f64 {
    if let Some(edge) = graph.get_edge(cause, effect) {
        return edge.confidence.clamp(0.0, 1.0);
    }

    graph
        .get_causal_paths(cause, effect)
        .iter()
        .map(|path| {
            let confidences: Vec<f64> = path
                .windows(2)
                .filter_map(|w| graph.get_edge(&w[0], &w[1]).map(|e| e.confidence))
                .collect();
            chain_confidence(&confidences, confidences.len())
        })
        .fold(0.0, f64::max)
}
