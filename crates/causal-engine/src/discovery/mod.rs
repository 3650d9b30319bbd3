//! Statistical edge discovery from the observation log.
//!
//! Correlation is a placeholder for causal discovery: any pair of numeric
//! variables with |r| above the threshold gets an edge, oriented by temporal
//! companions or by first-observed order.

pub mod correlation;
pub mod direction;

use causal_core::config::DiscoveryConfig;
use causal_core::models::{CausalEdge, Observation, Variable};
use causal_core::tracing_setup::events;
use serde::{Deserialize, Serialize};

use crate::graph::CausalGraph;
use correlation::PairedSamples;

/// What one discovery pass did.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryReport {
    /// Observations in the log after appending the new batch.
    pub observations_total: usize,
    /// Whether the log was large enough for discovery to run.
    pub threshold_met: bool,
    /// Pairs with enough co-occurring numeric samples to correlate.
    pub pairs_evaluated: usize,
    pub edges_added: usize,
    /// Edges refused by acyclicity enforcement.
    pub edges_rejected: usize,
    /// Values present but not readable as numbers.
    pub values_skipped: usize,
}

/// Run one discovery pass over the whole log.
pub fn discover(
    graph: &mut CausalGraph,
    observations: &[Observation],
    variable_order: &[Variable],
    config: &DiscoveryConfig,
) -> DiscoveryReport {
    let mut report = DiscoveryReport {
        observations_total: observations.len(),
        ..DiscoveryReport::default()
    };
    if observations.len() < config.min_observations {
        tracing::debug!(
            observations = observations.len(),
            required = config.min_observations,
            "not enough observations for discovery"
        );
        return report;
    }
    report.threshold_met = true;

    let variables: Vec<&Variable> = variable_order
        .iter()
        .filter(|v| !direction::is_time_key(v, &config.time_suffix))
        .collect();

    report.values_skipped = count_unparseable(observations, &variables);
    if report.values_skipped > 0 {
        events::input_degraded(
            "discovery",
            &format!("{} non-numeric values skipped", report.values_skipped),
        );
    }

    for (i, first) in variables.iter().enumerate() {
        for second in &variables[i + 1..] {
            let samples = PairedSamples::collect(observations, first, second);
            if samples.len() < config.min_pair_samples {
                continue;
            }
            report.pairs_evaluated += 1;

            let Some(r) = correlation::pearson(&samples.xs, &samples.ys) else {
                continue;
            };
            if r.abs() <= config.correlation_threshold {
                continue;
            }

            let (cause, effect) =
                direction::determine_direction(first, second, observations, &config.time_suffix);
            let edge = CausalEdge::new(cause, effect, r.abs(), config.edge_confidence)
                .with_evidence(vec![format!(
                    "pearson r = {r:.3} over {} observations",
                    samples.len()
                )]);

            match graph.insert_edge(edge) {
                Ok(()) => {
                    report.edges_added += 1;
                    events::edge_discovered(cause, effect, r.abs(), samples.len());
                }
                Err(e) => {
                    report.edges_rejected += 1;
                    tracing::debug!(cause, effect, error = %e, "discovered edge rejected");
                }
            }
        }
    }

    report
}

fn count_unparseable(observations: &[Observation], variables: &[&Variable]) -> usize {
    observations
        .iter()
        .flat_map(|obs| variables.iter().filter_map(move |v| obs.get(v.as_str())))
        .filter(|value| !value.is_null() && value.as_f64().is_none())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use causal_core::config::GraphConfig;
    use causal_core::models::ObservedValue;

    fn linear(n: usize) -> Vec<Observation> {
        (0..n)
            .map(|i| {
                let mut obs = Observation::new();
                obs.insert("x".to_string(), ObservedValue::from(i as f64));
                obs.insert("y".to_string(), ObservedValue::from(2.0 * i as f64 + 1.0));
                obs.insert("noise".to_string(), ObservedValue::from(((i * 7) % 3) as f64));
                obs
            })
            .collect()
    }

    fn order() -> Vec<Variable> {
        vec!["x".into(), "y".into(), "noise".into()]
    }

    #[test]
    fn below_threshold_leaves_graph_untouched() {
        let mut graph = CausalGraph::new();
        let report = discover(&mut graph, &linear(9), &order(), &DiscoveryConfig::default());
        assert!(!report.threshold_met);
        assert!(graph.is_empty());
    }

    #[test]
    fn strong_pair_gets_edge_in_first_observed_order() {
        let mut graph = CausalGraph::new();
        let report = discover(&mut graph, &linear(12), &order(), &DiscoveryConfig::default());
        assert!(report.threshold_met);
        assert_eq!(report.pairs_evaluated, 3);
        let edge = graph.get_edge("x", "y").unwrap();
        assert!((edge.strength - 1.0).abs() < 1e-9);
        assert_eq!(edge.confidence, 0.7);
        assert!(graph.get_edge("y", "x").is_none());
    }

    #[test]
    fn reversed_order_reverses_direction() {
        let mut graph = CausalGraph::new();
        let order = vec!["y".to_string(), "x".to_string()];
        discover(&mut graph, &linear(12), &order, &DiscoveryConfig::default());
        assert!(graph.get_edge("y", "x").is_some());
    }

    #[test]
    fn rejected_edges_are_counted() {
        let mut graph = CausalGraph::with_config(GraphConfig {
            enforce_acyclic: true,
            ..GraphConfig::default()
        });
        graph.add_edge("y", "x", 0.5, 0.5).unwrap();
        let report = discover(&mut graph, &linear(12), &order(), &DiscoveryConfig::default());
        assert_eq!(report.edges_rejected, 1);
    }
}
