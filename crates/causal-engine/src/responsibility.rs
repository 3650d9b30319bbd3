//! Responsibility attribution across agents for an outcome.

use std::collections::BTreeMap;

use causal_core::config::EstimationConfig;
use causal_core::models::{Observation, Variable};

use crate::estimation;
use crate::graph::CausalGraph;

/// Share of responsibility per agent, normalised to sum to 1.
///
/// Raw score is `min(|effect of agent on outcome|, 1)`; agents absent from the
/// graph score 0. If every score is 0 the map is returned unnormalised.
pub fn assess(
    graph: &CausalGraph,
    observations: &[Observation],
    outcome: &str,
    agents: &[Variable],
    config: &EstimationConfig,
) -> BTreeMap<Variable, f64> {
    let mut scores: BTreeMap<Variable, f64> = agents
        .iter()
        .map(|agent| {
            let score = if graph.contains(agent) {
                estimation::estimate(observations, agent, outcome, None, config)
                    .abs()
                    .min(1.0)
            } else {
                0.0
            };
            (agent.clone(), score)
        })
        .collect();

    let total: f64 = scores.values().sum();
    if total > 0.0 {
        scores.values_mut().for_each(|s| *s /= total);
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use causal_core::models::ObservedValue;

    fn obs(pairs: &[(&str, ObservedValue)]) -> Observation {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn scores_normalise_and_absent_agents_get_zero() {
        let mut g = CausalGraph::new();
        g.add_edge("alice", "outage", 0.8, 0.7).unwrap();
        g.add_edge("bob", "outage", 0.3, 0.7).unwrap();
        let log = vec![
            obs(&[("alice", true.into()), ("bob", true.into()), ("outage", 1.into())]),
            obs(&[("alice", true.into()), ("bob", false.into()), ("outage", 1.into())]),
            obs(&[("alice", false.into()), ("bob", true.into()), ("outage", 0.into())]),
            obs(&[("alice", false.into()), ("bob", false.into()), ("outage", 0.into())]),
        ];
        let agents: Vec<Variable> = vec!["alice".into(), "bob".into(), "carol".into()];
        let scores = assess(&g, &log, "outage", &agents, &EstimationConfig::default());
        assert_eq!(scores["alice"], 1.0);
        assert_eq!(scores["bob"], 0.0);
        assert_eq!(scores["carol"], 0.0);
    }

    #[test]
    fn all_zero_is_left_as_is() {
        let agents: Vec<Variable> = vec!["a".into(), "b".into()];
        let scores = assess(&CausalGraph::new(), &[], "o", &agents, &EstimationConfig::default());
        assert_eq!(scores.values().sum::<f64>(), 0.0);
        assert_eq!(scores.len(), 2);
    }
}
