//! CausalReasoningEngine: owns the graph and observation log, coordinates
//! discovery, estimation, intervention, counterfactuals, and explanation.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use causal_core::config::CausalConfig;
use causal_core::errors::CausalResult;
use causal_core::models::{
    CausalEdge, CausalExplanation, CausalIntervention, Context, CounterfactualScenario,
    InterventionOutcome, Observation, ObservedValue, Variable,
};
use causal_core::traits::ICausalBackend;
use causal_core::{discovery_span, explain_span, intervention_span};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::discovery::{self, DiscoveryReport};
use crate::graph::CausalGraph;
use crate::{counterfactual, estimation, explanation, intervention, responsibility};

/// Size of the engine's state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    pub nodes: usize,
    pub edges: usize,
    pub observations: usize,
    pub interventions: usize,
    pub variables: usize,
}

/// The causal reasoning engine.
///
/// The observation log and intervention history only grow. Hosts needing
/// bounded memory should roll over the instance.
#[derive(Debug, Clone, Default)]
pub struct CausalReasoningEngine {
    graph: CausalGraph,
    observations: Vec<Observation>,
    /// Variables in the order they were first observed.
    variable_order: Vec<Variable>,
    seen: HashSet<Variable>,
    interventions: Vec<CausalIntervention>,
    config: CausalConfig,
}

impl CausalReasoningEngine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CausalConfig) -> Self {
        Self {
            graph: CausalGraph::with_config(config.graph.clone()),
            config,
            ..Self::default()
        }
    }

    // --- Accessors ---

    pub fn graph(&self) -> &CausalGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut CausalGraph {
        &mut self.graph
    }

    pub fn config(&self) -> &CausalConfig {
        &self.config
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }

    /// Every do-operation applied so far, oldest first.
    pub fn intervention_history(&self) -> &[CausalIntervention] {
        &self.interventions
    }

    /// Variables in first-observed order.
    pub fn variables(&self) -> &[Variable] {
        &self.variable_order
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            nodes: self.graph.node_count(),
            edges: self.graph.edge_count(),
            observations: self.observations.len(),
            interventions: self.interventions.len(),
            variables: self.variable_order.len(),
        }
    }

    // --- Graph construction ---

    /// Inject a domain-knowledge edge. Fails only under enforced acyclicity.
    pub fn add_domain_edge(&mut self, edge: CausalEdge) -> CausalResult<()> {
        tracing::debug!(cause = %edge.cause, effect = %edge.effect, "domain edge added");
        self.graph.insert_edge(edge)
    }

    /// Append observations and, once the log is large enough, rediscover edges
    /// from pairwise correlation over the whole log.
    pub fn learn_from_observations(
        &mut self,
        observations: impl IntoIterator<Item = Observation>,
    ) -> DiscoveryReport {
        for obs in observations {
            for key in obs.keys() {
                if self.seen.insert(key.clone()) {
                    self.variable_order.push(key.clone());
                }
            }
            self.observations.push(obs);
        }

        let span = discovery_span!(self.observations.len());
        let _guard = span.enter();
        let report = discovery::discover(
            &mut self.graph,
            &self.observations,
            &self.variable_order,
            &self.config.discovery,
        );
        if report.threshold_met {
            tracing::info!(
                pairs = report.pairs_evaluated,
                added = report.edges_added,
                rejected = report.edges_rejected,
                "discovery pass complete"
            );
        }
        report
    }

    // --- Estimation ---

    /// Effect of `treatment` on `outcome`. The adjustment set is only applied
    /// when backdoor adjustment is enabled in configuration.
    pub fn estimate_causal_effect(
        &self,
        treatment: &str,
        outcome: &str,
        adjustment_set: Option<&BTreeSet<Variable>>,
    ) -> f64 {
        estimation::estimate(
            &self.observations,
            treatment,
            outcome,
            adjustment_set,
            &self.config.estimation,
        )
    }

    // --- Interventions ---

    /// Apply `do(variable = value)`, record it, and predict effects on descendants.
    pub fn do_intervention(
        &mut self,
        variable: &str,
        value: ObservedValue,
        context: Option<&Context>,
    ) -> InterventionOutcome {
        let span = intervention_span!(variable);
        let _guard = span.enter();

        self.interventions.push(CausalIntervention {
            variable: variable.to_string(),
            value: value.clone(),
            timestamp: Utc::now(),
            context: context.cloned().unwrap_or_default(),
        });

        let effects = intervention::propagate(&self.graph, variable, &self.config.intervention);
        tracing::debug!(descendants = effects.len(), "intervention applied");
        InterventionOutcome {
            variable: variable.to_string(),
            value,
            effects,
        }
    }

    /// Build a counterfactual scenario by applying each intervention in turn.
    pub fn generate_counterfactual(
        &mut self,
        description: &str,
        interventions: Vec<(Variable, ObservedValue)>,
        observed_outcome: Option<Context>,
    ) -> CounterfactualScenario {
        let outcomes: Vec<InterventionOutcome> = interventions
            .iter()
            .map(|(variable, value)| self.do_intervention(variable, value.clone(), None))
            .collect();
        counterfactual::build_scenario(
            description,
            interventions,
            &outcomes,
            observed_outcome,
            self.config.intervention.counterfactual_probability,
        )
    }

    // --- Explanation ---

    /// Explain why `outcome_variable` took `outcome_value`, given the context.
    pub fn explain_outcome(
        &self,
        outcome_variable: &str,
        outcome_value: &ObservedValue,
        context: &Context,
    ) -> CausalExplanation {
        let span = explain_span!(outcome_variable);
        let _guard = span.enter();
        explanation::explain(
            &self.graph,
            &self.observations,
            outcome_variable,
            outcome_value,
            context,
            &self.config.estimation,
        )
    }

    /// Normalised responsibility of each agent for the outcome.
    pub fn assess_responsibility(
        &self,
        outcome: &str,
        agents: &[Variable],
        context: &Context,
    ) -> BTreeMap<Variable, f64> {
        tracing::debug!(outcome, agents = agents.len(), context = context.len(), "assessing responsibility");
        responsibility::assess(
            &self.graph,
            &self.observations,
            outcome,
            agents,
            &self.config.estimation,
        )
    }
}

impl ICausalBackend for CausalReasoningEngine {
    fn explain_outcome(
        &self,
        outcome_variable: &str,
        outcome_value: &ObservedValue,
        context: &Context,
    ) -> CausalResult<CausalExplanation> {
        Ok(CausalReasoningEngine::explain_outcome(
            self,
            outcome_variable,
            outcome_value,
            context,
        ))
    }

    fn do_intervention(
        &mut self,
        variable: &str,
        value: ObservedValue,
        context: Option<&Context>,
    ) -> CausalResult<InterventionOutcome> {
        Ok(CausalReasoningEngine::do_intervention(
            self, variable, value, context,
        ))
    }

    fn observation_count(&self) -> usize {
        CausalReasoningEngine::observation_count(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(pairs: &[(&str, ObservedValue)]) -> Observation {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn variables_tracked_in_first_observed_order() {
        let mut engine = CausalReasoningEngine::new();
        engine.learn_from_observations(vec![
            obs(&[("z", 1.into()), ("a", 2.into())]),
            obs(&[("m", 1.into()), ("a", 3.into())]),
        ]);
        assert_eq!(engine.variables(), ["a", "z", "m"]);
        assert_eq!(engine.observation_count(), 2);
    }

    #[test]
    fn interventions_are_recorded() {
        let mut engine = CausalReasoningEngine::new();
        engine
            .add_domain_edge(CausalEdge::new("a", "b", 0.4, 0.9))
            .unwrap();
        let ctx: Context = obs(&[("reason", "test".into())]);
        let outcome = engine.do_intervention("a", 1.into(), Some(&ctx));
        assert_eq!(outcome.effect("b").unwrap().expected_change, 0.4);
        assert_eq!(engine.intervention_history().len(), 1);
        assert_eq!(engine.intervention_history()[0].context, ctx);
        assert_eq!(engine.stats().interventions, 1);
    }

    #[test]
    fn backend_trait_delegates() {
        let mut engine = CausalReasoningEngine::new();
        let backend: &mut dyn ICausalBackend = &mut engine;
        assert!(backend.do_intervention("x", true.into(), None).is_ok());
        assert_eq!(backend.observation_count(), 0);
        let explanation = backend
            .explain_outcome("y", &1.into(), &Context::new())
            .unwrap();
        assert!(explanation.actual_causes.is_empty());
        assert_eq!(explanation.confidence, 0.1);
    }
}
