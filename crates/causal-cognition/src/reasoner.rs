//! CognitiveCausalReasoner: six-phase explanation pipeline with a reasoning trace.
//!
//! 1. base explanation from the backend
//! 2. per-cause confidence
//! 3. necessity and sufficiency
//! 4. contributing factors
//! 5. alternative explanations
//! 6. overall confidence

use causal_core::config::CognitionConfig;
use causal_core::models::{
    AlternativeExplanation, CausalExplanation, CausalHypothesis, CauseContribution,
    ConfidentCause, Context, CounterfactualComparison, EnhancedCausalExplanation, EvidenceQuality,
    ObservedValue, Variable,
};
use causal_core::traits::{ICausalBackend, NoOpBackend};
use causal_core::tracing_setup::events;
use causal_core::cognition_span;

use crate::{alternatives, comparison, confidence, diagnostics, evidence, refinement};

/// Metacognitive reasoner over a causal backend.
pub struct CognitiveCausalReasoner {
    backend: Box<dyn ICausalBackend>,
    config: CognitionConfig,
}

impl CognitiveCausalReasoner {
    pub fn new(backend: Box<dyn ICausalBackend>) -> Self {
        Self::with_config(backend, CognitionConfig::default())
    }

    pub fn with_config(backend: Box<dyn ICausalBackend>, config: CognitionConfig) -> Self {
        Self { backend, config }
    }

    /// A reasoner with no backend. Explanations carry no causes.
    pub fn disabled() -> Self {
        Self::new(Box::new(NoOpBackend))
    }

    pub fn backend(&self) -> &dyn ICausalBackend {
        self.backend.as_ref()
    }

    pub fn backend_mut(&mut self) -> &mut dyn ICausalBackend {
        self.backend.as_mut()
    }

    pub fn config(&self) -> &CognitionConfig {
        &self.config
    }

    /// Explain `outcome_variable = outcome_value` with confidence, alternatives, and a trace.
    pub fn explain_with_reasoning(
        &self,
        outcome_variable: &str,
        outcome_value: &ObservedValue,
        context: &Context,
    ) -> EnhancedCausalExplanation {
        let span = cognition_span!(outcome_variable);
        let _guard = span.enter();
        let mut trace = Vec::with_capacity(6);

        // Phase 1
        let base = match self.backend.explain_outcome(outcome_variable, outcome_value, context) {
            Ok(base) => {
                trace.push(format!(
                    "Phase 1: retrieved base explanation with {} candidate cause(s)",
                    base.actual_causes.len()
                ));
                base
            }
            Err(e) => {
                events::backend_unavailable("explain_outcome", &e.to_string());
                trace.push(format!("Phase 1: causal backend unavailable ({e}); proceeding without causes"));
                CausalExplanation::empty(outcome_variable, outcome_value.clone())
            }
        };

        // Phase 2
        let quality = self.assess_evidence_quality(context);
        let causes: Vec<CauseContribution> = base
            .actual_causes
            .iter()
            .map(|c| CauseContribution {
                variable: c.variable.clone(),
                contribution: c.contribution,
                confidence: self.assess_cause_confidence(c, quality, context),
            })
            .collect();
        trace.push(format!(
            "Phase 2: scored {} cause(s) under {quality} evidence",
            causes.len()
        ));

        // Phase 3
        let necessary_causes = self.confident(&base.necessary_causes, self.config.necessity_confidence);
        let sufficient_causes =
            self.confident(&base.sufficient_causes, self.config.sufficiency_confidence);
        trace.push(format!(
            "Phase 3: {} necessary and {} sufficient cause(s)",
            necessary_causes.len(),
            sufficient_causes.len()
        ));

        // Phase 4
        let contributing_factors: Vec<CauseContribution> = base
            .contributing_factors
            .iter()
            .filter_map(|name| causes.iter().find(|c| &c.variable == name).cloned())
            .collect();
        trace.push(format!(
            "Phase 4: {} contributing factor(s)",
            contributing_factors.len()
        ));

        // Phase 5
        let alternative_explanations = self.generate_alternatives(outcome_variable, &causes);
        trace.push(format!(
            "Phase 5: generated {} alternative explanation(s)",
            alternative_explanations.len()
        ));

        // Phase 6
        let overall_confidence =
            confidence::overall_confidence(&causes, quality, alternative_explanations.len());
        trace.push(format!("Phase 6: overall confidence {overall_confidence:.2}"));

        let identified_gaps = self.identify_gaps(&causes, context);
        let assumptions = self.state_assumptions(quality, context);

        tracing::debug!(
            causes = causes.len(),
            quality = %quality,
            confidence = overall_confidence,
            gaps = identified_gaps.len(),
            "reasoned explanation complete"
        );

        EnhancedCausalExplanation {
            outcome: base.description,
            primary_explanation: base.primary_explanation,
            causes,
            necessary_causes,
            sufficient_causes,
            contributing_factors,
            alternative_explanations,
            overall_confidence,
            evidence_quality: quality,
            reasoning_trace: trace,
            identified_gaps,
            assumptions,
        }
    }

    fn confident(&self, names: &[Variable], confidence: f64) -> Vec<ConfidentCause> {
        names
            .iter()
            .map(|variable| ConfidentCause {
                variable: variable.clone(),
                confidence,
            })
            .collect()
    }

    /// Observations behind the context's claims, falling back to the backend's log size.
    fn observation_count(&self, context: &Context) -> u64 {
        evidence::observation_count(context, self.backend.observation_count())
    }

    pub fn assess_evidence_quality(&self, context: &Context) -> EvidenceQuality {
        evidence::classify(context, self.backend.observation_count())
    }

    pub fn assess_cause_confidence(
        &self,
        cause: &CauseContribution,
        quality: EvidenceQuality,
        context: &Context,
    ) -> f64 {
        confidence::cause_confidence(
            cause.contribution,
            quality,
            context.contains_key(&cause.variable),
        )
    }

    pub fn generate_alternatives(
        &self,
        outcome: &str,
        causes: &[CauseContribution],
    ) -> Vec<AlternativeExplanation> {
        alternatives::generate(outcome, causes)
    }

    pub fn identify_gaps(&self, causes: &[CauseContribution], context: &Context) -> Vec<String> {
        diagnostics::identify_gaps(
            causes,
            context,
            self.observation_count(context),
            self.config.explained_share_threshold,
            self.config.small_sample_threshold,
        )
    }

    pub fn state_assumptions(&self, quality: EvidenceQuality, context: &Context) -> Vec<String> {
        diagnostics::state_assumptions(quality, context)
    }

    /// Compare `factual` with the world after applying `interventions`.
    pub fn compare_counterfactuals(
        &mut self,
        factual: &Context,
        interventions: Vec<(Variable, ObservedValue)>,
        variables_of_interest: Option<&[Variable]>,
    ) -> CounterfactualComparison {
        comparison::compare(
            self.backend.as_mut(),
            factual,
            interventions,
            variables_of_interest,
        )
    }

    /// Revised copy of `hypothesis` in light of `new_evidence`.
    pub fn refine_causal_hypothesis(
        &self,
        hypothesis: &CausalHypothesis,
        new_evidence: &Context,
    ) -> CausalHypothesis {
        refinement::refine(hypothesis, new_evidence)
    }
}

impl std::fmt::Debug for CognitiveCausalReasoner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CognitiveCausalReasoner")
            .field("observations", &self.backend.observation_count())
            .field("config", &self.config)
            .finish()
    }
}
