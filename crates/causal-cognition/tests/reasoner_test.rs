//! End-to-end reasoning over a real engine and over a disabled backend.

use causal_cognition::{reasoner_from_config, CognitiveCausalReasoner};
use causal_core::config::CausalConfig;
use causal_core::models::{CausalEdge, CausalHypothesis, Context, EvidenceQuality, Observation, ObservedValue};
use causal_engine::CausalReasoningEngine;
use serde_json::Value;
use test_fixtures::load_fixture_value;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn ctx(pairs: &[(&str, ObservedValue)]) -> Context {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

fn sprinkler_engine() -> (CausalReasoningEngine, Value) {
    let fixture = load_fixture_value("golden/causal/explanation.json");
    let mut engine = CausalReasoningEngine::new();
    for edge in fixture["edges"].as_array().unwrap() {
        let edge: CausalEdge = serde_json::from_value(edge.clone()).unwrap();
        engine.add_domain_edge(edge).unwrap();
    }
    let observations: Vec<Observation> =
        serde_json::from_value(fixture["observations"].clone()).unwrap();
    engine.learn_from_observations(observations);
    (engine, fixture)
}

#[test]
fn pipeline_over_engine() {
    let (engine, fixture) = sprinkler_engine();
    let context: Context = serde_json::from_value(fixture["context"].clone()).unwrap();
    let reasoner = CognitiveCausalReasoner::new(Box::new(engine));

    let result = reasoner.explain_with_reasoning("slip", &1.into(), &context);

    assert_eq!(result.reasoning_trace.len(), 6);
    for (i, line) in result.reasoning_trace.iter().enumerate() {
        assert!(line.starts_with(&format!("Phase {}", i + 1)), "{line}");
    }

    // Eight observations and no hints.
    assert_eq!(result.evidence_quality, EvidenceQuality::Speculative);

    let names: Vec<&str> = result.causes.iter().map(|c| c.variable.as_str()).collect();
    assert_eq!(names, ["wet_ground", "rain", "sprinkler"]);
    assert!(close(result.causes[0].confidence, 0.8));
    assert!(close(result.causes[1].confidence, 0.75));
    assert!(close(result.causes[2].confidence, 0.68));

    assert_eq!(result.necessary_causes.len(), 3);
    assert!(result.necessary_causes.iter().all(|c| c.confidence == 0.6));
    assert!(result.sufficient_causes.is_empty());
    assert_eq!(result.contributing_factors.len(), 3);

    assert_eq!(result.alternative_explanations.len(), 4);
    let expected = (0.8 + 0.75 + 0.68) / 3.0 * 0.5 * 0.9;
    assert!(close(result.overall_confidence, expected), "{}", result.overall_confidence);

    assert_eq!(result.identified_gaps.len(), 2);
    assert!(result.identified_gaps[1].contains("8 observations"));
    assert_eq!(result.assumptions.len(), 4);
    assert_eq!(result.primary_explanation, fixture["expected"]["primary_explanation"]);
    assert_eq!(result.outcome, "slip = 1");
}

#[test]
fn disabled_backend_degrades_to_empty_explanation() {
    let reasoner = CognitiveCausalReasoner::disabled();
    let result = reasoner.explain_with_reasoning("slip", &true.into(), &Context::new());

    assert!(result.causes.is_empty());
    assert_eq!(result.overall_confidence, 0.1);
    assert_eq!(result.reasoning_trace.len(), 6);
    assert!(result.reasoning_trace[0].contains("unavailable"));
    assert_eq!(result.evidence_quality, EvidenceQuality::Speculative);
    // Confounder and chance only.
    assert_eq!(result.alternative_explanations.len(), 2);
    assert_eq!(result.identified_gaps.len(), 3);
    assert!(result.identified_gaps[0].contains("0%"));
}

#[test]
fn context_hints_override_backend_observation_count() {
    let (engine, _) = sprinkler_engine();
    let reasoner = CognitiveCausalReasoner::new(Box::new(engine));

    assert_eq!(
        reasoner.assess_evidence_quality(&ctx(&[("n_observations", 500.into())])),
        EvidenceQuality::Moderate
    );
    assert_eq!(
        reasoner.assess_evidence_quality(&ctx(&[("experiment_group", "b".into())])),
        EvidenceQuality::Strong
    );
    assert_eq!(reasoner.assess_evidence_quality(&Context::new()), EvidenceQuality::Speculative);
}

#[test]
fn strong_evidence_raises_confidence() {
    let (engine, fixture) = sprinkler_engine();
    let mut context: Context = serde_json::from_value(fixture["context"].clone()).unwrap();
    let reasoner = CognitiveCausalReasoner::new(Box::new(engine));

    let weak = reasoner.explain_with_reasoning("slip", &1.into(), &context);
    context.insert("experiment_arm".to_string(), "treatment".into());
    let strong = reasoner.explain_with_reasoning("slip", &1.into(), &context);

    assert_eq!(strong.evidence_quality, EvidenceQuality::Strong);
    assert!(strong.overall_confidence > weak.overall_confidence);
    assert!(!strong.assumptions.iter().any(|a| a.contains("provisional")));
}

#[test]
fn counterfactual_comparison_through_reasoner() {
    let mut engine = CausalReasoningEngine::new();
    engine
        .add_domain_edge(CausalEdge::new("rain", "wet_ground", 0.9, 0.8))
        .unwrap();
    let mut reasoner = CognitiveCausalReasoner::new(Box::new(engine));

    let factual = ctx(&[("rain", false.into()), ("wet_ground", 0.2.into())]);
    let comparison =
        reasoner.compare_counterfactuals(&factual, vec![("rain".to_string(), true.into())], None);

    assert_eq!(comparison.counterfactual.get("rain"), Some(&ObservedValue::from(true)));
    let wet = comparison.counterfactual.get("wet_ground").and_then(|v| v.as_f64()).unwrap();
    assert!(close(wet, 1.1));
    assert!(close(comparison.plausibility, 0.9));
    assert_eq!(reasoner.backend().observation_count(), 0);
}

#[test]
fn factory_follows_config() {
    let reasoner = reasoner_from_config(&CausalConfig::default(), None);
    let h = CausalHypothesis::new("deploy", "latency");
    let refined = reasoner.refine_causal_hypothesis(
        &h,
        &ctx(&[("deploy", true.into()), ("latency", 300.into())]),
    );
    assert!(close(refined.confidence, 0.6));
    assert!(reasoner
        .backend()
        .explain_outcome("latency", &1.into(), &Context::new())
        .is_ok());
}
