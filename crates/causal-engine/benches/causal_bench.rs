use criterion::{criterion_group, criterion_main, Criterion};

use causal_core::config::GraphConfig;
use causal_core::models::{Observation, ObservedValue};
use causal_engine::{CausalGraph, CausalReasoningEngine};

/// Build a DAG with ~1K edges: 200 nodes, ~5 edges per node (forward only).
fn build_1k_edge_dag() -> CausalGraph {
    let mut graph = CausalGraph::with_config(GraphConfig {
        max_paths: 100,
        max_path_depth: 8,
        ..GraphConfig::default()
    });
    let n = 200;
    let mut count = 0;
    for i in 0..n {
        for j in 1..=5 {
            let target = i + j;
            if target < n && graph.add_edge(&format!("n{i}"), &format!("n{target}"), 0.7, 0.6).is_ok() {
                count += 1;
            }
        }
    }
    assert!(count >= 900, "Should have ~1K edges, got {count}");
    graph
}

fn observation_log(rows: usize, variables: usize) -> Vec<Observation> {
    (0..rows)
        .map(|r| {
            (0..variables)
                .map(|v| {
                    let value = (r * (v + 1)) as f64 + ((r * 31 + v * 17) % 7) as f64;
                    (format!("n{v}"), ObservedValue::from(value))
                })
                .collect()
        })
        .collect()
}

fn bench_descendants(c: &mut Criterion) {
    let graph = build_1k_edge_dag();
    c.bench_function("descendants_1k_edges", |b| {
        b.iter(|| graph.get_descendants("n0"));
    });
}

fn bench_bounded_paths(c: &mut Criterion) {
    let graph = build_1k_edge_dag();
    c.bench_function("paths_capped_1k_edges", |b| {
        b.iter(|| graph.get_causal_paths_bounded("n0", "n20"));
    });
}

fn bench_discovery(c: &mut Criterion) {
    let log = observation_log(200, 12);
    c.bench_function("discovery_200x12", |b| {
        b.iter(|| {
            let mut engine = CausalReasoningEngine::new();
            engine.learn_from_observations(log.clone())
        });
    });
}

fn bench_explain(c: &mut Criterion) {
    let graph = build_1k_edge_dag();
    let mut engine = CausalReasoningEngine::new();
    *engine.graph_mut() = graph;
    let log = observation_log(50, 10);
    engine.learn_from_observations(log.clone());
    let context = log[0].clone();
    c.bench_function("explain_outcome_1k_edges", |b| {
        b.iter(|| engine.explain_outcome("n9", &ObservedValue::from(1.0), &context));
    });
}

criterion_group!(
    benches,
    bench_descendants,
    bench_bounded_paths,
    bench_discovery,
    bench_explain
);
criterion_main!(benches);
