//! Simple-path enumeration with depth and count caps.
//!
//! Worst case is exponential in dense graphs, so both caps always apply.

use causal_core::config::GraphConfig;
use causal_core::models::Variable;
use causal_core::tracing_setup::events;
use petgraph::algo::all_simple_paths;
use petgraph::stable_graph::NodeIndex;

use crate::graph::stable_graph::IndexedGraph;

/// Outcome of a bounded path search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSearch {
    /// Paths as node sequences from cause to effect, sorted lexically.
    pub paths: Vec<Vec<Variable>>,
    /// Whether the path-count cap cut the search short.
    pub truncated: bool,
}

/// Enumerate simple paths `cause → … → effect` of at most `max_path_depth` edges.
pub fn enumerate(
    graph: &IndexedGraph,
    cause: &str,
    effect: &str,
    config: &GraphConfig,
) -> PathSearch {
    let (Some(from), Some(to)) = (graph.get_node(cause), graph.get_node(effect)) else {
        return PathSearch::default();
    };
    if from == to {
        return PathSearch {
            paths: vec![vec![cause.to_string()]],
            truncated: false,
        };
    }

    let max_intermediate = config.max_path_depth.saturating_sub(1);
    let mut found: Vec<Vec<NodeIndex>> =
        all_simple_paths::<Vec<NodeIndex>, _>(&graph.graph, from, to, 0, Some(max_intermediate))
            .take(config.max_paths.saturating_add(1))
            .collect();

    let truncated = found.len() > config.max_paths;
    if truncated {
        found.truncate(config.max_paths);
        events::traversal_capped(cause, effect, config.max_paths);
    }

    let mut paths: Vec<Vec<Variable>> = found
        .into_iter()
        .map(|path| {
            path.into_iter()
                .filter_map(|idx| graph.name(idx).map(str::to_string))
                .collect()
        })
        .collect();
    paths.sort();

    PathSearch { paths, truncated }
}
