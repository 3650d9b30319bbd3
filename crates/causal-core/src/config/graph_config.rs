use serde::{Deserialize, Serialize};

use super::defaults;

/// Which d-separation rule the graph applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DSeparationMode {
    /// Directed paths only; blocked by any conditioned non-collider.
    #[default]
    Simplified,
    /// Full criterion, including colliders unblocked by conditioned descendants.
    Full,
}

/// Causal graph configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Reject edges that would close a cycle.
    pub enforce_acyclic: bool,
    /// d-separation rule.
    pub d_separation: DSeparationMode,
    /// Maximum number of edges in an enumerated path.
    pub max_path_depth: usize,
    /// Maximum number of paths returned by one enumeration.
    pub max_paths: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            enforce_acyclic: defaults::DEFAULT_ENFORCE_ACYCLIC,
            d_separation: DSeparationMode::default(),
            max_path_depth: defaults::DEFAULT_MAX_PATH_DEPTH,
            max_paths: defaults::DEFAULT_MAX_PATHS,
        }
    }
}
