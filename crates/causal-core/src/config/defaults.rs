// Single source of truth for all default values.

// --- Graph ---
pub const DEFAULT_ENFORCE_ACYCLIC: bool = false;
pub const DEFAULT_MAX_PATH_DEPTH: usize = 50;
pub const DEFAULT_MAX_PATHS: usize = 1_000;

// --- Discovery ---
pub const DEFAULT_MIN_OBSERVATIONS: usize = 10;
pub const DEFAULT_CORRELATION_THRESHOLD: f64 = 0.5;
pub const DEFAULT_DISCOVERED_EDGE_CONFIDENCE: f64 = 0.7;
pub const DEFAULT_MIN_PAIR_SAMPLES: usize = 2;
pub const DEFAULT_TIME_SUFFIX: &str = "_time";

// --- Estimation ---
pub const DEFAULT_BACKDOOR_ADJUSTMENT: bool = false;

// --- Intervention ---
pub const DEFAULT_INTERVENTION_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_COUNTERFACTUAL_PROBABILITY: f64 = 0.5;

// --- Explanation ---
pub const DEFAULT_MAX_NECESSARY_CAUSES: usize = 3;
pub const DEFAULT_SUFFICIENT_THRESHOLD: f64 = 0.7;
pub const DEFAULT_CONTRIBUTING_THRESHOLD: f64 = 0.2;

// --- Cognition ---
pub const DEFAULT_NECESSITY_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_SUFFICIENCY_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_EXPLAINED_SHARE_THRESHOLD: f64 = 0.7;
pub const DEFAULT_SMALL_SAMPLE_THRESHOLD: u64 = 30;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
