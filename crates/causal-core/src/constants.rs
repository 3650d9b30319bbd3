/// Context keys with this prefix mark experimental evidence.
pub const EXPERIMENT_PREFIX: &str = "experiment_";

/// Context keys with this prefix mark randomized controlled trial evidence.
pub const RCT_PREFIX: &str = "rct_";

/// Context key naming the control variables of a study.
pub const CONTROLS_KEY: &str = "controls";

/// Context key naming the covariates of a study.
pub const COVARIATES_KEY: &str = "covariates";

/// Context key carrying the number of observations behind a claim.
pub const N_OBSERVATIONS_KEY: &str = "n_observations";

/// Key suffixes that signal temporal ordering information.
pub const TEMPORAL_SUFFIXES: [&str; 2] = ["_time", "_timestamp"];

/// Substring that marks contradicting evidence during hypothesis refinement.
pub const CONTRADICTION_MARKER: &str = "contradiction";

/// Key fragments that identify potential confounders in new evidence.
pub const CONFOUNDER_MARKERS: [&str; 2] = ["control", "covariate"];

/// Standard assumptions attached to every counterfactual scenario.
pub const COUNTERFACTUAL_ASSUMPTIONS: [&str; 3] = [
    "Causal structure remains stable under intervention",
    "No unmeasured confounding between intervened variables and outcomes",
    "Stable unit treatment value (units do not affect each other)",
];

/// Alternative explanations the engine always lists alongside identified causes.
pub const BASELINE_ALTERNATIVES: [&str; 3] =
    ["Random chance", "Unmeasured factors", "Complex interactions"];
