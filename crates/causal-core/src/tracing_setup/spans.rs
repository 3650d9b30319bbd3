//! Span definitions per operation: discovery, explanation, intervention, cognition.

/// Create a discovery span.
#[macro_export]
macro_rules! discovery_span {
    ($observations:expr) => {
        tracing::info_span!("causal.discovery", observations = $observations)
    };
}

/// Create an explanation span.
#[macro_export]
macro_rules! explain_span {
    ($outcome:expr) => {
        tracing::info_span!("causal.explain", outcome = %$outcome)
    };
}

/// Create an intervention span.
#[macro_export]
macro_rules! intervention_span {
    ($variable:expr) => {
        tracing::debug_span!("causal.intervention", variable = %$variable)
    };
}

/// Create a cognition span.
#[macro_export]
macro_rules! cognition_span {
    ($outcome:expr) => {
        tracing::info_span!("causal.cognition", outcome = %$outcome)
    };
}
