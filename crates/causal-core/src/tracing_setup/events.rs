//! Structured log events for key engine operations.

/// An edge was added by statistical discovery.
pub fn edge_discovered(cause: &str, effect: &str, strength: f64, samples: usize) {
    tracing::info!(
        event = "edge_discovered",
        cause = %cause,
        effect = %effect,
        strength = strength,
        samples = samples,
        "causal edge discovered"
    );
}

/// Input data was skipped or degraded rather than rejected.
pub fn input_degraded(component: &str, detail: &str) {
    tracing::warn!(
        event = "input_degraded",
        component = %component,
        detail = %detail,
        "degraded input"
    );
}

/// The reasoning backend could not answer; the caller proceeds without it.
pub fn backend_unavailable(operation: &str, reason: &str) {
    tracing::warn!(
        event = "backend_unavailable",
        operation = %operation,
        reason = %reason,
        "causal backend unavailable"
    );
}

/// Path enumeration stopped at a configured cap.
pub fn traversal_capped(cause: &str, effect: &str, limit: usize) {
    tracing::warn!(
        event = "traversal_capped",
        cause = %cause,
        effect = %effect,
        limit = limit,
        "path enumeration truncated"
    );
}
