//! Diagnostic sinks for invalid dispatches.
//!
//! The engine reports a dispatch whose `(state, event)` has no well-formed
//! transition to its sink and carries on. Sinks must not panic.

/// Receiver for diagnostics about invalid dispatches.
///
/// Closures `Fn(&str, &str)` are sinks too, receiving `(state, event)`.
pub trait DiagnosticSink: Send + Sync {
    fn invalid_transition(&self, state: &str, event: &str);
}

/// Default sink: logs through `tracing` at error level.
///
/// With no subscriber installed this is a silent no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn invalid_transition(&self, state: &str, event: &str) {
        tracing::error!(
            state,
            event,
            "Invalid State Transition For State Graph: from '{state}'"
        );
    }
}

/// Sink that discards every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn invalid_transition(&self, _state: &str, _event: &str) {}
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn invalid_transition(&self, state: &str, event: &str) {
        self(state, event)
    }
}
