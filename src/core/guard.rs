//! Guard predicates for controlling state transitions.
//!
//! Guards are boolean functions over the dispatched payload. A guard that
//! returns `false` suppresses the state change of its transition; it never
//! raises.

use std::fmt;
use std::sync::Arc;

/// Envelope handed to a guard on every evaluation.
#[derive(Debug)]
pub struct GuardEnvelope<'a, P> {
    /// Payload of the dispatch, `None` when the event carried no payload.
    pub payload: Option<&'a P>,
}

impl<P> Clone for GuardEnvelope<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for GuardEnvelope<'_, P> {}

/// Predicate that determines if a transition's state change takes effect.
///
/// Guards are cheap to clone; clones share the same predicate.
///
/// # Example
///
/// ```rust
/// use kahtox::core::{Guard, GuardEnvelope};
///
/// let positive = Guard::new(|env: &GuardEnvelope<'_, i64>| {
///     env.payload.is_some_and(|n| *n > 0)
/// });
///
/// assert!(positive.check(&GuardEnvelope { payload: Some(&5) }));
/// assert!(!positive.check(&GuardEnvelope { payload: Some(&-1) }));
/// assert!(!positive.check(&GuardEnvelope { payload: None }));
/// ```
pub struct Guard<P> {
    predicate: Arc<dyn Fn(&GuardEnvelope<'_, P>) -> bool + Send + Sync>,
}

impl<P> Guard<P> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate should be deterministic; the engine may evaluate it on
    /// every dispatch of the guarded event.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&GuardEnvelope<'_, P>) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that only looks at the payload, if any.
    pub fn on_payload<F>(predicate: F) -> Self
    where
        F: Fn(Option<&P>) -> bool + Send + Sync + 'static,
    {
        Self::new(move |env| predicate(env.payload))
    }

    /// Evaluate the guard.
    pub fn check(&self, envelope: &GuardEnvelope<'_, P>) -> bool {
        (self.predicate)(envelope)
    }
}

impl<P> Clone for Guard<P> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<P> fmt::Debug for Guard<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
