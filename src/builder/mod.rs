//! Builder API for ergonomic graph construction.
//!
//! This module provides fluent builders for assembling state graphs in code,
//! as an alternative to parsing them from JSON.

pub mod error;
pub mod graph;
pub mod transition;

pub use error::BuildError;
pub use graph::GraphBuilder;
pub use transition::TransitionBuilder;

use crate::core::Guard;
use crate::graph::TransitionSpec;

/// Create a plain transition to `to`.
///
/// # Example
///
/// ```
/// use kahtox::builder::simple_transition;
///
/// let spec = simple_transition::<()>("running");
/// assert_eq!(spec.next_state, "running");
/// ```
pub fn simple_transition<P>(to: impl Into<String>) -> TransitionSpec<P> {
    TransitionSpec::new(to)
}

/// Create a transition to `to` that fires `action`.
pub fn action_transition<P>(to: impl Into<String>, action: impl Into<String>) -> TransitionSpec<P> {
    let mut spec = TransitionSpec::new(to);
    spec.action = Some(action.into());
    spec
}

/// Create a transition whose state change is gated by a payload predicate.
///
/// # Example
///
/// ```
/// use kahtox::builder::guarded_transition;
///
/// let spec = guarded_transition("adult", |age: Option<&u64>| age.is_some_and(|a| *a >= 18));
/// assert!(spec.has_guard());
/// ```
pub fn guarded_transition<P, F>(to: impl Into<String>, guard: F) -> TransitionSpec<P>
where
    F: Fn(Option<&P>) -> bool + Send + Sync + 'static,
{
    let mut spec = TransitionSpec::new(to);
    spec.guard = Some(Guard::on_payload(guard));
    spec
}
