//! Action dispatch to the caller's side-effect layer.

use super::Grapher;
use crate::graph::TransitionSpec;
use std::fmt;
use std::sync::Arc;

/// Everything an action handler learns about the dispatch that fired it.
pub struct ActionEnvelope<'a, P> {
    /// Payload of the dispatch.
    pub payload: Option<&'a P>,
    /// The engine, already showing the post-transition state.
    pub grapher: &'a Grapher<P>,
    /// The transition that declared the action.
    pub meta: &'a TransitionSpec<P>,
}

type ActionHandler<P> = Arc<dyn Fn(&str, &ActionEnvelope<'_, P>) + Send + Sync>;

/// Handler invoked with `(action, envelope)` whenever a transition declares
/// an action.
///
/// The engine performs no side effects itself; this wrapper is where they
/// live. It sees the engine only through a shared reference, so it cannot
/// dispatch re-entrantly.
///
/// # Example
///
/// ```rust
/// use kahtox::engine::ActionWrapper;
/// use std::sync::{Arc, Mutex};
///
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&log);
/// let wrapper: ActionWrapper<()> = ActionWrapper::new(move |action, env| {
///     sink.lock().unwrap().push((action.to_string(), env.grapher.current_state().to_string()));
/// });
/// # let _ = wrapper;
/// ```
pub struct ActionWrapper<P> {
    handler: ActionHandler<P>,
}

impl<P> ActionWrapper<P> {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&str, &ActionEnvelope<'_, P>) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// The designated fallback wrapper: accepts every action and ignores it.
    pub fn noop() -> Self {
        Self::new(|_, _| {})
    }

    pub fn call(&self, action: &str, envelope: &ActionEnvelope<'_, P>) {
        (self.handler)(action, envelope)
    }
}

impl<P> Default for ActionWrapper<P> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<P> Clone for ActionWrapper<P> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<P> fmt::Debug for ActionWrapper<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActionWrapper(..)")
    }
}
