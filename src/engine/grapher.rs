//! The transition engine.

use super::action::{ActionEnvelope, ActionWrapper};
use super::config::{ActionPolicy, GrapherConfig};
use super::diagnostics::{DiagnosticSink, TracingSink};
use crate::core::{GuardEnvelope, Payload, StateHistory, StateTransition};
use crate::graph::{Lookup, StateGraph};
use chrono::Utc;
use std::fmt;

/// Observer callback, called with `(next_state, payload, is_error)`.
pub type Observer<P> = Box<dyn Fn(&str, Option<&P>, bool) + Send + Sync>;

/// What a single dispatch did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The state changed.
    Transitioned { from: String, to: String },
    /// The transition exists but its guard did not pass.
    GuardRejected,
    /// No well-formed transition for this event from the current state.
    Rejected,
}

impl DispatchOutcome {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Stateful dispatcher over a [`StateGraph`].
///
/// A `Grapher` is owned by exactly one logical driver: `dispatch` takes
/// `&mut self`. To share one between threads, put it behind a `Mutex` or an
/// actor that serialises dispatches.
///
/// # Example
///
/// ```rust
/// use kahtox::builder::{GraphBuilder, TransitionBuilder};
/// use kahtox::engine::Grapher;
///
/// let graph = GraphBuilder::<String>::new()
///     .initial("start")
///     .transition("start", "go", TransitionBuilder::new().to("running"))
///     .unwrap()
///     .transition("running", "stop", TransitionBuilder::new().to("start"))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let mut grapher = Grapher::new(graph);
/// grapher.dispatch("go", None);
///
/// assert_eq!(grapher.current_state(), "running");
/// assert_eq!(grapher.prev_state(), Some("start"));
/// ```
pub struct Grapher<P> {
    graph: StateGraph<P>,
    current_state: String,
    prev_state: Option<String>,
    wrapper: ActionWrapper<P>,
    observers: Vec<Observer<P>>,
    sink: Box<dyn DiagnosticSink>,
    config: GrapherConfig,
    history: StateHistory,
}

impl<P: Payload> Grapher<P> {
    /// Engine with the default (no-op) action wrapper and default config.
    pub fn new(graph: StateGraph<P>) -> Self {
        Self::with_config(graph, None, GrapherConfig::default())
    }

    /// Engine with an explicit config. A missing wrapper is replaced by
    /// [`ActionWrapper::noop`].
    pub fn with_config(
        graph: StateGraph<P>,
        wrapper: Option<ActionWrapper<P>>,
        config: GrapherConfig,
    ) -> Self {
        let current_state = graph.initial().to_string();
        tracing::debug!(initial = %current_state, "grapher created");

        Self {
            graph,
            current_state,
            prev_state: None,
            wrapper: wrapper.unwrap_or_default(),
            observers: Vec::new(),
            sink: Box::new(TracingSink),
            config,
            history: StateHistory::new(),
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the action wrapper.
    pub fn with_wrapper(mut self, wrapper: ActionWrapper<P>) -> Self {
        self.wrapper = wrapper;
        self
    }

    /// Dispatch `event` with an optional payload.
    ///
    /// Runs to completion:
    /// 1. look up the transition for the current state;
    /// 2. evaluate its guard, if any;
    /// 3. on a pass, move to the target state and notify observers;
    /// 4. fire the declared action (see [`ActionPolicy`]).
    ///
    /// A missing or malformed transition is reported to the diagnostic sink
    /// and changes nothing. Dispatch never fails.
    pub fn dispatch(&mut self, event: &str, payload: Option<P>) -> DispatchOutcome {
        let spec = match self.graph.lookup(&self.current_state, event) {
            Lookup::Found(spec) => spec,
            Lookup::Missing | Lookup::Malformed => {
                self.sink.invalid_transition(&self.current_state, event);
                return DispatchOutcome::Rejected;
            }
        };

        let payload = payload.as_ref();
        let action = spec.action_name();
        let passed = spec
            .guard
            .as_ref()
            .is_none_or(|guard| guard.check(&GuardEnvelope { payload }));

        let outcome = if passed {
            let from = std::mem::replace(&mut self.current_state, spec.next_state.clone());
            self.prev_state = Some(from.clone());
            tracing::debug!(%from, to = %self.current_state, event, "state transition");

            if self.config.record_history {
                self.history.push(
                    StateTransition {
                        from: from.clone(),
                        to: self.current_state.clone(),
                        event: event.to_string(),
                        timestamp: Utc::now(),
                    },
                    self.config.history_limit,
                );
            }

            if self.current_state != self.graph.initial() || spec.notify_view {
                let has_action = action.is_some();
                let notify_payload = if has_action { None } else { payload };
                let is_error = !has_action && payload.is_some_and(Payload::is_error);
                for observer in &self.observers {
                    observer(self.current_state.as_str(), notify_payload, is_error);
                }
            }

            DispatchOutcome::Transitioned {
                from,
                to: self.current_state.clone(),
            }
        } else {
            tracing::debug!(state = %self.current_state, event, "guard rejected transition");
            DispatchOutcome::GuardRejected
        };

        if let Some(action) = action {
            if passed || self.config.action_policy == ActionPolicy::Always {
                tracing::trace!(action, event, "dispatching action");
                let envelope = ActionEnvelope {
                    payload,
                    grapher: &*self,
                    meta: spec,
                };
                self.wrapper.call(action, &envelope);
            }
        }

        outcome
    }

    /// Dispatch `event` without a payload.
    pub fn dispatch_event(&mut self, event: &str) -> DispatchOutcome {
        self.dispatch(event, None)
    }

    /// Register `callback` as the only observer, replacing any others.
    pub fn after_transition<F>(&mut self, callback: F)
    where
        F: Fn(&str, Option<&P>, bool) + Send + Sync + 'static,
    {
        self.observers.clear();
        self.observers.push(Box::new(callback));
    }

    /// Append an observer; observers run in registration order.
    pub fn add_observer<F>(&mut self, callback: F)
    where
        F: Fn(&str, Option<&P>, bool) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(callback));
    }

    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<P> Grapher<P> {
    pub fn current_state(&self) -> &str {
        &self.current_state
    }

    /// State before the most recent transition, `None` until one happens.
    pub fn prev_state(&self) -> Option<&str> {
        self.prev_state.as_deref()
    }

    pub fn initial(&self) -> &str {
        self.graph.initial()
    }

    pub fn is_initial(&self) -> bool {
        self.current_state == self.graph.initial()
    }

    pub fn graph(&self) -> &StateGraph<P> {
        &self.graph
    }

    pub fn config(&self) -> &GrapherConfig {
        &self.config
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Events with a well-formed transition from the current state, in order.
    pub fn available_events(&self) -> Vec<&str> {
        self.graph
            .events_for(&self.current_state)
            .map(|table| table.events().collect())
            .unwrap_or_default()
    }

    /// Check if `event` has a well-formed transition from the current state.
    /// Guards are not evaluated.
    pub fn can_dispatch(&self, event: &str) -> bool {
        self.graph.lookup(&self.current_state, event).is_found()
    }
}

impl<P> fmt::Debug for Grapher<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grapher")
            .field("current_state", &self.current_state)
            .field("prev_state", &self.prev_state)
            .field("observers", &self.observers.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Build a [`Grapher`] from a graph and an optional action wrapper.
///
/// A missing wrapper is replaced by [`ActionWrapper::noop`]. Construction
/// never fails and never validates the graph.
pub fn make_grapher<P: Payload>(
    graph: StateGraph<P>,
    wrapper: Option<ActionWrapper<P>>,
) -> Grapher<P> {
    Grapher::with_config(graph, wrapper, GrapherConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NullSink;
    use crate::graph::TransitionSpec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn graph() -> StateGraph<()> {
        let mut graph = StateGraph::new("start");
        let mut save = TransitionSpec::new("saved");
        save.action = Some("SAVE".to_string());
        graph.insert_transition("start", "save", save);
        graph.insert_transition("saved", "back", TransitionSpec::new("start"));
        graph
    }

    #[test]
    fn new_grapher_starts_in_initial_state() {
        let grapher = Grapher::new(graph());

        assert_eq!(grapher.current_state(), "start");
        assert_eq!(grapher.prev_state(), None);
        assert!(grapher.is_initial());
        assert_eq!(grapher.observer_count(), 0);
        assert_eq!(grapher.config(), &GrapherConfig::default());
    }

    #[test]
    fn with_wrapper_replaces_action_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut grapher = Grapher::new(graph()).with_wrapper(ActionWrapper::new(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        grapher.dispatch_event("save");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_action_label_does_not_reach_wrapper() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut graph = graph();
        let mut quiet = TransitionSpec::new("saved");
        quiet.action = Some(String::new());
        graph.insert_transition("start", "quiet", quiet);

        let wrapper = ActionWrapper::new(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let mut grapher = make_grapher(graph, Some(wrapper)).with_sink(NullSink);

        assert!(grapher.dispatch_event("quiet").is_transitioned());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn debug_output_shows_state() {
        let grapher = Grapher::new(graph());
        let debug = format!("{grapher:?}");

        assert!(debug.contains("current_state: \"start\""));
        assert!(debug.contains("observers: 0"));
    }
}
