//! Declarative state graphs.
//!
//! A `StateGraph` maps state names to `EventTable`s, and each table maps
//! event names to transition entries. Graphs are data: nothing here checks
//! that the graph is well-formed. Missing or malformed edges surface lazily
//! as `Lookup::Missing` / `Lookup::Malformed` when the engine dispatches.
//!
//! Graphs can be assembled with [`GraphBuilder`](crate::builder::GraphBuilder)
//! or parsed leniently from JSON:
//!
//! ```rust
//! use kahtox::graph::StateGraph;
//! use serde_json::json;
//!
//! let graph: StateGraph<serde_json::Value> = StateGraph::from_value(&json!({
//!     "$initial": "idle",
//!     "states": {
//!         "idle": { "fetch": { "nextState": "loading", "action": "LOAD" } },
//!         "loading": { "done": { "nextState": "idle" } }
//!     }
//! }));
//!
//! assert_eq!(graph.initial(), "idle");
//! assert!(graph.lookup("idle", "fetch").is_found());
//! ```

mod json;
mod lint;
mod transition;

pub use lint::GraphIssue;
pub use transition::{Lookup, TransitionEntry, TransitionSpec};

use crate::core::Guard;
use crate::error::GraphError;
use std::collections::BTreeMap;
use std::fmt;

/// Initial state name used when none is supplied.
pub const DEFAULT_INITIAL: &str = "start";

/// Event name to transition entry, scoped to one state.
pub struct EventTable<P> {
    events: BTreeMap<String, TransitionEntry<P>>,
}

impl<P> EventTable<P> {
    pub fn new() -> Self {
        Self {
            events: BTreeMap::new(),
        }
    }

    /// Declare (or replace) the entry for `event`.
    pub fn insert(&mut self, event: impl Into<String>, entry: impl Into<TransitionEntry<P>>) {
        self.events.insert(event.into(), entry.into());
    }

    pub fn get(&self, event: &str) -> Lookup<'_, P> {
        match self.events.get(event) {
            Some(TransitionEntry::Spec(spec)) => Lookup::Found(spec),
            Some(TransitionEntry::Malformed) => Lookup::Malformed,
            None => Lookup::Missing,
        }
    }

    pub(crate) fn get_mut(&mut self, event: &str) -> Option<&mut TransitionSpec<P>> {
        match self.events.get_mut(event) {
            Some(TransitionEntry::Spec(spec)) => Some(spec),
            _ => None,
        }
    }

    /// All declared entries in event-name order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TransitionEntry<P>)> {
        self.events.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Names of the well-formed transitions, in order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.entries()
            .filter(|(_, entry)| !entry.is_malformed())
            .map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<P> Default for EventTable<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for EventTable<P> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<P> fmt::Debug for EventTable<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.events.iter()).finish()
    }
}

/// State name to event table, plus the initial state name.
pub struct StateGraph<P> {
    initial: String,
    states: BTreeMap<String, EventTable<P>>,
}

impl<P> StateGraph<P> {
    /// Empty graph starting in `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: BTreeMap::new(),
        }
    }

    /// The designated fallback graph for unusable input.
    ///
    /// Starts in `"start"` and declares no states, so every dispatch is a
    /// logged no-op.
    pub fn fallback() -> Self {
        Self::new(DEFAULT_INITIAL)
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Event table for `state`, if the state is declared.
    pub fn events_for(&self, state: &str) -> Option<&EventTable<P>> {
        self.states.get(state)
    }

    /// Declared state names in order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Look up the transition for `event` from `state`.
    ///
    /// An undeclared state behaves like a state with an empty event table.
    pub fn lookup(&self, state: &str, event: &str) -> Lookup<'_, P> {
        self.states
            .get(state)
            .map_or(Lookup::Missing, |table| table.get(event))
    }

    /// Declare `state` with an empty event table, keeping any existing one.
    pub fn add_state(&mut self, state: impl Into<String>) -> &mut EventTable<P> {
        self.states.entry(state.into()).or_default()
    }

    /// Declare the entry for `(state, event)`, declaring `state` if needed.
    pub fn insert_transition(
        &mut self,
        state: impl Into<String>,
        event: impl Into<String>,
        entry: impl Into<TransitionEntry<P>>,
    ) {
        self.add_state(state).insert(event, entry);
    }

    /// Attach a guard to an existing well-formed transition.
    ///
    /// JSON graphs cannot carry guards, so they are attached after parsing.
    pub fn set_guard(
        &mut self,
        state: &str,
        event: &str,
        guard: Guard<P>,
    ) -> Result<(), GraphError> {
        let spec = self
            .states
            .get_mut(state)
            .and_then(|table| table.get_mut(event))
            .ok_or_else(|| GraphError::unknown_transition(state, event))?;
        spec.guard = Some(guard);
        Ok(())
    }
}

impl<P> Default for StateGraph<P> {
    fn default() -> Self {
        Self::fallback()
    }
}

impl<P> Clone for StateGraph<P> {
    fn clone(&self) -> Self {
        Self {
            initial: self.initial.clone(),
            states: self.states.clone(),
        }
    }
}

impl<P> fmt::Debug for StateGraph<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateGraph")
            .field("initial", &self.initial)
            .field("states", &self.states)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StateGraph<()> {
        let mut graph = StateGraph::new("start");
        graph.insert_transition("start", "go", TransitionSpec::new("running"));
        graph.insert_transition("running", "stop", TransitionSpec::new("start"));
        graph.insert_transition("running", "broken", TransitionEntry::Malformed);
        graph
    }

    #[test]
    fn lookup_distinguishes_found_missing_and_malformed() {
        let graph = sample();

        assert!(graph.lookup("start", "go").is_found());
        assert!(matches!(graph.lookup("start", "stop"), Lookup::Missing));
        assert!(matches!(graph.lookup("running", "broken"), Lookup::Malformed));
    }

    #[test]
    fn undeclared_state_behaves_like_empty_table() {
        let graph = sample();
        assert!(matches!(graph.lookup("nowhere", "go"), Lookup::Missing));
    }

    #[test]
    fn events_skip_malformed_entries() {
        let graph = sample();
        let events: Vec<_> = graph.events_for("running").unwrap().events().collect();

        assert_eq!(events, vec!["stop"]);
        assert_eq!(graph.events_for("running").unwrap().len(), 2);
    }

    #[test]
    fn fallback_graph_starts_in_start_with_no_states() {
        let graph: StateGraph<()> = StateGraph::fallback();

        assert_eq!(graph.initial(), DEFAULT_INITIAL);
        assert_eq!(graph.states().count(), 0);
    }

    #[test]
    fn set_guard_requires_existing_transition() {
        let mut graph = sample();

        assert!(graph
            .set_guard("start", "go", Guard::on_payload(|_| false))
            .is_ok());
        assert!(graph.lookup("start", "go").spec().unwrap().has_guard());

        let err = graph
            .set_guard("running", "broken", Guard::on_payload(|_| false))
            .unwrap_err();
        assert!(matches!(err, GraphError::UnknownTransition { .. }));
    }

    #[test]
    fn add_state_keeps_existing_table() {
        let mut graph = sample();
        graph.add_state("start");

        assert!(graph.lookup("start", "go").is_found());
        assert!(graph.has_state("start"));
    }
}
