//! Lenient JSON parsing of state graphs.
//!
//! The accepted shape:
//!
//! ```json
//! {
//!   "$initial": "start",
//!   "states": {
//!     "start": { "go": { "nextState": "running", "action": "BEGIN", "notifyView": true } }
//!   }
//! }
//! ```
//!
//! Anything that does not fit degrades instead of failing: a non-object
//! document becomes the fallback graph, a bad event table becomes empty,
//! and a bad transition entry becomes `TransitionEntry::Malformed`.

use super::{EventTable, StateGraph, TransitionEntry, TransitionSpec, DEFAULT_INITIAL};
use crate::error::GraphError;
use serde_json::{Map, Value};

const INITIAL_KEY: &str = "$initial";
const STATES_KEY: &str = "states";
const NEXT_STATE_KEY: &str = "nextState";
const ACTION_KEY: &str = "action";
const NOTIFY_VIEW_KEY: &str = "notifyView";

impl<P> StateGraph<P> {
    /// Parse a graph from a JSON value, substituting defaults for anything
    /// unusable. Never fails.
    pub fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(object) => parse_graph(object),
            None => {
                tracing::debug!(
                    found = kind_of(value),
                    "graph is not an object, using fallback graph"
                );
                Self::fallback()
            }
        }
    }

    /// Parse a graph from JSON text. Text that is not JSON yields the
    /// fallback graph.
    pub fn from_json_str(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => Self::from_value(&value),
            Err(err) => {
                tracing::debug!(error = %err, "graph is not valid JSON, using fallback graph");
                Self::fallback()
            }
        }
    }

    /// Strict variant of [`from_json_str`](Self::from_json_str): unparseable
    /// text or a non-object document is an error. Inner entries are still
    /// parsed leniently.
    pub fn try_from_json_str(text: &str) -> Result<Self, GraphError> {
        let value: Value = serde_json::from_str(text)?;
        let object = value.as_object().ok_or(GraphError::NotAnObject {
            found: kind_of(&value),
        })?;
        Ok(parse_graph(object))
    }
}

fn parse_graph<P>(object: &Map<String, Value>) -> StateGraph<P> {
    let initial = object
        .get(INITIAL_KEY)
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_INITIAL);

    let mut graph = StateGraph::new(initial);
    if let Some(states) = object.get(STATES_KEY).and_then(Value::as_object) {
        for (state, table) in states {
            graph.states.insert(state.clone(), parse_table(table));
        }
    }
    graph
}

fn parse_table<P>(value: &Value) -> EventTable<P> {
    let mut table = EventTable::new();
    if let Some(events) = value.as_object() {
        for (event, entry) in events {
            table.insert(event.clone(), parse_entry(entry));
        }
    }
    table
}

fn parse_entry<P>(value: &Value) -> TransitionEntry<P> {
    let Some(object) = value.as_object() else {
        return TransitionEntry::Malformed;
    };
    let Some(next_state) = object.get(NEXT_STATE_KEY).and_then(Value::as_str) else {
        return TransitionEntry::Malformed;
    };

    let mut spec = TransitionSpec::new(next_state);
    spec.action = object
        .get(ACTION_KEY)
        .and_then(Value::as_str)
        .map(str::to_string);
    spec.notify_view = object.get(NOTIFY_VIEW_KEY).is_some_and(truthy);
    TransitionEntry::Spec(spec)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
