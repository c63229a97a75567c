//! Kahtox: a minimal declarative finite-state-machine dispatch engine.
//!
//! A state graph declares, per state, which events lead where. A
//! [`Grapher`] tracks the current state, applies transitions in response to
//! named events, hands declared actions to a caller-supplied wrapper and
//! notifies observers after state changes.
//!
//! # Core Concepts
//!
//! - **Graph**: states, events and transition specs, built in code or parsed
//!   leniently from JSON
//! - **Guards**: predicates over the payload that gate a state change
//! - **Actions**: named side effects dispatched to the action wrapper,
//!   independently of whether the guard passed
//! - **Observers**: callbacks informed after state changes
//!
//! The engine never fails on bad data: unknown events are reported to a
//! diagnostic sink and ignored, malformed input degrades to safe defaults.
//!
//! # Example
//!
//! ```rust
//! use kahtox::{make_grapher, ActionWrapper, StateGraph};
//! use serde_json::{json, Value};
//! use std::sync::{Arc, Mutex};
//!
//! let graph: StateGraph<Value> = StateGraph::from_value(&json!({
//!     "$initial": "start",
//!     "states": {
//!         "start": { "go": { "nextState": "running", "action": "BEGIN" } },
//!         "running": { "stop": { "nextState": "start" } }
//!     }
//! }));
//!
//! let actions = Arc::new(Mutex::new(Vec::new()));
//! let seen = Arc::clone(&actions);
//! let wrapper = ActionWrapper::new(move |action, _env| {
//!     seen.lock().unwrap().push(action.to_string());
//! });
//!
//! let mut grapher = make_grapher(graph, Some(wrapper));
//! grapher.dispatch("go", Some(json!({ "user": 1 })));
//!
//! assert_eq!(grapher.current_state(), "running");
//! assert_eq!(*actions.lock().unwrap(), vec!["BEGIN".to_string()]);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod error;
pub mod graph;

// Re-export commonly used types
pub use crate::core::{Guard, GuardEnvelope, Payload, StateHistory, StateTransition};
pub use engine::{
    make_grapher, ActionEnvelope, ActionPolicy, ActionWrapper, DiagnosticSink, DispatchOutcome,
    Grapher, GrapherConfig,
};
pub use error::GraphError;
pub use graph::{EventTable, Lookup, StateGraph, TransitionSpec};
