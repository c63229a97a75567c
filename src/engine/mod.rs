//! The transition engine and its collaborators.
//!
//! # Key Concepts
//!
//! - **Grapher**: owns the graph and the current/previous state; `dispatch`
//!   applies one event at a time
//! - **Action wrapper**: caller-supplied handler for declared actions; the
//!   only place side effects happen
//! - **Observers**: callbacks informed after a state change
//! - **Diagnostic sink**: receives reports about invalid dispatches
//!
//! # Notification rule
//!
//! After a state change, observers are called with
//! `(next_state, payload, is_error)` when the new state differs from the
//! initial state or the transition sets `notify_view`. The payload is
//! withheld (`None`) when the transition declares an action, and `is_error`
//! is only set for action-less transitions carrying an error-like payload.

mod action;
mod config;
mod diagnostics;
mod grapher;

pub use action::{ActionEnvelope, ActionWrapper};
pub use config::{ActionPolicy, GrapherConfig, DEFAULT_HISTORY_LIMIT};
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use grapher::{make_grapher, DispatchOutcome, Grapher, Observer};
