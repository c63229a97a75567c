//! Errors for strict graph operations.
//!
//! Dispatch never returns these; they only come out of APIs that a caller
//! opts into when it wants hard failures.

use thiserror::Error;

/// Errors raised by strict graph parsing and editing.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Graph is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Graph must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("No well-formed transition for event '{event}' from state '{state}'")]
    UnknownTransition { state: String, event: String },
}

impl GraphError {
    pub(crate) fn unknown_transition(state: &str, event: &str) -> Self {
        Self::UnknownTransition {
            state: state.to_string(),
            event: event.to_string(),
        }
    }
}
