//! Build errors for graph and transition builders.

use thiserror::Error;

/// Errors that can occur when building graphs and transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingNextState,
}
