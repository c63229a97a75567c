//! Opt-in graph lint.
//!
//! Construction and dispatch never validate a graph. Callers that want to
//! catch mistakes early can run [`StateGraph::validate`], which accumulates
//! every issue instead of stopping at the first one.

use super::{StateGraph, TransitionEntry};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A problem found by [`StateGraph::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GraphIssue {
    #[error("Initial state '{initial}' is not declared")]
    InitialNotDeclared { initial: String },

    #[error("Transition '{event}' from '{state}' targets undeclared state '{target}'")]
    UndeclaredTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Transition '{event}' from '{state}' is malformed")]
    MalformedTransition { state: String, event: String },
}

impl<P> StateGraph<P> {
    /// Check the graph, accumulating ALL issues.
    ///
    /// A target counts as declared when it has an event table, even an
    /// empty one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kahtox::graph::{GraphIssue, StateGraph, TransitionSpec};
    /// use stillwater::validation::Validation;
    ///
    /// let mut graph: StateGraph<()> = StateGraph::new("start");
    /// graph.insert_transition("start", "go", TransitionSpec::new("running"));
    ///
    /// match graph.validate() {
    ///     Validation::Failure(issues) => assert_eq!(issues.len(), 1),
    ///     Validation::Success(_) => panic!("running is undeclared"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<GraphIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<GraphIssue>>> = Vec::new();

        if self.has_state(&self.initial) {
            checks.push(Validation::success(()));
        } else {
            checks.push(Validation::fail(GraphIssue::InitialNotDeclared {
                initial: self.initial.clone(),
            }));
        }

        for (state, table) in &self.states {
            for (event, entry) in table.entries() {
                let check = match entry {
                    TransitionEntry::Spec(spec) if !self.has_state(&spec.next_state) => {
                        Validation::fail(GraphIssue::UndeclaredTarget {
                            state: state.clone(),
                            event: event.to_string(),
                            target: spec.next_state.clone(),
                        })
                    }
                    TransitionEntry::Spec(_) => Validation::success(()),
                    TransitionEntry::Malformed => {
                        Validation::fail(GraphIssue::MalformedTransition {
                            state: state.clone(),
                            event: event.to_string(),
                        })
                    }
                };
                checks.push(check);
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
