//! Builder for constructing state graphs.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::graph::{StateGraph, TransitionSpec};

enum Declaration<P> {
    State(String),
    Transition {
        state: String,
        event: String,
        spec: TransitionSpec<P>,
    },
}

/// Builder for constructing state graphs with a fluent API.
///
/// Only the initial state is required. Targets are not checked against the
/// declared states; use [`StateGraph::validate`] for that.
pub struct GraphBuilder<P> {
    initial: Option<String>,
    declarations: Vec<Declaration<P>>,
}

impl<P> GraphBuilder<P> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            declarations: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, even one without outgoing transitions.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.declarations.push(Declaration::State(state.into()));
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        self,
        state: impl Into<String>,
        event: impl Into<String>,
        builder: TransitionBuilder<P>,
    ) -> Result<Self, BuildError> {
        let spec = builder.build()?;
        Ok(self.add_transition(state, event, spec))
    }

    /// Add a pre-built transition.
    pub fn add_transition(
        mut self,
        state: impl Into<String>,
        event: impl Into<String>,
        spec: TransitionSpec<P>,
    ) -> Self {
        self.declarations.push(Declaration::Transition {
            state: state.into(),
            event: event.into(),
            spec,
        });
        self
    }

    /// Build the graph.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateGraph<P>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut graph = StateGraph::new(initial);
        for declaration in self.declarations {
            match declaration {
                Declaration::State(state) => {
                    graph.add_state(state);
                }
                Declaration::Transition { state, event, spec } => {
                    graph.insert_transition(state, event, spec);
                }
            }
        }

        Ok(graph)
    }
}

impl<P> Default for GraphBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}
