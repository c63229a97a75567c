//! Builder for constructing transition specs.

use crate::builder::error::BuildError;
use crate::core::{Guard, GuardEnvelope};
use crate::graph::TransitionSpec;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<P> {
    to: Option<String>,
    action: Option<String>,
    guard: Option<Guard<P>>,
    notify_view: bool,
}

impl<P> TransitionBuilder<P> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            to: None,
            action: None,
            guard: None,
            notify_view: false,
        }
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Name the action handed to the action wrapper (optional).
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard<P>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure over the envelope (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&GuardEnvelope<'_, P>) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Notify observers even when the target is the initial state.
    pub fn notify_view(mut self, notify: bool) -> Self {
        self.notify_view = notify;
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<TransitionSpec<P>, BuildError> {
        let next_state = self.to.ok_or(BuildError::MissingNextState)?;

        Ok(TransitionSpec {
            next_state,
            action: self.action,
            guard: self.guard,
            notify_view: self.notify_view,
        })
    }
}

impl<P> Default for TransitionBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionBuilder::<()>::new().action("SAVE").build();

        assert!(matches!(result, Err(BuildError::MissingNextState)));
    }

    #[test]
    fn fluent_api_builds_transition() {
        let spec = TransitionBuilder::<u64>::new()
            .to("saved")
            .action("SAVE")
            .when(|env| env.payload.is_some())
            .notify_view(true)
            .build()
            .unwrap();

        assert_eq!(spec.next_state, "saved");
        assert_eq!(spec.action_name(), Some("SAVE"));
        assert!(spec.notify_view);

        let guard = spec.guard.as_ref().unwrap();
        assert!(guard.check(&GuardEnvelope { payload: Some(&1) }));
        assert!(!guard.check(&GuardEnvelope { payload: None }));
    }

    #[test]
    fn defaults_are_plain_edge() {
        let spec = TransitionBuilder::<()>::default().to("next").build().unwrap();

        assert!(!spec.has_action());
        assert!(!spec.has_guard());
        assert!(!spec.notify_view);
    }
}
