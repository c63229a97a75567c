//! Transition edges and the tagged result of looking one up.

use crate::core::Guard;
use std::fmt;

/// One transition edge `(state, event) -> next_state`.
pub struct TransitionSpec<P> {
    /// Target state name.
    pub next_state: String,
    /// Action label handed to the action wrapper. Only a non-empty label
    /// counts as an action.
    pub action: Option<String>,
    /// Optional predicate gating the state change.
    pub guard: Option<Guard<P>>,
    /// Force observer notification even when the target is the initial state.
    pub notify_view: bool,
}

impl<P> TransitionSpec<P> {
    /// Plain edge to `next_state` with no action, guard or forced notification.
    pub fn new(next_state: impl Into<String>) -> Self {
        Self {
            next_state: next_state.into(),
            action: None,
            guard: None,
            notify_view: false,
        }
    }

    /// The action label, if this transition carries a real action.
    pub fn action_name(&self) -> Option<&str> {
        self.action.as_deref().filter(|name| !name.is_empty())
    }

    pub fn has_action(&self) -> bool {
        self.action_name().is_some()
    }

    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }
}

impl<P> Clone for TransitionSpec<P> {
    fn clone(&self) -> Self {
        Self {
            next_state: self.next_state.clone(),
            action: self.action.clone(),
            guard: self.guard.clone(),
            notify_view: self.notify_view,
        }
    }
}

impl<P> fmt::Debug for TransitionSpec<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionSpec")
            .field("next_state", &self.next_state)
            .field("action", &self.action)
            .field("guard", &self.guard)
            .field("notify_view", &self.notify_view)
            .finish()
    }
}

/// A declared event entry, validated once when the graph is built.
pub enum TransitionEntry<P> {
    /// Well-formed transition.
    Spec(TransitionSpec<P>),
    /// The declared value was null, not an object, or lacked a `nextState`.
    Malformed,
}

impl<P> TransitionEntry<P> {
    pub fn as_spec(&self) -> Option<&TransitionSpec<P>> {
        match self {
            Self::Spec(spec) => Some(spec),
            Self::Malformed => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed)
    }
}

impl<P> Clone for TransitionEntry<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Spec(spec) => Self::Spec(spec.clone()),
            Self::Malformed => Self::Malformed,
        }
    }
}

impl<P> fmt::Debug for TransitionEntry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spec(spec) => f.debug_tuple("Spec").field(spec).finish(),
            Self::Malformed => f.write_str("Malformed"),
        }
    }
}

impl<P> From<TransitionSpec<P>> for TransitionEntry<P> {
    fn from(spec: TransitionSpec<P>) -> Self {
        Self::Spec(spec)
    }
}

/// Result of looking up `(state, event)` in a graph.
pub enum Lookup<'a, P> {
    /// A well-formed transition exists.
    Found(&'a TransitionSpec<P>),
    /// Neither the state nor the event declares anything.
    Missing,
    /// The event is declared but its entry is malformed.
    Malformed,
}

impl<'a, P> Lookup<'a, P> {
    pub fn spec(&self) -> Option<&'a TransitionSpec<P>> {
        match self {
            Self::Found(spec) => Some(*spec),
            Self::Missing | Self::Malformed => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl<P> fmt::Debug for Lookup<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(spec) => f.debug_tuple("Found").field(spec).finish(),
            Self::Missing => f.write_str("Missing"),
            Self::Malformed => f.write_str("Malformed"),
        }
    }
}
