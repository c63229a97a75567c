//! State transition history tracking.
//!
//! Provides tracking of the transitions a `Grapher` applied, in the order
//! they happened. History lives in memory only. The engine keeps a bounded
//! window of recent transitions; see
//! [`GrapherConfig::history_limit`](crate::engine::GrapherConfig::history_limit).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use kahtox::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "start".to_string(),
///     to: "running".to_string(),
///     event: "go".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, "running");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: String,
    /// The state being transitioned to
    pub to: String,
    /// The event that triggered the transition
    pub event: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// The `record` method is immutable and returns a new history with the
/// transition added. The engine appends in place instead.
///
/// # Example
///
/// ```rust
/// use kahtox::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: "start".into(),
///         to: "middle".into(),
///         event: "next".into(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: "middle".into(),
///         to: "end".into(),
///         event: "next".into(),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec!["start", "middle", "end"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// Does not mutate the existing history.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push_back(transition);
        Self { transitions }
    }

    /// Append in place, evicting the oldest entries beyond `limit`.
    pub(crate) fn push(&mut self, transition: StateTransition, limit: Option<usize>) {
        self.transitions.push_back(transition);
        if let Some(limit) = limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition, then the `to`
    /// state of each transition.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(first.from.as_str());
        }
        for transition in &self.transitions {
            path.push(transition.to.as_str());
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(
        &self,
    ) -> impl DoubleEndedIterator<Item = &StateTransition> + ExactSizeIterator {
        self.transitions.iter()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: &str, to: &str, event: &str) -> StateTransition {
        StateTransition {
            from: from.to_string(),
            to: to.to_string(),
            event: event.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(transition("start", "running", "go"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition("idle", "loading", "fetch"))
            .record(transition("loading", "idle", "done"));

        assert_eq!(history.get_path(), vec!["idle", "loading", "idle"]);
        assert_eq!(history.last().map(|t| t.event.as_str()), Some("done"));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new().record(transition("a", "b", "next"));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(transition("b", "c", "next"));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(transition("a", "b", "next"));

        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn push_evicts_oldest_beyond_limit() {
        let mut history = StateHistory::new();
        for (from, to) in [("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")] {
            history.push(transition(from, to, "next"), Some(2));
        }

        assert_eq!(history.len(), 2);
        assert_eq!(history.get_path(), vec!["c", "d", "e"]);
    }

    #[test]
    fn push_without_limit_keeps_everything() {
        let mut history = StateHistory::new();
        history.push(transition("a", "b", "next"), None);
        history.push(transition("b", "a", "back"), None);

        let events: Vec<_> = history.transitions().map(|t| t.event.as_str()).collect();
        assert_eq!(events, vec!["next", "back"]);
    }

    #[test]
    fn zero_limit_retains_nothing() {
        let mut history = StateHistory::new();
        history.push(transition("a", "b", "next"), Some(0));

        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition("start", "running", "go"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
