//! Engine configuration.

use serde::{Deserialize, Serialize};

/// When a declared action fires relative to its transition's guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPolicy {
    /// Fire on every dispatch of the event, even when the guard rejects the
    /// state change.
    #[default]
    Always,
    /// Fire only when the guard passed and the state changed.
    GuardGated,
}

/// Settings for a [`Grapher`](super::Grapher).
///
/// Every field has a default, so partial JSON is accepted:
///
/// ```rust
/// use kahtox::engine::{ActionPolicy, GrapherConfig};
///
/// let config = GrapherConfig::from_json_str(r#"{ "action_policy": "guard_gated" }"#).unwrap();
/// assert_eq!(config.action_policy, ActionPolicy::GuardGated);
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, Some(256));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrapherConfig {
    pub action_policy: ActionPolicy,
    /// Keep an in-memory [`StateHistory`](crate::core::StateHistory) of
    /// applied transitions.
    pub record_history: bool,
    /// Most recent transitions kept when recording. `None` keeps every
    /// transition for the life of the engine.
    pub history_limit: Option<usize>,
}

/// Transitions retained by default when history is recorded.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

impl GrapherConfig {
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_action_policy(mut self, policy: ActionPolicy) -> Self {
        self.action_policy = policy;
        self
    }

    pub fn with_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }
}

impl Default for GrapherConfig {
    fn default() -> Self {
        Self {
            action_policy: ActionPolicy::Always,
            record_history: true,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fire_actions_always_and_record_history() {
        let config = GrapherConfig::default();
        assert_eq!(config.action_policy, ActionPolicy::Always);
        assert!(config.record_history);
        assert_eq!(config.history_limit, Some(DEFAULT_HISTORY_LIMIT));
    }

    #[test]
    fn null_history_limit_means_unbounded() {
        let config = GrapherConfig::from_json_str(r#"{ "history_limit": null }"#).unwrap();
        assert_eq!(config.history_limit, None);

        let config = GrapherConfig::from_json_str(r#"{ "history_limit": 8 }"#).unwrap();
        assert_eq!(config.history_limit, Some(8));
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config = GrapherConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GrapherConfig::default());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(GrapherConfig::from_json_str(r#"{ "action_policy": "sometimes" }"#).is_err());
    }

    #[test]
    fn setters_chain() {
        let config = GrapherConfig::default()
            .with_action_policy(ActionPolicy::GuardGated)
            .with_history(false)
            .with_history_limit(Some(4));

        assert_eq!(config.action_policy, ActionPolicy::GuardGated);
        assert!(!config.record_history);
        assert_eq!(config.history_limit, Some(4));
    }

    #[test]
    fn config_serializes_in_snake_case() {
        let json = serde_json::to_string(&GrapherConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"action_policy":"always","record_history":true,"history_limit":256}"#
        );
    }
}
