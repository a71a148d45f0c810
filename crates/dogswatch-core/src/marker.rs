//! Tag keys and tokens exchanged with node agents.
//!
//! Every token round-trips through its wire string verbatim, including values
//! this crate does not recognize. Rejecting a token is left to the
//! progression table.

use serde::{Deserialize, Serialize};
use std::fmt;

const PREFIX: &str = "thar.amazonaws.com";

/// Annotation holding the action the orchestrator has commanded.
pub const NODE_ACTION_WANTED: &str = "thar.amazonaws.com/action-wanted";
/// Annotation holding the action the agent last reported executing.
pub const NODE_ACTION_ACTIVE: &str = "thar.amazonaws.com/action-active";
/// Annotation holding the agent's status for the active action.
pub const NODE_ACTION_ACTIVE_STATE: &str = "thar.amazonaws.com/action-state";
/// Annotation and label holding the node's update availability.
pub const UPDATE_AVAILABLE_KEY: &str = "thar.amazonaws.com/update-available";

/// Returns true when `key` belongs to the tag namespace owned by dogswatch.
pub fn is_owned_key(key: &str) -> bool {
    key.strip_prefix(PREFIX)
        .is_some_and(|rest| rest.starts_with('/'))
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    #[default]
    Unknown,
    Reset,
    Stabilize,
    PrepareUpdate,
    PerformUpdate,
    RebootUpdate,
    Unrecognized(String),
}

impl Action {
    pub fn parse(s: &str) -> Action {
        match s {
            "" | "unknown" => Action::Unknown,
            "reset" => Action::Reset,
            "stabilize" => Action::Stabilize,
            "prepare-update" => Action::PrepareUpdate,
            "perform-update" => Action::PerformUpdate,
            "reboot-update" => Action::RebootUpdate,
            other => Action::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Unknown => "unknown",
            Action::Reset => "reset",
            Action::Stabilize => "stabilize",
            Action::PrepareUpdate => "prepare-update",
            Action::PerformUpdate => "perform-update",
            Action::RebootUpdate => "reboot-update",
            Action::Unrecognized(s) => s,
        }
    }

    /// Actions that only make sense once the node has an update to apply.
    pub fn requires_update(&self) -> bool {
        matches!(
            self,
            Action::PrepareUpdate | Action::PerformUpdate | Action::RebootUpdate
        )
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        Action::parse(&s)
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        Action::parse(s)
    }
}

impl From<Action> for String {
    fn from(a: Action) -> Self {
        match a {
            Action::Unrecognized(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NodeState
// ---------------------------------------------------------------------------

/// Agent-reported status of the active action. Anything other than the
/// idle states is treated as the agent being busy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeState {
    #[default]
    Unset,
    Unknown,
    Ready,
    Busy,
    Error,
    Other(String),
}

impl NodeState {
    pub fn parse(s: &str) -> NodeState {
        match s {
            "" => NodeState::Unset,
            "unknown" => NodeState::Unknown,
            "ready" => NodeState::Ready,
            "busy" => NodeState::Busy,
            "error" => NodeState::Error,
            other => NodeState::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeState::Unset => "",
            NodeState::Unknown => "unknown",
            NodeState::Ready => "ready",
            NodeState::Busy => "busy",
            NodeState::Error => "error",
            NodeState::Other(s) => s,
        }
    }
}

impl From<String> for NodeState {
    fn from(s: String) -> Self {
        NodeState::parse(&s)
    }
}

impl From<&str> for NodeState {
    fn from(s: &str) -> Self {
        NodeState::parse(s)
    }
}

impl From<NodeState> for String {
    fn from(s: NodeState) -> Self {
        match s {
            NodeState::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UpdateAvailability
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UpdateAvailability {
    Available,
    Unavailable,
    #[default]
    Unknown,
    Other(String),
}

impl UpdateAvailability {
    pub fn parse(s: &str) -> UpdateAvailability {
        match s {
            "true" => UpdateAvailability::Available,
            "false" => UpdateAvailability::Unavailable,
            "" | "unknown" => UpdateAvailability::Unknown,
            other => UpdateAvailability::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UpdateAvailability::Available => "true",
            UpdateAvailability::Unavailable => "false",
            UpdateAvailability::Unknown => "unknown",
            UpdateAvailability::Other(s) => s,
        }
    }
}

impl From<String> for UpdateAvailability {
    fn from(s: String) -> Self {
        UpdateAvailability::parse(&s)
    }
}

impl From<&str> for UpdateAvailability {
    fn from(s: &str) -> Self {
        UpdateAvailability::parse(s)
    }
}

impl From<UpdateAvailability> for String {
    fn from(u: UpdateAvailability) -> Self {
        match u {
            UpdateAvailability::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for UpdateAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
