use crate::marker::{
    Action, NodeState, UpdateAvailability, NODE_ACTION_ACTIVE, NODE_ACTION_ACTIVE_STATE,
    NODE_ACTION_WANTED, UPDATE_AVAILABLE_KEY,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Annotations = BTreeMap<String, String>;
pub type Labels = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Intent
// ---------------------------------------------------------------------------

/// The commanded and reported progress of a single node.
///
/// An `Intent` is a snapshot. Evaluating it never changes it, and every
/// projection hands back a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Resource name that addresses the node.
    pub node_name: String,
    /// Action the orchestrator has instructed.
    pub wanted: Action,
    /// Action the agent last reported taking.
    pub active: Action,
    /// Agent-reported status, generally for the active action.
    pub state: NodeState,
    pub update_available: UpdateAvailability,
}

impl Intent {
    pub fn new(
        node_name: impl Into<String>,
        wanted: Action,
        active: Action,
        state: NodeState,
        update_available: UpdateAvailability,
    ) -> Self {
        Self {
            node_name: node_name.into(),
            wanted,
            active,
            state,
            update_available,
        }
    }

    pub fn name(&self) -> &str {
        &self.node_name
    }

    /// The intent as the annotations to write onto the node.
    pub fn annotations(&self) -> Annotations {
        Annotations::from([
            (NODE_ACTION_WANTED.to_string(), self.wanted.to_string()),
            (NODE_ACTION_ACTIVE.to_string(), self.active.to_string()),
            (NODE_ACTION_ACTIVE_STATE.to_string(), self.state.to_string()),
            (
                UPDATE_AVAILABLE_KEY.to_string(),
                self.update_available.to_string(),
            ),
        ])
    }

    /// Only update availability is promoted to a label so nodes can be
    /// selected by it.
    pub fn labels(&self) -> Labels {
        Labels::from([(
            UPDATE_AVAILABLE_KEY.to_string(),
            self.update_available.to_string(),
        )])
    }
}
