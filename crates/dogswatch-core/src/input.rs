//! Reading an [`Intent`] out of anything that carries node tags.

use crate::error::{DogswatchError, Result};
use crate::intent::{Annotations, Intent, Labels};
use crate::marker::{
    self, Action, NodeState, UpdateAvailability, NODE_ACTION_ACTIVE, NODE_ACTION_ACTIVE_STATE,
    NODE_ACTION_WANTED, UPDATE_AVAILABLE_KEY,
};
use serde::{Deserialize, Serialize};

/// A holder of annotations and labels.
pub trait Container {
    fn annotations(&self) -> Annotations;
    fn labels(&self) -> Labels;
}

/// The subset of a node resource needed to interpret its intent.
pub trait Input: Container {
    fn name(&self) -> &str;
}

impl Container for Intent {
    fn annotations(&self) -> Annotations {
        Intent::annotations(self)
    }

    fn labels(&self) -> Labels {
        Intent::labels(self)
    }
}

impl Input for Intent {
    fn name(&self) -> &str {
        Intent::name(self)
    }
}

/// Reads the communicated intent from `input` without projecting it.
///
/// Missing annotations read as empty strings. Tokens are stored as given;
/// unrecognized ones are only rejected when the progression is consulted.
pub fn given<I: Input + ?Sized>(input: &I) -> Intent {
    let annos = input.annotations();
    let get = |key: &str| annos.get(key).map(String::as_str).unwrap_or_default();

    Intent {
        node_name: input.name().to_string(),
        wanted: Action::parse(get(NODE_ACTION_WANTED)),
        active: Action::parse(get(NODE_ACTION_ACTIVE)),
        state: NodeState::parse(get(NODE_ACTION_ACTIVE_STATE)),
        update_available: UpdateAvailability::parse(get(UPDATE_AVAILABLE_KEY)),
    }
}

// ---------------------------------------------------------------------------
// NodeSnapshot
// ---------------------------------------------------------------------------

/// Point-in-time copy of a node's name and tags, as read from or written to
/// the tag store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub name: String,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub labels: Labels,
}

impl NodeSnapshot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DogswatchError::InvalidSnapshot(
                "node name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Writes `intent` onto this snapshot. Tags dogswatch does not own are
    /// left alone.
    pub fn apply(&mut self, intent: &Intent) {
        self.annotations.extend(intent.annotations());
        self.labels.extend(intent.labels());
    }

    /// Annotations in the dogswatch namespace that this crate does not know.
    pub fn foreign_owned_keys(&self) -> Vec<&str> {
        let known = [
            NODE_ACTION_WANTED,
            NODE_ACTION_ACTIVE,
            NODE_ACTION_ACTIVE_STATE,
            UPDATE_AVAILABLE_KEY,
        ];
        self.annotations
            .keys()
            .map(String::as_str)
            .filter(|k| marker::is_owned_key(k) && !known.contains(k))
            .collect()
    }
}

impl Container for NodeSnapshot {
    fn annotations(&self) -> Annotations {
        self.annotations.clone()
    }

    fn labels(&self) -> Labels {
        self.labels.clone()
    }
}

impl Input for NodeSnapshot {
    fn name(&self) -> &str {
        &self.name
    }
}
