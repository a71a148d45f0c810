//! Predicates classifying where an [`Intent`] sits in the rollout.
//!
//! Every predicate is a total function of the intent's fields. Unset and
//! unrecognized tokens fall into the conservative, non-progressing answers.

use crate::intent::Intent;
use crate::marker::{Action, NodeState, UpdateAvailability};
use crate::progression;

impl Intent {
    /// The node is not mid-step and waits for its next command. This says
    /// nothing about whether the last step succeeded; pair with
    /// [`Intent::errored`] for that.
    pub fn waiting(&self) -> bool {
        match self.state {
            // Ready for action, probably waiting on the next command.
            NodeState::Ready => true,
            // Nothing requested yet, or nothing done to report.
            NodeState::Unset | NodeState::Unknown => true,
            // Failed and waiting on a next step.
            NodeState::Error => true,
            NodeState::Busy | NodeState::Other(_) => false,
        }
    }

    pub fn errored(&self) -> bool {
        self.state == NodeState::Error
    }

    /// Realizing this intent disrupts the node.
    pub fn intrusive(&self) -> bool {
        self.wanted == Action::RebootUpdate
    }

    pub fn has_update_available(&self) -> bool {
        self.update_available == UpdateAvailability::Available
    }

    /// The commanded action was reached without error and the node is idle.
    pub fn realized(&self) -> bool {
        self.wanted == self.active && !self.errored() && self.waiting()
    }

    /// The node runs a recognized step, has not finished, and the wanted
    /// action is still the natural successor of what it runs.
    pub fn in_progress(&self) -> bool {
        let pending_next = !self.realized() && self.project_active().wanted == self.wanted;
        is_progress_capable(&self.active) && pending_next
    }

    /// The intent cannot be realized from where it is and needs unsticking.
    ///
    /// Either the node diverged from its command with no progress to explain
    /// it, or the command is not the step that follows the node's active
    /// action. A realized intent is never stuck.
    pub fn stuck(&self) -> bool {
        let inconsistent_progress = self.active != self.wanted && !self.in_progress();
        let invalid_progress = self.wanted != self.project_active().wanted && !self.realized();
        inconsistent_progress || invalid_progress
    }

    /// The node confirms it sits on the absorbing tail of the progression.
    /// Nothing moves it on without outside action, such as a new update.
    pub fn terminal(&self) -> bool {
        progression::is_final(&self.wanted) && self.wanted == self.active
    }

    /// The orchestrator should evaluate a next command for this node.
    pub fn actionable(&self) -> bool {
        let can_progress = (self.waiting() || self.realized()) && !self.terminal();
        can_progress || self.in_unknown_state() || self.stuck()
    }

    pub(crate) fn in_unknown_state(&self) -> bool {
        matches!(self.state, NodeState::Unset | NodeState::Unknown)
    }
}

/// True for any real progression step; `Unknown` and unrecognized tokens
/// cannot make progress.
fn is_progress_capable(action: &Action) -> bool {
    progression::PROGRESSION.contains(action)
}
