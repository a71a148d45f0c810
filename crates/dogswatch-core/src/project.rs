//! Hypothetical next intents, computed without committing anything.

use crate::intent::Intent;
use crate::marker::{Action, NodeState};
use crate::progression;

impl Intent {
    /// The n+1 step of this intent.
    ///
    /// An intent in an unknown state is first brought back to the origin.
    /// This does not check that the node actually finished its current step.
    pub fn projected(&self) -> Intent {
        let mut p = self.clone();
        if p.in_unknown_state() {
            p.rewind_to_origin();
        }
        if let Ok(next) = progression::next(&p.wanted) {
            p.wanted = next;
        }
        p
    }

    /// The step that would follow if the walk began at the active action.
    pub(crate) fn project_active(&self) -> Intent {
        let prior = Intent {
            wanted: self.active.clone(),
            ..self.clone()
        };
        prior.projected()
    }

    /// The intent brought back to the start of the progression, commanding
    /// its first step.
    pub fn reset(&self) -> Intent {
        let mut p = self.clone();
        p.rewind_to_origin();
        p.projected()
    }

    /// Origin point from which an intent can be driven to a terminal point.
    fn rewind_to_origin(&mut self) {
        self.wanted = Action::Unknown;
        self.active = Action::Unknown;
        self.state = NodeState::Unknown;
    }
}
