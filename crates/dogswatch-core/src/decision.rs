//! Turning an evaluated [`Intent`] into the orchestrator's next move.
//!
//! The predicates describe where a node is; `decide` applies the [`Policy`]
//! to pick one directive per node per cycle. Nothing here writes tags: a
//! proposal is handed back for the caller to persist.

use crate::config::Policy;
use crate::intent::Intent;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Directive
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    /// Command the next step of the progression.
    Advance,
    /// Send the node back to the first step.
    Reset,
    /// Begin a fresh cycle from the terminal step.
    Restart,
    /// Leave the node alone; it is working or done.
    Wait,
    /// The node could move but policy forbids it.
    Hold,
}

impl Directive {
    pub fn as_str(self) -> &'static str {
        match self {
            Directive::Advance => "advance",
            Directive::Reset => "reset",
            Directive::Restart => "restart",
            Directive::Wait => "wait",
            Directive::Hold => "hold",
        }
    }

    /// Whether the directive comes with an intent to write back.
    pub fn proposes(self) -> bool {
        matches!(
            self,
            Directive::Advance | Directive::Reset | Directive::Restart
        )
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub node: String,
    pub directive: Directive,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal: Option<Intent>,
    /// True when writing the proposal will disrupt the node.
    pub intrusive: bool,
}

impl Decision {
    fn without_proposal(intent: &Intent, directive: Directive, message: String) -> Self {
        Self {
            node: intent.node_name.clone(),
            directive,
            message,
            proposal: None,
            intrusive: false,
        }
    }

    fn with_proposal(
        intent: &Intent,
        directive: Directive,
        message: String,
        proposal: Intent,
    ) -> Self {
        Self {
            node: intent.node_name.clone(),
            directive,
            message,
            intrusive: proposal.intrusive(),
            proposal: Some(proposal),
        }
    }
}

/// Picks the orchestrator's next move for `intent` under `policy`.
pub fn decide(intent: &Intent, policy: &Policy) -> Decision {
    let decision = evaluate(intent, policy);
    tracing::debug!(
        node = %decision.node,
        wanted = %intent.wanted,
        active = %intent.active,
        state = %intent.state,
        directive = %decision.directive,
        "{}",
        decision.message
    );
    decision
}

fn evaluate(intent: &Intent, policy: &Policy) -> Decision {
    let name = &intent.node_name;

    if intent.terminal() && intent.has_update_available() && policy.restart_on_update {
        return Decision::with_proposal(
            intent,
            Directive::Restart,
            format!("Node '{name}' completed its cycle and has another update"),
            intent.reset(),
        );
    }

    if !intent.actionable() {
        let message = if intent.terminal() {
            format!("Node '{name}' is up to date at '{}'", intent.wanted)
        } else {
            format!("Node '{name}' is working on '{}'", intent.wanted)
        };
        return Decision::without_proposal(intent, Directive::Wait, message);
    }

    if intent.stuck() {
        return Decision::with_proposal(
            intent,
            Directive::Reset,
            format!(
                "Node '{name}' is stuck: wanted '{}' but active '{}' ({})",
                intent.wanted,
                intent.active,
                display_state(intent)
            ),
            intent.reset(),
        );
    }

    if intent.errored() {
        let message = format!("Node '{name}' failed '{}'", intent.active);
        return if policy.reset_on_error {
            Decision::with_proposal(intent, Directive::Reset, message, intent.reset())
        } else {
            Decision::without_proposal(intent, Directive::Hold, message)
        };
    }

    if intent.in_unknown_state() || intent.realized() {
        let next = intent.projected();

        if next.intrusive() && !policy.allow_intrusive {
            return Decision::without_proposal(
                intent,
                Directive::Hold,
                format!("Node '{name}' needs '{}' but intrusive actions are disabled", next.wanted),
            );
        }

        if next.wanted.requires_update()
            && !next.has_update_available()
            && policy.require_update_available
        {
            return Decision::without_proposal(
                intent,
                Directive::Hold,
                format!("Node '{name}' has no update available for '{}'", next.wanted),
            );
        }

        return Decision::with_proposal(
            intent,
            Directive::Advance,
            format!("Node '{name}' advances to '{}'", next.wanted),
            next,
        );
    }

    Decision::without_proposal(
        intent,
        Directive::Wait,
        format!("Node '{name}' has not picked up '{}' yet", intent.wanted),
    )
}

fn display_state(intent: &Intent) -> &str {
    match intent.state.as_str() {
        "" => "no state",
        s => s,
    }
}
