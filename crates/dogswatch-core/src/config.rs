use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning
// ---------------------------------------------------------------------------

/// A policy combination that loads fine but does not do what it says.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Knobs that decide how far the orchestrator may drive a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Permit commanding the reboot step.
    #[serde(default = "default_true")]
    pub allow_intrusive: bool,
    /// Start a new cycle when a terminal node reports another update.
    #[serde(default = "default_true")]
    pub restart_on_update: bool,
    /// Hold nodes before update steps unless they report an update.
    #[serde(default = "default_true")]
    pub require_update_available: bool,
    /// Send errored nodes back to the start of the progression.
    #[serde(default = "default_true")]
    pub reset_on_error: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            allow_intrusive: default_true(),
            restart_on_update: default_true(),
            require_update_available: default_true(),
            reset_on_error: default_true(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: Policy,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        tracing::debug!(path = %path.display(), policy = ?cfg.policy, "loaded config");
        Ok(cfg)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if !self.policy.allow_intrusive && self.policy.restart_on_update {
            warnings.push(ConfigWarning {
                message: "restart_on_update has no effect while allow_intrusive is false: \
                          nodes never reach the final step"
                    .to_string(),
            });
        }

        warnings
    }
}
