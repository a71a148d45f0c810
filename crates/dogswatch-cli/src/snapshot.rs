use anyhow::{bail, Context};
use dogswatch_core::{io::atomic_write, NodeSnapshot};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A snapshot document holds one node or a list of them.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<NodeSnapshot>),
    One(NodeSnapshot),
}

/// Node snapshots read from a YAML or JSON file, remembering the shape they
/// were read in so they can be written back the same way.
pub struct SnapshotFile {
    path: PathBuf,
    single: bool,
    pub nodes: Vec<NodeSnapshot>,
}

impl SnapshotFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot '{}'", path.display()))?;
        let doc: Document = serde_yaml::from_str(&data)
            .with_context(|| format!("failed to parse snapshot '{}'", path.display()))?;

        let (single, nodes) = match doc {
            Document::One(node) => (true, vec![node]),
            Document::Many(nodes) => (false, nodes),
        };
        if nodes.is_empty() {
            bail!("snapshot '{}' contains no nodes", path.display());
        }
        for node in &nodes {
            node.validate()
                .with_context(|| format!("in snapshot '{}'", path.display()))?;
            for key in node.foreign_owned_keys() {
                tracing::warn!(node = %node.name, key, "ignoring unknown dogswatch annotation");
            }
        }
        tracing::debug!(path = %path.display(), count = nodes.len(), "loaded snapshot");

        Ok(Self {
            path: path.to_path_buf(),
            single,
            nodes,
        })
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let doc = match (self.single, self.nodes.as_slice()) {
            (true, [node]) => Document::One(node.clone()),
            _ => Document::Many(self.nodes.clone()),
        };
        let data = if self.is_json() {
            serde_json::to_string_pretty(&doc)? + "\n"
        } else {
            serde_yaml::to_string(&doc)?
        };
        atomic_write(&self.path, data.as_bytes())
            .with_context(|| format!("failed to write snapshot '{}'", self.path.display()))
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}
