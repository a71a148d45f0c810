use crate::output::{print_json, print_table};
use crate::snapshot::SnapshotFile;
use anyhow::Context;
use dogswatch_core::{
    config::Config,
    decision::{decide, Decision},
    given,
};
use std::path::Path;

pub fn run(path: &Path, config: Option<&Path>, apply: bool, json: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(config).context("failed to load config")?;
    let mut file = SnapshotFile::load(path)?;

    let decisions: Vec<Decision> = file
        .nodes
        .iter()
        .map(|node| decide(&given(node), &config.policy))
        .collect();

    if apply {
        let mut changed = 0;
        for (node, decision) in file.nodes.iter_mut().zip(&decisions) {
            if let Some(ref proposal) = decision.proposal {
                node.apply(proposal);
                changed += 1;
            }
        }
        if changed > 0 {
            file.save()?;
        }
        tracing::info!(changed, "applied decisions");
    }

    if json {
        return print_json(&decisions);
    }

    let rows = decisions
        .iter()
        .map(|d| {
            let wanted = d
                .proposal
                .as_ref()
                .map(|p| p.wanted.to_string())
                .unwrap_or_else(|| "-".to_string());
            vec![
                d.node.clone(),
                d.directive.to_string(),
                wanted,
                d.message.clone(),
            ]
        })
        .collect();
    print_table(&["NODE", "DIRECTIVE", "WANTED", "MESSAGE"], rows);
    Ok(())
}
