use crate::output::print_json;
use crate::snapshot::SnapshotFile;
use dogswatch_core::{given, Intent};
use std::path::Path;

pub fn run_projected(path: &Path, json: bool) -> anyhow::Result<()> {
    show(path, json, Intent::projected)
}

pub fn run_reset(path: &Path, json: bool) -> anyhow::Result<()> {
    show(path, json, Intent::reset)
}

fn show(path: &Path, json: bool, step: fn(&Intent) -> Intent) -> anyhow::Result<()> {
    let file = SnapshotFile::load(path)?;
    let proposals: Vec<Intent> = file.nodes.iter().map(|n| step(&given(n))).collect();

    if json {
        let value: Vec<_> = proposals
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name(),
                    "annotations": p.annotations(),
                    "labels": p.labels(),
                })
            })
            .collect();
        return print_json(&value);
    }

    for (i, p) in proposals.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}:", p.name());
        for (key, value) in p.annotations() {
            println!("  {key}: {value}");
        }
    }
    Ok(())
}
