use crate::output::{print_json, print_table, yes_no};
use crate::snapshot::SnapshotFile;
use dogswatch_core::{given, Intent};
use serde::Serialize;
use std::path::Path;

/// Every predicate for one node, as reported by `dogswatch inspect`.
#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    intent: Intent,
    waiting: bool,
    errored: bool,
    intrusive: bool,
    has_update_available: bool,
    in_progress: bool,
    realized: bool,
    stuck: bool,
    terminal: bool,
    actionable: bool,
}

impl Report {
    fn new(intent: Intent) -> Self {
        Self {
            waiting: intent.waiting(),
            errored: intent.errored(),
            intrusive: intent.intrusive(),
            has_update_available: intent.has_update_available(),
            in_progress: intent.in_progress(),
            realized: intent.realized(),
            stuck: intent.stuck(),
            terminal: intent.terminal(),
            actionable: intent.actionable(),
            intent,
        }
    }
}

pub fn run(path: &Path, json: bool) -> anyhow::Result<()> {
    let file = SnapshotFile::load(path)?;
    let reports: Vec<Report> = file.nodes.iter().map(|n| Report::new(given(n))).collect();

    if json {
        return print_json(&reports);
    }

    let rows = reports
        .iter()
        .map(|r| {
            vec![
                r.intent.node_name.clone(),
                r.intent.wanted.to_string(),
                r.intent.active.to_string(),
                r.intent.state.to_string(),
                yes_no(r.has_update_available),
                yes_no(r.in_progress),
                yes_no(r.realized),
                yes_no(r.stuck),
                yes_no(r.terminal),
                yes_no(r.actionable),
            ]
        })
        .collect();
    print_table(
        &[
            "NODE",
            "WANTED",
            "ACTIVE",
            "STATE",
            "UPDATE",
            "IN-PROGRESS",
            "REALIZED",
            "STUCK",
            "TERMINAL",
            "ACTIONABLE",
        ],
        rows,
    );
    Ok(())
}
