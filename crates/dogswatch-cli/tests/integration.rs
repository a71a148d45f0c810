#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn dogswatch() -> Command {
    let mut cmd = Command::cargo_bin("dogswatch").unwrap();
    cmd.env_remove("DOGSWATCH_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const FLEET: &str = r#"
- name: fresh
- name: midway
  annotations:
    thar.amazonaws.com/action-wanted: stabilize
    thar.amazonaws.com/action-active: stabilize
    thar.amazonaws.com/action-state: ready
    thar.amazonaws.com/update-available: "true"
- name: wedged
  annotations:
    thar.amazonaws.com/action-wanted: reboot-update
    thar.amazonaws.com/action-active: prepare-update
    thar.amazonaws.com/action-state: error
    thar.amazonaws.com/update-available: "true"
- name: done
  annotations:
    thar.amazonaws.com/action-wanted: reboot-update
    thar.amazonaws.com/action-active: reboot-update
    thar.amazonaws.com/action-state: ready
    thar.amazonaws.com/update-available: "false"
"#;

// ---------------------------------------------------------------------------
// dogswatch inspect
// ---------------------------------------------------------------------------

#[test]
fn inspect_lists_every_node() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "fleet.yaml", FLEET);

    dogswatch()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("fresh"))
        .stdout(predicate::str::contains("midway"))
        .stdout(predicate::str::contains("wedged"))
        .stdout(predicate::str::contains("ACTIONABLE"));
}

#[test]
fn inspect_json_reports_predicates() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "fleet.yaml", FLEET);

    let output = dogswatch()
        .args(["inspect", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 4);

    let wedged = &reports[2];
    assert_eq!(wedged["node_name"], "wedged");
    assert_eq!(wedged["stuck"], true);
    assert_eq!(wedged["errored"], true);

    let done = &reports[3];
    assert_eq!(done["terminal"], true);
    assert_eq!(done["actionable"], false);
}

#[test]
fn inspect_accepts_single_json_node() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "node.json",
        r#"{"name": "solo", "annotations": {"thar.amazonaws.com/action-state": "busy"}}"#,
    );

    dogswatch()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("solo"))
        .stdout(predicate::str::contains("busy"));
}

#[test]
fn inspect_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    dogswatch()
        .arg("inspect")
        .arg(dir.path().join("nope.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read snapshot"));
}

#[test]
fn inspect_rejects_nameless_node() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.yaml", "name: \"\"\n");
    dogswatch()
        .arg("inspect")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("node name must not be empty"));
}

// ---------------------------------------------------------------------------
// dogswatch next
// ---------------------------------------------------------------------------

#[test]
fn next_decides_per_node() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "fleet.yaml", FLEET);

    let output = dogswatch()
        .args(["next", "-j"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let decisions: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let directives: Vec<&str> = decisions
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["directive"].as_str().unwrap())
        .collect();
    assert_eq!(directives, vec!["advance", "advance", "reset", "wait"]);
    assert_eq!(
        decisions[1]["proposal"]["wanted"],
        serde_json::json!("prepare-update")
    );
}

#[test]
fn next_without_apply_leaves_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "fleet.yaml", FLEET);

    dogswatch().arg("next").arg(&path).assert().success();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), FLEET);
}

#[test]
fn next_apply_writes_proposals() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "fleet.yaml", FLEET);

    dogswatch()
        .args(["next", "--apply"])
        .arg(&path)
        .assert()
        .success();

    let nodes: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let wanted = |i: usize| {
        nodes[i]["annotations"]["thar.amazonaws.com/action-wanted"]
            .as_str()
            .unwrap()
            .to_string()
    };
    assert_eq!(wanted(0), "reset");
    assert_eq!(wanted(1), "prepare-update");
    assert_eq!(wanted(2), "reset");
    assert_eq!(wanted(3), "reboot-update");
    assert_eq!(
        nodes[2]["annotations"]["thar.amazonaws.com/action-active"]
            .as_str()
            .unwrap(),
        "unknown"
    );
    assert_eq!(
        nodes[0]["labels"]["thar.amazonaws.com/update-available"]
            .as_str()
            .unwrap(),
        "unknown"
    );
}

#[test]
fn next_apply_keeps_single_node_shape() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "node.yaml", "name: solo\n");

    dogswatch()
        .args(["next", "--apply"])
        .arg(&path)
        .assert()
        .success();

    let node: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(node["name"].as_str().unwrap(), "solo");
    assert_eq!(
        node["annotations"]["thar.amazonaws.com/action-wanted"]
            .as_str()
            .unwrap(),
        "reset"
    );
}

#[test]
fn next_respects_policy_config() {
    let dir = TempDir::new().unwrap();
    let snapshot = write(
        &dir,
        "node.yaml",
        r#"
name: almost
annotations:
  thar.amazonaws.com/action-wanted: perform-update
  thar.amazonaws.com/action-active: perform-update
  thar.amazonaws.com/action-state: ready
  thar.amazonaws.com/update-available: "true"
"#,
    );
    let config = write(&dir, "dogswatch.yaml", "policy:\n  allow_intrusive: false\n");

    dogswatch()
        .arg("next")
        .arg(&snapshot)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("hold"))
        .stdout(predicate::str::contains("intrusive actions are disabled"));

    dogswatch()
        .arg("next")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("advance"))
        .stdout(predicate::str::contains("reboot-update"));
}

#[test]
fn rust_log_raises_log_level() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "fleet.yaml", FLEET);

    dogswatch()
        .arg("next")
        .arg(&path)
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded snapshot"))
        .stderr(predicate::str::contains("advances to"));
}

#[test]
fn default_log_level_hides_debug() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "fleet.yaml", FLEET);

    dogswatch()
        .arg("next")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded snapshot").not());
}

// ---------------------------------------------------------------------------
// dogswatch project / reset
// ---------------------------------------------------------------------------

#[test]
fn project_shows_next_annotations() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "fleet.yaml", FLEET);

    dogswatch()
        .arg("project")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "thar.amazonaws.com/action-wanted: prepare-update",
        ));
}

#[test]
fn reset_returns_to_first_step() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "fleet.yaml", FLEET);

    let output = dogswatch()
        .args(["reset", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let nodes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for node in nodes.as_array().unwrap() {
        assert_eq!(node["annotations"]["thar.amazonaws.com/action-wanted"], "reset");
        assert_eq!(node["annotations"]["thar.amazonaws.com/action-active"], "unknown");
        assert_eq!(node["annotations"]["thar.amazonaws.com/action-state"], "unknown");
    }
}

// ---------------------------------------------------------------------------
// dogswatch config
// ---------------------------------------------------------------------------

#[test]
fn config_validate_defaults() {
    dogswatch()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn config_validate_warns() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "dogswatch.yaml", "policy:\n  allow_intrusive: false\n");

    dogswatch()
        .args(["config", "validate", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("[warning] restart_on_update"));
}

#[test]
fn config_validate_json_lists_messages() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "dogswatch.yaml", "policy:\n  allow_intrusive: false\n");

    let output = dogswatch()
        .args(["config", "validate", "--json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let warnings = value["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0]["message"]
        .as_str()
        .unwrap()
        .contains("allow_intrusive"));
    assert!(warnings[0].get("level").is_none());
}

#[test]
fn config_from_env() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "dogswatch.yaml", "policy:\n  reset_on_error: false\n");

    dogswatch()
        .args(["config", "show"])
        .env("DOGSWATCH_CONFIG", &config)
        .assert()
        .success()
        .stdout(predicate::str::contains("reset_on_error:           false"));
}

#[test]
fn config_bad_yaml_fails() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "dogswatch.yaml", "policy: [not, a, map]\n");

    dogswatch()
        .args(["config", "show", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
