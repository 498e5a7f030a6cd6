use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_text_report_shows_seed_metrics() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("standup")
        .env("STANDUP_HOME", dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard"))
        .stdout(predicate::str::contains("60%"))
        .stdout(predicate::str::contains("Comedy Night"))
        .stdout(predicate::str::contains("Laugh Factory"));
}

#[test]
fn test_json_report_totals() {
    let dir = tempdir().unwrap();

    let output = cargo_bin_cmd!("standup")
        .env("STANDUP_HOME", dir.path())
        .args(["report", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["ticket_price"], 25);
    assert_eq!(report["dashboard"]["comedians"], 5);
    assert_eq!(report["dashboard"]["tickets_sold"], 450);
    assert_eq!(report["analytics"]["total_revenue"], 11_250);
    assert_eq!(report["venues"].as_array().unwrap().len(), 5);
}

#[test]
fn test_ticket_price_from_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "ticket_price = 40\n").unwrap();

    let output = cargo_bin_cmd!("standup")
        .env("STANDUP_HOME", dir.path())
        .args(["report", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["analytics"]["total_revenue"], 18_000);
}
