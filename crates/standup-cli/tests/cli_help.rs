use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("standup")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--page"))
        .stdout(predicate::str::contains("--seed"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("standup")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("standup")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_page_is_rejected() {
    cargo_bin_cmd!("standup")
        .args(["--page", "backstage", "report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown page 'backstage'"));
}

#[test]
fn test_dashboard_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("standup")
        .env("STANDUP_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
