//! CLI integration tests.
//!
//! Every test points `FOLIO_CONFIG_DIR` at its own temp directory so
//! nothing touches the real user config.

use std::fs;
use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env("FOLIO_CONFIG_DIR", config_dir.path());
    cmd.timeout(Duration::from_secs(20));
    cmd
}

#[test]
fn projects_lists_the_builtin_catalog() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Termboard"))
        .stdout(predicate::str::contains("Matchstick"));
}

#[test]
fn projects_filters_by_tag() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["projects", "--tag", "simulation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fieldlines"))
        .stdout(predicate::str::contains("Termboard").not());
}

#[test]
fn projects_with_unknown_tag_reports_empty() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["projects", "--tag", "embedded"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects tagged 'embedded'"));
}

#[test]
fn projects_json_output_is_parseable() {
    let dir = TempDir::new().unwrap();
    let output = folio(&dir)
        .args(["projects", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(4));
}

#[test]
fn contact_prints_an_encoded_mailto_link() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args([
            "contact",
            "--name",
            "Ada",
            "--subject",
            "Hi there",
            "--message",
            "Nice work",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mailto:jordan@example.dev?subject=Hi%20there",
        ))
        .stdout(predicate::str::contains("Name%3A%20Ada"));
}

#[test]
fn theme_defaults_to_dark() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));
}

#[test]
fn theme_set_persists_across_invocations() {
    let dir = TempDir::new().unwrap();
    folio(&dir).args(["theme", "light"]).assert().success();

    folio(&dir)
        .args(["theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));

    let saved = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(saved.contains("theme = \"light\""));
}

#[test]
fn theme_rejects_unknown_names() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["theme", "solarized"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme"));
}

#[test]
fn config_path_points_into_the_override_dir() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_prints_toml() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme ="))
        .stdout(predicate::str::contains("[typewriter]"));
}

#[test]
fn config_migrate_yes_adds_missing_fields() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "theme = \"light\"\n").unwrap();

    folio(&dir)
        .args(["config", "migrate", "--yes"])
        .assert()
        .success();

    let migrated = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(migrated.contains("theme = \"light\""));
    assert!(migrated.contains("type_delay_ms"));
}

#[test]
fn skills_prints_a_bar_per_skill() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["skills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust"))
        .stdout(predicate::str::contains("█"));
}

#[test]
fn type_stops_after_the_requested_cycles() {
    let dir = TempDir::new().unwrap();
    // Millisecond delays keep the full cycle under a second.
    fs::write(
        dir.path().join("config.toml"),
        "theme = \"dark\"\n\n[typewriter]\ntype_delay_ms = 1\ndelete_delay_ms = 1\nfull_pause_ms = 1\nempty_pause_ms = 1\n",
    )
    .unwrap();

    folio(&dir)
        .args(["type", "--phrase", "Hi", "--cycles", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi"));
}
