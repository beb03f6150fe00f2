//! Configuration as seen by the binary: gate thresholds, input limits and
//! environment overrides reaching `info`, `analyze` and `gate`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Binary isolated from the caller's user config and `NEWSROOM_*` variables.
#[allow(deprecated)]
fn newsroom(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env_remove("NEWSROOM_MIN_SEO_SCORE")
        .env_remove("NEWSROOM_MIN_CONTENT_SCORE")
        .env_remove("NEWSROOM_MAX_INPUT_BYTES")
        .env_remove("NEWSROOM_DISABLE_INPUT_LIMIT");
    cmd
}

/// A desk directory that is its own repository root.
fn desk(config: Option<(&str, &str)>) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join(".git")).unwrap();
    if let Some((name, body)) = config {
        fs::write(tmp.path().join(name), body).unwrap();
    }
    tmp
}

fn effective_config(cmd: &mut Command) -> Value {
    let output = cmd.args(["info", "--json"]).output().unwrap();
    assert!(
        output.status.success(),
        "info failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    json["config"].clone()
}

#[test]
fn thresholds_default_to_sixty() {
    let tmp = desk(None);
    let config = effective_config(&mut newsroom(tmp.path()));

    assert_eq!(config["min_seo_score"], 60);
    assert_eq!(config["min_content_score"], 60);
    assert!(config["config_file"].is_null());
}

#[test]
fn desk_config_sets_thresholds() {
    let tmp = desk(Some((
        ".newsroom.yaml",
        "min_seo_score: 70\nmin_content_score: 50\n",
    )));
    let config = effective_config(&mut newsroom(tmp.path()));

    assert_eq!(config["min_seo_score"], 70);
    assert_eq!(config["min_content_score"], 50);
    assert!(
        config["config_file"]
            .as_str()
            .unwrap()
            .ends_with(".newsroom.yaml")
    );
}

#[test]
fn environment_beats_config_file() {
    let tmp = desk(Some(("newsroom.toml", "min_seo_score = 70\n")));
    let config = effective_config(newsroom(tmp.path()).env("NEWSROOM_MIN_SEO_SCORE", "85"));

    assert_eq!(config["min_seo_score"], 85);
}

#[test]
fn explicit_config_beats_desk_config() {
    let tmp = desk(Some((".newsroom.toml", "min_content_score = 40\n")));
    let override_path = tmp.path().join("weekend.toml");
    fs::write(&override_path, "min_content_score = 75\n").unwrap();

    let config = effective_config(newsroom(tmp.path()).arg("--config").arg(&override_path));

    assert_eq!(config["min_content_score"], 75);
    assert!(
        config["config_file"]
            .as_str()
            .unwrap()
            .ends_with("weekend.toml")
    );
}

#[test]
fn input_limit_reported_and_disableable() {
    let tmp = desk(Some((".newsroom.toml", "max_input_bytes = 2048\n")));
    let config = effective_config(&mut newsroom(tmp.path()));
    assert_eq!(config["max_input_bytes"], 2048);

    let config = effective_config(
        newsroom(tmp.path()).env("NEWSROOM_DISABLE_INPUT_LIMIT", "true"),
    );
    assert!(config["max_input_bytes"].is_null());
}

#[test]
fn input_limit_rejects_large_draft() {
    let tmp = desk(Some((".newsroom.toml", "max_input_bytes = 10\n")));
    fs::write(tmp.path().join("draft.md"), "This draft runs past ten bytes.").unwrap();

    newsroom(tmp.path())
        .args(["analyze", "draft.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn gate_command_uses_configured_thresholds() {
    let tmp = desk(Some((
        ".newsroom.toml",
        "min_seo_score = 0\nmin_content_score = 0\n",
    )));
    fs::write(tmp.path().join("brief.md"), "A short note.").unwrap();

    newsroom(tmp.path())
        .args(["--color", "never", "gate", "brief.md", "--seo-score", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS draft -> published"));
}

#[test]
fn gate_flags_beat_configured_thresholds() {
    let tmp = desk(Some((".newsroom.toml", "min_content_score = 0\n")));
    fs::write(tmp.path().join("brief.md"), "A short note.").unwrap();

    let output = newsroom(tmp.path())
        .args(["gate", "--json", "brief.md", "--seo-score", "90"])
        .args(["--min-content", "50"])
        .assert()
        .failure();
    let json: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();

    assert_eq!(json["decision"]["min_content_score"], 50);
    assert_eq!(json["decision"]["can_publish"], false);
}

#[test]
fn analyze_colours_score_against_configured_threshold() {
    // 1,200 words under a heading in six paragraphs: content score 65.
    let sentence = "Our reporter went to the town hall today and asked the mayor about the budget.";
    let paragraph = vec![sentence; 14].join(" ");
    let story = format!("# Budget\n\n{}\n", vec![paragraph; 6].join("\n\n"));

    let strict = desk(Some((".newsroom.toml", "min_content_score = 80\n")));
    fs::write(strict.path().join("story.md"), &story).unwrap();
    newsroom(strict.path())
        .args(["--color", "always", "analyze", "story.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[33m65/100"));

    let lenient = desk(None);
    fs::write(lenient.path().join("story.md"), &story).unwrap();
    newsroom(lenient.path())
        .args(["--color", "always", "analyze", "story.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[32m65/100"));
}

#[test]
fn malformed_config_fails_the_run() {
    let tmp = desk(Some((".newsroom.toml", "min_seo_score = [[[")));

    newsroom(tmp.path())
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}
