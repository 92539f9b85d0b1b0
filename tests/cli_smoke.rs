use assert_cmd::prelude::*;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const NOW: &str = "2024-07-01T00:00:00Z";

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
    path
}

fn snapshot_json(created_at: &str) -> String {
    format!(
        r#"{{
            "repo": {{
                "owner": "octocat",
                "name": "hello-world",
                "description": "My first repository",
                "stars": 42,
                "forks": 7,
                "language": "Rust",
                "created_at": "{created_at}"
            }},
            "commits": [
                {{"date": "2024-06-30T12:00:00Z", "author": "amy"}},
                {{"date": "2024-06-30T13:00:00Z", "author": "bob"}},
                {{"date": "2024-06-15T08:00:00Z", "author": "amy"}},
                {{"date": "2023-01-01T00:00:00Z", "author": "old"}},
                {{"date": "garbage", "author": "amy"}}
            ]
        }}"#
    )
}

fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut cmd = Command::cargo_bin("repopulse").unwrap();
    cmd.current_dir(dir).args(args);
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn histogram_json_outputs_fixed_buckets() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "snap.json", &snapshot_json("2015-01-01T00:00:00Z"));

    let v = run_json(
        dir.path(),
        &["--now", NOW, "histogram", "--json", input.to_str().unwrap()],
    );
    let buckets = v["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 96);
    let total: u64 = buckets.iter().map(|b| b["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 3);
    assert!(buckets[0]["date"].as_str().unwrap().ends_with(".000Z"));
    assert_eq!(v["repository"], "octocat/hello-world");
}

#[test]
fn histogram_respects_bucket_flag_and_future_creation() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "snap.json", &snapshot_json("2030-01-01T00:00:00Z"));

    let v = run_json(
        dir.path(),
        &["--now", NOW, "--buckets", "8", "histogram", "--json", input.to_str().unwrap()],
    );
    let buckets = v["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 8);
    assert!(buckets.iter().all(|b| b["count"] == 0));
    assert!(buckets.iter().all(|b| b["date"] == "2024-07-01T00:00:00.000Z"));
}

#[test]
fn momentum_reads_counts_from_stdin() {
    let dir = tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("repopulse").unwrap();
    cmd.current_dir(dir.path())
        .args(["momentum", "--json"])
        .write_stdin("[1, 1, 1]");
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let series: Vec<f64> = v["momentum"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m.as_f64().unwrap())
        .collect();
    assert_eq!(series.len(), 3);
    assert!((series[2] - 2.8525).abs() < 1e-9);
    assert_eq!(v["decay_rate"], 0.95);
}

#[test]
fn momentum_rejects_invalid_decay() {
    let dir = tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("repopulse").unwrap();
    cmd.current_dir(dir.path())
        .args(["--decay", "1.5", "momentum", "--json"])
        .write_stdin("[1]");
    cmd.assert().failure();
}

#[test]
fn config_file_supplies_defaults() {
    let dir = tempdir().unwrap();
    write_file(
        dir.path(),
        ".repopulse.toml",
        "[histogram]\nbuckets = 4\nlookback_days = 20\n\n[momentum]\ndays = 5\n",
    );
    let input = write_file(dir.path(), "snap.json", &snapshot_json("2015-01-01T00:00:00Z"));

    let v = run_json(
        dir.path(),
        &["--now", NOW, "summary", "--json", input.to_str().unwrap()],
    );
    assert_eq!(v["commits"].as_array().unwrap().len(), 4);
    assert_eq!(v["daily"].as_array().unwrap().len(), 5);
    assert_eq!(v["top_contributors"][0]["login"], "amy");
    assert_eq!(v["top_contributors"][0]["commits"], 3);
}

#[test]
fn resolve_handles_urls() {
    let dir = tempdir().unwrap();
    let v = run_json(
        dir.path(),
        &["resolve", "--json", "https://github.com/rust-lang/cargo.git"],
    );
    assert_eq!(v["owner"], "rust-lang");
    assert_eq!(v["name"], "cargo");
}

#[test]
fn pick_prefers_starred_non_forks() {
    let dir = tempdir().unwrap();
    let input = write_file(
        dir.path(),
        "repos.json",
        r#"{"owner": "octocat", "repos": [
            {"name": "fork", "stars": 500, "fork": true, "updated_at": "2024-05-01T00:00:00Z"},
            {"name": "tool", "stars": 20, "fork": false, "updated_at": "2024-04-01T00:00:00Z"},
            {"name": "toy", "stars": 2, "fork": false, "updated_at": "2024-06-01T00:00:00Z"}
        ]}"#,
    );

    let v = run_json(dir.path(), &["pick", "--json", input.to_str().unwrap()]);
    assert_eq!(v["best"]["name"], "tool");
    assert_eq!(v["owner"], "octocat");
    let names: Vec<_> = v["repos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["tool", "toy", "fork"]);
}

#[test]
fn terminal_output_succeeds() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "snap.json", &snapshot_json("2015-01-01T00:00:00Z"));

    for sub in ["histogram", "summary", "momentum"] {
        let mut cmd = Command::cargo_bin("repopulse").unwrap();
        cmd.current_dir(dir.path())
            .args(["--now", NOW, sub, input.to_str().unwrap()]);
        cmd.assert().success();
    }
}

#[test]
fn resolve_prints_slug() {
    let dir = tempdir().unwrap();
    for (input, expected) in [
        ("https://github.com/rust-lang/cargo.git", "repository rust-lang/cargo"),
        ("octocat/", "user octocat"),
    ] {
        let mut cmd = Command::cargo_bin("repopulse").unwrap();
        cmd.current_dir(dir.path()).args(["resolve", input]);
        let out = cmd.assert().success().get_output().stdout.clone();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.trim(), expected);
    }
}
