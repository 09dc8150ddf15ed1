//! Runs the `petcheck` binary and checks its output and exit status.
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::process::{Command, Output};

use petcheck_domain::SuiteReport;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use common::{closed_port, seed_fixture, spawn_inventory};

fn petcheck(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_petcheck"))
        .args(args)
        .current_dir(dir.path())
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

#[test]
fn test_list_prints_catalog() {
    let dir = TempDir::new().unwrap();
    let output = petcheck(&dir, &["--list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.contains("update-negative-price"));
}

#[test]
fn test_unknown_scenario_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = petcheck(&dir, &["--scenario", "delete-pet"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("delete-pet"), "{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_passing_run_exits_zero() {
    let dir = TempDir::new().unwrap();
    let fixture = seed_fixture(&dir);
    let base_url = spawn_inventory(&fixture).await;
    let fixture_arg = fixture.display().to_string();

    let output = tokio::task::spawn_blocking(move || {
        petcheck(
            &dir,
            &[
                "--base-url",
                &base_url,
                "--fixture",
                &fixture_arg,
                "--scenario",
                "update-price",
                "--scenario",
                "update-missing-pet",
            ],
        )
    })
    .await
    .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(output.status.success(), "{stdout}");
    assert!(stdout.contains("PASS Price updated correctly"));
    assert!(stdout.contains("PASSED: 2 scenarios, 12 checks, 0 failed"));
}

#[test]
fn test_failing_run_exits_one_with_json_report() {
    let dir = TempDir::new().unwrap();
    let fixture = seed_fixture(&dir);
    let base_url = format!("http://127.0.0.1:{}/", closed_port());

    let output = petcheck(
        &dir,
        &[
            "--base-url",
            &base_url,
            "--fixture",
            &fixture.display().to_string(),
            "--timeout-ms",
            "2000",
            "--format",
            "json",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let report: SuiteReport = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.outcomes.len(), 6);
    assert_eq!(report.failed_checks(), 6);
}
