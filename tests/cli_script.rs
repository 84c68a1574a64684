mod common;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget_dashboard_cli").unwrap();
    cmd.env("BUDGET_DASHBOARD_HOME", home.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn renders_plain_dashboard_from_csv() {
    let home = TempDir::new().unwrap();
    let csv = common::write_file(&home, "budget.csv", common::SAMPLE_CSV);

    cli(&home)
        .args(["--file", csv.to_str().unwrap(), "--plain"])
        .assert()
        .success()
        .stdout(contains("=== Family Budget Dashboard ==="))
        .stdout(contains(
            "Total Budget: $1,250 | Total Spent: $1,210 | Total Remaining: $40",
        ))
        .stdout(contains("=== Food ==="))
        .stdout(contains("Over 120.0% used"))
        .stdout(contains("=== Rent ==="));
}

#[test]
fn json_output_is_machine_readable() {
    let home = TempDir::new().unwrap();
    let csv = common::write_file(&home, "budget.csv", common::SAMPLE_CSV);

    let output = cli(&home)
        .args(["--file", csv.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["totals"]["budget"], "1250");
    assert_eq!(report["categories"][0]["category"], "Food");
    assert_eq!(report["categories"][1]["lines"][0]["status"], "ON_BUDGET");
}

#[test]
fn config_file_supplies_defaults() {
    let home = TempDir::new().unwrap();
    let csv = common::write_file(&home, "budget.csv", common::SAMPLE_CSV);
    let config = serde_json::json!({
        "file_path": csv,
        "title": "Household",
        "plain_mode": true
    });
    common::write_file(&home, "config.json", &config.to_string());

    cli(&home)
        .assert()
        .success()
        .stdout(contains("=== Household ==="));
}

#[test]
fn missing_column_fails_with_message() {
    let home = TempDir::new().unwrap();
    let csv = common::write_file(&home, "broken.csv", "Main Category,Budget\nFood,1\n");

    cli(&home)
        .args(["--file", csv.to_str().unwrap(), "--plain"])
        .assert()
        .failure()
        .stderr(contains("Required column `Subcategory` is missing"));
}

#[test]
fn unknown_arguments_fail() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(contains("unknown argument"));
}

#[test]
fn help_and_version() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--watch"));
    cli(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("budget_dashboard_cli"));
}
