use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/snapshot.json");

#[test]
fn prints_monthly_dashboard() {
    let home = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("budget_pulse_cli").unwrap();
    cmd.env("BUDGET_PULSE_HOME", home.path())
        .args(["--snapshot", FIXTURE, "--year", "2024", "--month", "1", "--no-color"])
        .assert()
        .success()
        .stdout(contains("=== January 2024 ==="))
        .stdout(contains("Rule: Classic split (50% / 30% / 20%)"))
        .stdout(contains("Groceries"));

    let config = std::fs::read_to_string(home.path().join("config").join("config.json")).unwrap();
    assert!(config.contains("snapshot.json"));
}

#[test]
fn json_output_is_machine_readable() {
    let home = tempdir().unwrap();

    let output = Command::cargo_bin("budget_pulse_cli")
        .unwrap()
        .env("BUDGET_PULSE_HOME", home.path())
        .args(["--snapshot", FIXTURE, "--yearly", "--year", "2024", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["active_rule_name"], "Classic split");
    assert_eq!(value["period"]["granularity"], "yearly");
}

#[test]
fn register_flag_lists_savings_legs() {
    let home = tempdir().unwrap();

    Command::cargo_bin("budget_pulse_cli")
        .unwrap()
        .env("BUDGET_PULSE_HOME", home.path())
        .args(["--snapshot", FIXTURE, "--year", "2024", "--month", "1", "--register", "--no-color"])
        .assert()
        .success()
        .stdout(contains("Cash: -$200.00 / Savings: +$200.00"));
}

#[test]
fn invalid_month_fails() {
    let home = tempdir().unwrap();

    Command::cargo_bin("budget_pulse_cli")
        .unwrap()
        .env("BUDGET_PULSE_HOME", home.path())
        .args(["--snapshot", FIXTURE, "--month", "13"])
        .assert()
        .failure()
        .stderr(contains("month must be between 1 and 12"));
}
