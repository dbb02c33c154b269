//! CLI smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn wardscore() -> Command {
    Command::cargo_bin("wardscore").expect("binary builds")
}

#[test]
fn banding_reads_stdin_and_prints_json() {
    wardscore()
        .arg("banding")
        .write_stdin(
            r#"{
                "blood_glucose_value": 5.5,
                "prandial_tag_id": "PRANDIAL-TAG-BEFORE-BREAKFAST",
                "blood_glucose_thresholds_mmoll": {
                    "BEFORE-BREAKFAST": {"high": 5.3, "low": 4.0},
                    "OTHER": {"high": 7.8, "low": 4.0}
                }
            }"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("BG-READING-BANDING-HIGH"));
}

#[test]
fn news2_scores_an_observation_set() {
    wardscore()
        .arg("news2")
        .write_stdin(
            r#"{
                "time": "2024-06-01T10:00:00Z",
                "respiratory_rate": 15,
                "heart_rate": 70,
                "oxygen_saturation": 97,
                "spo2_scale": 1,
                "o2_therapy": 0,
                "systolic_blood_pressure": 120,
                "consciousness_acvpu": "A",
                "temperature": 37.0,
                "config": {
                    "zero_severity_interval_hours": 12,
                    "low_severity_interval_hours": 6,
                    "low_medium_severity_interval_hours": 4,
                    "medium_severity_interval_hours": 1,
                    "high_severity_interval_hours": 0
                }
            }"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overall_severity\": \"low\""));
}

#[test]
fn validation_failure_prints_user_message_and_exits_nonzero() {
    wardscore()
        .arg("meows")
        .write_stdin(r#"{"respiratory_rate": 15}"#)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ISO8601 timestamp"));
}

#[test]
fn rejects_malformed_json() {
    wardscore()
        .arg("banding")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid request JSON"));
}
