use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("dlnotify").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dlnotify"))
        .stdout(predicate::str::contains("download monitor"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("dlnotify").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dlnotify"));
}

#[test]
fn test_invalid_argument() {
    let mut cmd = Command::cargo_bin("dlnotify").unwrap();
    cmd.arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_zero_refresh_interval_rejected() {
    let mut cmd = Command::cargo_bin("dlnotify").unwrap();
    cmd.args(["-r", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refresh interval"));
}

#[test]
fn test_zero_threshold_rejected() {
    let mut cmd = Command::cargo_bin("dlnotify").unwrap();
    cmd.args(["-t", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("threshold"));
}

#[test]
fn test_path_like_device_rejected() {
    let mut cmd = Command::cargo_bin("dlnotify").unwrap();
    cmd.arg("../etc/passwd")
        .assert()
        .failure()
        .stderr(predicate::str::contains("device name"));
}

#[test]
fn test_save_config_persists_effective_settings() {
    let home = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("dlnotify").unwrap();
    cmd.env("HOME", home.path())
        .args(["-r", "5", "-t", "400000", "--save-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration saved"));

    let content = std::fs::read_to_string(home.path().join(".dlnotify")).unwrap();
    assert!(content.contains("RefreshInterval = 5"));
    assert!(content.contains("Threshold = 400000"));
}

#[test]
fn test_list_flag() {
    let mut cmd = Command::cargo_bin("dlnotify").unwrap();
    // Interface names vary by platform; just require a clean exit.
    cmd.arg("--list").assert().success();
}
