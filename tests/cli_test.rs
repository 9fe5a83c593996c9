// tests/cli_test.rs
//
// End-to-end tests that run the mdctcheckr binary.
//
// Usage:
//   cargo test --test cli_test -- --nocapture

mod test_utils;

use std::ffi::OsStr;
use std::fs;
use test_utils::run_mdctcheckr;

#[test]
fn quick_preset_passes() {
    let output = run_mdctcheckr(["--preset", "quick"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    println!("{}", stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Aliasing cancels"));
    assert!(stdout.contains("Frame: 16"));
}

#[test]
fn json_report_describes_run() {
    let output = run_mdctcheckr([
        "--preset", "standard", "--trials", "3", "--seed", "10", "--format", "json",
    ]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["verdict"], "Pass");
    assert_eq!(report["config"]["frame_len"], 100);
    assert_eq!(report["trials"].as_array().map(|t| t.len()), Some(3));
    assert_eq!(report["trials"][2]["seed"], 12);
    assert!(report["max_relative_residual"].as_f64().unwrap() < 1e-8);
}

#[test]
fn windowed_check_passes() {
    let output = run_mdctcheckr([
        "--preset", "quick", "-n", "512", "-l", "2048", "--window", "kbd:4", "--format", "json",
    ]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["config"]["preset"], "Custom");
}

#[test]
fn invalid_frame_length_fails() {
    let output = run_mdctcheckr(["--frame-len", "101"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid frame length 101"), "stderr: {}", stderr);
}

#[test]
fn huge_start_is_rejected() {
    let output = run_mdctcheckr(["--start", "18446744073709551605"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "stderr: {}", stderr);
}

#[test]
fn unreachable_tolerance_exits_nonzero() {
    // Rounding noise alone exceeds a tolerance this small
    let output = run_mdctcheckr(["--preset", "quick", "--tolerance", "1e-300"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Reconstruction error"));
}

#[test]
fn config_file_is_loaded() {
    let dir = std::env::temp_dir().join(format!("mdctcheckr-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.json");
    fs::write(&path, r#"{ "frame_len": 32, "signal_len": 96, "trials": 2 }"#).unwrap();

    let output = run_mdctcheckr([
        OsStr::new("--config"),
        path.as_os_str(),
        OsStr::new("--format"),
        OsStr::new("json"),
    ]);
    let _ = fs::remove_dir_all(&dir);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["config"]["frame_len"], 32);
    assert_eq!(report["config"]["preset"], "Custom");
    assert_eq!(report["trials"].as_array().map(|t| t.len()), Some(2));
}

#[test]
fn list_presets() {
    let output = run_mdctcheckr(["--list-presets"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["quick", "standard", "thorough"] {
        assert!(stdout.contains(name));
    }
}
