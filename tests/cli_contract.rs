// End-to-end checks of the binary's stdout contract and exit codes.

use assert_cmd::Command;
use serde_json::Value;
use std::time::Instant;

const MESSAGE: &str = "Simulated security vulnerability";

fn mock_scanner() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mock-scanner"))
}

/// Run with no delay and return the parsed stdout line.
fn run_zero_delay(path: &str, extra: &[&str]) -> (String, Value) {
    let output = mock_scanner()
        .arg(path)
        .args(["--min-delay", "0", "--max-delay", "0"])
        .args(extra)
        .output()
        .expect("failed to run mock-scanner");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    let value = parse_single_line(&stdout);
    (stdout, value)
}

fn parse_single_line(stdout: &str) -> Value {
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected exactly one line, got: {:?}", stdout);
    serde_json::from_str(lines[0]).expect("stdout should be valid JSON")
}

fn assert_report_shape(value: &Value, min_duration: f64, max_duration: f64) {
    let obj = value.as_object().expect("report should be a JSON object");
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["duration", "findings", "threatLevel", "threats"]);

    let level = obj["threatLevel"].as_str().expect("threatLevel should be a string");
    assert!(
        ["none", "low", "medium", "high", "critical"].contains(&level),
        "unexpected threat level {}",
        level
    );

    let threats = obj["threats"].as_u64().expect("threats should be an integer");
    assert!(threats <= 10);

    let findings = obj["findings"].as_array().expect("findings should be an array");
    assert_eq!(findings.len() as u64, threats);
    for finding in findings {
        let line = finding["line"].as_u64().expect("line should be an integer");
        assert!((1..=100).contains(&line));
        assert_eq!(finding["message"], MESSAGE);
    }

    let duration = obj["duration"].as_f64().expect("duration should be a number");
    assert!(duration >= min_duration, "duration {} below {}", duration, min_duration);
    if max_duration > min_duration {
        assert!(duration < max_duration, "duration {} not below {}", duration, max_duration);
    } else {
        assert_eq!(duration, min_duration);
    }
    assert_eq!((duration * 100.0).round() / 100.0, duration);
}

#[test]
fn test_scan_prints_one_valid_json_line() {
    let (_, value) = run_zero_delay("/tmp/foo.py", &[]);
    assert_report_shape(&value, 0.0, 0.0);
}

#[test]
fn test_field_order_on_the_wire() {
    let (stdout, _) = run_zero_delay("/tmp/foo.py", &[]);
    let level = stdout.find("\"threatLevel\"").unwrap();
    let threats = stdout.find("\"threats\"").unwrap();
    let findings = stdout.find("\"findings\"").unwrap();
    let duration = stdout.find("\"duration\"").unwrap();
    assert!(level < threats && threats < findings && findings < duration);
}

#[test]
fn test_nonexistent_and_empty_paths_accepted() {
    let (_, value) = run_zero_delay("/definitely/not/here.rs", &[]);
    assert_report_shape(&value, 0.0, 0.0);

    let (_, value) = run_zero_delay("", &[]);
    assert_report_shape(&value, 0.0, 0.0);
}

#[test]
fn test_wall_clock_covers_reported_duration() {
    let start = Instant::now();
    let output = mock_scanner()
        .args(["/tmp/foo.py", "--min-delay", "0.2", "--max-delay", "0.4"])
        .output()
        .expect("failed to run mock-scanner");
    let elapsed = start.elapsed().as_secs_f64();
    assert!(output.status.success());

    let value = parse_single_line(&String::from_utf8_lossy(&output.stdout));
    assert_report_shape(&value, 0.2, 0.4);
    let duration = value["duration"].as_f64().unwrap();
    assert!(elapsed + 0.005 >= duration, "elapsed {} < duration {}", elapsed, duration);
}

#[test]
fn test_missing_argument_fails_without_json() {
    let output = mock_scanner().output().expect("failed to run mock-scanner");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_same_seed_same_output() {
    let (first, _) = run_zero_delay("a.py", &["--seed", "31337"]);
    let (second, _) = run_zero_delay("a.py", &["--seed", "31337"]);
    assert_eq!(first, second);
}

#[test]
fn test_config_file_sets_delay() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let config_path = dir.path().join("mock-scanner.toml");
    std::fs::write(&config_path, "[delay]\nmin-seconds = 0.0\nmax-seconds = 0.05\n")
        .expect("failed to write config");

    let output = mock_scanner()
        .arg("/tmp/foo.py")
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("failed to run mock-scanner");
    assert!(output.status.success());

    let value = parse_single_line(&String::from_utf8_lossy(&output.stdout));
    assert_report_shape(&value, 0.0, 0.05);
}

#[test]
fn test_invalid_delay_bounds_exit_2() {
    mock_scanner()
        .args(["/tmp/foo.py", "--min-delay", "3", "--max-delay", "1"])
        .assert()
        .failure()
        .code(2)
        .stdout("");
}

#[test]
fn test_oversized_delay_exit_2() {
    mock_scanner()
        .args(["/tmp/foo.py", "--min-delay", "1e20", "--max-delay", "1e20"])
        .assert()
        .failure()
        .code(2)
        .stdout("");

    mock_scanner()
        .args(["/tmp/foo.py", "--max-delay", "1e20"])
        .assert()
        .failure()
        .code(2)
        .stdout("");
}

#[test]
fn test_off_grid_min_delay_exit_2() {
    mock_scanner()
        .args(["/tmp/foo.py", "--min-delay", "0.004", "--max-delay", "0.009"])
        .assert()
        .failure()
        .code(2)
        .stdout("");
}

#[test]
fn test_unreadable_config_exit_2() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    mock_scanner()
        .arg("/tmp/foo.py")
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_verbose_keeps_stdout_clean() {
    let output = mock_scanner()
        .args(["/tmp/foo.py", "--min-delay", "0", "--max-delay", "0", "--verbose"])
        .output()
        .expect("failed to run mock-scanner");
    assert!(output.status.success());

    let value = parse_single_line(&String::from_utf8_lossy(&output.stdout));
    assert_report_shape(&value, 0.0, 0.0);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Threat level"));
}
