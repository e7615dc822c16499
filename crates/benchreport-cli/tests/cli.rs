//! End-to-end tests of the `benchreport` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const RESULTS: &str = r#"{
    "context": {
        "host_name": "ci-runner",
        "cpu_info": { "name": "Test CPU", "num_cpus": 4 }
    },
    "benchmarks": [
        { "name": "BM_PlayerRegistry_Insert", "real_time": 1500, "cpu_time": 1400, "iterations": 1000000 },
        { "name": "BM_ProtobufEncode", "real_time": 2.5, "cpu_time": 2.4, "iterations": 280, "time_unit": "ms" },
        { "name": "BM_Startup", "real_time": 50, "iterations": 10 }
    ]
}"#;

fn benchreport(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_benchreport"))
        .current_dir(dir)
        .arg("--quiet")
        .args(args)
        .output()
        .expect("failed to run benchreport")
}

#[test]
fn missing_input_fails_without_writing_output() {
    let dir = tempfile::tempdir().unwrap();

    let output = benchreport(dir.path(), &["-i", "nope.json", "-o", "report.html"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.json"), "stderr: {}", stderr);
    assert!(!dir.path().join("report.html").exists());
}

#[test]
fn missing_input_keeps_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("report.html"), "previous").unwrap();

    let output = benchreport(dir.path(), &["-o", "report.html"]);

    assert!(!output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("report.html")).unwrap(),
        "previous"
    );
}

#[test]
fn generates_html_report_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("benchmark_results.json"), RESULTS).unwrap();

    let output = benchreport(dir.path(), &[]);

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("performance_report.html"));

    let html = fs::read_to_string(dir.path().join("performance_report.html")).unwrap();
    assert!(html.contains("ci-runner"));
    assert!(html.contains("Test CPU (4 cores)"));
    assert!(html.contains("3 benchmarks"));
    assert!(html.contains("<h2>Core Benchmarks</h2>"));
    assert!(html.contains(r#"<td class="time-cell warning">2.50 ms</td>"#));
    assert!(html.contains("<td>1,000,000</td>"));
    assert!(html.contains("Source: benchmark_results.json"));
}

#[test]
fn malformed_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.json"), "{ \"benchmarks\": 3 }").unwrap();

    let output = benchreport(dir.path(), &["-i", "bad.json"]);

    assert!(!output.status.success());
    assert!(!dir.path().join("performance_report.html").exists());
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("benchmark_results.json"), RESULTS).unwrap();

    let output = benchreport(dir.path(), &["-o", "missing/dir/report.html"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing/dir/report.html"), "stderr: {}", stderr);
}

#[test]
fn config_file_selects_markdown() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("results.json"), RESULTS).unwrap();
    fs::write(
        dir.path().join("benchreport.toml"),
        r#"
            input = "results.json"
            format = "markdown"
            title = "CI Benchmarks"

            [[rules]]
            category = "config"
            contains = ["Startup"]
        "#,
    )
    .unwrap();

    let output = benchreport(dir.path(), &["-c", "benchreport.toml"]);

    assert!(output.status.success(), "{:?}", output);
    let md = fs::read_to_string(dir.path().join("performance_report.md")).unwrap();
    assert!(md.starts_with("# CI Benchmarks"));
    assert!(md.contains("## Config Benchmarks"));
    assert!(md.contains("## Other Benchmarks"));
    assert!(!md.contains("## Core Benchmarks"));
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("benchmark_results.json"), RESULTS).unwrap();
    fs::write(dir.path().join("bad.toml"), "format = \"pdf\"").unwrap();

    let output = benchreport(dir.path(), &["-c", "bad.toml"]);

    assert!(!output.status.success());
    assert!(!dir.path().join("performance_report.html").exists());
}

#[test]
fn csv_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("benchmark_results.json"), RESULTS).unwrap();

    let output = benchreport(dir.path(), &["-f", "csv", "-o", "out.csv"]);

    assert!(output.status.success(), "{:?}", output);
    let csv = fs::read_to_string(dir.path().join("out.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("Core,BM_PlayerRegistry_Insert,1500,1400,1000000"));
    assert!(lines[2].starts_with("Network,BM_ProtobufEncode,2500000,2400000,280"));
    assert!(lines[3].starts_with("Other,BM_Startup,50,0,10"));
}
