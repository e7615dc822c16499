//! Tests for loading benchmark results

use std::fs;

use super::error::LoadError;
use super::record::*;

const SAMPLE: &str = r#"{
    "context": {
        "date": "2024-05-01T12:00:00+00:00",
        "host_name": "bench-01",
        "num_cpus": 16,
        "cpu_info": { "name": "AMD Ryzen 9 7950X", "num_cpus": 32 }
    },
    "benchmarks": [
        {
            "name": "BM_PlayerRegistry_Insert",
            "real_time": 1500.5,
            "cpu_time": 1490.0,
            "iterations": 465000,
            "items_per_second": 666000.0,
            "time_unit": "ns"
        },
        { "name": "BM_ConfigLoad", "real_time": 3.0, "cpu_time": 2.5, "time_unit": "ms" }
    ]
}"#;

#[test]
fn test_parses_records_and_context() {
    let report = BenchmarkReport::from_json_str(SAMPLE, "results.json").unwrap();

    assert_eq!(report.record_count(), 2);
    assert_eq!(report.context.host_name, "bench-01");
    assert_eq!(report.context.cpu_name, "AMD Ryzen 9 7950X");
    assert_eq!(report.context.cpu_count, Some(32));

    let first = &report.records[0];
    assert_eq!(first.name, "BM_PlayerRegistry_Insert");
    assert_eq!(first.real_time, 1500.5);
    assert_eq!(first.cpu_time, 1490.0);
    assert_eq!(first.iterations, 465_000);
    assert_eq!(first.items_per_second, Some(666_000.0));
}

#[test]
fn test_rescales_time_unit_to_nanoseconds() {
    let report = BenchmarkReport::from_json_str(SAMPLE, "results.json").unwrap();
    let config = &report.records[1];
    assert_eq!(config.real_time, 3_000_000.0);
    assert_eq!(config.cpu_time, 2_500_000.0);
}

#[test]
fn test_defaults_for_missing_fields() {
    let json = r#"{ "benchmarks": [ { "real_time": 10 }, { "name": "", "real_time": 1 } ] }"#;
    let report = BenchmarkReport::from_json_str(json, "results.json").unwrap();

    assert_eq!(report.context, RunContext::default());
    assert_eq!(report.context.cpu_count_display(), "N/A");

    let record = &report.records[0];
    assert_eq!(record.name, UNKNOWN);
    assert_eq!(record.cpu_time, 0.0);
    assert_eq!(record.iterations, 0);
    assert_eq!(record.items_per_second, None);
    assert_eq!(report.records[1].name, UNKNOWN);
}

#[test]
fn test_top_level_num_cpus_fallback() {
    let json = r#"{ "context": { "num_cpus": 8 }, "benchmarks": [] }"#;
    let report = BenchmarkReport::from_json_str(json, "results.json").unwrap();
    assert_eq!(report.context.cpu_count, Some(8));
    assert_eq!(report.context.cpu_name, UNKNOWN);
}

#[test]
fn test_missing_benchmarks_is_parse_error() {
    let err = BenchmarkReport::from_json_str(r#"{ "context": {} }"#, "results.json").unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn test_invalid_json_is_parse_error() {
    let err = BenchmarkReport::from_json_str("{ not json", "results.json").unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn test_complexity_entries_load_with_zero_timings() {
    let json = r#"{
        "benchmarks": [
            { "name": "BM_PlayerRegistry_GetPlayer/64", "real_time": 120, "cpu_time": 118,
              "iterations": 5000000, "time_unit": "ns" },
            { "name": "BM_PlayerRegistry_GetPlayer_BigO", "cpu_coefficient": 1.2,
              "real_coefficient": 1.3, "big_o": "N", "time_unit": "ns" },
            { "name": "BM_PlayerRegistry_GetPlayer_RMS", "rms": 0.05 }
        ]
    }"#;
    let report = BenchmarkReport::from_json_str(json, "benchmark_results.json").unwrap();

    assert_eq!(report.record_count(), 3);
    let big_o = &report.records[1];
    assert_eq!(big_o.name, "BM_PlayerRegistry_GetPlayer_BigO");
    assert_eq!(big_o.real_time, 0.0);
    assert_eq!(big_o.cpu_time, 0.0);
    assert_eq!(big_o.iterations, 0);
    assert_eq!(report.records[2].real_time, 0.0);
}

#[test]
fn test_negative_time_is_invalid_record() {
    let json = r#"{ "benchmarks": [ { "name": "BM_A", "real_time": 1 }, { "name": "BM_B", "real_time": -4 } ] }"#;
    let err = BenchmarkReport::from_json_str(json, "results.json").unwrap_err();
    match err {
        LoadError::InvalidRecord { index, name, .. } => {
            assert_eq!(index, 1);
            assert_eq!(name, "BM_B");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_time_unit_is_invalid_record() {
    let json = r#"{ "benchmarks": [ { "name": "BM_A", "real_time": 1, "time_unit": "fortnight" } ] }"#;
    let err = BenchmarkReport::from_json_str(json, "results.json").unwrap_err();
    assert!(matches!(err, LoadError::InvalidRecord { .. }));
    assert!(err.to_string().contains("fortnight"));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.json");
    fs::write(&path, SAMPLE).unwrap();

    let report = BenchmarkReport::load(&path).unwrap();

    assert_eq!(report.record_count(), 2);
    assert_eq!(report.source, path);
    assert_eq!(report.source_name(), "bench.json");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");

    let err = BenchmarkReport::load(&path).unwrap_err();

    match err {
        LoadError::NotFound { path: reported } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bare_nan_token_is_parse_error() {
    let json = r#"{ "benchmarks": [ { "name": "BM_A", "real_time": NaN } ] }"#;
    let err = BenchmarkReport::from_json_str(json, "benchmark_results.json").unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("benchmark_results.json"));
}
