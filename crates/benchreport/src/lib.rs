//! Benchmark report generation.
//!
//! This crate turns benchmark results in Google Benchmark JSON format into a
//! human-readable report.
//!
//! # Overview
//!
//! Report generation is a single pipeline:
//! - Load and normalize the records ([`BenchmarkReport::load`])
//! - Group them by name into categories ([`Classifier`])
//! - Summarize each category's timings ([`summarize`])
//! - Format values and build the display data ([`ReportView`])
//! - Render HTML, Markdown or CSV ([`HtmlReport`], [`MarkdownReport`], [`CsvExporter`])
//! - Write the document without leaving partial files ([`write_document`])
//!
//! [`ReportJob`] runs the whole pipeline.
//!
//! # Example
//!
//! ```
//! use benchreport::{BenchmarkReport, ReportJob};
//! use chrono::NaiveDate;
//!
//! let report = BenchmarkReport::from_json_str(r#"{
//!     "benchmarks": [
//!         { "name": "BM_PlayerRegistry_Insert", "real_time": 1500, "iterations": 100000 },
//!         { "name": "BM_ProtobufEncode", "real_time": 250000 }
//!     ]
//! }"#, "results.json").unwrap();
//!
//! let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let html = ReportJob::default().render(&report, at);
//!
//! assert!(html.contains("Core Benchmarks"));
//! assert!(html.contains("Network Benchmarks"));
//! assert!(!html.contains("Memory Benchmarks"));
//! ```

mod classify;
mod error;
mod format;
mod html;
mod job;
mod loader;
mod record;
mod report;
mod stats;
mod view;
mod writer;

#[cfg(test)]
mod loader_tests;

pub use classify::{classify, Category, CategoryRule, Classification, Classifier};
pub use error::{LoadError, ReportError, Result, WriteError};
pub use format::{
    format_bytes, format_count, format_duration, format_throughput, Severity,
    GOOD_THRESHOLD_NS, WARNING_THRESHOLD_NS,
};
pub use html::{escape_html, HtmlReport};
pub use job::{ReportJob, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use record::{BenchmarkReport, MeasurementRecord, RunContext, TimeUnit, NOT_AVAILABLE, UNKNOWN};
pub use report::{CsvExporter, MarkdownReport, OutputFormat};
pub use stats::{summarize, CategorySummary, TimingStats};
pub use view::{ReportView, RowView, SectionView, DEFAULT_TITLE, TIMESTAMP_FORMAT};
pub use writer::write_document;
