//! End-to-end report generation.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::classify::Classifier;
use crate::error::Result;
use crate::format::format_duration;
use crate::record::BenchmarkReport;
use crate::report::OutputFormat;
use crate::view::{ReportView, DEFAULT_TITLE};
use crate::writer::write_document;

/// Default input file name.
pub const DEFAULT_INPUT: &str = "benchmark_results.json";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "performance_report.html";

/// A single load, render and write run.
///
/// # Example
///
/// ```
/// use benchreport::{OutputFormat, ReportJob};
///
/// let job = ReportJob::new("results.json", "report.md")
///     .with_format(OutputFormat::Markdown)
///     .with_title("Nightly");
///
/// assert_eq!(job.input().to_str(), Some("results.json"));
/// assert_eq!(job.format(), OutputFormat::Markdown);
/// assert_eq!(job.title(), "Nightly");
/// ```
#[derive(Debug, Clone)]
pub struct ReportJob {
    input: PathBuf,
    output: PathBuf,
    format: OutputFormat,
    title: String,
    classifier: Classifier,
}

impl ReportJob {
    /// Creates a job reading `input` and writing `output`.
    ///
    /// Defaults:
    /// - format: HTML
    /// - title: "Performance Benchmark Report"
    /// - classifier: the built-in rule table
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            format: OutputFormat::default(),
            title: DEFAULT_TITLE.to_string(),
            classifier: Classifier::default(),
        }
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the classification rule table.
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Returns the input path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Returns the output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Returns the output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the report title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the classifier.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Renders an already loaded report.
    ///
    /// Classification and statistics are recomputed on every call.
    pub fn render(&self, report: &BenchmarkReport, generated_at: NaiveDateTime) -> String {
        let view = ReportView::build(report, &self.classifier, &self.title, generated_at);

        for section in &view.sections {
            tracing::debug!(
                event = "category",
                category = section.category().label(),
                count = section.summary.count as u64,
                mean = %format_duration(section.summary.mean_time)
            );
        }

        let document = self.format.render(&view);
        tracing::info!(
            event = "render_end",
            format = %self.format,
            sections = view.sections.len() as u64,
            bytes = document.len() as u64
        );
        document
    }

    /// Loads the input, renders it and writes the output.
    ///
    /// Nothing is written if loading fails.
    pub fn run(&self, generated_at: NaiveDateTime) -> Result<()> {
        let report = BenchmarkReport::load(&self.input)?;
        let document = self.render(&report, generated_at);
        write_document(&document, &self.output)?;
        Ok(())
    }
}

impl Default for ReportJob {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}
