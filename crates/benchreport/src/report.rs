//! Report generation for benchmark results.

use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::html::HtmlReport;
use crate::view::ReportView;

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Self-contained HTML page.
    #[default]
    Html,
    /// Markdown with tables.
    #[serde(alias = "md")]
    Markdown,
    /// One CSV row per benchmark.
    Csv,
}

impl OutputFormat {
    /// Renders `view` in this format.
    pub fn render(self, view: &ReportView<'_>) -> String {
        match self {
            OutputFormat::Html => HtmlReport::to_string(view),
            OutputFormat::Markdown => MarkdownReport::to_string(view),
            OutputFormat::Csv => CsvExporter::to_string(view),
        }
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "md",
            OutputFormat::Csv => "csv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Csv => "csv",
        })
    }
}

/// CSV exporter for benchmark results.
///
/// One row per benchmark with raw nanosecond timings, in report order.
///
/// # Example
///
/// ```
/// use benchreport::{BenchmarkReport, Classifier, CsvExporter, MeasurementRecord, ReportView, RunContext};
/// use chrono::NaiveDate;
///
/// let report = BenchmarkReport::new(
///     RunContext::default(),
///     vec![MeasurementRecord::new("BM_ConfigLoad", 2_000.0).with_iterations(10)],
///     "results.json",
/// );
/// let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let view = ReportView::build(&report, &Classifier::default(), "Bench", at);
///
/// let csv = CsvExporter::to_string(&view);
/// assert!(csv.starts_with("category,name,real_time_ns"));
/// assert!(csv.contains("Config,BM_ConfigLoad,2000,0,10,,good"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports the view to a CSV string.
    pub fn to_string(view: &ReportView<'_>) -> String {
        let mut buffer = Vec::new();
        Self::write(view, &mut buffer).expect("CSV output to memory does not fail");
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Writes the view as CSV to a writer.
    pub fn write<W: Write>(view: &ReportView<'_>, writer: W) -> csv::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record([
            "category",
            "name",
            "real_time_ns",
            "cpu_time_ns",
            "iterations",
            "items_per_second",
            "severity",
        ])?;

        for section in &view.sections {
            for row in &section.rows {
                let record = row.record;
                wtr.write_record([
                    section.category().label().to_string(),
                    record.name.clone(),
                    record.real_time.to_string(),
                    record.cpu_time.to_string(),
                    record.iterations.to_string(),
                    record
                        .items_per_second
                        .map(|ips| ips.to_string())
                        .unwrap_or_default(),
                    row.severity.to_string(),
                ])?;
            }
        }

        wtr.flush()?;
        Ok(())
    }
}

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Markdown report generator.
///
/// Generates human-readable Markdown with an overview list, a summary table
/// per category and a table of its benchmarks.
///
/// # Example
///
/// ```
/// use benchreport::{BenchmarkReport, Classifier, MarkdownReport, MeasurementRecord, ReportView, RunContext};
/// use chrono::NaiveDate;
///
/// let report = BenchmarkReport::new(
///     RunContext::default(),
///     vec![MeasurementRecord::new("BM_MemoryArena", 12_000_000.0)],
///     "results.json",
/// );
/// let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let view = ReportView::build(&report, &Classifier::default(), "Bench", at);
///
/// let md = MarkdownReport::to_string(&view);
/// assert!(md.contains("# Bench"));
/// assert!(md.contains("## Memory Benchmarks"));
/// assert!(md.contains("| BM_MemoryArena | 12.00 ms (danger) |"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(view: &ReportView<'_>) -> String {
        let mut output = String::new();
        Self::write_markdown(view, &mut output).expect("Markdown output to memory does not fail");
        output
    }

    /// Writes the Markdown report to a writer.
    pub fn write<W: Write>(view: &ReportView<'_>, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(view).as_bytes())
    }

    fn write_markdown(view: &ReportView<'_>, output: &mut String) -> fmt::Result {
        // Title
        writeln!(output, "# {}", view.title)?;
        writeln!(output)?;

        // Metadata
        writeln!(output, "- **Generated**: {}", view.generated_at)?;
        writeln!(output, "- **Host**: {}", view.host_name)?;
        writeln!(
            output,
            "- **CPU**: {} ({} cores)",
            view.cpu_name, view.cpu_count
        )?;
        writeln!(output, "- **Benchmarks**: {}", view.total_records)?;
        writeln!(output)?;

        for section in &view.sections {
            writeln!(output, "## {} Benchmarks", section.category())?;
            writeln!(output)?;
            writeln!(output, "| Metric | Value |")?;
            writeln!(output, "|--------|-------|")?;
            writeln!(output, "| Benchmarks | {} |", section.count)?;
            writeln!(output, "| Avg Time | {} |", section.average)?;
            writeln!(output, "| Median Time | {} |", section.median)?;
            writeln!(output, "| Min Time | {} |", section.fastest)?;
            writeln!(output, "| Max Time | {} |", section.slowest)?;
            writeln!(output)?;

            writeln!(
                output,
                "| Benchmark | Real Time | CPU Time | Iterations | Throughput |"
            )?;
            writeln!(
                output,
                "|-----------|-----------|----------|------------|------------|"
            )?;
            for row in &section.rows {
                writeln!(
                    output,
                    "| {} | {} ({}) | {} | {} | {} |",
                    escape_markdown(&row.record.name),
                    row.real_time,
                    row.severity,
                    row.cpu_time,
                    row.iterations,
                    row.throughput,
                )?;
            }
            writeln!(output)?;
        }

        writeln!(output, "---")?;
        writeln!(output)?;
        writeln!(output, "*Source: {}*", view.source_name)
    }
}
