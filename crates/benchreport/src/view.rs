//! Display data for a report, prepared independently of any markup.
//!
//! A [`ReportView`] holds every string a renderer needs. Renderers only lay
//! the view out, so formatting and aggregation can be tested on their own.

use chrono::NaiveDateTime;

use crate::classify::{Category, Classifier};
use crate::format::{format_count, format_duration, format_throughput, Severity};
use crate::record::{BenchmarkReport, MeasurementRecord};
use crate::stats::{summarize, CategorySummary};

/// Default report title.
pub const DEFAULT_TITLE: &str = "Performance Benchmark Report";

/// Timestamp format of the generation time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One table row.
#[derive(Debug, Clone)]
pub struct RowView<'a> {
    pub record: &'a MeasurementRecord,
    pub real_time: String,
    pub severity: Severity,
    pub cpu_time: String,
    pub iterations: String,
    pub throughput: String,
}

impl<'a> RowView<'a> {
    fn new(record: &'a MeasurementRecord) -> Self {
        Self {
            record,
            real_time: format_duration(record.real_time),
            severity: Severity::of(record.real_time),
            cpu_time: format_duration(record.cpu_time),
            iterations: format_count(record.iterations),
            throughput: format_throughput(record.items_per_second),
        }
    }
}

/// One non-empty category section.
#[derive(Debug, Clone)]
pub struct SectionView<'a> {
    pub summary: CategorySummary<'a>,
    pub count: String,
    pub average: String,
    pub median: String,
    pub fastest: String,
    pub slowest: String,
    /// Rows sorted ascending by real time.
    pub rows: Vec<RowView<'a>>,
}

impl<'a> SectionView<'a> {
    fn new(summary: CategorySummary<'a>) -> Self {
        let rows = summary
            .members_by_time()
            .into_iter()
            .map(RowView::new)
            .collect();
        Self {
            count: summary.count.to_string(),
            average: format_duration(summary.mean_time),
            median: format_duration(summary.median_time),
            fastest: format_duration(summary.min_time),
            slowest: format_duration(summary.max_time),
            rows,
            summary,
        }
    }

    pub fn category(&self) -> Category {
        self.summary.category
    }
}

/// Everything a renderer needs for one report.
#[derive(Debug, Clone)]
pub struct ReportView<'a> {
    pub title: String,
    pub generated_at: String,
    pub host_name: String,
    pub cpu_name: String,
    pub cpu_count: String,
    pub total_records: usize,
    pub source_name: String,
    /// Non-empty categories in report order.
    pub sections: Vec<SectionView<'a>>,
}

impl<'a> ReportView<'a> {
    /// Classifies, summarizes and formats a loaded report.
    ///
    /// `generated_at` is the render time shown in the overview; passing the
    /// same value twice yields identical views.
    ///
    /// # Example
    ///
    /// ```
    /// use benchreport::{BenchmarkReport, Classifier, MeasurementRecord, ReportView, RunContext};
    /// use chrono::NaiveDate;
    ///
    /// let report = BenchmarkReport::new(
    ///     RunContext::default(),
    ///     vec![MeasurementRecord::new("BM_MemoryPool", 2_000.0)],
    ///     "results.json",
    /// );
    /// let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
    /// let view = ReportView::build(&report, &Classifier::default(), "Bench", at);
    ///
    /// assert_eq!(view.sections.len(), 1);
    /// assert_eq!(view.sections[0].average, "2.00 μs");
    /// assert_eq!(view.generated_at, "2024-05-01 12:00:00");
    /// ```
    pub fn build(
        report: &'a BenchmarkReport,
        classifier: &Classifier,
        title: &str,
        generated_at: NaiveDateTime,
    ) -> Self {
        let classification = classifier.classify(&report.records);
        let sections = classification
            .iter()
            .filter_map(|(category, records)| summarize(category, records))
            .map(SectionView::new)
            .collect();

        Self {
            title: title.to_string(),
            generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
            host_name: report.context.host_name.clone(),
            cpu_name: report.context.cpu_name.clone(),
            cpu_count: report.context.cpu_count_display(),
            total_records: report.record_count(),
            source_name: report.source_name(),
            sections,
        }
    }

    /// Returns the section of `category`, if it has any records.
    pub fn section(&self, category: Category) -> Option<&SectionView<'a>> {
        self.sections.iter().find(|s| s.category() == category)
    }
}
