//! Summary statistics over benchmark timings.

use crate::classify::Category;
use crate::record::MeasurementRecord;

/// Count, mean, median and extrema of a set of timings.
///
/// # Example
///
/// ```
/// use benchreport::TimingStats;
///
/// let stats = TimingStats::from_values(&[5.0, 3.0, 1.0, 4.0, 2.0]).unwrap();
/// assert_eq!(stats.count, 5);
/// assert_eq!(stats.min, 1.0);
/// assert_eq!(stats.max, 5.0);
/// assert_eq!(stats.mean, 3.0);
/// assert_eq!(stats.median, 3.0);
///
/// assert!(TimingStats::from_values(&[]).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl TimingStats {
    /// Computes statistics over `values`, or `None` if there are none.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            count,
            mean: sorted.iter().sum::<f64>() / count as f64,
            median,
            min: sorted[0],
            max: sorted[count - 1],
        })
    }
}

/// Statistics of one category, along with its records.
#[derive(Debug, Clone)]
pub struct CategorySummary<'a> {
    pub category: Category,
    pub count: usize,
    /// Mean `real_time` in nanoseconds.
    pub mean_time: f64,
    /// Median `real_time` in nanoseconds.
    pub median_time: f64,
    pub min_time: f64,
    pub max_time: f64,
    /// Records in input order.
    pub members: Vec<&'a MeasurementRecord>,
}

impl<'a> CategorySummary<'a> {
    /// Returns the members sorted ascending by `real_time`.
    ///
    /// The sort is stable, so records with equal times keep input order.
    pub fn members_by_time(&self) -> Vec<&'a MeasurementRecord> {
        let mut sorted = self.members.clone();
        sorted.sort_by(|a, b| a.real_time.total_cmp(&b.real_time));
        sorted
    }
}

/// Summarizes the `real_time` of a category's records.
///
/// Returns `None` for an empty category, which is then left out of reports.
pub fn summarize<'a>(
    category: Category,
    records: &[&'a MeasurementRecord],
) -> Option<CategorySummary<'a>> {
    let times: Vec<f64> = records.iter().map(|r| r.real_time).collect();
    let stats = TimingStats::from_values(&times)?;

    Some(CategorySummary {
        category,
        count: stats.count,
        mean_time: stats.mean,
        median_time: stats.median,
        min_time: stats.min,
        max_time: stats.max,
        members: records.to_vec(),
    })
}
