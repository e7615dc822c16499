//! Human-readable formatting of durations, sizes and counts.

use std::fmt;

use num_format::{Locale, ToFormattedString};

use crate::record::NOT_AVAILABLE;

const DURATION_SUFFIXES: [&str; 4] = ["ns", "μs", "ms", "s"];
const SIZE_SUFFIXES: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Real time below which a benchmark is shown as good (1 ms).
pub const GOOD_THRESHOLD_NS: f64 = 1_000_000.0;

/// Real time below which a benchmark is shown as a warning (10 ms).
pub const WARNING_THRESHOLD_NS: f64 = 10_000_000.0;

// Picks the largest tier whose threshold the value reaches; the last tier
// absorbs everything above it.
fn format_scaled(value: f64, step: f64, suffixes: &[&str]) -> String {
    let mut tier = 0;
    let mut divisor = 1.0;
    while tier + 1 < suffixes.len() && value >= divisor * step {
        divisor *= step;
        tier += 1;
    }
    format!("{:.2} {}", value / divisor, suffixes[tier])
}

/// Formats a duration given in nanoseconds.
///
/// # Example
///
/// ```
/// use benchreport::format_duration;
///
/// assert_eq!(format_duration(999.0), "999.00 ns");
/// assert_eq!(format_duration(1_500.0), "1.50 μs");
/// assert_eq!(format_duration(2_500_000.0), "2.50 ms");
/// assert_eq!(format_duration(3_000_000_000.0), "3.00 s");
/// ```
pub fn format_duration(nanos: f64) -> String {
    format_scaled(nanos, 1000.0, &DURATION_SUFFIXES)
}

/// Formats a size given in bytes, using base 1024.
///
/// # Example
///
/// ```
/// use benchreport::format_bytes;
///
/// assert_eq!(format_bytes(512.0), "512.00 B");
/// assert_eq!(format_bytes(1536.0), "1.50 KB");
/// ```
pub fn format_bytes(bytes: f64) -> String {
    format_scaled(bytes, 1024.0, &SIZE_SUFFIXES)
}

/// Formats an integer with `,` thousands separators.
pub fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Formats a throughput, or `"N/A"` when absent or not positive.
pub fn format_throughput(items_per_second: Option<f64>) -> String {
    match items_per_second {
        Some(ips) if ips > 0.0 => format!("{:.0} items/sec", ips),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Display emphasis of a benchmark, derived from its real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Good,
    Warning,
    Danger,
}

impl Severity {
    /// Classifies a real time in nanoseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use benchreport::Severity;
    ///
    /// assert_eq!(Severity::of(999_999.0), Severity::Good);
    /// assert_eq!(Severity::of(1_000_000.0), Severity::Warning);
    /// assert_eq!(Severity::of(10_000_000.0), Severity::Danger);
    /// ```
    pub fn of(real_time_ns: f64) -> Self {
        if real_time_ns < GOOD_THRESHOLD_NS {
            Severity::Good
        } else if real_time_ns < WARNING_THRESHOLD_NS {
            Severity::Warning
        } else {
            Severity::Danger
        }
    }

    /// CSS class name.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Good => "good",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_tiers() {
        assert_eq!(format_duration(0.0), "0.00 ns");
        assert_eq!(format_duration(999.0), "999.00 ns");
        assert_eq!(format_duration(1_000.0), "1.00 μs");
        assert_eq!(format_duration(1_500.0), "1.50 μs");
        assert_eq!(format_duration(2_500_000.0), "2.50 ms");
        assert_eq!(format_duration(3_000_000_000.0), "3.00 s");
    }

    #[test]
    fn test_duration_beyond_last_tier() {
        assert_eq!(format_duration(7_200_000_000_000.0), "7200.00 s");
    }

    #[test]
    fn test_duration_suffix_and_precision() {
        let mut value = 0.0;
        while value < 1e13 {
            let formatted = format_duration(value);
            let (number, suffix) = formatted.split_once(' ').unwrap();
            assert!(DURATION_SUFFIXES.contains(&suffix), "{}", formatted);
            let decimals = number.split_once('.').unwrap().1;
            assert_eq!(decimals.len(), 2, "{}", formatted);
            value = value * 3.7 + 1.3;
        }
    }

    #[test]
    fn test_bytes_tiers() {
        assert_eq!(format_bytes(0.0), "0.00 B");
        assert_eq!(format_bytes(1023.0), "1023.00 B");
        assert_eq!(format_bytes(1024.0), "1.00 KB");
        assert_eq!(format_bytes(5.0 * 1024.0 * 1024.0), "5.00 MB");
        assert_eq!(format_bytes(2.0 * 1024.0 * 1024.0 * 1024.0), "2.00 GB");
        assert_eq!(format_bytes(4096.0 * 1024.0 * 1024.0 * 1024.0), "4096.00 GB");
    }

    #[test]
    fn test_count_grouping() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_throughput() {
        assert_eq!(format_throughput(Some(1234.4)), "1234 items/sec");
        assert_eq!(format_throughput(Some(0.0)), "N/A");
        assert_eq!(format_throughput(Some(-3.0)), "N/A");
        assert_eq!(format_throughput(None), "N/A");
    }

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(Severity::of(0.0), Severity::Good);
        assert_eq!(Severity::of(999_999.0), Severity::Good);
        assert_eq!(Severity::of(1_000_000.0), Severity::Warning);
        assert_eq!(Severity::of(9_999_999.0), Severity::Warning);
        assert_eq!(Severity::of(10_000_000.0), Severity::Danger);
        assert_eq!(Severity::Danger.to_string(), "danger");
    }
}
