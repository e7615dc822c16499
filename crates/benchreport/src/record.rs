//! Benchmark measurement records and the environment they were taken in.

use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Placeholder for absent names.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for absent numeric fields.
pub const NOT_AVAILABLE: &str = "N/A";

/// A single benchmark measurement.
///
/// All timings are in nanoseconds; the loader rescales inputs recorded in
/// other units.
///
/// # Example
///
/// ```
/// use benchreport::MeasurementRecord;
///
/// let record = MeasurementRecord::new("BM_PlayerRegistry_Insert", 1_500.0)
///     .with_cpu_time(1_400.0)
///     .with_iterations(100_000)
///     .with_items_per_second(650_000.0);
///
/// assert_eq!(record.name, "BM_PlayerRegistry_Insert");
/// assert_eq!(record.iterations, 100_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    /// Benchmark name, `"Unknown"` when the input had none.
    pub name: String,
    /// Wall-clock time per iteration in nanoseconds.
    pub real_time: f64,
    /// CPU time per iteration in nanoseconds.
    pub cpu_time: f64,
    /// Number of iterations the harness ran.
    pub iterations: u64,
    /// Throughput, when the benchmark reported one.
    pub items_per_second: Option<f64>,
}

impl MeasurementRecord {
    /// Creates a record with the given name and real time.
    ///
    /// An empty name is replaced with `"Unknown"`.
    pub fn new(name: impl Into<String>, real_time: f64) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() {
                UNKNOWN.to_string()
            } else {
                name
            },
            real_time,
            cpu_time: 0.0,
            iterations: 0,
            items_per_second: None,
        }
    }

    /// Sets the CPU time in nanoseconds.
    pub fn with_cpu_time(mut self, cpu_time: f64) -> Self {
        self.cpu_time = cpu_time;
        self
    }

    /// Sets the iteration count.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the throughput in items per second.
    pub fn with_items_per_second(mut self, items_per_second: f64) -> Self {
        self.items_per_second = Some(items_per_second);
        self
    }
}

/// Environment the measurements were taken in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub host_name: String,
    pub cpu_name: String,
    pub cpu_count: Option<u32>,
}

impl RunContext {
    /// Returns the core count for display, `"N/A"` when unknown.
    pub fn cpu_count_display(&self) -> String {
        self.cpu_count
            .map(|n| n.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self {
            host_name: UNKNOWN.to_string(),
            cpu_name: UNKNOWN.to_string(),
            cpu_count: None,
        }
    }
}

/// Unit the harness recorded `real_time` and `cpu_time` in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    #[default]
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Nanoseconds per one unit.
    pub fn nanos(self) -> f64 {
        match self {
            TimeUnit::Nanoseconds => 1.0,
            TimeUnit::Microseconds => 1e3,
            TimeUnit::Milliseconds => 1e6,
            TimeUnit::Seconds => 1e9,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ns" => Ok(TimeUnit::Nanoseconds),
            "us" => Ok(TimeUnit::Microseconds),
            "ms" => Ok(TimeUnit::Milliseconds),
            "s" => Ok(TimeUnit::Seconds),
            other => Err(format!("unknown time unit '{}'", other)),
        }
    }
}

/// A loaded set of benchmark results.
///
/// Produced by [`BenchmarkReport::load`] and friends; see the `loader` module.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Measurement environment.
    pub context: RunContext,
    /// Records in input order.
    pub records: Vec<MeasurementRecord>,
    /// Where the results were read from.
    pub source: PathBuf,
}

impl BenchmarkReport {
    /// Creates a report from already-normalized records.
    pub fn new(
        context: RunContext,
        records: Vec<MeasurementRecord>,
        source: impl Into<PathBuf>,
    ) -> Self {
        Self {
            context,
            records,
            source: source.into(),
        }
    }

    /// Returns the total number of records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Returns the file name of the source for display.
    ///
    /// # Example
    ///
    /// ```
    /// use benchreport::{BenchmarkReport, RunContext};
    ///
    /// let report = BenchmarkReport::new(RunContext::default(), vec![], "out/bench.json");
    /// assert_eq!(report.source_name(), "bench.json");
    /// ```
    pub fn source_name(&self) -> String {
        file_name(&self.source)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
