//! Reading benchmark results from JSON.
//!
//! The input follows the Google Benchmark JSON layout: a top-level
//! `benchmarks` array and an optional `context` object. Raw entries are
//! normalized into [`MeasurementRecord`]s right after parsing, so nothing
//! downstream has to deal with absent fields.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LoadError;
use crate::record::{BenchmarkReport, MeasurementRecord, RunContext, TimeUnit, UNKNOWN};

#[derive(Debug, Deserialize)]
struct RawResults {
    #[serde(default)]
    context: Option<RawContext>,
    benchmarks: Vec<RawRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct RawContext {
    #[serde(default)]
    host_name: Option<String>,
    #[serde(default)]
    cpu_info: Option<RawCpuInfo>,
    #[serde(default)]
    num_cpus: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCpuInfo {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    num_cpus: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    real_time: Option<f64>,
    #[serde(default)]
    cpu_time: Option<f64>,
    #[serde(default)]
    iterations: Option<u64>,
    #[serde(default)]
    items_per_second: Option<f64>,
    #[serde(default)]
    time_unit: Option<String>,
}

impl RawContext {
    fn normalize(self) -> RunContext {
        let cpu_info = self.cpu_info.unwrap_or_default();
        RunContext {
            host_name: non_empty_or_unknown(self.host_name),
            cpu_name: non_empty_or_unknown(cpu_info.name),
            cpu_count: cpu_info.num_cpus.or(self.num_cpus),
        }
    }
}

impl RawRecord {
    fn normalize(self, index: usize) -> Result<MeasurementRecord, LoadError> {
        let name = non_empty_or_unknown(self.name);
        let invalid = |reason: String| LoadError::InvalidRecord {
            index,
            name: name.clone(),
            reason,
        };

        let unit = match self.time_unit.as_deref() {
            Some(unit) => unit.parse::<TimeUnit>().map_err(invalid)?,
            None => TimeUnit::default(),
        };

        let real_time = self.real_time.unwrap_or(0.0) * unit.nanos();
        let cpu_time = self.cpu_time.unwrap_or(0.0) * unit.nanos();
        check_timing("real_time", real_time).map_err(invalid)?;
        check_timing("cpu_time", cpu_time).map_err(invalid)?;

        Ok(MeasurementRecord {
            name,
            real_time,
            cpu_time,
            iterations: self.iterations.unwrap_or(0),
            items_per_second: self.items_per_second,
        })
    }
}

fn check_timing(field: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() {
        Err(format!("{} is not a finite number", field))
    } else if value < 0.0 {
        Err(format!("{} is negative ({})", field, value))
    } else {
        Ok(())
    }
}

fn non_empty_or_unknown(value: Option<String>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => UNKNOWN.to_string(),
    }
}

impl RawResults {
    fn into_report(self, source: PathBuf) -> Result<BenchmarkReport, LoadError> {
        let records = self
            .benchmarks
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.normalize(index))
            .collect::<Result<Vec<_>, _>>()?;
        let context = self.context.unwrap_or_default().normalize();

        tracing::info!(
            event = "load_end",
            records = records.len() as u64,
            source = %source.display()
        );

        Ok(BenchmarkReport::new(context, records, source))
    }
}

impl BenchmarkReport {
    /// Loads benchmark results from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if the file does not exist,
    /// [`LoadError::Io`] if it cannot be read, [`LoadError::Parse`] if it is
    /// not valid benchmark JSON and [`LoadError::InvalidRecord`] if a record
    /// carries unusable values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Parses benchmark results from any reader.
    pub fn from_reader<R: Read>(reader: R, source: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let source = source.into();
        let raw: RawResults = serde_json::from_reader(reader).map_err(|err| {
            if err.is_io() {
                LoadError::Io {
                    path: source.clone(),
                    source: err.into(),
                }
            } else {
                LoadError::Parse {
                    path: source.clone(),
                    source: err,
                }
            }
        })?;
        raw.into_report(source)
    }

    /// Parses benchmark results from a JSON string.
    ///
    /// # Example
    ///
    /// ```
    /// use benchreport::BenchmarkReport;
    ///
    /// let report = BenchmarkReport::from_json_str(r#"{
    ///     "context": { "host_name": "bench-01" },
    ///     "benchmarks": [
    ///         { "name": "BM_ConfigLoad", "real_time": 2.5, "time_unit": "us" }
    ///     ]
    /// }"#, "results.json").unwrap();
    ///
    /// assert_eq!(report.context.host_name, "bench-01");
    /// assert_eq!(report.records[0].real_time, 2500.0);
    /// ```
    pub fn from_json_str(s: &str, source: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let source = source.into();
        let raw: RawResults = serde_json::from_str(s).map_err(|err| LoadError::Parse {
            path: source.clone(),
            source: err,
        })?;
        raw.into_report(source)
    }
}
