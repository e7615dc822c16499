use std::path::PathBuf;

use benchreport::OutputFormat;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "benchreport")]
#[command(about = "Generate a report from Google Benchmark JSON results")]
#[command(version)]
pub struct Cli {
    /// Benchmark results JSON file [default: benchmark_results.json]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Report file to write [default: performance_report.<format extension>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format: html, markdown or csv [default: html]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Configuration file (.toml, .yaml or .yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report title
    #[arg(long)]
    pub title: Option<String>,

    /// Suppress the banner and progress output
    #[arg(short, long)]
    pub quiet: bool,
}
