use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use benchreport::{LoadError, OutputFormat, ReportError, ReportJob, DEFAULT_INPUT};
use benchreport_config::{ConfigError, ReportConfig};
use chrono::Local;
use owo_colors::OwoColorize;

use crate::cli::Cli;

/// Runs one report generation and maps the outcome to an exit status.
pub fn run(cli: &Cli) -> ExitCode {
    if !cli.quiet {
        benchreport_console::init();
    }

    let job = match build_job(cli) {
        Ok(job) => job,
        Err(err) => {
            report_failure("Invalid configuration", &err);
            return ExitCode::FAILURE;
        }
    };

    match job.run(Local::now().naive_local()) {
        Ok(()) => {
            println!(
                "{} Report written to {}",
                "✔".bright_green().bold(),
                job.output().display()
            );
            if job.format() == OutputFormat::Html {
                if let Ok(absolute) = std::path::absolute(job.output()) {
                    println!("  Open in a browser: file://{}", absolute.display());
                }
            }
            ExitCode::SUCCESS
        }
        Err(ReportError::Load(LoadError::NotFound { path })) => {
            eprintln!(
                "{} Input file not found: {}",
                "✘".bright_red().bold(),
                path.display()
            );
            eprintln!("  Run the benchmarks with JSON output first to produce it.");
            ExitCode::FAILURE
        }
        Err(err) => {
            report_failure("Report generation failed", &err);
            ExitCode::FAILURE
        }
    }
}

/// Merges command-line flags over the configuration file over defaults.
pub fn build_job(cli: &Cli) -> Result<ReportJob, ConfigError> {
    let config = match &cli.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    resolve(cli, config)
}

fn resolve(cli: &Cli, config: ReportConfig) -> Result<ReportJob, ConfigError> {
    let classifier = config.classifier()?;
    let format = cli.format.or(config.format).unwrap_or_default();
    let input = cli
        .input
        .clone()
        .or(config.input)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output = cli
        .output
        .clone()
        .or(config.output)
        .unwrap_or_else(|| default_output(format));

    let mut job = ReportJob::new(input, output)
        .with_format(format)
        .with_classifier(classifier);
    if let Some(title) = cli.title.clone().or(config.title) {
        job = job.with_title(title);
    }
    Ok(job)
}

fn default_output(format: OutputFormat) -> PathBuf {
    Path::new("performance_report").with_extension(format.extension())
}

fn report_failure(context: &str, err: &dyn Error) {
    eprintln!("{} {}: {}", "✘".bright_red().bold(), context, err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchreport::{Category, DEFAULT_OUTPUT, DEFAULT_TITLE};
    use benchreport_config::RuleConfig;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("benchreport").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let job = resolve(&cli(&[]), ReportConfig::default()).unwrap();

        assert_eq!(job.input(), Path::new(DEFAULT_INPUT));
        assert_eq!(job.output(), Path::new(DEFAULT_OUTPUT));
        assert_eq!(job.format(), OutputFormat::Html);
        assert_eq!(job.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_default_output_follows_format() {
        let job = resolve(&cli(&["-f", "csv"]), ReportConfig::default()).unwrap();
        assert_eq!(job.output(), Path::new("performance_report.csv"));
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let config = ReportConfig::new()
            .with_input("from_config.json")
            .with_format(OutputFormat::Markdown)
            .with_title("Configured");

        let job = resolve(&cli(&[]), config).unwrap();

        assert_eq!(job.input(), Path::new("from_config.json"));
        assert_eq!(job.output(), Path::new("performance_report.md"));
        assert_eq!(job.format(), OutputFormat::Markdown);
        assert_eq!(job.title(), "Configured");
    }

    #[test]
    fn test_flags_override_config() {
        let config = ReportConfig::new()
            .with_input("from_config.json")
            .with_output("config.html")
            .with_title("Configured");

        let job = resolve(
            &cli(&["-i", "flag.json", "-o", "flag.html", "--title", "Flag"]),
            config,
        )
        .unwrap();

        assert_eq!(job.input(), Path::new("flag.json"));
        assert_eq!(job.output(), Path::new("flag.html"));
        assert_eq!(job.title(), "Flag");
    }

    #[test]
    fn test_config_rules_reach_classifier() {
        let config = ReportConfig::new().with_rule(RuleConfig::new(Category::Memory, ["Heap"]));
        let job = resolve(&cli(&[]), config).unwrap();
        assert_eq!(job.classifier().category_of("BM_HeapAlloc"), Category::Memory);
    }

    #[test]
    fn test_invalid_rule_is_config_error() {
        let config = ReportConfig::new().with_rule(RuleConfig::new(Category::Memory, Vec::<String>::new()));
        assert!(resolve(&cli(&[]), config).is_err());
    }
}
