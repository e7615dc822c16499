//! Colorful console output for report generation.
//!
//! Provides a custom `tracing` layer that formats pipeline events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Pipeline stages (load, render, write)
//! - **DEBUG**: Per-category summaries

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` overrides the default
/// `info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ReportConsoleLayer)
            .try_init();
    });
}

// Returns elapsed time since init.
fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map(|epoch| epoch.elapsed().as_secs_f64())
        .unwrap_or(0.0)
}

fn print_banner() {
    let banner = r#"
 _                     _                                _
| |__   ___ _ __   ___| |__  _ __ ___ _ __   ___  _ __| |_
| '_ \ / _ \ '_ \ / __| '_ \| '__/ _ \ '_ \ / _ \| '__| __|
| |_) |  __/ | | | (__| | | | | |  __/ |_) | (_) | |  | |_
|_.__/ \___|_| |_|\___|_| |_|_|  \___| .__/ \___/|_|   \__|
                                     |_|
"#;

    let version_line = format!(
        "                 v{} - Benchmark Report Generator\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats report pipeline events with colors.
pub struct ReportConsoleLayer;

impl<S: Subscriber> Layer<S> for ReportConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // Accept events from the report crates only
        if !event.metadata().target().starts_with("benchreport") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    source: Option<String>,
    path: Option<String>,
    format: Option<String>,
    category: Option<String>,
    mean: Option<String>,
    size: Option<String>,
    records: Option<u64>,
    count: Option<u64>,
    sections: Option<u64>,
    bytes: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "records" => self.records = Some(value),
            "count" => self.count = Some(value),
            "sections" => self.sections = Some(value),
            "bytes" => self.bytes = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "source" => &mut self.source,
            "path" => &mut self.path,
            "format" => &mut self.format,
            "category" => &mut self.category,
            "mean" => &mut self.mean,
            "size" => &mut self.size,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "load_end" => format_load_end(v),
        "category" => format_category(v),
        "render_end" => format_render_end(v),
        "write_end" => format_write_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_load_end(v: &EventVisitor) -> String {
    let records = v.records.unwrap_or(0);
    let source = v.source.as_deref().unwrap_or("?");

    format!(
        "{} {} Loaded {} benchmarks │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        records.to_formatted_string(&Locale::en).bright_yellow(),
        source.white()
    )
}

fn format_category(v: &EventVisitor) -> String {
    let category = v.category.as_deref().unwrap_or("Unknown");
    let count = v.count.unwrap_or(0);
    let mean = v.mean.as_deref().unwrap_or("N/A");

    format!(
        "{} {} {:<8} │ {:>6} benchmarks │ avg {}",
        format_elapsed(),
        "•".bright_blue(),
        category.white().bold(),
        count.to_formatted_string(&Locale::en).white(),
        mean.bright_magenta()
    )
}

fn format_render_end(v: &EventVisitor) -> String {
    let format = v.format.as_deref().unwrap_or("html");
    let sections = v.sections.unwrap_or(0);
    let bytes = v.bytes.unwrap_or(0);

    format!(
        "{} {} Rendered {} │ {} sections │ {} bytes",
        format_elapsed(),
        "◆".bright_cyan(),
        format.to_uppercase().white().bold(),
        sections.to_formatted_string(&Locale::en).bright_yellow(),
        bytes.to_formatted_string(&Locale::en).bright_yellow()
    )
}

fn format_write_end(v: &EventVisitor) -> String {
    let path = v.path.as_deref().unwrap_or("?");
    let size = v.size.as_deref().unwrap_or("N/A");

    format!(
        "{} {} Wrote {} │ {}",
        format_elapsed(),
        "■".bright_green().bold(),
        path.white().bold(),
        size.bright_magenta()
    )
}
