//! Self-contained HTML report.

use std::fmt::{self, Display};
use std::io::{self, Write};

use crate::view::{ReportView, SectionView};

const STYLE: &str = r#"
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #f5f5f5;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            padding: 30px;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        h1 {
            color: #2c3e50;
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #3498db;
            padding-bottom: 10px;
        }
        h2 {
            color: #34495e;
            border-left: 4px solid #3498db;
            padding-left: 15px;
            margin-top: 30px;
        }
        .overview {
            background: #ecf0f1;
            padding: 20px;
            border-radius: 8px;
            margin-bottom: 30px;
        }
        .info-grid, .summary-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 15px;
            margin-top: 15px;
        }
        .info-box {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 5px;
            border-left: 4px solid #3498db;
        }
        .summary-item {
            background: white;
            padding: 15px;
            border-radius: 5px;
            text-align: center;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }
        .summary-item strong {
            display: block;
            color: #2c3e50;
            font-size: 1.2em;
        }
        .category-section {
            margin: 30px 0;
            padding: 20px;
            border: 1px solid #e0e0e0;
            border-radius: 8px;
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin: 20px 0;
            background: white;
        }
        th, td {
            padding: 12px;
            text-align: left;
            border-bottom: 1px solid #ddd;
        }
        th {
            background-color: #3498db;
            color: white;
        }
        tr:hover { background-color: #f8f9fa; }
        .benchmark-name { font-family: 'Courier New', monospace; font-size: 0.9em; }
        .time-cell { font-family: 'Courier New', monospace; font-weight: bold; }
        .good { color: #27ae60; }
        .warning { color: #f39c12; }
        .danger { color: #e74c3c; }
        .footer {
            text-align: center;
            margin-top: 40px;
            padding: 20px;
            background: #f8f9fa;
            border-radius: 5px;
            color: #666;
        }
"#;

/// Escapes text for use in HTML element content and attribute values.
///
/// # Example
///
/// ```
/// use benchreport::escape_html;
///
/// assert_eq!(escape_html("BM_Map<int, std::string>"), "BM_Map&lt;int, std::string&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// HTML report generator.
///
/// Produces a single HTML5 document with inline styles and no external
/// resources.
///
/// # Example
///
/// ```
/// use benchreport::{BenchmarkReport, Classifier, HtmlReport, MeasurementRecord, ReportView, RunContext};
/// use chrono::NaiveDate;
///
/// let report = BenchmarkReport::new(
///     RunContext::default(),
///     vec![MeasurementRecord::new("BM_PlayerRegistry_Insert", 1_500.0)],
///     "results.json",
/// );
/// let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let view = ReportView::build(&report, &Classifier::default(), "Bench", at);
///
/// let html = HtmlReport::to_string(&view);
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("Core Benchmarks"));
/// assert!(html.contains(r#"<td class="time-cell good">1.50 μs</td>"#));
/// ```
pub struct HtmlReport;

impl HtmlReport {
    /// Generates the HTML document.
    pub fn to_string(view: &ReportView<'_>) -> String {
        Document(view).to_string()
    }

    /// Writes the HTML document to a writer.
    pub fn write<W: Write>(view: &ReportView<'_>, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(view).as_bytes())
    }
}

struct Document<'v, 'a>(&'v ReportView<'a>);

impl Display for Document<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let title = escape_html(&view.title);

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            f,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(f, "    <title>{}</title>", title)?;
        writeln!(f, "    <style>{}    </style>", STYLE)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "    <div class=\"container\">")?;
        writeln!(f, "        <h1>{}</h1>", title)?;

        write_overview(f, view)?;
        for section in &view.sections {
            write_section(f, section)?;
        }

        writeln!(f, "        <div class=\"footer\">")?;
        writeln!(f, "            <p>Generated by benchreport</p>")?;
        writeln!(
            f,
            "            <p>Source: {}</p>",
            escape_html(&view.source_name)
        )?;
        writeln!(f, "        </div>")?;
        writeln!(f, "    </div>")?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

fn write_info_box(f: &mut impl fmt::Write, label: &str, value: &str) -> fmt::Result {
    writeln!(f, "                <div class=\"info-box\">")?;
    writeln!(f, "                    <strong>{}</strong><br>", label)?;
    writeln!(f, "                    {}", value)?;
    writeln!(f, "                </div>")
}

fn write_overview(f: &mut impl fmt::Write, view: &ReportView<'_>) -> fmt::Result {
    let cpu = format!(
        "{} ({} cores)",
        escape_html(&view.cpu_name),
        escape_html(&view.cpu_count)
    );

    writeln!(f, "        <div class=\"overview\">")?;
    writeln!(f, "            <h2>Overview</h2>")?;
    writeln!(f, "            <div class=\"info-grid\">")?;
    write_info_box(f, "Generated", &escape_html(&view.generated_at))?;
    write_info_box(f, "Host", &escape_html(&view.host_name))?;
    write_info_box(f, "CPU", &cpu)?;
    write_info_box(
        f,
        "Benchmarks",
        &format!("{} benchmarks", view.total_records),
    )?;
    writeln!(f, "            </div>")?;
    writeln!(f, "        </div>")
}

fn write_summary_item(f: &mut impl fmt::Write, value: &str, label: &str) -> fmt::Result {
    writeln!(f, "                <div class=\"summary-item\">")?;
    writeln!(f, "                    <strong>{}</strong>", value)?;
    writeln!(f, "                    {}", label)?;
    writeln!(f, "                </div>")
}

fn write_section(f: &mut impl fmt::Write, section: &SectionView<'_>) -> fmt::Result {
    writeln!(f, "        <div class=\"category-section\">")?;
    writeln!(f, "            <h2>{} Benchmarks</h2>", section.category())?;

    writeln!(f, "            <div class=\"summary-grid\">")?;
    write_summary_item(f, &section.count, "Benchmarks")?;
    write_summary_item(f, &section.average, "Average Time")?;
    write_summary_item(f, &section.fastest, "Fastest")?;
    write_summary_item(f, &section.slowest, "Slowest")?;
    writeln!(f, "            </div>")?;

    writeln!(f, "            <table>")?;
    writeln!(f, "                <thead>")?;
    writeln!(f, "                    <tr>")?;
    for header in ["Benchmark", "Real Time", "CPU Time", "Iterations", "Throughput"] {
        writeln!(f, "                        <th>{}</th>", header)?;
    }
    writeln!(f, "                    </tr>")?;
    writeln!(f, "                </thead>")?;
    writeln!(f, "                <tbody>")?;

    for row in &section.rows {
        writeln!(f, "                    <tr>")?;
        writeln!(
            f,
            "                        <td class=\"benchmark-name\">{}</td>",
            escape_html(&row.record.name)
        )?;
        writeln!(
            f,
            "                        <td class=\"time-cell {}\">{}</td>",
            row.severity.css_class(),
            row.real_time
        )?;
        writeln!(
            f,
            "                        <td class=\"time-cell\">{}</td>",
            row.cpu_time
        )?;
        writeln!(f, "                        <td>{}</td>", row.iterations)?;
        writeln!(f, "                        <td>{}</td>", row.throughput)?;
        writeln!(f, "                    </tr>")?;
    }

    writeln!(f, "                </tbody>")?;
    writeln!(f, "            </table>")?;
    writeln!(f, "        </div>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_info_box_layout() {
        let mut out = String::new();
        write_info_box(&mut out, "Host", "bench-01").unwrap();
        assert!(out.contains("<strong>Host</strong><br>"));
        assert!(out.contains("bench-01"));
    }
}
