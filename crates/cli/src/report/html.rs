// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML format report output.
//!
//! A single self-contained document with inline styles and no scripts.

use crate::stats::{EnvironmentStats, format_seconds};

use super::{Report, ReportFormatter, escape_html};

/// HTML format report formatter.
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Generate CSS styles for the report.
    fn css() -> &'static str {
        r#":root {
      --bg: #f4f6fb;
      --card-bg: #ffffff;
      --text: #1f2933;
      --muted: #6b7280;
      --accent: #4f46e5;
      --pass: #10b981;
      --fail: #ef4444;
      --skip: #f59e0b;
      --flaky: #8b5cf6;
    }
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      background: var(--bg);
      color: var(--text);
      padding: 2rem;
      line-height: 1.6;
    }
    .container { max-width: 1200px; margin: 0 auto; }
    header {
      margin-bottom: 2rem;
      padding-bottom: 1rem;
      border-bottom: 1px solid #e5e7eb;
    }
    h1 { color: var(--accent); font-size: 1.5rem; }
    h2 { font-size: 1.1rem; margin-bottom: 1rem; }
    .meta { color: var(--muted); font-size: 0.875rem; margin-top: 0.5rem; }
    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
      gap: 1rem;
      margin-bottom: 2rem;
    }
    .card {
      background: var(--card-bg);
      padding: 1.5rem;
      border-radius: 8px;
      border-left: 4px solid var(--accent);
    }
    .card.passed { border-color: var(--pass); }
    .card.failed { border-color: var(--fail); }
    .card.skipped { border-color: var(--skip); }
    .card.flaky { border-color: var(--flaky); }
    .card-title { color: var(--muted); font-size: 0.75rem; text-transform: uppercase; }
    .card-value { font-size: 2rem; font-weight: 600; margin-top: 0.5rem; }
    .environments {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
      gap: 1rem;
      margin-bottom: 2rem;
    }
    .environment { background: var(--card-bg); padding: 1.5rem; border-radius: 8px; }
    .environment h3 { text-transform: uppercase; font-size: 1rem; }
    .progress { background: #e5e7eb; border-radius: 4px; height: 8px; margin: 0.75rem 0; overflow: hidden; }
    .progress-bar { background: var(--pass); height: 100%; }
    .counts { color: var(--muted); font-size: 0.875rem; }
    table {
      width: 100%;
      border-collapse: collapse;
      background: var(--card-bg);
      border-radius: 8px;
      overflow: hidden;
    }
    th, td { padding: 0.75rem 1rem; text-align: left; }
    th { background: rgba(0,0,0,0.04); color: var(--muted); font-size: 0.75rem; text-transform: uppercase; }
    tr:not(:last-child) td { border-bottom: 1px solid var(--bg); }
    td:last-child { text-align: right; font-family: monospace; }"#
    }

    /// Render a summary card.
    fn render_card(title: &str, value: &str, category: &str) -> String {
        format!(
            r#"      <div class="card {category}">
        <div class="card-title">{title}</div>
        <div class="card-value">{value}</div>
      </div>"#
        )
    }

    /// Render one environment with its pass-rate bar.
    fn render_environment(env: &EnvironmentStats) -> String {
        let rate = format!("{:.1}%", env.pass_rate());
        format!(
            r#"      <div class="environment">
        <h3>{name}</h3>
        <div class="progress"><div class="progress-bar" style="width: {rate}"></div></div>
        <div class="counts">Pass rate: {rate} &middot; Duration: {duration}s</div>
        <div class="counts">Passed: {passed} | Failed: {failed} | Skipped: {skipped} | Flaky: {flaky} | Total: {total}</div>
      </div>"#,
            name = escape_html(&env.name),
            duration = format_seconds(env.duration_ms),
            passed = env.passed,
            failed = env.failed,
            skipped = env.skipped,
            flaky = env.flaky,
            total = env.total,
        )
    }

    /// Render a table row.
    fn render_table_row(cells: &[&str]) -> String {
        let cells: String = cells
            .iter()
            .map(|c| format!("<td>{}</td>", escape_html(c)))
            .collect();
        format!("        <tr>{cells}</tr>")
    }

    fn collect_cards(report: &Report<'_>) -> Vec<String> {
        let s = &report.summary;
        vec![
            Self::render_card("Total Tests", &s.total_tests.to_string(), "total"),
            Self::render_card("Passed", &s.passed.to_string(), "passed"),
            Self::render_card("Failed", &s.failed.to_string(), "failed"),
            Self::render_card("Skipped", &s.skipped.to_string(), "skipped"),
            Self::render_card("Flaky", &s.flaky.to_string(), "flaky"),
            Self::render_card("Pass Rate", &format!("{:.1}%", s.pass_rate), "rate"),
        ]
    }

    fn render_slow_tests(report: &Report<'_>) -> String {
        let Some(perf) = &report.performance else {
            return String::new();
        };
        if perf.slow_tests.is_empty() {
            return String::new();
        }
        let rows: Vec<String> = perf
            .slow_tests
            .iter()
            .map(|t| {
                Self::render_table_row(&[
                    &t.title,
                    &t.environment,
                    &format!("{}s", format_seconds(t.duration_ms)),
                ])
            })
            .collect();
        format!(
            r#"    <section>
      <h2>Slowest Tests</h2>
      <table>
        <thead><tr><th>Test</th><th>Environment</th><th>Duration</th></tr></thead>
        <tbody>
{rows}
        </tbody>
      </table>
    </section>
"#,
            rows = rows.join("\n")
        )
    }

    /// Render the complete HTML document.
    fn render_document(report: &Report<'_>) -> String {
        let css = Self::css();
        let cards = Self::collect_cards(report).join("\n");
        let environments: Vec<String> = report
            .environments
            .visible()
            .map(Self::render_environment)
            .collect();
        let environments = environments.join("\n");
        let slow_tests = Self::render_slow_tests(report);
        let duration = format_seconds(report.summary.duration_ms);
        let version = escape_html(&report.run.config.version);
        let generated = report.generated_at.format("%Y-%m-%d %H:%M:%S UTC");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Test Execution Report</title>
  <style>
    {css}
  </style>
</head>
<body>
  <div class="container">
    <header>
      <h1>Test Execution Report</h1>
      <div class="meta">Duration: {duration}s &middot; Playwright {version} &middot; Generated: {generated}</div>
    </header>
    <section class="cards">
{cards}
    </section>
    <section>
      <h2>Browser Results</h2>
      <div class="environments">
{environments}
      </div>
    </section>
{slow_tests}  </div>
</body>
</html>
"#
        )
    }
}

impl ReportFormatter for HtmlFormatter {
    fn format(&self, report: &Report<'_>) -> anyhow::Result<String> {
        Ok(Self::render_document(report))
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
