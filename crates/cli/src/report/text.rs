// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.
//!
//! The console report is made of independent sections so that one broken
//! section never prevents the others from being printed.

use std::fmt::Write;
use std::path::Path;

use anstyle::Style;

use crate::color::{paint, scheme};
use crate::perf::SLOW_TEST_THRESHOLD_MS;
use crate::results::{Suite, TestStatus};
use crate::stats::format_seconds;
use crate::walker::{Node, SuiteWalker};

use super::{Report, ReportFormatter};

const RULE_WIDTH: usize = 50;
const SUB_RULE_WIDTH: usize = 30;

/// One independently rendered part of the console report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Summary,
    Environments,
    Details,
    Performance,
}

impl Section {
    /// Sections in print order.
    pub const ALL: [Section; 5] = [
        Section::Header,
        Section::Summary,
        Section::Environments,
        Section::Details,
        Section::Performance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Summary => "summary",
            Section::Environments => "environments",
            Section::Details => "details",
            Section::Performance => "performance",
        }
    }
}

/// Text format report formatter.
pub struct TextFormatter {
    color: bool,
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report<'_>) -> anyhow::Result<String> {
        let mut output = String::new();
        for section in Section::ALL {
            output.push_str(&self.render_section(section, report)?);
        }
        Ok(output)
    }
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render a single section.
    pub fn render_section(&self, section: Section, report: &Report<'_>) -> anyhow::Result<String> {
        let mut out = String::new();
        match section {
            Section::Header => self.write_header(&mut out, report)?,
            Section::Summary => self.write_summary(&mut out, report)?,
            Section::Environments => self.write_environments(&mut out, report)?,
            Section::Details => self.write_details(&mut out, report)?,
            Section::Performance => self.write_performance(&mut out, report)?,
        }
        Ok(out)
    }

    fn paint(&self, text: &str, style: Style) -> String {
        paint(text, style, self.color)
    }

    fn heading(&self, out: &mut String, title: &str, width: usize) -> std::fmt::Result {
        writeln!(out, "{}", self.paint(title, scheme::header()))?;
        writeln!(out, "{}", "=".repeat(width))
    }

    fn write_header(&self, out: &mut String, report: &Report<'_>) -> std::fmt::Result {
        let run = report.run;
        let start = run
            .stats
            .as_ref()
            .and_then(|s| s.start_time)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let test_dir = Path::new(&run.config.root_dir)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| run.config.root_dir.clone());

        self.heading(out, "📊 TEST EXECUTION SUMMARY", RULE_WIDTH)?;
        writeln!(out, "🕐 Start Time: {start}")?;
        writeln!(
            out,
            "⏱️  Duration: {} seconds",
            format_seconds(report.summary.duration_ms)
        )?;
        writeln!(out, "🔧 Playwright Version: {}", run.config.version)?;
        writeln!(out, "👥 Workers: {}", run.config.workers)?;
        writeln!(out, "📁 Test Directory: {test_dir}")?;
        writeln!(out)
    }

    fn write_summary(&self, out: &mut String, report: &Report<'_>) -> std::fmt::Result {
        let s = &report.summary;
        writeln!(out, "{}", self.paint("📈 TEST RESULTS", scheme::header()))?;
        writeln!(out, "{}", "-".repeat(SUB_RULE_WIDTH))?;
        let lines = [
            (format!("✅ Expected (Passed): {}", s.passed), scheme::pass()),
            (format!("❌ Unexpected (Failed): {}", s.failed), scheme::fail()),
            (format!("⏭️  Skipped: {}", s.skipped), scheme::skip()),
            (format!("🔄 Flaky: {}", s.flaky), scheme::flaky()),
        ];
        for (line, style) in lines {
            writeln!(out, "{}", self.paint(&line, style))?;
        }
        writeln!(out, "📊 Total Tests: {}", s.total_tests)?;
        writeln!(out, "📊 Pass Rate: {:.1}%", s.pass_rate)
    }

    fn write_environments(&self, out: &mut String, report: &Report<'_>) -> std::fmt::Result {
        writeln!(out)?;
        self.heading(out, "🌐 BROWSER-SPECIFIC RESULTS", RULE_WIDTH)?;
        for env in report.environments.visible() {
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                self.paint(&format!("🔍 {}", env.name.to_uppercase()), scheme::header())
            )?;
            writeln!(out, "   ✅ Passed: {}", env.passed)?;
            writeln!(out, "   ❌ Failed: {}", env.failed)?;
            writeln!(out, "   ⏭️  Skipped: {}", env.skipped)?;
            writeln!(out, "   🔄 Flaky: {}", env.flaky)?;
            writeln!(out, "   📊 Total: {}", env.total)?;
            writeln!(out, "   📊 Pass Rate: {:.1}%", env.pass_rate())?;
            writeln!(out, "   ⏱️  Duration: {}s", format_seconds(env.duration_ms))?;
        }
        Ok(())
    }

    fn write_details(&self, out: &mut String, report: &Report<'_>) -> std::fmt::Result {
        writeln!(out)?;
        self.heading(out, "📋 DETAILED TEST RESULTS", RULE_WIDTH)?;
        write_tree(out, &report.run.suites, self)
    }

    fn write_performance(&self, out: &mut String, report: &Report<'_>) -> std::fmt::Result {
        writeln!(out)?;
        self.heading(out, "⚡ PERFORMANCE INSIGHTS", RULE_WIDTH)?;
        let Some(perf) = &report.performance else {
            return writeln!(out, "No test durations recorded.");
        };

        writeln!(
            out,
            "📊 Average Test Duration: {}s",
            format_seconds(perf.average_ms)
        )?;
        writeln!(out, "🐌 Slowest Test: {}s", format_seconds(perf.max_ms))?;
        writeln!(out, "🚀 Fastest Test: {}s", format_seconds(perf.min_ms))?;

        if !perf.slow_tests.is_empty() {
            let threshold = format_seconds(SLOW_TEST_THRESHOLD_MS);
            let title = format!("🐌 SLOWEST TESTS (over {threshold}s):");
            writeln!(out)?;
            writeln!(out, "{}", self.paint(&title, scheme::header()))?;
            for (i, test) in perf.slow_tests.iter().enumerate() {
                writeln!(
                    out,
                    "{}. {} ({}): {}s",
                    i + 1,
                    test.title,
                    test.environment,
                    format_seconds(test.duration_ms)
                )?;
            }
            let hidden = perf.slow_test_count - perf.slow_tests.len();
            if hidden > 0 {
                writeln!(out, "   ... and {hidden} more")?;
            }
        }
        Ok(())
    }

    fn status_style(status: TestStatus) -> Style {
        match status {
            TestStatus::Expected => scheme::pass(),
            TestStatus::Unexpected => scheme::fail(),
            TestStatus::Skipped => scheme::skip(),
            TestStatus::Flaky | TestStatus::Unknown => scheme::flaky(),
        }
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Print suites, specs, attempts and error messages, indented by nesting.
fn write_tree(out: &mut String, suites: &[Suite], fmt: &TextFormatter) -> std::fmt::Result {
    for node in SuiteWalker::new(suites) {
        match node {
            Node::Suite { suite, depth } => {
                writeln!(out, "{}📁 {}", indent(depth), suite.title)?;
            }
            Node::Spec { spec, depth } => {
                let (glyph, style) = if spec.ok {
                    ("✅", scheme::pass())
                } else {
                    ("❌", scheme::fail())
                };
                writeln!(
                    out,
                    "{}{}",
                    indent(depth),
                    fmt.paint(&format!("{glyph} {}", spec.title), style)
                )?;

                for attempt in &spec.tests {
                    let line = format!(
                        "{} {}: {}s",
                        attempt.status.glyph(),
                        attempt.project_name,
                        format_seconds(attempt.total_duration_ms())
                    );
                    writeln!(
                        out,
                        "{}{}",
                        indent(depth + 1),
                        fmt.paint(&line, TextFormatter::status_style(attempt.status))
                    )?;

                    let messages = attempt
                        .results
                        .iter()
                        .flat_map(|r| &r.errors)
                        .filter_map(|e| e.message.as_deref());
                    for message in messages {
                        write_error(out, message, depth + 2, fmt)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn write_error(
    out: &mut String,
    message: &str,
    depth: usize,
    fmt: &TextFormatter,
) -> std::fmt::Result {
    let mut lines = message.lines();
    let first = lines.next().unwrap_or_default();
    writeln!(
        out,
        "{}{}",
        indent(depth),
        fmt.paint(&format!("❌ Error: {first}"), scheme::fail())
    )?;
    for line in lines {
        writeln!(out, "{}   {}", indent(depth), line)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
