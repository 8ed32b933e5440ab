// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run report rendering.
//!
//! A [`Report`] bundles a loaded run with everything derived from it.
//! Formatters are pure: the same report always renders to the same bytes.
//! The only time-dependent value is `generated_at`, which the caller stamps.

mod html;
mod json;
mod text;

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::perf::PerformanceInsights;
use crate::results::RunResult;
use crate::stats::{Environments, Summary};

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::{Section, TextFormatter};

/// A loaded run plus its aggregated views.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub run: &'a RunResult,
    pub summary: Summary,
    pub environments: Environments,
    pub performance: Option<PerformanceInsights>,
    pub generated_at: DateTime<Utc>,
}

impl<'a> Report<'a> {
    /// Aggregate a run into a report stamped with `generated_at`.
    pub fn build(run: &'a RunResult, generated_at: DateTime<Utc>) -> Self {
        let summary = Summary::from_run(run);
        let environments = Environments::from_run(run);
        let performance = PerformanceInsights::from_run(run);

        tracing::debug!(
            total = summary.total_tests,
            environments = environments.len(),
            "aggregated run"
        );

        Self {
            run,
            summary,
            environments,
            performance,
            generated_at,
        }
    }
}

/// Trait for formatting a run report into an output format.
pub trait ReportFormatter {
    /// Format the report into a string.
    fn format(&self, report: &Report<'_>) -> anyhow::Result<String>;

    /// Format the report directly to a writer.
    fn format_to(
        &self,
        writer: &mut dyn std::io::Write,
        report: &Report<'_>,
    ) -> anyhow::Result<()> {
        let output = self.format(report)?;
        writer.write_all(output.as_bytes())?;
        Ok(())
    }
}

/// Render the HTML report to `path`, creating parent directories.
///
/// An existing file is overwritten.
pub fn write_html(report: &Report<'_>, path: &Path) -> Result<()> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let html = HtmlFormatter
        .format(report)
        .map_err(|e| Error::Internal(format!("html rendering failed: {e}")))?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, html).map_err(io_error)?;

    tracing::debug!(path = %path.display(), "wrote html report");
    Ok(())
}

/// Escape text for inclusion in HTML content or attribute values.
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


#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
