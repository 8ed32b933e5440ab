// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;

use super::{Report, ReportFormatter};

/// JSON format report formatter.
pub struct JsonFormatter {
    compact: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    ///
    /// If `compact` is true, outputs single-line JSON without whitespace.
    pub fn new(compact: bool) -> Self {
        Self { compact }
    }

    /// Build the JSON value for a report.
    fn build_json(&self, report: &Report<'_>) -> serde_json::Value {
        let config = &report.run.config;
        let start_time = report
            .run
            .stats
            .as_ref()
            .and_then(|s| s.start_time)
            .map(|t| t.to_rfc3339());

        let environments: Vec<serde_json::Value> = report
            .environments
            .iter()
            .map(|env| {
                json!({
                    "name": env.name,
                    "passed": env.passed,
                    "failed": env.failed,
                    "skipped": env.skipped,
                    "flaky": env.flaky,
                    "total": env.total,
                    "passRate": env.pass_rate(),
                    "durationMs": env.duration_ms,
                })
            })
            .collect();

        json!({
            "generatedAt": report.generated_at.to_rfc3339(),
            "run": {
                "version": config.version,
                "workers": config.workers,
                "rootDir": config.root_dir,
                "startTime": start_time,
            },
            "summary": report.summary,
            "environments": environments,
            "performance": report.performance,
        })
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report<'_>) -> anyhow::Result<String> {
        let value = self.build_json(report);
        if self.compact {
            Ok(serde_json::to_string(&value)?)
        } else {
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }

    fn format_to(
        &self,
        writer: &mut dyn std::io::Write,
        report: &Report<'_>,
    ) -> anyhow::Result<()> {
        let value = self.build_json(report);
        if self.compact {
            serde_json::to_writer(writer, &value)?;
        } else {
            serde_json::to_writer_pretty(writer, &value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
