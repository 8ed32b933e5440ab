// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run aggregation: overall summary and per-environment counters.

use std::collections::HashMap;

use serde::Serialize;

use crate::results::{RunResult, RunStats, Spec, TestStatus};
use crate::walker;

/// Percentage of `passed` over `total`, rounded to one decimal.
///
/// Every renderer goes through this so the numbers agree across formats.
pub fn pass_rate(passed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (passed as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Render milliseconds as seconds with two decimals.
pub fn format_seconds(ms: f64) -> String {
    format!("{:.2}", ms / 1000.0)
}

/// Overall run summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Passed + failed + skipped. Flaky tests are tracked separately.
    pub total_tests: u64,
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub flaky: u64,
    pub pass_rate: f64,
    /// Run duration in milliseconds.
    pub duration_ms: f64,
}

impl Summary {
    /// Summarize a run.
    ///
    /// Uses the runner's own totals when the record has them, otherwise
    /// classifies each spec from its attempts.
    pub fn from_run(run: &RunResult) -> Self {
        match &run.stats {
            Some(stats) => Self::from_stats(stats),
            None => Self::from_specs(run),
        }
    }

    fn from_stats(stats: &RunStats) -> Self {
        Self::new(
            stats.expected,
            stats.unexpected,
            stats.skipped,
            stats.flaky,
            stats.duration,
        )
    }

    fn from_specs(run: &RunResult) -> Self {
        let (mut passed, mut failed, mut skipped, mut flaky) = (0, 0, 0, 0);
        for spec in walker::specs(&run.suites) {
            match classify_spec(spec) {
                Some(TestStatus::Expected) => passed += 1,
                Some(TestStatus::Unexpected) => failed += 1,
                Some(TestStatus::Skipped) => skipped += 1,
                Some(TestStatus::Flaky) => flaky += 1,
                Some(TestStatus::Unknown) | None => {}
            }
        }
        let duration_ms = walker::tests(&run.suites)
            .map(|(_, attempt)| attempt.total_duration_ms())
            .sum();
        Self::new(passed, failed, skipped, flaky, duration_ms)
    }

    fn new(passed: u64, failed: u64, skipped: u64, flaky: u64, duration_ms: f64) -> Self {
        let total_tests = passed + failed + skipped;
        Self {
            total_tests,
            passed,
            failed,
            skipped,
            flaky,
            pass_rate: pass_rate(passed, total_tests),
            duration_ms,
        }
    }
}

/// Collapse a spec's attempts into a single outcome.
///
/// Attempts with an unknown status are ignored; a spec with no known
/// attempts has no outcome.
fn classify_spec(spec: &Spec) -> Option<TestStatus> {
    let statuses: Vec<TestStatus> = spec
        .tests
        .iter()
        .map(|t| t.status)
        .filter(|s| *s != TestStatus::Unknown)
        .collect();

    if statuses.is_empty() {
        None
    } else if statuses.contains(&TestStatus::Unexpected) {
        Some(TestStatus::Unexpected)
    } else if statuses.iter().all(|s| *s == TestStatus::Skipped) {
        Some(TestStatus::Skipped)
    } else if statuses.contains(&TestStatus::Flaky) {
        Some(TestStatus::Flaky)
    } else {
        Some(TestStatus::Expected)
    }
}

/// Counters for one execution environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentStats {
    pub name: String,
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub flaky: u64,
    pub total: u64,
    /// Sum of every retry's duration, in milliseconds.
    pub duration_ms: f64,
}

impl EnvironmentStats {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Pass rate for this environment.
    pub fn pass_rate(&self) -> f64 {
        pass_rate(self.passed, self.total)
    }

    /// Record one attempt. Returns false when the status is not counted.
    fn record(&mut self, status: TestStatus, duration_ms: f64) -> bool {
        let counter = match status {
            TestStatus::Expected => &mut self.passed,
            TestStatus::Unexpected => &mut self.failed,
            TestStatus::Skipped => &mut self.skipped,
            TestStatus::Flaky => &mut self.flaky,
            TestStatus::Unknown => return false,
        };
        *counter += 1;
        self.total += 1;
        self.duration_ms += duration_ms;
        true
    }
}

/// Per-environment counters, in project declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Environments {
    stats: Vec<EnvironmentStats>,
}

impl Environments {
    /// Aggregate every attempt in the run.
    ///
    /// Every declared project gets an entry, even when it has no attempts.
    /// Attempts for undeclared projects and attempts with an unknown status
    /// are skipped.
    pub fn from_run(run: &RunResult) -> Self {
        let mut stats: Vec<EnvironmentStats> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for name in run.project_names() {
            if !index.contains_key(name) {
                index.insert(name, stats.len());
                stats.push(EnvironmentStats::empty(name));
            }
        }

        for (spec, attempt) in walker::tests(&run.suites) {
            let Some(&slot) = index.get(attempt.project_name.as_str()) else {
                tracing::debug!(
                    project = %attempt.project_name,
                    spec = %spec.title,
                    "skipping attempt for undeclared project"
                );
                continue;
            };
            if !stats[slot].record(attempt.status, attempt.total_duration_ms()) {
                tracing::debug!(
                    project = %attempt.project_name,
                    spec = %spec.title,
                    "skipping attempt with unknown status"
                );
            }
        }

        Self { stats }
    }

    /// Look up an environment by name.
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&EnvironmentStats> {
        self.stats.iter().find(|s| s.name == name)
    }

    /// All environments, including ones with no attempts.
    pub fn iter(&self) -> impl Iterator<Item = &EnvironmentStats> {
        self.stats.iter()
    }

    /// Environments with at least one counted attempt.
    pub fn visible(&self) -> impl Iterator<Item = &EnvironmentStats> {
        self.stats.iter().filter(|s| s.total > 0)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
