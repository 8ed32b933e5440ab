// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-run results: the Playwright JSON reporter record.
//!
//! The record is loaded once and never mutated. Optional lists default to
//! empty, whether absent or `null`, so that partially written records still
//! render.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Complete record of one test run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunResult {
    /// Run configuration, including the declared projects.
    #[serde(default)]
    pub config: RunConfig,

    /// Top-level suites, usually one per spec file.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub suites: Vec<Suite>,

    /// Totals as reported by the runner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<RunStats>,
}

/// Runner configuration captured in the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// Runner version.
    #[serde(default)]
    pub version: String,

    /// Number of parallel workers.
    #[serde(default)]
    pub workers: u32,

    /// Root directory of the test files.
    #[serde(default)]
    pub root_dir: String,

    /// Execution environments ("projects"), e.g. one per browser engine.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects: Vec<Project>,
}

/// A named execution environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
}

/// Run-level totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// Wall-clock duration of the run in milliseconds.
    #[serde(default)]
    pub duration: f64,

    #[serde(default)]
    pub expected: u64,
    #[serde(default)]
    pub unexpected: u64,
    #[serde(default)]
    pub skipped: u64,
    #[serde(default)]
    pub flaky: u64,
}

/// A named group of specs and nested suites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suite {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub specs: Vec<Spec>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub suites: Vec<Suite>,
}

/// A single test case, possibly run under several environments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spec {
    pub title: String,

    /// True when every attempt ended as expected or flaky.
    #[serde(default)]
    pub ok: bool,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub tests: Vec<TestAttempt>,
}

/// One environment's execution of a spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestAttempt {
    #[serde(default)]
    pub project_name: String,

    pub status: TestStatus,

    /// One entry per retry.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<ResultEntry>,
}

impl TestAttempt {
    /// Sum of all retry durations in milliseconds.
    pub fn total_duration_ms(&self) -> f64 {
        self.results.iter().map(|r| r.duration).sum()
    }
}

/// Final outcome of a test attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Expected,
    Unexpected,
    Skipped,
    Flaky,
    /// Any status this tool does not know about.
    #[serde(other)]
    Unknown,
}

impl TestStatus {
    /// Glyph shown next to an attempt in the detailed text tree.
    pub fn glyph(self) -> &'static str {
        match self {
            TestStatus::Expected => "✅",
            TestStatus::Unexpected => "❌",
            TestStatus::Skipped => "⏭️",
            TestStatus::Flaky | TestStatus::Unknown => "🔄",
        }
    }
}

/// One retry of a test attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Duration in milliseconds. Reporters may emit fractional values.
    #[serde(default)]
    pub duration: f64,

    #[serde(default)]
    pub retry: u32,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<TestError>,
}

/// An error reported by a retry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Reads an optional list, treating an explicit `null` like an absent key.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RunResult {
    /// Load a run record from a JSON file.
    ///
    /// A missing file and malformed content are reported as distinct errors.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ResultsNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| Error::ResultsRead {
            path: path.to_path_buf(),
            source,
        })?;

        let run = Self::from_json(&content).map_err(|source| Error::ResultsParse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            suites = run.suites.len(),
            projects = run.config.projects.len(),
            "loaded test results"
        );

        Ok(run)
    }

    /// Parse a run record from JSON text.
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Declared project names, in declaration order.
    pub fn project_names(&self) -> impl Iterator<Item = &str> {
        self.config.projects.iter().map(|p| p.name.as_str())
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
