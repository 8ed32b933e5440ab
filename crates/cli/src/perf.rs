// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Duration statistics and slow-test ranking.
//!
//! Works per retry: an attempt retried three times contributes three
//! samples here, while the aggregator counts it once.

use serde::Serialize;

use crate::results::RunResult;
use crate::walker;

/// Retries slower than this (in milliseconds) are reported as slow.
pub const SLOW_TEST_THRESHOLD_MS: f64 = 5000.0;

/// Maximum number of slow tests shown.
pub const SLOW_TEST_LIMIT: usize = 5;

/// A single slow retry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlowTest {
    pub title: String,
    pub environment: String,
    pub duration_ms: f64,
}

/// Duration statistics across every retry in a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceInsights {
    /// Number of duration samples.
    pub samples: usize,
    pub average_ms: f64,
    pub max_ms: f64,
    pub min_ms: f64,
    /// Slowest retries, longest first, at most [`SLOW_TEST_LIMIT`].
    pub slow_tests: Vec<SlowTest>,
    /// Number of retries over the threshold before truncation.
    pub slow_test_count: usize,
}

impl PerformanceInsights {
    /// Analyze a run. Returns `None` when it has no retries at all.
    pub fn from_run(run: &RunResult) -> Option<Self> {
        let mut durations: Vec<f64> = Vec::new();
        let mut slow_tests: Vec<SlowTest> = Vec::new();

        for (spec, attempt) in walker::tests(&run.suites) {
            for entry in &attempt.results {
                durations.push(entry.duration);
                if entry.duration > SLOW_TEST_THRESHOLD_MS {
                    slow_tests.push(SlowTest {
                        title: spec.title.clone(),
                        environment: attempt.project_name.clone(),
                        duration_ms: entry.duration,
                    });
                }
            }
        }

        if durations.is_empty() {
            return None;
        }
        let max_ms = durations.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_ms = durations.iter().copied().fold(f64::INFINITY, f64::min);
        let average_ms = durations.iter().sum::<f64>() / durations.len() as f64;

        // Stable: equal durations keep encounter order.
        slow_tests.sort_by(|a, b| b.duration_ms.total_cmp(&a.duration_ms));
        let slow_test_count = slow_tests.len();
        slow_tests.truncate(SLOW_TEST_LIMIT);

        tracing::debug!(
            samples = durations.len(),
            slow = slow_test_count,
            "analyzed durations"
        );

        Some(Self {
            samples: durations.len(),
            average_ms,
            max_ms,
            min_ms,
            slow_tests,
            slow_test_count,
        })
    }
}

#[cfg(test)]
#[path = "perf_tests.rs"]
mod tests;
