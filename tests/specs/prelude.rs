//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for driving the storecheck binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the storecheck binary.
///
/// Color, logging and storefront overrides are pinned so output does not
/// depend on the calling environment.
pub fn storecheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("storecheck"));
    cmd.env_remove("COLOR")
        .env_remove("STORECHECK_CONFIG")
        .env_remove("STORECHECK_LOG")
        .env_remove("BASE_URL")
        .env_remove("USERNAME")
        .env_remove("PASSWORD")
        .env("NO_COLOR", "1");
    cmd
}

/// Create a report command builder
pub fn report() -> ReportBuilder<Text> {
    ReportBuilder::new()
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

// =============================================================================
// ReportBuilder
// =============================================================================

/// Report command builder for fluent test assertions
pub struct ReportBuilder<Mode = Text> {
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl ReportBuilder<Text> {
    fn new() -> Self {
        Self {
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            _mode: PhantomData,
        }
    }

    pub fn json(self) -> ReportBuilder<Json> {
        ReportBuilder {
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            _mode: PhantomData,
        }
    }

    pub fn runs(self) -> RunAssert {
        run_passes(self.command())
    }
}

#[allow(dead_code)]
impl ReportBuilder<Json> {
    /// Run and parse stdout as JSON.
    pub fn runs(self) -> ReportJson {
        let output = run_passes(self.command());
        ReportJson::new(&output.output.stdout)
    }
}

#[allow(dead_code)]
impl<Mode: 'static> ReportBuilder<Mode> {
    /// Run inside a project directory
    pub fn on(mut self, project: &Project) -> Self {
        self.dir = Some(project.path().to_path_buf());
        self
    }

    /// Add CLI arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args.extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Run and expect exactly this exit code
    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }

    /// Build the command
    fn command(self) -> Command {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();

        let mut cmd = storecheck_cmd();
        cmd.arg("report");

        if is_json {
            cmd.args(["-o", "json"]);
        }

        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd
    }
}

fn run_passes(mut cmd: Command) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert!(
        output.status.success(),
        "expected report to succeed, got exit code {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Parsed JSON report
pub struct ReportJson {
    root: serde_json::Value,
}

#[allow(dead_code)]
impl ReportJson {
    fn new(stdout: &[u8]) -> Self {
        let root: serde_json::Value = serde_json::from_slice(stdout).expect("valid JSON");
        Self { root }
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.root
    }

    /// Field at a `/`-separated JSON pointer, panics if missing
    pub fn require(&self, pointer: &str) -> &serde_json::Value {
        self.root
            .pointer(pointer)
            .unwrap_or_else(|| panic!("expected '{}' in report JSON", pointer))
    }

    /// Environment entry by name
    pub fn environment(&self, name: &str) -> &serde_json::Value {
        self.require("/environments")
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e.get("name").and_then(|n| n.as_str()) == Some(name))
            .unwrap_or_else(|| panic!("environment '{}' not found", name))
    }
}

/// Result of a run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    ///
    /// ```ignore
    /// .stdout_has("Pass Rate")  // contains
    /// ```
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }

    /// Assert stderr does not match predicate.
    pub fn stderr_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            !predicate.into_predicate().eval(&stderr),
            "stderr should NOT match predicate:\n{}",
            stderr
        );
        self
    }
}

/// Get path to a test fixture file or directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

// =============================================================================
// Project
// =============================================================================

/// Temporary working directory for a report run.
///
/// # Examples
///
/// ```ignore
/// let temp = Project::with_sample_results();
/// report().on(&temp).runs().stdout_has("Pass Rate");
/// assert!(temp.path().join("test-results/custom-report.html").exists());
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Project whose `test-results/results.json` is the sample run
    pub fn with_sample_results() -> Self {
        let project = Self::empty();
        let sample = std::fs::read_to_string(fixture("report/results.json")).unwrap();
        project.file("test-results/results.json", &sample);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `storecheck.toml`
    pub fn config(&self, content: &str) {
        self.file("storecheck.toml", content);
    }

    /// Write a file, creating parent directories
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Read a file relative to the project
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(path)).unwrap()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.dir.path().join(path).exists()
    }
}
