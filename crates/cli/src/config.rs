//! Configuration parsing and validation.
//!
//! Handles storecheck.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    suite: Option<toml::Value>,

    #[serde(default)]
    report: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Storefront under test.
    pub suite: SuiteConfig,

    /// Report generation settings.
    pub report: ReportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            suite: SuiteConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Target application and login credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.saucedemo.com".to_string(),
            username: "standard_user".to_string(),
            password: "secret_sauce".to_string(),
        }
    }
}

impl SuiteConfig {
    /// Apply `BASE_URL`, `USERNAME` and `PASSWORD` overrides.
    ///
    /// `lookup` resolves a variable name; pass `|k| std::env::var(k).ok()`
    /// for the process environment. Empty values are ignored.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        if let Some(url) = get("BASE_URL") {
            self.base_url = url;
        }
        if let Some(user) = get("USERNAME") {
            self.username = user;
        }
        if let Some(pass) = get("PASSWORD") {
            self.password = pass;
        }
        self
    }
}

/// Report input and output locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Playwright JSON results file.
    pub results: PathBuf,

    /// HTML report destination.
    pub html: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            results: PathBuf::from("test-results/results.json"),
            html: PathBuf::from("test-results/custom-report.html"),
        }
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "suite", "report"];

const KNOWN_SUITE_KEYS: &[&str] = &["base_url", "username", "password"];

const KNOWN_REPORT_KEYS: &[&str] = &["results", "html"];

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = parse_with_warnings(&content, path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})",
            version, SUPPORTED_VERSION
        )));
    }

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let suite = match flexible.suite {
        Some(toml::Value::Table(t)) => {
            warn_unknown_fields(path, "suite", &t, KNOWN_SUITE_KEYS);
            let defaults = SuiteConfig::default();
            SuiteConfig {
                base_url: string_field(&t, "base_url", path)?.unwrap_or(defaults.base_url),
                username: string_field(&t, "username", path)?.unwrap_or(defaults.username),
                password: string_field(&t, "password", path)?.unwrap_or(defaults.password),
            }
        }
        Some(_) => return Err(config_error("`suite` must be a table".to_string())),
        None => SuiteConfig::default(),
    };

    let report = match flexible.report {
        Some(toml::Value::Table(t)) => {
            warn_unknown_fields(path, "report", &t, KNOWN_REPORT_KEYS);
            let defaults = ReportConfig::default();
            ReportConfig {
                results: string_field(&t, "results", path)?
                    .map(PathBuf::from)
                    .unwrap_or(defaults.results),
                html: string_field(&t, "html", path)?
                    .map(PathBuf::from)
                    .unwrap_or(defaults.html),
            }
        }
        Some(_) => return Err(config_error("`report` must be a table".to_string())),
        None => ReportConfig::default(),
    };

    Ok(Config {
        version,
        suite,
        report,
    })
}

/// Read an optional string field, rejecting other value types.
fn string_field(table: &toml::Table, key: &str, path: &Path) -> Result<Option<String>> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(Error::Config {
            message: format!("`{}` must be a string, found {}", key, other.type_str()),
            path: Some(path.to_path_buf()),
        }),
    }
}

fn warn_unknown_fields(path: &Path, section: &str, table: &toml::Table, known: &[&str]) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("{}.{}", section, key));
        }
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "storecheck: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
