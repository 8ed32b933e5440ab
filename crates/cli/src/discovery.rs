//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for storecheck.toml.

use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::error::{Error, Result};

/// Name of the config file searched for.
pub const CONFIG_FILE_NAME: &str = "storecheck.toml";

/// Find storecheck.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "STORECHECK_CONFIG")
/// 2. Discovery from current directory up to git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.exists() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        }),
        None => Ok(find_config(cwd)),
    }
}

/// Resolve and load the effective config, falling back to defaults.
///
/// With a config file, relative report paths resolve against the file's
/// directory. Without one they stay relative to the working directory.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    let Some(path) = resolve_config(explicit, cwd)? else {
        tracing::debug!("no config file found, using defaults");
        return Ok(Config::default());
    };

    let mut config = config::load_with_warnings(&path)?;
    if let Some(base) = path.parent() {
        config.report.results = base.join(&config.report.results);
        config.report.html = base.join(&config.report.html);
    }
    Ok(config)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
