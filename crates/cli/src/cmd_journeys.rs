// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Journeys command implementation.

use std::io::Write;

use storecheck::cli::{Cli, JourneysArgs};
use storecheck::discovery;
use storecheck::error::{Error, ExitCode};
use storecheck::journeys;

/// List the journey catalog, optionally limited to one suite.
///
/// The target storefront comes from config with `BASE_URL`, `USERNAME`
/// and `PASSWORD` overrides applied.
pub fn run(cli: &Cli, args: &JourneysArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let suite_config = discovery::load_config(cli.config.as_deref(), &cwd)?
        .suite
        .with_env_overrides(|key| std::env::var(key).ok());
    let catalog = journeys::catalog();

    let suites: Vec<_> = match &args.suite {
        Some(name) => {
            let matched: Vec<_> = catalog.iter().filter(|s| s.matches(name)).collect();
            if matched.is_empty() {
                let known: Vec<_> = catalog.iter().map(|s| s.name).collect();
                return Err(Error::Argument(format!(
                    "unknown suite `{}` (known: {})",
                    name,
                    known.join(", ")
                ))
                .into());
            }
            matched
        }
        None => catalog.iter().collect(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "🌐 Target: {} (user {})",
        suite_config.base_url, suite_config.username
    )?;
    for suite in suites {
        writeln!(out, "📁 {} ({})", suite.title, suite.name)?;
        for journey in &suite.journeys {
            writeln!(out, "  • {}", journey.title)?;
        }
    }
    Ok(ExitCode::Success)
}
