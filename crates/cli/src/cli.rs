// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Storefront end-to-end test reporting and journey catalog
#[derive(Parser)]
#[command(name = "storecheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "STORECHECK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize a Playwright JSON results file
    Report(ReportArgs),
    /// List the storefront journeys and their steps
    Journeys(JourneysArgs),
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// Results file (default: from config, else test-results/results.json)
    #[arg(value_name = "RESULTS")]
    pub results: Option<PathBuf>,

    /// Console output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Output compact JSON (no whitespace, single line)
    #[arg(long)]
    pub compact: bool,

    /// Where to write the HTML report (default: from config)
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Skip writing the HTML report
    #[arg(long, conflicts_with = "html")]
    pub no_html: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct JourneysArgs {
    /// Only list this suite, by key (e.g. `checkout`) or title
    #[arg(long, value_name = "NAME")]
    pub suite: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
