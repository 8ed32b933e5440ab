// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.

use std::io::Write;

use chrono::Utc;

use storecheck::cli::{Cli, OutputFormat, ReportArgs};
use storecheck::color;
use storecheck::discovery;
use storecheck::error::{Error, ExitCode};
use storecheck::report::{self, JsonFormatter, Report, ReportFormatter, Section, TextFormatter};
use storecheck::results::RunResult;

/// Run the report command.
///
/// Loading is fatal. Every render step after that runs even when an
/// earlier one failed; failures are counted and reported at the end.
pub fn run(cli: &Cli, args: &ReportArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;

    let results_path = args
        .results
        .clone()
        .unwrap_or_else(|| config.report.results.clone());
    let run = RunResult::load(&results_path)?;
    let report = Report::build(&run, Utc::now());

    let mut steps = Steps::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.output {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(color::should_colorize(args.color, args.no_color));
            for section in Section::ALL {
                steps.run(section.name(), || {
                    let rendered = formatter.render_section(section, &report)?;
                    out.write_all(rendered.as_bytes())?;
                    Ok(())
                });
            }
        }
        OutputFormat::Json => {
            steps.run("json", || {
                JsonFormatter::new(args.compact).format_to(&mut out, &report)?;
                writeln!(out)?;
                Ok(())
            });
        }
    }

    if args.no_html {
        tracing::debug!("html report disabled");
    } else {
        let html_path = args.html.clone().unwrap_or_else(|| config.report.html.clone());
        steps.run("html", || {
            report::write_html(&report, &html_path)?;
            let notice = format!("📄 HTML report generated: {}", html_path.display());
            match args.output {
                OutputFormat::Text => writeln!(out, "\n{notice}")?,
                OutputFormat::Json => eprintln!("{notice}"),
            }
            Ok(())
        });
    }
    out.flush()?;

    if steps.failed > 0 {
        return Err(Error::RenderIncomplete {
            failed: steps.failed,
            total: steps.total,
        }
        .into());
    }
    Ok(ExitCode::Success)
}

/// Counts render steps and isolates their failures.
#[derive(Default)]
struct Steps {
    total: usize,
    failed: usize,
}

impl Steps {
    fn run(&mut self, name: &str, step: impl FnOnce() -> anyhow::Result<()>) {
        self.total += 1;
        if let Err(e) = step() {
            self.failed += 1;
            tracing::warn!(step = name, error = %e, "render step failed");
            eprintln!("storecheck: {} failed: {:#}", name, e);
        }
    }
}
