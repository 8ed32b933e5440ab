// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default: color only when stdout is a TTY and not running under CI

use std::io::IsTerminal;

use anstyle::{AnsiColor, Style};

/// Resolve whether console output should be colored.
pub fn should_colorize(force: bool, disable: bool) -> bool {
    if disable {
        return false;
    }
    if force {
        return true;
    }
    // NO_COLOR spec: any value (including empty) disables color
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("COLOR").is_some() {
        return true;
    }
    std::io::stdout().is_terminal() && std::env::var_os("CI").is_none()
}

/// Wrap `text` in the style's escape codes when `enabled`.
pub fn paint(text: &str, style: Style, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", style.render(), text, style.render_reset())
    } else {
        text.to_string()
    }
}

/// Styles for report output.
pub mod scheme {
    use super::{AnsiColor, Style};

    /// Section headers.
    pub fn header() -> Style {
        Style::new().bold()
    }

    /// Passed counts and glyph lines.
    pub fn pass() -> Style {
        Style::new().fg_color(Some(AnsiColor::Green.into()))
    }

    /// Failed counts and error lines.
    pub fn fail() -> Style {
        Style::new().fg_color(Some(AnsiColor::Red.into())).bold()
    }

    /// Skipped counts.
    pub fn skip() -> Style {
        Style::new().fg_color(Some(AnsiColor::Yellow.into()))
    }

    /// Flaky counts.
    pub fn flaky() -> Style {
        Style::new().fg_color(Some(AnsiColor::Magenta.into()))
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
