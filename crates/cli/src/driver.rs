// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Browser driver seam.
//!
//! Pages never talk to a browser directly. They go through [`Driver`], which
//! a Playwright binding, a WebDriver client or an in-memory fake can
//! implement. Selectors are plain CSS/Playwright selector strings.

use std::fmt;
use std::time::Duration;

/// Element state awaited by [`Driver::wait_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Visible,
    Hidden,
}

impl fmt::Display for ElementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementState::Visible => f.write_str("visible"),
            ElementState::Hidden => f.write_str("hidden"),
        }
    }
}

/// Page load milestone awaited by [`Driver::wait_for_load_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Load,
    DomContentLoaded,
    NetworkIdle,
}

/// Failure reported by a driver.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// No element matches the selector
    #[error("no element matches `{selector}`")]
    NotFound { selector: String },

    /// Element did not reach the awaited state in time
    #[error("timed out after {timeout:?} waiting for `{selector}` to be {state}")]
    Timeout {
        selector: String,
        state: ElementState,
        timeout: Duration,
    },

    /// Navigation failed
    #[error("navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },

    /// Any other browser-side failure
    #[error("browser error: {0}")]
    Browser(String),
}

/// Failure of a page interaction or assertion.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// An expectation did not hold
    #[error("expected `{selector}` {expected}, got {actual}")]
    Assertion {
        selector: String,
        expected: String,
        actual: String,
    },
}

/// Browser capability consumed by the page objects.
pub trait Driver {
    /// Navigate to `url`.
    fn goto(&self, url: &str) -> Result<(), DriverError>;

    /// Current page URL.
    fn url(&self) -> Result<String, DriverError>;

    fn click(&self, selector: &str) -> Result<(), DriverError>;

    /// Replace the value of an input.
    fn fill(&self, selector: &str, text: &str) -> Result<(), DriverError>;

    /// Empty an input.
    fn clear(&self, selector: &str) -> Result<(), DriverError> {
        self.fill(selector, "")
    }

    /// Text content of the first matching element.
    fn text_content(&self, selector: &str) -> Result<String, DriverError>;

    /// Text content of every matching element, in document order.
    fn all_text_contents(&self, selector: &str) -> Result<Vec<String>, DriverError>;

    /// Current value of an input.
    fn input_value(&self, selector: &str) -> Result<String, DriverError>;

    fn is_visible(&self, selector: &str) -> Result<bool, DriverError>;

    /// Block until the element reaches `state` or `timeout` elapses.
    fn wait_for(
        &self,
        selector: &str,
        state: ElementState,
        timeout: Duration,
    ) -> Result<(), DriverError>;

    fn wait_for_load_state(&self, state: LoadState) -> Result<(), DriverError>;
}

/// Web-first assertions over a [`Driver`].
///
/// Text comparisons collapse runs of whitespace and trim both sides.
pub mod expect {
    use super::{Driver, PageError};

    /// Pseudo-selector used in assertion errors about the page URL.
    pub const PAGE_URL: &str = "page url";

    fn normalize(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn fail(selector: &str, expected: String, actual: String) -> PageError {
        PageError::Assertion {
            selector: selector.to_string(),
            expected,
            actual,
        }
    }

    pub fn to_be_visible<D: Driver + ?Sized>(driver: &D, selector: &str) -> Result<(), PageError> {
        if driver.is_visible(selector)? {
            Ok(())
        } else {
            Err(fail(selector, "to be visible".into(), "hidden".into()))
        }
    }

    pub fn to_be_hidden<D: Driver + ?Sized>(driver: &D, selector: &str) -> Result<(), PageError> {
        if driver.is_visible(selector)? {
            Err(fail(selector, "to be hidden".into(), "visible".into()))
        } else {
            Ok(())
        }
    }

    /// The element's full text equals `expected`.
    pub fn to_have_text<D: Driver + ?Sized>(
        driver: &D,
        selector: &str,
        expected: &str,
    ) -> Result<(), PageError> {
        let actual = driver.text_content(selector)?;
        if normalize(&actual) == normalize(expected) {
            Ok(())
        } else {
            Err(fail(selector, format!("to have text {expected:?}"), format!("{actual:?}")))
        }
    }

    pub fn to_contain_text<D: Driver + ?Sized>(
        driver: &D,
        selector: &str,
        expected: &str,
    ) -> Result<(), PageError> {
        let actual = driver.text_content(selector)?;
        if normalize(&actual).contains(&normalize(expected)) {
            Ok(())
        } else {
            Err(fail(selector, format!("to contain text {expected:?}"), format!("{actual:?}")))
        }
    }

    /// Matching elements have exactly these texts, in order.
    pub fn to_have_texts<D: Driver + ?Sized>(
        driver: &D,
        selector: &str,
        expected: &[&str],
    ) -> Result<(), PageError> {
        let actual = driver.all_text_contents(selector)?;
        let matches = actual.len() == expected.len()
            && actual
                .iter()
                .zip(expected)
                .all(|(a, e)| normalize(a) == normalize(e));
        if matches {
            Ok(())
        } else {
            Err(fail(selector, format!("to have texts {expected:?}"), format!("{actual:?}")))
        }
    }

    pub fn to_have_value<D: Driver + ?Sized>(
        driver: &D,
        selector: &str,
        expected: &str,
    ) -> Result<(), PageError> {
        let actual = driver.input_value(selector)?;
        if actual == expected {
            Ok(())
        } else {
            Err(fail(selector, format!("to have value {expected:?}"), format!("{actual:?}")))
        }
    }

    pub fn to_have_url_containing<D: Driver + ?Sized>(
        driver: &D,
        fragment: &str,
    ) -> Result<(), PageError> {
        let url = driver.url()?;
        if url.contains(fragment) {
            Ok(())
        } else {
            Err(fail(PAGE_URL, format!("to contain {fragment:?}"), url))
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
