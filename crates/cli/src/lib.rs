pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod driver;
pub mod error;
pub mod journeys;
pub mod locators;
pub mod pages;
pub mod perf;
pub mod report;
pub mod results;
pub mod stats;
pub mod walker;

pub use cli::{Cli, Command, JourneysArgs, OutputFormat, ReportArgs};
pub use config::{Config, SuiteConfig};
pub use driver::{Driver, DriverError, PageError};
pub use error::{Error, ExitCode, Result};
pub use report::{Report, ReportFormatter};
pub use results::RunResult;


#[cfg(test)]
pub mod test_store;
