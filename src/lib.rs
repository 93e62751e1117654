pub mod cli;
pub mod config;
pub mod declaration;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod ui;
pub mod updater;
pub mod warning;

pub use error::{AutoVersionError, Result};
