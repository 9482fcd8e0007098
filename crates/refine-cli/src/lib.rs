//! Command-line front end for the refine cost engine.
//!
//! Collects tiers and prices from flags or a request file, hands them to
//! [`refine_core::RefineCalculator`], and renders the outcome as a localized
//! text report or JSON.

pub mod cli;
pub mod error;
pub mod format;
pub mod locale;
pub mod report;

pub use cli::{Cli, RunOutput, run};
pub use error::CliError;
pub use locale::{Language, Translator};
