//! Centralized error handling for the agritrend library.
//!
//! A single `enum` covers every error category the crate can produce, so
//! callers can pattern match instead of string-inspecting:
//!
//! ```
//! use agritrend::error::AgritrendError;
//!
//! fn handle_error(err: AgritrendError) {
//!     match err {
//!         AgritrendError::EmptyCollection => eprintln!("no datasets supplied"),
//!         AgritrendError::DuplicateYear(year) => eprintln!("year {year} loaded twice"),
//!         _ => eprintln!("other error: {err}"),
//!     }
//! }
//! ```
//!
//! `From` implementations make the `?` operator work seamlessly across the
//! crates we build on:
//!
//! ```no_run
//! use agritrend::error::Result;
//! use std::fs;
//!
//! fn read_config(path: &str) -> Result<String> {
//!     // std::io::Error converts to AgritrendError via the From trait
//!     let content = fs::read_to_string(path)?;
//!     Ok(content)
//! }
//! ```
//!
//! The `ResultExt` trait adds a `.context()` method for attaching a caller
//! message to any convertible error:
//!
//! ```no_run
//! use agritrend::error::{Result, ResultExt as _};
//! use std::fs;
//!
//! fn load_readme() -> Result<String> {
//!     let text = fs::read_to_string("README.md").context("Failed to load code book")?;
//!     Ok(text)
//! }
//! ```

use std::fmt;

use crate::collection::Year;

/// Main error type for agritrend operations.
///
/// Only `EmptyCollection` and `DuplicateYear` are produced by the analytics
/// core itself; per-column conditions (too few defined points, non-numeric
/// data) are absorbed and logged rather than surfaced as errors.
#[derive(Debug)]
pub enum AgritrendError {
    /// I/O errors (reading or writing configuration files)
    Io(std::io::Error),

    /// Data processing errors (Polars, numeric coercion, regression input)
    DataProcessing(String),

    /// No yearly datasets were supplied to an operation that needs at least one
    EmptyCollection,

    /// The same year was inserted into a collection twice
    DuplicateYear(Year),

    /// Configuration errors (JSON parsing, invalid threshold values)
    Config(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for AgritrendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::EmptyCollection => write!(f, "Dataset collection contains no years"),
            Self::DuplicateYear(year) => write!(f, "Duplicate year in collection: {year}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AgritrendError {}

impl From<std::io::Error> for AgritrendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for AgritrendError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for AgritrendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for AgritrendError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for agritrend operations.
pub type Result<T> = std::result::Result<T, AgritrendError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AgritrendError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: AgritrendError = e.into();
            AgritrendError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: AgritrendError = e.into();
            AgritrendError::Other(format!("{}: {}", f(), err))
        })
    }
}
