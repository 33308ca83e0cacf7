//! Error types for studyhub-core.
//!
//! Engine mutations never fail loudly: a refused input or an unknown id
//! yields `None` and leaves state untouched. The types here cover the
//! places that do report back to the user: parsing raw input, loading
//! configuration, and the external link effects. Each surface returns
//! its own type; front ends box them.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Home/config directory could not be resolved or created
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Raised when raw user input cannot become a typed value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty
    #[error("'{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Credits were not a positive integer
    #[error("credits must be a positive integer, got '{0}'")]
    InvalidCredits(String),

    /// Grade outside the grade table
    #[error("unknown grade '{0}' (expected one of O, A+, A, B+, B, C, F)")]
    UnknownGrade(String),

    /// Unparseable due date
    #[error("invalid due date '{0}' (expected YYYY-MM-DD or RFC 3339)")]
    InvalidDate(String),

    /// View id outside the closed set
    #[error("unknown view '{0}' (expected home, deadlines, gpa or notes)")]
    UnknownView(String),

    /// Subject field name for an update
    #[error("unknown subject field '{0}' (expected name, credits or grade)")]
    UnknownField(String),

    /// Record id could not be parsed
    #[error("invalid id '{0}'")]
    InvalidId(String),
}

/// Failures of the two fire-and-forget link effects.
#[derive(Error, Debug)]
pub enum LinkError {
    /// No semester with that id in the directory
    #[error("no semester with id {0}")]
    UnknownSemester(u8),

    /// Clipboard could not be reached or written
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// Host refused to open the link
    #[error("failed to open {url}: {message}")]
    OpenFailed { url: String, message: String },

    /// Only http(s) links are handed to the host opener
    #[error("refusing to open non-web link '{0}'")]
    UnsupportedScheme(String),
}
