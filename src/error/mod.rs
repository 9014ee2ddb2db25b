//! Error types for the hallucination report generator.
//!
//! This module defines a small error hierarchy:
//! - [`AppError`]: Top-level application errors
//! - [`LoadError`]: Input resource loading errors
//! - [`ConfigError`]: Configuration errors
//!
//! Running out of facts or excerpts, or exhausting a retry budget while
//! avoiding repeats, is not represented here. Those conditions resolve
//! locally with filler and fallback content.
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by the binary driver.
/// It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input loading error.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Input resource loading errors.
///
/// A load failure is surfaced as a visible error state. Generation is never
/// attempted without a successfully loaded store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The resource could not be read at all.
    #[error("Failed to load {path}: {message}")]
    Unreachable {
        /// Path or locator of the resource.
        path: String,
        /// Description of the read failure.
        message: String,
    },

    /// The resource was read but is not in the expected format.
    #[error("Malformed resource {path}: {message}")]
    Malformed {
        /// Path or locator of the resource.
        path: String,
        /// Description of the parse failure.
        message: String,
    },
}

impl LoadError {
    /// Returns the path of the resource that failed to load.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Unreachable { path, .. } | Self::Malformed { path, .. } => path,
        }
    }
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
