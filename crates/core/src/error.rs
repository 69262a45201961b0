//! Core error types for greeter operations.
//!
//! Name-rule failures are data (see [`crate::name::RuleViolation`]), not
//! errors. This type covers what can go wrong around them: loading a config
//! file, parsing settings, building inconsistent rules.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for greeter operations.
#[derive(Debug, Error)]
pub enum Error {
    // Configuration errors
    #[error("failed to read config file '{path}': {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    #[error("failed to parse config file '{path}': {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    // Rule construction
    #[error("invalid name rules: {reason}")]
    InvalidRules { reason: String },

    // Field-level parse errors
    #[error("validation error in {field}: {message}")]
    Validation { field: String, message: String },
}

impl Error {
    /// Create a config read error.
    pub fn config_read(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid rules error.
    pub fn invalid_rules(reason: impl Into<String>) -> Self {
        Self::InvalidRules {
            reason: reason.into(),
        }
    }

    /// Create a field validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
