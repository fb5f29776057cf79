// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commitrc.
//!
//! The policy itself only declares severities for the consuming linter.
//! These types cover the operations around it: loading policy files,
//! reading commits, rendering output and checking ignore predicates.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitrc operations.
#[derive(Error, Debug)]
pub enum PolicyError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Rendering errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    // Ignore check outcome
    #[error("Check failed: {0}")]
    Check(#[from] CheckError),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for PolicyError {
    fn from(err: dialoguer::Error) -> Self {
        PolicyError::Ui(err.to_string())
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Unknown rule: '{name}'")]
    UnknownRule { name: String },

    #[error("Refusing to overwrite existing file: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Errors raised when compiling an ignore pattern.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error(transparent)]
    Invalid(#[from] regex::Error),

    #[error("'{construct}' in pattern '{pattern}' cannot be exported to commitlint")]
    NotPortable { pattern: String, construct: String },
}

/// Errors raised while rendering the policy for the linter.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template error: {message}")]
    Template { message: String },

    #[error("Serialization failed: {message}")]
    Serialize { message: String },
}

impl From<handlebars::RenderError> for RenderError {
    fn from(err: handlebars::RenderError) -> Self {
        RenderError::Template {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialize {
            message: err.to_string(),
        }
    }
}

/// Outcome errors of `check-ignore`.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{count} of {total} message(s) not exempt")]
    NotExempt { count: usize, total: usize },

    #[error("No commit messages to check")]
    NothingToCheck,
}

/// Result type alias for commitrc operations.
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| PolicyError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/commitrc.toml"),
        };
        assert!(err.to_string().contains("/path/to/commitrc.toml"));
    }

    #[test]
    fn test_policy_error_from_config_error() {
        let config_err = ConfigError::UnknownRule {
            name: "header-min-width".to_string(),
        };
        let err: PolicyError = config_err.into();
        assert!(err.to_string().contains("header-min-width"));
    }

    #[test]
    fn test_pattern_error_display() {
        let err = PatternError::NotPortable {
            pattern: "^(?x) wip".to_string(),
            construct: "(?x)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'(?x)' in pattern '^(?x) wip' cannot be exported to commitlint"
        );
    }

    #[test]
    fn test_check_error_display() {
        let err = CheckError::NotExempt { count: 2, total: 3 };
        assert_eq!(err.to_string(), "2 of 3 message(s) not exempt");
    }

    #[test]
    fn test_result_ext_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = io.context("write policy").unwrap_err();
        assert_eq!(err.to_string(), "write policy: denied");
    }
}
