// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitrc - commit-message policy for commitlint
//!
//! Declares the project's commitlint rules as typed data and publishes
//! them in the formats commitlint loads. Rule evaluation stays with
//! commitlint.
//!
//! # Features
//!
//! - **Policy**: rule severities, applicability and values, plus ignore predicates
//! - **Policy files**: optional `commitrc.toml` overlays on the built-in policy
//! - **Export**: `.commitlint.config.mjs` or `.commitlintrc.json`
//! - **Exemption checks**: test messages or commits against the ignore list
//!
//! # Example
//!
//! ```
//! use commitrc::policy::{vocabulary, LintConfig, RuleValue};
//!
//! let policy = LintConfig::default();
//!
//! let header = policy.rule(vocabulary::HEADER_MAX_LENGTH).unwrap();
//! assert_eq!(header.value, Some(RuleValue::Length(72)));
//!
//! assert!(policy.is_ignored("Merge pull request #123 from org/branch"));
//! assert!(!policy.is_ignored("fix: correct off-by-one error"));
//! ```

// Module declarations
pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod policy;
pub mod render;

// Re-exports for convenience
pub use config::Settings;
pub use error::{PolicyError, Result};
pub use policy::LintConfig;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commitrc.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
