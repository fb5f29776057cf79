// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit-message policy as typed data.
//!
//! This module declares which commitlint rules apply, at what severity,
//! with which values, and which messages are exempt. Evaluating the rules
//! is left to commitlint.

mod ignore;
mod lint;
mod rule;
mod severity;
mod types;
pub mod vocabulary;

pub use ignore::{IgnorePredicate, MessagePattern, MERGE_PULL_REQUEST_MARKER};
pub use lint::{
    LintConfig, DEFAULT_PARSER_PRESET, DISALLOWED_SUBJECT_CASES, MAX_LINE_LENGTH,
    REQUIRED_TYPE_CASE,
};
pub use rule::{RuleConfig, RuleValue};
pub use severity::{Applicability, Severity};
pub use types::CommitType;
