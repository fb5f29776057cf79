// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule names understood by commitlint.
//!
//! The linter matches rules by exact name. Names outside this list are
//! passed through untouched but reported as unknown.

use lazy_static::lazy_static;
use std::collections::HashSet;

pub const HEADER_MAX_LENGTH: &str = "header-max-length";
pub const HEADER_TRIM: &str = "header-trim";
pub const SUBJECT_EMPTY: &str = "subject-empty";
pub const SUBJECT_CASE: &str = "subject-case";
pub const SUBJECT_FULL_STOP: &str = "subject-full-stop";
pub const BODY_MAX_LINE_LENGTH: &str = "body-max-line-length";
pub const BODY_LEADING_BLANK: &str = "body-leading-blank";
pub const TYPE_EMPTY: &str = "type-empty";
pub const TYPE_CASE: &str = "type-case";
pub const TYPE_ENUM: &str = "type-enum";

/// Rules the project policy declares.
pub const POLICY_RULES: &[&str] = &[
    HEADER_MAX_LENGTH,
    HEADER_TRIM,
    SUBJECT_EMPTY,
    SUBJECT_CASE,
    SUBJECT_FULL_STOP,
    BODY_MAX_LINE_LENGTH,
    BODY_LEADING_BLANK,
    TYPE_EMPTY,
    TYPE_CASE,
    TYPE_ENUM,
];

/// Every rule name commitlint ships.
pub const KNOWN_RULES: &[&str] = &[
    "body-case",
    "body-empty",
    "body-full-stop",
    "body-leading-blank",
    "body-max-length",
    "body-max-line-length",
    "body-min-length",
    "footer-empty",
    "footer-leading-blank",
    "footer-max-length",
    "footer-max-line-length",
    "footer-min-length",
    "header-case",
    "header-full-stop",
    "header-max-length",
    "header-min-length",
    "header-trim",
    "references-empty",
    "scope-case",
    "scope-empty",
    "scope-enum",
    "scope-max-length",
    "scope-min-length",
    "signed-off-by",
    "subject-case",
    "subject-empty",
    "subject-exclamation-mark",
    "subject-full-stop",
    "subject-max-length",
    "subject-min-length",
    "trailer-exists",
    "type-case",
    "type-empty",
    "type-enum",
    "type-max-length",
    "type-min-length",
];

/// Case names accepted by the `*-case` rules.
pub const KNOWN_CASES: &[&str] = &[
    "lower-case",
    "upper-case",
    "camel-case",
    "kebab-case",
    "pascal-case",
    "sentence-case",
    "snake-case",
    "start-case",
];

lazy_static! {
    static ref KNOWN_RULE_SET: HashSet<&'static str> = KNOWN_RULES.iter().copied().collect();
}

/// Whether commitlint recognizes this rule name.
pub fn is_known_rule(name: &str) -> bool {
    KNOWN_RULE_SET.contains(name)
}

/// Whether this is a case name commitlint recognizes.
pub fn is_known_case(name: &str) -> bool {
    KNOWN_CASES.contains(&name)
}
