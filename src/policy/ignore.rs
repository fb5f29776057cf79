// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ignore predicates over raw commit messages.
//!
//! A message matched by any predicate is exempt from every rule. The
//! predicates are plain data so they can live in a policy file and be
//! rendered as functions for the linter.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PatternError;

/// Substring that identifies a pull-request merge commit.
pub const MERGE_PULL_REQUEST_MARKER: &str = "Merge pull request #";

/// Inline flags that map onto the flags argument of a JavaScript `RegExp`.
const PORTABLE_FLAGS: &str = "ims";

/// A predicate over the raw commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IgnorePredicate {
    /// The message contains this substring.
    Contains(String),
    /// The message matches this regular expression.
    Matches(MessagePattern),
}

impl IgnorePredicate {
    /// Predicate exempting pull-request merge commits.
    pub fn merge_pull_request() -> Self {
        IgnorePredicate::Contains(MERGE_PULL_REQUEST_MARKER.to_string())
    }

    /// Build a regex predicate.
    pub fn pattern(pattern: &str) -> Result<Self, PatternError> {
        Ok(IgnorePredicate::Matches(MessagePattern::new(pattern)?))
    }

    /// Test the predicate against a raw message.
    pub fn matches(&self, message: &str) -> bool {
        match self {
            IgnorePredicate::Contains(needle) => message.contains(needle.as_str()),
            IgnorePredicate::Matches(pattern) => pattern.is_match(message),
        }
    }
}

impl std::fmt::Display for IgnorePredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnorePredicate::Contains(needle) => write!(f, "contains {:?}", needle),
            IgnorePredicate::Matches(pattern) => write!(f, "matches /{}/", pattern.as_str()),
        }
    }
}

/// A regular expression compiled once, stored as its source text.
///
/// Patterns are also exported as JavaScript `RegExp`s, so syntax only
/// Rust's `regex` understands is rejected. A leading `(?i)`, `(?m)` or
/// `(?s)` group is allowed and becomes the `RegExp` flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessagePattern(Regex);

impl MessagePattern {
    /// Compile a pattern.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern)?;

        let (_, body) = split_leading_flags(pattern);
        if let Some(construct) = unportable_construct(body) {
            return Err(PatternError::NotPortable {
                pattern: pattern.to_string(),
                construct,
            });
        }

        Ok(MessagePattern(regex))
    }

    /// The pattern as a JavaScript `RegExp` source and flags string.
    pub fn to_js(&self) -> (&str, &str) {
        let (flags, body) = split_leading_flags(self.as_str());
        (body, flags)
    }

    /// The pattern source.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the message matches.
    pub fn is_match(&self, message: &str) -> bool {
        self.0.is_match(message)
    }
}

impl PartialEq for MessagePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for MessagePattern {}

impl TryFrom<String> for MessagePattern {
    type Error = PatternError;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        MessagePattern::new(&pattern)
    }
}

impl From<MessagePattern> for String {
    fn from(pattern: MessagePattern) -> Self {
        pattern.0.as_str().to_string()
    }
}

/// Split a leading `(?ims)` group off the pattern, returning `(flags, body)`.
fn split_leading_flags(pattern: &str) -> (&str, &str) {
    if let Some(rest) = pattern.strip_prefix("(?") {
        if let Some(end) = rest.find(')') {
            let flags = &rest[..end];
            if !flags.is_empty() && flags.chars().all(|c| PORTABLE_FLAGS.contains(c)) {
                return (flags, &rest[end + 1..]);
            }
        }
    }
    ("", pattern)
}

/// The first construct JavaScript would reject or read differently.
fn unportable_construct(pattern: &str) -> Option<String> {
    let mut in_class = false;
    let mut i = 0;

    while let Some(c) = pattern[i..].chars().next() {
        let rest = &pattern[i..];

        if c == '\\' {
            let mut escaped = rest[1..].chars();
            let e = escaped.next()?;
            let braced = escaped.as_str().starts_with('{');
            if matches!(e, 'A' | 'z' | 'p' | 'P' | 'U' | '<' | '>')
                || (matches!(e, 'x' | 'u' | 'b') && braced)
            {
                return Some(format!("\\{}", e));
            }
            i += 1 + e.len_utf8();
            continue;
        }

        if in_class {
            // Rust requires `[` to be escaped in a class unless it opens a nested one.
            if c == '[' {
                return Some("nested character class".to_string());
            }
            if rest.starts_with("&&") || rest.starts_with("--") || rest.starts_with("~~") {
                return Some(rest[..2].to_string());
            }
            if c == ']' {
                in_class = false;
            }
        } else if c == '[' {
            in_class = true;
            let body = rest[1..].strip_prefix('^').unwrap_or(&rest[1..]);
            if body.starts_with(']') {
                return Some("[]".to_string());
            }
        } else if let Some(group) = rest.strip_prefix("(?") {
            if group.starts_with("P<") {
                return Some("(?P<".to_string());
            }
            if !group.starts_with(':') && !group.starts_with('<') {
                let end = group
                    .find(|c: char| c == ')' || c == ':')
                    .map_or(group.len(), |e| e + 1);
                return Some(format!("(?{}", &group[..end]));
            }
        }

        i += c.len_utf8();
    }

    None
}
