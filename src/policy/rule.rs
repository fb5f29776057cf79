// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Per-rule configuration.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::severity::{Applicability, Severity};

/// Rule-specific parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// A maximum length in characters.
    Length(usize),
    /// A single tag, such as the required case `lower-case`.
    Tag(String),
    /// A set of tags, kept in declaration order.
    Tags(Vec<String>),
}

impl RuleValue {
    /// Build a tag set from string slices.
    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RuleValue::Tags(tags.into_iter().map(Into::into).collect())
    }

    /// The length, if this is a length value.
    pub fn as_length(&self) -> Option<usize> {
        match self {
            RuleValue::Length(n) => Some(*n),
            _ => None,
        }
    }

    /// The tags carried by this value (a single tag counts as one).
    pub fn as_tags(&self) -> Vec<&str> {
        match self {
            RuleValue::Length(_) => Vec::new(),
            RuleValue::Tag(tag) => vec![tag.as_str()],
            RuleValue::Tags(tags) => tags.iter().map(String::as_str).collect(),
        }
    }
}

impl std::fmt::Display for RuleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleValue::Length(n) => write!(f, "{}", n),
            RuleValue::Tag(tag) => write!(f, "{}", tag),
            RuleValue::Tags(tags) => write!(f, "[{}]", tags.join(", ")),
        }
    }
}

/// Severity, applicability and optional value of one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// How violations are reported.
    pub severity: Severity,

    /// Whether the condition must or must not hold.
    #[serde(default)]
    pub applicability: Applicability,

    /// Rule parameter, absent for rules such as `header-trim`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RuleValue>,
}

impl RuleConfig {
    /// Create a rule without a value.
    pub fn new(severity: Severity, applicability: Applicability) -> Self {
        Self {
            severity,
            applicability,
            value: None,
        }
    }

    /// Shorthand for an error-level rule.
    pub fn error(applicability: Applicability) -> Self {
        Self::new(Severity::Error, applicability)
    }

    /// Set the value.
    pub fn with_value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Whether the rule is reported at all.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Off
    }

    /// The rule in commitlint's tuple form: `[level, applicability, value?]`.
    pub fn to_commitlint_json(&self) -> Value {
        match &self.value {
            Some(value) => json!([self.severity.level(), self.applicability.as_str(), value]),
            None => json!([self.severity.level(), self.applicability.as_str()]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commitlint_tuple_with_value() {
        let rule = RuleConfig::error(Applicability::Always).with_value(RuleValue::Length(72));
        assert_eq!(rule.to_commitlint_json(), json!([2, "always", 72]));
    }

    #[test]
    fn test_commitlint_tuple_without_value() {
        let rule = RuleConfig::error(Applicability::Never);
        assert_eq!(rule.to_commitlint_json(), json!([2, "never"]));
    }

    #[test]
    fn test_commitlint_tuple_with_tags() {
        let rule = RuleConfig::new(Severity::Warning, Applicability::Always)
            .with_value(RuleValue::tags(["feat", "fix"]));
        assert_eq!(rule.to_commitlint_json(), json!([1, "always", ["feat", "fix"]]));
    }

    #[test]
    fn test_deserialize_value_shapes() {
        let length: RuleConfig =
            toml::from_str("severity = \"error\"\nvalue = 50").unwrap();
        assert_eq!(length.value, Some(RuleValue::Length(50)));
        assert_eq!(length.applicability, Applicability::Always);

        let tag: RuleConfig =
            toml::from_str("severity = 2\napplicability = \"always\"\nvalue = \"lower-case\"")
                .unwrap();
        assert_eq!(tag.value, Some(RuleValue::Tag("lower-case".to_string())));

        let tags: RuleConfig =
            toml::from_str("severity = 1\napplicability = \"never\"\nvalue = [\"upper-case\"]")
                .unwrap();
        assert_eq!(tags.value, Some(RuleValue::tags(["upper-case"])));
        assert_eq!(tags.severity, Severity::Warning);
    }

    #[test]
    fn test_disabled_rule() {
        let rule = RuleConfig::new(Severity::Off, Applicability::Always);
        assert!(!rule.is_enabled());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(RuleValue::Length(72).as_length(), Some(72));
        assert_eq!(RuleValue::Tag("lower-case".into()).as_tags(), vec!["lower-case"]);
        assert!(RuleValue::Length(72).as_tags().is_empty());
        assert_eq!(RuleValue::tags(["a", "b"]).to_string(), "[a, b]");
    }
}
