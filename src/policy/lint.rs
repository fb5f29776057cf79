// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The root lint configuration and the project's built-in policy.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use super::ignore::IgnorePredicate;
use super::rule::{RuleConfig, RuleValue};
use super::severity::Applicability;
use super::types::CommitType;
use super::vocabulary::{self as names, is_known_case, is_known_rule};

/// Grammar commitlint uses to split headers, bodies and footers.
pub const DEFAULT_PARSER_PRESET: &str = "conventional-changelog-conventionalcommits";

/// Limit for the header and for each body line.
pub const MAX_LINE_LENGTH: usize = 72;

/// Subject casings the policy rejects.
pub const DISALLOWED_SUBJECT_CASES: &[&str] =
    &["sentence-case", "start-case", "pascal-case", "upper-case"];

/// Case required for the commit type.
pub const REQUIRED_TYPE_CASE: &str = "lower-case";

/// Configuration handed to the commit linter.
///
/// Built once per process and treated as read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Commit-message grammar identifier.
    pub parser_preset: String,

    /// Rules keyed by their exact commitlint name.
    pub rules: BTreeMap<String, RuleConfig>,

    /// Exemptions, checked in order before any rule.
    pub ignores: Vec<IgnorePredicate>,
}

impl Default for LintConfig {
    fn default() -> Self {
        let mut rules = BTreeMap::new();
        let mut declare = |name: &str, rule: RuleConfig| {
            rules.insert(name.to_string(), rule);
        };

        declare(
            names::HEADER_MAX_LENGTH,
            RuleConfig::error(Applicability::Always)
                .with_value(RuleValue::Length(MAX_LINE_LENGTH)),
        );
        declare(names::HEADER_TRIM, RuleConfig::error(Applicability::Always));
        declare(names::SUBJECT_EMPTY, RuleConfig::error(Applicability::Never));
        declare(
            names::SUBJECT_CASE,
            RuleConfig::error(Applicability::Never)
                .with_value(RuleValue::tags(DISALLOWED_SUBJECT_CASES.iter().copied())),
        );
        declare(
            names::SUBJECT_FULL_STOP,
            RuleConfig::error(Applicability::Never),
        );
        declare(
            names::BODY_MAX_LINE_LENGTH,
            RuleConfig::error(Applicability::Always)
                .with_value(RuleValue::Length(MAX_LINE_LENGTH)),
        );
        declare(
            names::BODY_LEADING_BLANK,
            RuleConfig::error(Applicability::Always),
        );
        declare(names::TYPE_EMPTY, RuleConfig::error(Applicability::Never));
        declare(
            names::TYPE_CASE,
            RuleConfig::error(Applicability::Always)
                .with_value(RuleValue::Tag(REQUIRED_TYPE_CASE.to_string())),
        );
        declare(
            names::TYPE_ENUM,
            RuleConfig::error(Applicability::Always)
                .with_value(RuleValue::tags(CommitType::all().iter().map(|t| t.as_str()))),
        );

        Self {
            parser_preset: DEFAULT_PARSER_PRESET.to_string(),
            rules,
            ignores: vec![IgnorePredicate::merge_pull_request()],
        }
    }
}

impl LintConfig {
    /// Look a rule up by its exact name.
    pub fn rule(&self, name: &str) -> Option<&RuleConfig> {
        self.rules.get(name)
    }

    /// Whether the message is exempt from all rules.
    pub fn is_ignored(&self, message: &str) -> bool {
        self.matching_ignore(message).is_some()
    }

    /// The first ignore predicate matching the message.
    pub fn matching_ignore(&self, message: &str) -> Option<&IgnorePredicate> {
        self.ignores.iter().find(|p| p.matches(message))
    }

    /// Rule names commitlint does not ship.
    pub fn unknown_rules(&self) -> Vec<&str> {
        self.rules
            .keys()
            .map(String::as_str)
            .filter(|name| !is_known_rule(name))
            .collect()
    }

    /// Human-readable notes about names the linter will not understand.
    ///
    /// Nothing here is rejected; the linter owns validation.
    pub fn vocabulary_warnings(&self) -> Vec<String> {
        let mut warnings: Vec<String> = self
            .unknown_rules()
            .into_iter()
            .map(|name| format!("rule '{}' is not a known commitlint rule", name))
            .collect();

        for (name, rule) in &self.rules {
            if !name.ends_with("-case") {
                continue;
            }
            if let Some(value) = &rule.value {
                for tag in value.as_tags() {
                    if !is_known_case(tag) {
                        warnings.push(format!("rule '{}' uses unknown case '{}'", name, tag));
                    }
                }
            }
        }

        warnings
    }

    /// The configuration object in commitlint's JSON shape.
    ///
    /// Ignore predicates are functions in commitlint and cannot be
    /// represented here; see [`crate::render::render_module`].
    pub fn to_commitlint_json(&self) -> Value {
        let rules: Map<String, Value> = self
            .rules
            .iter()
            .map(|(name, rule)| (name.clone(), rule.to_commitlint_json()))
            .collect();

        json!({
            "parserPreset": self.parser_preset,
            "rules": rules,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::severity::Severity;
    use std::collections::BTreeSet;

    fn tag_set(rule: &RuleConfig) -> BTreeSet<&str> {
        rule.value
            .as_ref()
            .map(|v| v.as_tags().into_iter().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_every_policy_rule_declared() {
        let config = LintConfig::default();
        for name in names::POLICY_RULES {
            assert!(config.rule(name).is_some(), "missing rule {}", name);
        }
        assert_eq!(config.rules.len(), names::POLICY_RULES.len());
    }

    #[test]
    fn test_line_lengths() {
        let config = LintConfig::default();
        let header = config.rule(names::HEADER_MAX_LENGTH).unwrap();
        let body = config.rule(names::BODY_MAX_LINE_LENGTH).unwrap();
        assert_eq!(header.value.as_ref().and_then(RuleValue::as_length), Some(72));
        assert_eq!(body.value.as_ref().and_then(RuleValue::as_length), Some(72));
    }

    #[test]
    fn test_type_enum_exact_set() {
        let config = LintConfig::default();
        let expected: BTreeSet<&str> = [
            "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style",
            "test",
        ]
        .into_iter()
        .collect();
        let rule = config.rule(names::TYPE_ENUM).unwrap();
        assert_eq!(tag_set(rule), expected);
        assert_eq!(rule.value.as_ref().unwrap().as_tags().len(), expected.len());
        assert_eq!(rule.applicability, Applicability::Always);
    }

    #[test]
    fn test_subject_case_exact_set() {
        let config = LintConfig::default();
        let expected: BTreeSet<&str> = ["sentence-case", "start-case", "pascal-case", "upper-case"]
            .into_iter()
            .collect();
        let rule = config.rule(names::SUBJECT_CASE).unwrap();
        assert_eq!(tag_set(rule), expected);
        assert_eq!(rule.applicability, Applicability::Never);
    }

    #[test]
    fn test_applicability_per_rule() {
        let config = LintConfig::default();
        let never = [
            names::SUBJECT_EMPTY,
            names::SUBJECT_CASE,
            names::SUBJECT_FULL_STOP,
            names::TYPE_EMPTY,
        ];
        for (name, rule) in &config.rules {
            let expected = if never.contains(&name.as_str()) {
                Applicability::Never
            } else {
                Applicability::Always
            };
            assert_eq!(rule.applicability, expected, "rule {}", name);
        }
    }

    #[test]
    fn test_type_case_is_lower_case() {
        let config = LintConfig::default();
        let rule = config.rule(names::TYPE_CASE).unwrap();
        assert_eq!(rule.value, Some(RuleValue::Tag("lower-case".to_string())));
    }

    #[test]
    fn test_all_severities_are_error() {
        let config = LintConfig::default();
        assert!(config
            .rules
            .values()
            .all(|rule| rule.severity == Severity::Error));
    }

    #[test]
    fn test_ignore_merge_pull_request() {
        let config = LintConfig::default();
        assert!(config.is_ignored("Merge pull request #123 from org/branch"));
        assert!(!config.is_ignored("fix: correct off-by-one error"));
    }

    #[test]
    fn test_matching_ignore_returns_first() {
        let mut config = LintConfig::default();
        config.ignores.push(IgnorePredicate::pattern("^Merge").unwrap());
        let hit = config
            .matching_ignore("Merge pull request #9 from org/x")
            .unwrap();
        assert_eq!(hit, &IgnorePredicate::merge_pull_request());
    }

    #[test]
    fn test_parser_preset() {
        assert_eq!(
            LintConfig::default().parser_preset,
            "conventional-changelog-conventionalcommits"
        );
    }

    #[test]
    fn test_default_has_no_vocabulary_warnings() {
        let config = LintConfig::default();
        assert!(config.unknown_rules().is_empty());
        assert!(config.vocabulary_warnings().is_empty());
    }

    #[test]
    fn test_vocabulary_warnings() {
        let mut config = LintConfig::default();
        config.rules.insert(
            "header-max-width".to_string(),
            RuleConfig::error(Applicability::Always).with_value(RuleValue::Length(80)),
        );
        config.rules.insert(
            "scope-case".to_string(),
            RuleConfig::error(Applicability::Always)
                .with_value(RuleValue::Tag("lowercase".to_string())),
        );
        let warnings = config.vocabulary_warnings();
        assert_eq!(config.unknown_rules(), vec!["header-max-width"]);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[1].contains("lowercase"));
    }

    #[test]
    fn test_commitlint_json_shape() {
        let json = LintConfig::default().to_commitlint_json();
        assert_eq!(
            json["parserPreset"],
            "conventional-changelog-conventionalcommits"
        );
        assert_eq!(json["rules"]["header-max-length"], json!([2, "always", 72]));
        assert_eq!(json["rules"]["header-trim"], json!([2, "always"]));
        assert_eq!(json["rules"]["type-case"], json!([2, "always", "lower-case"]));
        assert!(json.get("ignores").is_none());
    }
}
