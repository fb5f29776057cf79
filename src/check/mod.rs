// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Checking messages against the ignore predicates.
//!
//! Only exemption is decided here. Whether a non-exempt message breaks a
//! rule is commitlint's call.

mod report;

pub use report::{CheckReport, IgnoreCheck};

use crate::error::Result;
use crate::git;
use crate::policy::LintConfig;

/// Check a single raw message.
pub fn check_message(config: &LintConfig, message: &str) -> IgnoreCheck {
    IgnoreCheck {
        commit_sha: None,
        message: message.to_string(),
        matched: config.matching_ignore(message).cloned(),
    }
}

/// Check commits named by a reference or an `a..b` range.
pub fn check_commits(config: &LintConfig, target: &str) -> Result<CheckReport> {
    let checks = git::get_commit_range(target)?
        .into_iter()
        .map(|(sha, message)| IgnoreCheck {
            commit_sha: Some(sha),
            ..check_message(config, &message)
        })
        .collect();

    Ok(CheckReport { checks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::IgnorePredicate;

    #[test]
    fn test_check_message_exempt() {
        let config = LintConfig::default();
        let check = check_message(&config, "Merge pull request #123 from org/branch");
        assert!(check.is_exempt());
        assert_eq!(check.matched, Some(IgnorePredicate::merge_pull_request()));
    }

    #[test]
    fn test_check_message_not_exempt() {
        let config = LintConfig::default();
        let check = check_message(&config, "fix: correct off-by-one error");
        assert!(!check.is_exempt());
    }
}
