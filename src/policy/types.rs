// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit types accepted by the `type-enum` rule.

use serde::{Deserialize, Serialize};

/// Commit type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Build,
    Chore,
    Ci,
    Docs,
    Feat,
    Fix,
    Perf,
    Refactor,
    Revert,
    Style,
    Test,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Build => "build",
            CommitType::Chore => "chore",
            CommitType::Ci => "ci",
            CommitType::Docs => "docs",
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Perf => "perf",
            CommitType::Refactor => "refactor",
            CommitType::Revert => "revert",
            CommitType::Style => "style",
            CommitType::Test => "test",
        }
    }

    /// Get a description of the commit type.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Build => "Build system or dependency changes",
            CommitType::Chore => "Build process or auxiliary tool changes",
            CommitType::Ci => "CI configuration changes",
            CommitType::Docs => "Documentation only changes",
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Perf => "Performance improvements",
            CommitType::Refactor => "Code refactoring (no feature/fix)",
            CommitType::Revert => "Reverting a previous commit",
            CommitType::Style => "Code style changes (formatting, whitespace)",
            CommitType::Test => "Adding or updating tests",
        }
    }

    /// Get all commit types, in the order the allowlist declares them.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Build,
            CommitType::Chore,
            CommitType::Ci,
            CommitType::Docs,
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Perf,
            CommitType::Refactor,
            CommitType::Revert,
            CommitType::Style,
            CommitType::Test,
        ]
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    /// Exact, case-sensitive match: the linter compares type tags by identity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
