// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ignore check results.

use crate::cli::args::OutputFormat;
use crate::error::{CheckError, Result};
use crate::policy::IgnorePredicate;
use console::style;

/// Outcome of checking one message against the ignore predicates.
#[derive(Debug, Clone)]
pub struct IgnoreCheck {
    /// Commit SHA if the message came from history.
    pub commit_sha: Option<String>,
    /// The raw message.
    pub message: String,
    /// The first predicate that matched.
    pub matched: Option<IgnorePredicate>,
}

impl IgnoreCheck {
    /// Whether the message is exempt from all rules.
    pub fn is_exempt(&self) -> bool {
        self.matched.is_some()
    }

    /// First line of the message.
    pub fn header(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Format the check for terminal output.
    pub fn format(&self) -> String {
        let status = if self.is_exempt() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        let mut output = status.to_string();
        if let Some(ref sha) = self.commit_sha {
            output.push_str(&format!(" {}", style(&sha[..7.min(sha.len())]).cyan()));
        }
        output.push_str(&format!(" {}", self.header()));

        match self.matched {
            Some(ref predicate) => output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(format!("exempt: {}", predicate)).dim()
            )),
            None => output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style("not exempt, all rules apply").dim()
            )),
        }

        output
    }
}

/// Results for every checked message.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    /// Individual checks in the order they were made.
    pub checks: Vec<IgnoreCheck>,
}

impl CheckReport {
    /// Number of exempt messages.
    pub fn exempt_count(&self) -> usize {
        self.checks.iter().filter(|c| c.is_exempt()).count()
    }

    /// Whether every checked message is exempt.
    pub fn all_exempt(&self) -> bool {
        !self.checks.is_empty() && self.exempt_count() == self.checks.len()
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    fn print_text(&self) {
        for check in &self.checks {
            println!("{}", check.format());
        }
    }

    fn print_json(&self) {
        let json = serde_json::json!({
            "all_exempt": self.all_exempt(),
            "checks": self.checks.iter().map(|c| {
                serde_json::json!({
                    "commit": c.commit_sha,
                    "header": c.header(),
                    "exempt": c.is_exempt(),
                    "predicate": c.matched.as_ref().map(|p| p.to_string()),
                })
            }).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        format!(
            "{} of {} message(s) exempt",
            self.exempt_count(),
            self.checks.len()
        )
    }

    /// Turn the report into the command outcome.
    pub fn into_result(self) -> Result<()> {
        if self.checks.is_empty() {
            return Err(CheckError::NothingToCheck.into());
        }
        if self.all_exempt() {
            Ok(())
        } else {
            Err(CheckError::NotExempt {
                count: self.checks.len() - self.exempt_count(),
                total: self.checks.len(),
            }
            .into())
        }
    }
}
