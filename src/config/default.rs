// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Name of the file `init` writes.
pub const DEFAULT_CONFIG_FILE: &str = "commitrc.toml";

/// Generate an example configuration file.
///
/// The document spells out the built-in policy, so loading it changes
/// nothing until it is edited.
pub fn example_config() -> &'static str {
    r#"# commitrc policy file
# Rules are commitlint rules, matched by exact name.
# severity: "off" | "warning" | "error" (or 0 | 1 | 2)
# applicability: "always" | "never"

parser_preset = "conventional-changelog-conventionalcommits"

# Header should be 72 characters or shorter
[rules.header-max-length]
severity = "error"
applicability = "always"
value = 72

# No leading/trailing whitespace in header
[rules.header-trim]
severity = "error"
applicability = "always"

# No empty subject
[rules.subject-empty]
severity = "error"
applicability = "never"

# Subject line should be lowercase
[rules.subject-case]
severity = "error"
applicability = "never"
value = ["sentence-case", "start-case", "pascal-case", "upper-case"]

# No full-stop at end of subject
[rules.subject-full-stop]
severity = "error"
applicability = "never"

# Body lines should be 72 characters or shorter
[rules.body-max-line-length]
severity = "error"
applicability = "always"
value = 72

# Empty line before body
[rules.body-leading-blank]
severity = "error"
applicability = "always"

# Commit type must be present
[rules.type-empty]
severity = "error"
applicability = "never"

# Commit type should be lowercase
[rules.type-case]
severity = "error"
applicability = "always"
value = "lower-case"

# Commit type allowlist
[rules.type-enum]
severity = "error"
applicability = "always"
value = ["build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test"]

# PR merges are allowed
[[ignores]]
contains = "Merge pull request #"

[output]
color = true
"#
}
