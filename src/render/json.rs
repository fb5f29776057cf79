// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! JSON rendering for `.commitlintrc.json`.

use crate::error::{RenderError, Result};
use crate::policy::LintConfig;

/// File name commitlint picks up for a JSON config.
pub const JSON_FILE: &str = ".commitlintrc.json";

/// Render the policy as pretty-printed commitlint JSON.
///
/// JSON has no functions, so ignore predicates are dropped with a warning.
pub fn render_json(config: &LintConfig) -> Result<String> {
    if !config.ignores.is_empty() {
        tracing::warn!(
            "{} ignore predicate(s) cannot be expressed in JSON and were omitted; export as a module to keep them",
            config.ignores.len()
        );
    }

    let mut rendered =
        serde_json::to_string_pretty(&config.to_commitlint_json()).map_err(RenderError::from)?;
    rendered.push('\n');
    Ok(rendered)
}
