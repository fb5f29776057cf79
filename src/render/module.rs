// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! ES module rendering for `.commitlint.config.mjs`.

use handlebars::Handlebars;
use serde_json::json;

use crate::error::{RenderError, Result};
use crate::policy::{IgnorePredicate, LintConfig};

/// File name commitlint picks up for an ES module config.
pub const MODULE_FILE: &str = ".commitlint.config.mjs";

const MODULE_TEMPLATE: &str = r#"/* [commitlint](https://github.com/conventional-changelog/commitlint) configuration */
/* Generated by commitrc {{version}}. Edit commitrc.toml and re-export instead. */
export default {
    parserPreset: {{preset}},
    rules: {
{{#each rules}}
        {{this.name}}: {{this.entry}},
{{/each}}
    },
    ignores: [
{{#each ignores}}
        {{this}},
{{/each}}
    ],
};
"#;

/// Render the policy as an ES module exporting the commitlint config.
///
/// `matches` predicates are emitted as `new RegExp(...)`, with a leading
/// inline flag group moved into the flags argument.
pub fn render_module(config: &LintConfig) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .register_template_string("module", MODULE_TEMPLATE)
        .map_err(|e| RenderError::Template {
            message: e.to_string(),
        })?;

    let rules = config
        .rules
        .iter()
        .map(|(name, rule)| -> Result<serde_json::Value> {
            Ok(json!({
                "name": js_string(name)?,
                "entry": serde_json::to_string(&rule.to_commitlint_json()).map_err(RenderError::from)?,
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    let ignores = config
        .ignores
        .iter()
        .map(ignore_function)
        .collect::<Result<Vec<_>>>()?;

    let data = json!({
        "version": crate::version::VERSION,
        "preset": js_string(&config.parser_preset)?,
        "rules": rules,
        "ignores": ignores,
    });

    let rendered = handlebars
        .render("module", &data)
        .map_err(RenderError::from)?;
    tracing::debug!(
        "Rendered module with {} rules, {} ignores",
        config.rules.len(),
        config.ignores.len()
    );
    Ok(rendered)
}

/// A predicate as a JavaScript arrow function over the raw message.
fn ignore_function(predicate: &IgnorePredicate) -> Result<String> {
    Ok(match predicate {
        IgnorePredicate::Contains(needle) => {
            format!("(message) => message.includes({})", js_string(needle)?)
        }
        IgnorePredicate::Matches(pattern) => match pattern.to_js() {
            (source, "") => format!(
                "(message) => new RegExp({}).test(message)",
                js_string(source)?
            ),
            (source, flags) => format!(
                "(message) => new RegExp({}, {}).test(message)",
                js_string(source)?,
                js_string(flags)?
            ),
        },
    })
}

/// A JSON string literal, which is also a valid JavaScript string literal.
fn js_string(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value).map_err(RenderError::from)?)
}
