// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Renderers turning a [`LintConfig`](crate::policy::LintConfig) into
//! files commitlint loads.

mod json;
mod module;

pub use json::{render_json, JSON_FILE};
pub use module::{render_module, MODULE_FILE};

use crate::error::Result;
use crate::policy::LintConfig;

/// Output format for `export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderTarget {
    /// ES module with ignore functions (default)
    #[default]
    Module,
    /// Plain JSON, without ignores
    Json,
}

impl RenderTarget {
    /// The conventional file name for this target.
    pub fn file_name(&self) -> &'static str {
        match self {
            RenderTarget::Module => MODULE_FILE,
            RenderTarget::Json => JSON_FILE,
        }
    }
}

/// Render the policy for the given target.
pub fn render(config: &LintConfig, target: RenderTarget) -> Result<String> {
    match target {
        RenderTarget::Module => render_module(config),
        RenderTarget::Json => render_json(config),
    }
}
