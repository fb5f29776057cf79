// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures that can be loaded from commitrc.toml.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::policy::{IgnorePredicate, LintConfig, RuleConfig};

/// Contents of a policy file, overlaid on the built-in policy.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PolicyFile {
    /// Replacement parser preset.
    pub parser_preset: Option<String>,

    /// Rules to add or replace, keyed by commitlint name.
    pub rules: BTreeMap<String, RuleConfig>,

    /// Extra ignore predicates.
    pub ignores: Vec<IgnorePredicate>,

    /// Drop the built-in ignore predicates instead of appending to them.
    pub replace_ignores: bool,

    /// Output settings.
    pub output: OutputConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Whether to use colors.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// The effective settings for one run.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// The policy after overlaying the policy file.
    pub policy: LintConfig,

    /// Output settings.
    pub output: OutputConfig,

    /// The file the settings came from, if any.
    pub source: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_settings()
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_settings_from(path)
    }
}
