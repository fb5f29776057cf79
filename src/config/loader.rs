// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{ConfigError, PolicyError, Result};
use crate::policy::LintConfig;
use std::path::{Path, PathBuf};

use super::schema::{PolicyFile, Settings};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["commitrc.toml", ".commitrc.toml", ".config/commitrc.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = first_existing(&current) {
            return Some(found);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(found) = first_existing(&home) {
            return Some(found);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let xdg = config_dir.join("commitrc").join("config.toml");
        if xdg.exists() {
            return Some(xdg);
        }
    }

    None
}

fn first_existing(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load settings from the default locations.
pub fn load_settings() -> Result<Settings> {
    match find_config_file() {
        Some(path) => load_settings_from(&path),
        None => {
            tracing::debug!("No configuration file found, using built-in policy");
            Ok(Settings::default())
        }
    }
}

/// Load settings from a specific path.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(PolicyError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        PolicyError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    let file = parse_policy_file(&content)?;
    let output = file.output.clone();
    let policy = merge_policy(LintConfig::default(), file);

    for warning in policy.vocabulary_warnings() {
        tracing::warn!("{}: {}", path.display(), warning);
    }

    Ok(Settings {
        policy,
        output,
        source: Some(path.to_path_buf()),
    })
}

/// Parse a policy file from a TOML string.
pub fn parse_policy_file(content: &str) -> Result<PolicyFile> {
    let file: PolicyFile = toml::from_str(content).map_err(|e| {
        PolicyError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    if let Some(preset) = &file.parser_preset {
        if preset.trim().is_empty() {
            return Err(PolicyError::Config(ConfigError::InvalidValue {
                key: "parser_preset".to_string(),
                message: "must not be empty".to_string(),
            }));
        }
    }

    Ok(file)
}

/// Overlay a policy file on a base policy.
///
/// File rules replace base rules of the same name. File ignores are
/// appended after the base ones, skipping exact duplicates, unless the
/// file sets `replace_ignores`.
pub fn merge_policy(base: LintConfig, file: PolicyFile) -> LintConfig {
    let mut rules = base.rules;
    for (name, rule) in file.rules {
        if rules.contains_key(&name) {
            tracing::debug!("Overriding rule {}", name);
        }
        rules.insert(name, rule);
    }

    let ignores = if file.replace_ignores {
        file.ignores
    } else {
        let mut merged = base.ignores;
        for predicate in file.ignores {
            if !merged.contains(&predicate) {
                merged.push(predicate);
            }
        }
        merged
    };

    LintConfig {
        parser_preset: file.parser_preset.unwrap_or(base.parser_preset),
        rules,
        ignores,
    }
}
