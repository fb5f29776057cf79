// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitrc.
//!
//! This module finds the optional policy file, parses it and overlays it
//! on the built-in policy.

pub mod default;
mod loader;
mod schema;

pub use default::{example_config, DEFAULT_CONFIG_FILE};
pub use loader::{
    find_config_file, find_config_file_from, load_settings, load_settings_from, merge_policy,
    parse_policy_file,
};
pub use schema::*;
