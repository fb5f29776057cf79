// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads commit messages so ignore predicates can be checked against
//! history.

mod repo;

pub use repo::{get_commit_range, Repository};
