// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module.
//!
//! Handles loading the optional `.commit.json` file and merging it over the
//! compiled-in defaults.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, DEFAULT_CONFIG_FILE};
pub use loader::{default_config_path, load_config_from, read_commit_config, FileSource, FsSource};
pub use schema::*;
