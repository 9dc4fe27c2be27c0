// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::CommitConfig;

/// Name of the config file looked up at the repository root.
pub const DEFAULT_CONFIG_FILE: &str = ".commit.json";

pub(crate) const DEFAULT_ISSUE_REGEX: &str = "[0-9]+";
pub(crate) const DEFAULT_OUTPUT_ISSUE_PREFIX: &str = "#";
pub(crate) const DEFAULT_OUTPUT_ISSUE_SUFFIX: &str = "";
pub(crate) const DEFAULT_OUTPUT_STRING_PREFIX: &str = "";
pub(crate) const DEFAULT_OUTPUT_STRING_SUFFIX: &str = ": ";

/// Get the default configuration.
pub fn default_config() -> CommitConfig {
    CommitConfig::default()
}
