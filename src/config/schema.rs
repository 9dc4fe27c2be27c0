// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the settings that can be loaded from `.commit.json`.

use serde::{Deserialize, Serialize};

use super::default::{
    DEFAULT_ISSUE_REGEX, DEFAULT_OUTPUT_ISSUE_PREFIX, DEFAULT_OUTPUT_ISSUE_SUFFIX,
    DEFAULT_OUTPUT_STRING_PREFIX, DEFAULT_OUTPUT_STRING_SUFFIX,
};
use crate::commit::IssuePattern;
use crate::error::ConfigError;

/// Settings for turning a branch name into a commit message prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommitConfig {
    /// Regex for issue references in the branch name.
    pub issue_regex: String,

    /// Prefix before each issue in the commit message.
    pub output_issue_prefix: String,

    /// Suffix after each issue in the commit message.
    pub output_issue_suffix: String,

    /// Prefix before the list of issues.
    pub output_string_prefix: String,

    /// Suffix after the list of issues, right before the user's message.
    pub output_string_suffix: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            issue_regex: DEFAULT_ISSUE_REGEX.to_string(),
            output_issue_prefix: DEFAULT_OUTPUT_ISSUE_PREFIX.to_string(),
            output_issue_suffix: DEFAULT_OUTPUT_ISSUE_SUFFIX.to_string(),
            output_string_prefix: DEFAULT_OUTPUT_STRING_PREFIX.to_string(),
            output_string_suffix: DEFAULT_OUTPUT_STRING_SUFFIX.to_string(),
        }
    }
}

impl CommitConfig {
    /// Compile the issue regex.
    pub fn issue_pattern(&self) -> Result<IssuePattern, ConfigError> {
        IssuePattern::new(&self.issue_regex)
    }
}

/// The config file as written on disk.
///
/// Every field is optional; a missing or `null` field keeps its default.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitConfigFile {
    pub issue_regex: Option<String>,
    pub output_issue_prefix: Option<String>,
    pub output_issue_suffix: Option<String>,
    pub output_string_prefix: Option<String>,
    pub output_string_suffix: Option<String>,
}

impl CommitConfigFile {
    /// Merge the file's values over the defaults.
    pub fn into_config(self) -> CommitConfig {
        let defaults = CommitConfig::default();

        CommitConfig {
            issue_regex: self.issue_regex.unwrap_or(defaults.issue_regex),
            output_issue_prefix: self
                .output_issue_prefix
                .unwrap_or(defaults.output_issue_prefix),
            output_issue_suffix: self
                .output_issue_suffix
                .unwrap_or(defaults.output_issue_suffix),
            output_string_prefix: self
                .output_string_prefix
                .unwrap_or(defaults.output_string_prefix),
            output_string_suffix: self
                .output_string_suffix
                .unwrap_or(defaults.output_string_suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let file: CommitConfigFile = serde_json::from_str("{}").unwrap();
        assert_eq!(file.into_config(), CommitConfig::default());
    }

    #[test]
    fn test_null_fields_keep_defaults() {
        let json = r#"{"issueRegex": null, "outputIssuePrefix": "(", "outputStringSuffix": null}"#;
        let config = serde_json::from_str::<CommitConfigFile>(json)
            .unwrap()
            .into_config();

        assert_eq!(config.issue_regex, "[0-9]+");
        assert_eq!(config.output_issue_prefix, "(");
        assert_eq!(config.output_string_suffix, ": ");
    }

    #[test]
    fn test_empty_strings_override_defaults() {
        let json = r#"{"outputIssuePrefix": "", "outputStringSuffix": ""}"#;
        let config = serde_json::from_str::<CommitConfigFile>(json)
            .unwrap()
            .into_config();

        assert_eq!(config.output_issue_prefix, "");
        assert_eq!(config.output_string_suffix, "");
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(CommitConfig::default()).unwrap();
        assert_eq!(value["issueRegex"], "[0-9]+");
        assert_eq!(value["outputIssuePrefix"], "#");
        assert_eq!(value["outputStringSuffix"], ": ");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{"issueRegex": "JIRA-[0-9]+", "colour": true}"#;
        let config = serde_json::from_str::<CommitConfigFile>(json)
            .unwrap()
            .into_config();
        assert_eq!(config.issue_regex, "JIRA-[0-9]+");
    }
}
