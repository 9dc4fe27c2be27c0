// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message composition.

use crate::config::CommitConfig;
use crate::error::ConfigError;

use super::issues::IssuePattern;

/// Separator placed between wrapped issues.
pub const ISSUE_SEPARATOR: &str = ", ";

/// Prefix the user's message with the issues found in the branch name.
///
/// Each issue becomes `issue_prefix + issue + issue_suffix`, the list is
/// joined with [`ISSUE_SEPARATOR`] and wrapped in the string prefix and
/// suffix. With no issues the message is returned unchanged.
pub fn compose_message(matches: &[String], config: &CommitConfig, user_message: &str) -> String {
    if matches.is_empty() {
        return user_message.to_string();
    }

    let issues = matches
        .iter()
        .map(|issue| {
            format!(
                "{}{}{}",
                config.output_issue_prefix, issue, config.output_issue_suffix
            )
        })
        .collect::<Vec<_>>()
        .join(ISSUE_SEPARATOR);

    format!(
        "{}{}{}{}",
        config.output_string_prefix, issues, config.output_string_suffix, user_message
    )
}

/// Generates commit messages for one configuration.
#[derive(Debug, Clone)]
pub struct MessageGenerator {
    config: CommitConfig,
    pattern: IssuePattern,
}

impl MessageGenerator {
    /// Create a generator, compiling the configured issue regex.
    pub fn new(config: CommitConfig) -> Result<Self, ConfigError> {
        let pattern = config.issue_pattern()?;
        Ok(Self { config, pattern })
    }

    /// Build the final message for `branch_name`.
    pub fn generate(&self, branch_name: &str, user_message: &str) -> String {
        let matches = self.pattern.extract(branch_name);
        tracing::debug!(
            "Found {} issue(s) in branch {:?} with /{}/",
            matches.len(),
            branch_name,
            self.pattern.as_str()
        );
        compose_message(&matches, &self.config, user_message)
    }
}
