// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Issue reference extraction.

use regex::Regex;

use crate::error::ConfigError;

/// A compiled issue regex.
#[derive(Debug, Clone)]
pub struct IssuePattern {
    regex: Regex,
}

impl IssuePattern {
    /// Compile a pattern. Empty patterns are rejected.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        if pattern.is_empty() {
            return Err(ConfigError::EmptyIssueRegex);
        }

        let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidIssueRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;

        Ok(Self { regex })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// All non-overlapping matches in `branch_name`, left to right.
    pub fn extract(&self, branch_name: &str) -> Vec<String> {
        self.regex
            .find_iter(branch_name)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
