// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git commit helper that tags messages with issue references.
//!
//! The current branch name is scanned with a configurable regex, every match
//! is wrapped in configurable affixes and the result is prepended to the
//! user's commit message.
//!
//! # Example
//!
//! ```
//! use commit_issue::commit::MessageGenerator;
//! use commit_issue::config::CommitConfig;
//!
//! let config = CommitConfig {
//!     output_string_prefix: "[".to_string(),
//!     output_string_suffix: "]: ".to_string(),
//!     ..CommitConfig::default()
//! };
//! let generator = MessageGenerator::new(config).unwrap();
//!
//! assert_eq!(
//!     generator.generate("add-unit-tests-for-issues-27-and-30", "Prepare mocks"),
//!     "[#27, #30]: Prepare mocks"
//! );
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod ui;

// Re-exports for convenience
pub use config::CommitConfig;
pub use error::{Error, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
