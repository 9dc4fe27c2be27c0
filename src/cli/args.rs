// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::error::{InputError, Result};

/// Commit staged changes, prefixing the message with the issues found in
/// the current branch name.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "commit")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Git commit with issue references taken from the branch name", long_about = None)]
pub struct Cli {
    /// The commit message
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Path to the config json file (default: .commit.json in the repository root)
    #[arg(short, long, value_name = "PATH", env = "COMMIT_CONFIG_PATH")]
    pub config_path: Option<PathBuf>,

    /// Print the commit message without making the actual commit
    #[arg(long)]
    pub dry_run: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// The user's commit message, rejecting a missing or empty one.
    pub fn message(&self) -> Result<&str> {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => Ok(message),
            _ => Err(InputError::EmptyMessage.into()),
        }
    }

    /// Check the arguments before touching the repository.
    pub fn validate(&self) -> Result<()> {
        if !self.print_config {
            self.message()?;
        }
        Ok(())
    }
}
