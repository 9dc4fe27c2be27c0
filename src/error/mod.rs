// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the commit helper.
//!
//! Errors are grouped by where they come from: the user's input, the
//! configuration file, and the git repository. Every error is terminal for
//! the current invocation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Failed to read config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Problems with what the user passed on the command line.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Commit message cannot be empty")]
    EmptyMessage,
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Issue regex can't be empty. Please update the config file.")]
    EmptyIssueRegex,

    #[error("invalid issue regex '{pattern}': {source}")]
    InvalidIssueRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Git repository errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: not a git repository (or any parent): {path}")]
    NotARepository { path: PathBuf },

    #[error("Failed to open repository: bare repositories have no worktree")]
    BareRepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to read current HEAD: {message}")]
    HeadFailed { message: String },

    #[error("Failed to read the status of the worktree: {message}")]
    StatusFailed { message: String },

    #[error("No staged changes to commit")]
    NoStagedChanges,

    #[error("Error loading {scope} config: {message}")]
    IdentityFailed { scope: String, message: String },

    #[error("No user.{field} found in local or global git config")]
    MissingIdentity { field: String },

    #[error("Failed to commit: {message}")]
    CommitFailed { message: String },
}

/// Result type alias for commit helper operations.
pub type Result<T> = std::result::Result<T, Error>;
