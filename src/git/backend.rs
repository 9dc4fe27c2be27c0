// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The version-control capability used by the commit flow.

use std::fmt;
use std::path::Path;

use crate::error::{GitError, Result};

/// What HEAD currently points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadState {
    /// A local branch, by short name. Also used for unborn branches.
    Branch(String),
    /// A tag, by short name.
    Tag(String),
    /// A commit id with no ref in between.
    Detached(String),
}

impl fmt::Display for HeadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadState::Branch(name) => write!(f, "branch {}", name),
            HeadState::Tag(name) => write!(f, "tag {}", name),
            HeadState::Detached(id) => write!(f, "detached HEAD at {}", id),
        }
    }
}

/// Commit author identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// `user.name` / `user.email` as read from a single config level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Author {
    /// Pick each field from `local`, falling back to `global` when the local
    /// value is missing or empty.
    pub fn resolve(local: PartialIdentity, global: PartialIdentity) -> Result<Self> {
        fn pick(local: Option<String>, global: Option<String>, field: &str) -> Result<String> {
            local
                .filter(|v| !v.is_empty())
                .or_else(|| global.filter(|v| !v.is_empty()))
                .ok_or_else(|| {
                    GitError::MissingIdentity {
                        field: field.to_string(),
                    }
                    .into()
                })
        }

        Ok(Self {
            name: pick(local.name, global.name, "name")?,
            email: pick(local.email, global.email, "email")?,
        })
    }
}

/// Operations the commit flow needs from a repository.
pub trait VcsBackend {
    /// Root of the working tree.
    fn workdir(&self) -> &Path;

    /// Resolve HEAD.
    fn head(&self) -> Result<HeadState>;

    /// Whether the index differs from HEAD.
    fn has_staged_changes(&self) -> Result<bool>;

    /// Author identity from local, then global configuration.
    fn author(&self) -> Result<Author>;

    /// Commit the index with `message`, timestamped now. Returns the new id.
    fn commit(&self, message: &str, author: &Author) -> Result<String>;
}
