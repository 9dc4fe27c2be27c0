// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! The command flow only talks to git through [`VcsBackend`]; [`Git2Backend`]
//! is the implementation backed by libgit2.

mod backend;
mod repo;

pub use backend::{Author, HeadState, PartialIdentity, VcsBackend};
pub use repo::Git2Backend;
