// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message generation from the branch name.

mod issues;
mod message;

pub use issues::IssuePattern;
pub use message::{compose_message, MessageGenerator, ISSUE_SEPARATOR};
