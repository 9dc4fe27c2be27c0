// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Terminal output helpers.

use console::{style, Term};
use std::fmt::Display;

/// Wrap a message in red, if stderr supports colour.
pub fn red(msg: &str) -> String {
    style(msg).for_stderr().red().to_string()
}

/// Print an error to stderr in red.
pub fn print_error(err: &dyn Display) {
    let term = Term::stderr();
    let _ = term.write_line(&red(&err.to_string()));
}
