// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! `commit` - git commit with issue references from the branch name.

use clap::Parser;
use commit_issue::cli::{run, Cli};
use commit_issue::ui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = run(cli) {
        ui::print_error(&e);
        std::process::exit(1);
    }
}

/// Set up logging/tracing. Everything goes to stderr; stdout is the message.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("commit_issue=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if debug {
        tracing::debug!(
            "commit {}: debug logging enabled",
            commit_issue::version::version_string()
        );
    }
}
