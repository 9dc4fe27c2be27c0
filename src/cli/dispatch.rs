// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit flow: config, HEAD, message, commit.

use std::io::Write;

use crate::commit::MessageGenerator;
use crate::config::{default_config_path, read_commit_config, FileSource, FsSource};
use crate::error::{GitError, Result};
use crate::git::{Git2Backend, HeadState, VcsBackend};

use super::args::Cli;

/// Run the CLI against the repository containing the current directory.
pub fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    let backend = Git2Backend::open_current()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run_with(&cli, &backend, &FsSource, &mut out)
}

/// Run the CLI with explicit collaborators.
///
/// Nothing is written to the repository unless every earlier step succeeds.
pub fn run_with(
    cli: &Cli,
    backend: &dyn VcsBackend,
    source: &dyn FileSource,
    out: &mut dyn Write,
) -> Result<()> {
    let config_path = cli
        .config_path
        .clone()
        .unwrap_or_else(|| default_config_path(backend.workdir()));

    if cli.print_config {
        let config = read_commit_config(source, &config_path)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        return Ok(());
    }

    let user_message = cli.message()?;
    let config = read_commit_config(source, &config_path)?;

    let message = match backend.head()? {
        HeadState::Branch(branch) => MessageGenerator::new(config)?.generate(&branch, user_message),
        other => {
            tracing::debug!("HEAD is {}, leaving the message unchanged", other);
            user_message.to_string()
        }
    };

    if cli.dry_run {
        tracing::debug!("Dry run, not committing");
    } else {
        commit_changes(backend, &message)?;
    }

    writeln!(out, "{}", message)?;
    Ok(())
}

fn commit_changes(backend: &dyn VcsBackend, message: &str) -> Result<()> {
    if !backend.has_staged_changes()? {
        return Err(GitError::NoStagedChanges.into());
    }

    let author = backend.author()?;
    tracing::debug!("Committing as {} <{}>", author.name, author.email);

    backend.commit(message, &author)?;
    Ok(())
}
