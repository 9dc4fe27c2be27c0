// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

use super::default::DEFAULT_CONFIG_FILE;
use super::schema::{CommitConfig, CommitConfigFile};

/// Where configuration bytes come from.
pub trait FileSource {
    /// Whether `path` refers to an existing file.
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file.
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Thin facade over `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl FileSource for FsSource {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Path of the config file at the root of a worktree.
pub fn default_config_path(workdir: &Path) -> PathBuf {
    workdir.join(DEFAULT_CONFIG_FILE)
}

/// Load configuration from a path on disk.
pub fn load_config_from(path: &Path) -> Result<CommitConfig, ConfigError> {
    read_commit_config(&FsSource, path)
}

/// Read the config at `path`, merge it over the defaults and validate it.
///
/// A missing file is not an error: the defaults are returned and the file
/// is never read.
pub fn read_commit_config(
    source: &dyn FileSource,
    path: &Path,
) -> Result<CommitConfig, ConfigError> {
    let file = if source.exists(path) {
        tracing::debug!("Loading configuration from: {:?}", path);

        let bytes = source.read(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_slice::<CommitConfigFile>(&bytes).map_err(|e| {
            ConfigError::ParseFailed {
                path: path.to_path_buf(),
                source: e,
            }
        })?
    } else {
        tracing::debug!("No configuration file at {:?}, using defaults", path);
        CommitConfigFile::default()
    };

    let config = file.into_config();
    config.issue_pattern()?;

    Ok(config)
}
