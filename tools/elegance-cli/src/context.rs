//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::{StorefrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration.
    pub config: StorefrontConfig,
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Build the context, loading the config file found by [`locate_config`].
    pub fn load(cwd: PathBuf, config_path: Option<PathBuf>, output: Output) -> Result<Self> {
        let config = match config_path {
            Some(ref path) => StorefrontConfig::load(path)?,
            None => StorefrontConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

/// Working directory and the config file to use: the explicit path if
/// given, otherwise the nearest one found.
pub fn locate_config(explicit: Option<&str>) -> Result<(PathBuf, Option<PathBuf>)> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config_path = match explicit {
        Some(path) => Some(resolve(&cwd, path)),
        None => find_config(&cwd),
    };
    Ok((cwd, config_path))
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

/// Find the nearest config file, walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}
