//! Path resolution for config files and the base directory
//!
//! Paths given on the command line may use `~` and environment variables.
//! Commands run from the base directory, which defaults to the directory
//! holding the config file, so relative Brewfile paths resolve against it.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const ENV_CONFIG: &str = "DOTBREW_CONFIG";

/// Config file used when none is given
pub const DEFAULT_CONFIG: &str = "install.conf.yaml";

/// Expand ~ and environment variables in a path string.
///
/// # Examples
///
/// ```ignore
/// let config = paths::expand("~/dotfiles/install.conf.yaml");
/// let brewfile = paths::expand("$DOTFILES/Brewfile");
/// ```
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

/// Resolve the directory commands run from.
///
/// An explicit directory wins. Otherwise the config file's own directory is
/// used, or the current directory for a bare file name. The result is
/// canonical, so the directory must exist.
pub fn base_directory(explicit: Option<&str>, config_path: &Path) -> Result<PathBuf> {
    let dir = match explicit {
        Some(dir) => expand(dir),
        None => match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::env::current_dir().context("Could not determine current directory")?,
        },
    };

    let dir = dir
        .canonicalize()
        .with_context(|| format!("Base directory {} does not exist", dir.display()))?;
    log::debug!("Using base directory {}", dir.display());
    Ok(dir)
}

// ============================================================================
// Tests
// ============================================================================
