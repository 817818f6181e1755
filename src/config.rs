//! Config file loading
//!
//! A config file is a YAML (or JSON) list of tasks. Each task maps
//! directive names to their data:
//!
//! ```yaml
//! - defaults:
//!     homebrew:
//!       stdout: false
//! - install-brew: true
//! - tap: [homebrew/cask-fonts]
//! - brew: [git, wget]
//!   cask:
//!     casks: [firefox]
//!     force: true
//! ```
//!
//! Directives run in file order, including several directives in one task.
//!
//! Files are read as YAML 1.2: only `true` and `false` are booleans. Values
//! such as `yes`, `no`, `on` and `off` stay strings, so `install-brew: yes`
//! is rejected as invalid data rather than read as `true`.

use anyhow::{Context, Result, bail};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Directive that replaces the user defaults for the tasks after it.
pub const DEFAULTS_DIRECTIVE: &str = "defaults";

/// One directive occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub directive: String,
    pub data: Value,
}

#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub tasks: Vec<Task>,
}

impl Config {
    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let tasks = parse_tasks(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!("Loaded {} tasks from {}", tasks.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            tasks,
        })
    }
}

/// Flatten a config document into directive occurrences, in order.
pub fn parse_tasks(content: &str) -> Result<Vec<Task>> {
    let document: Value = serde_yaml::from_str(content).context("Could not parse YAML")?;

    let entries = match document {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(entries) => entries,
        _ => bail!("Expected a list of tasks at the top level"),
    };

    let mut tasks = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let Value::Mapping(actions) = entry else {
            bail!("Task {} is not a mapping of directives", index + 1);
        };
        for (name, data) in actions {
            let Value::String(directive) = name else {
                bail!("Task {} has a directive name that is not a string", index + 1);
            };
            tasks.push(Task { directive, data });
        }
    }

    Ok(tasks)
}
