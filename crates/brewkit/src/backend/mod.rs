//! Backend abstraction over the operating system.
//!
//! The [`Backend`] trait is the only place where brewkit touches the host:
//! it reports the system name and architecture, checks whether paths exist
//! and runs processes. Everything else in the crate is a pure function of
//! what the backend returns.
//!
//! # Testing
//!
//! Use [`MockBackend`] to drive brewkit without a real Homebrew:
//!
//! ```
//! use brewkit::backend::{Backend, MockBackend};
//! use brewkit::platform::Host;
//! use brewkit::{Invocation, StdioOptions};
//! use std::path::Path;
//!
//! let mock = MockBackend::new(Host::new("Darwin", "arm64"));
//! mock.fail_command("/opt/homebrew/bin/brew tap foo/bar", 1);
//!
//! let tap = Invocation::new("/opt/homebrew/bin/brew").args(["tap", "foo/bar"]);
//! let code = mock.status(&tap, &StdioOptions::default(), Path::new("/")).unwrap();
//! assert_eq!(code, 1);
//! assert_eq!(mock.invocations(), vec![tap]);
//! ```

pub mod system;

use crate::error::Result;
use crate::platform::Host;
use crate::types::{Captured, Invocation, PackageKind, StdioOptions};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Backend trait for host operations.
///
/// This abstraction enables:
/// - Real process execution via [`system::SystemBackend`]
/// - In-memory behavior for tests via [`MockBackend`]
pub trait Backend: Send + Sync {
    /// System name and machine architecture of the host.
    fn host(&self) -> &Host;

    /// Whether a path exists on the host filesystem.
    fn path_exists(&self, path: &Path) -> bool;

    /// Run a command to completion and return its exit code.
    ///
    /// Streams set to `false` in `stdio` are detached. A program that
    /// cannot be found yields 127, like a shell would.
    fn status(&self, invocation: &Invocation, stdio: &StdioOptions, cwd: &Path) -> Result<i32>;

    /// Run a command with stdin closed and capture its output.
    fn capture(&self, invocation: &Invocation) -> Result<Captured>;
}

/// Get the default backend (real processes on this host).
pub fn default_backend() -> system::SystemBackend {
    system::SystemBackend::new()
}

// =============================================================================
// Mock backend
// =============================================================================

/// Mock backend for testing without touching the host.
///
/// Clones share state, so a test can hand one clone to a
/// [`Client`](crate::Client) and inspect the recorded invocations through
/// another.
#[derive(Debug, Clone)]
pub struct MockBackend {
    host: Host,
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    paths: HashSet<PathBuf>,
    installed: HashMap<PackageKind, Vec<String>>,
    list_failure: Option<String>,
    exit_codes: HashMap<String, i32>,
    runs: Vec<Run>,
    captures: Vec<Invocation>,
}

/// One command run through [`Backend::status`] on a [`MockBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// Command that was run
    pub invocation: Invocation,
    /// Streams the command inherited
    pub stdio: StdioOptions,
    /// Working directory
    pub cwd: PathBuf,
}

impl MockBackend {
    /// Create a mock for the given host with nothing installed.
    #[must_use]
    pub fn new(host: Host) -> Self {
        Self {
            host,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Mark a path as existing.
    pub fn add_path(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().paths.insert(path.into());
    }

    /// Set the names reported by `brew list` for a package kind.
    pub fn set_installed<I, S>(&self, kind: PackageKind, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        self.state.lock().unwrap().installed.insert(kind, names);
    }

    /// Make every `brew list` fail with the given standard error.
    pub fn fail_listing(&self, stderr: impl Into<String>) {
        self.state.lock().unwrap().list_failure = Some(stderr.into());
    }

    /// Make the command whose display form is `command` exit with `code`.
    ///
    /// Commands without a configured code exit with 0.
    pub fn fail_command(&self, command: impl Into<String>, code: i32) {
        self.state
            .lock()
            .unwrap()
            .exit_codes
            .insert(command.into(), code);
    }

    /// Commands run through [`Backend::status`], in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.runs().into_iter().map(|run| run.invocation).collect()
    }

    /// Commands run through [`Backend::status`] with their streams and
    /// working directory.
    pub fn runs(&self) -> Vec<Run> {
        self.state.lock().unwrap().runs.clone()
    }

    /// Display forms of the commands run through [`Backend::status`].
    pub fn commands(&self) -> Vec<String> {
        self.invocations().iter().map(ToString::to_string).collect()
    }

    /// Commands run through [`Backend::capture`], in order.
    pub fn captures(&self) -> Vec<Invocation> {
        self.state.lock().unwrap().captures.clone()
    }
}

impl Backend for MockBackend {
    fn host(&self) -> &Host {
        &self.host
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.state.lock().unwrap().paths.contains(path)
    }

    fn status(&self, invocation: &Invocation, stdio: &StdioOptions, cwd: &Path) -> Result<i32> {
        let mut state = self.state.lock().unwrap();
        state.runs.push(Run {
            invocation: invocation.clone(),
            stdio: *stdio,
            cwd: cwd.to_path_buf(),
        });
        Ok(state
            .exit_codes
            .get(&invocation.to_string())
            .copied()
            .unwrap_or(0))
    }

    fn capture(&self, invocation: &Invocation) -> Result<Captured> {
        let mut state = self.state.lock().unwrap();
        state.captures.push(invocation.clone());

        if let Some(stderr) = &state.list_failure {
            return Ok(Captured {
                code: 1,
                stdout: String::new(),
                stderr: stderr.clone(),
            });
        }

        // Answer `brew list --<kind> -1` from the configured package lists
        let kind = invocation.args.iter().find_map(|arg| match arg.as_str() {
            "--formulae" => Some(PackageKind::Formula),
            "--casks" => Some(PackageKind::Cask),
            _ => None,
        });
        let stdout = kind
            .and_then(|k| state.installed.get(&k))
            .map(|names| names.join("\n"))
            .unwrap_or_default();

        Ok(Captured {
            code: 0,
            stdout,
            stderr: String::new(),
        })
    }
}
