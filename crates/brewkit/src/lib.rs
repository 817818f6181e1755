//! # brewkit
//!
//! Small Rust library for driving the Homebrew command line.
//!
//! This crate provides functionality for:
//! - Resolving the Homebrew prefix for the host (Apple silicon, Intel, Linux)
//! - Listing installed formulae and casks
//! - Building `brew` commands as argument vectors
//! - Running commands in sequence with `&&` semantics
//!
//! ## Example
//!
//! ```no_run
//! use brewkit::{Action, Client, PackageKind, StdioOptions};
//! use std::path::Path;
//!
//! let client = Client::new();
//!
//! let installed = client.list_installed(PackageKind::Formula, false)?;
//! if !installed.iter().any(|name| name == "git") {
//!     let install = client.invocation(&Action::Install(PackageKind::Formula, "git".into()), false)?;
//!     let code = client.run(&[install], &StdioOptions::default(), Path::new("."))?;
//!     println!("brew install git exited with {code}");
//! }
//! # Ok::<(), brewkit::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod error;
pub mod platform;
pub mod types;

pub use error::{Error, Result};
pub use platform::{Host, Prefix};
pub use types::{Action, Captured, Invocation, PackageKind, StdioOptions};

use backend::Backend;
use std::path::Path;

/// Upstream Homebrew installer.
pub const INSTALL_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

/// High-level client for Homebrew operations.
///
/// The client wraps a backend and resolves every command against the
/// backend's host, so the same code paths run against a real system or a
/// [`backend::MockBackend`].
pub struct Client {
    backend: Box<dyn Backend>,
}

impl Client {
    /// Create a client that runs real processes on this host.
    pub fn new() -> Self {
        Self {
            backend: Box::new(backend::default_backend()),
        }
    }

    /// Create a client with a custom backend (useful for testing).
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    /// The host commands are resolved for.
    pub fn host(&self) -> &Host {
        self.backend.host()
    }

    // =========================================================================
    // Prefix
    // =========================================================================

    /// Resolve the Homebrew prefix for this host.
    pub fn prefix(&self, force_intel: bool, for_command: bool) -> Result<Prefix> {
        platform::resolve_prefix(self.backend.host(), force_intel, for_command)
    }

    /// Whether the `brew` executable exists at the resolved prefix.
    pub fn brew_exists(&self, force_intel: bool) -> Result<bool> {
        let prefix = self.prefix(force_intel, false)?;
        Ok(self.backend.path_exists(prefix.as_path()))
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Build the invocation for a brew action.
    pub fn invocation(&self, action: &Action, force_intel: bool) -> Result<Invocation> {
        Ok(self.prefix(force_intel, true)?.command().args(action.args()))
    }

    /// Build the invocation of the upstream Homebrew installer.
    ///
    /// The installer runs under `arch -x86_64` when the prefix for
    /// `force_intel` is translated.
    pub fn install_script(&self, force_intel: bool) -> Result<Invocation> {
        let script = format!("/bin/bash -c \"$(curl -fsSL {INSTALL_SCRIPT_URL})\"");
        let bash = ["/bin/bash".to_string(), "-c".to_string(), script];

        if self.prefix(force_intel, true)?.translated {
            Ok(Invocation::new("arch").arg("-x86_64").args(bash))
        } else {
            let [program, args @ ..] = bash;
            Ok(Invocation::new(program).args(args))
        }
    }

    /// Run commands in order, stopping at the first failure.
    ///
    /// Returns the exit code of the first command that failed, or of the
    /// last command if all succeeded (0 for an empty list).
    pub fn run(&self, invocations: &[Invocation], stdio: &StdioOptions, cwd: &Path) -> Result<i32> {
        let mut code = 0;
        for invocation in invocations {
            code = self.backend.status(invocation, stdio, cwd)?;
            if code != 0 {
                break;
            }
        }
        Ok(code)
    }

    // =========================================================================
    // Installed state
    // =========================================================================

    /// List installed packages of a kind, via `brew list --<kind> -1`.
    ///
    /// # Errors
    ///
    /// Returns `Error::ListFailed` with the captured standard error if the
    /// listing command exits non-zero.
    pub fn list_installed(&self, kind: PackageKind, force_intel: bool) -> Result<Vec<String>> {
        let list = self
            .prefix(force_intel, true)?
            .command()
            .args(["list", &format!("--{}", kind.list_flag()), "-1"]);

        let output = self.backend.capture(&list)?;
        if !output.success() {
            return Err(Error::ListFailed {
                kind,
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect())
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
