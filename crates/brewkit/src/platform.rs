//! Host detection and Homebrew prefix resolution.
//!
//! Homebrew lives in a different place depending on the host:
//!
//! | OS     | Arch   | force-intel | Prefix                                   |
//! |--------|--------|-------------|------------------------------------------|
//! | Darwin | arm64  | no          | `/opt/homebrew/bin/brew`                 |
//! | Darwin | arm64  | yes         | `arch -x86_64 /usr/local/bin/brew`       |
//! | Darwin | other  | any         | `/usr/local/bin/brew`                    |
//! | Linux  | any    | any         | `/home/linuxbrew/.linuxbrew/bin/brew`    |
//!
//! The `arch -x86_64` wrapper is only part of the prefix when it is used to
//! build a command. When the prefix is used as a filesystem path (to check
//! whether Homebrew is installed) the bare path is returned.
//!
//! # Example
//!
//! ```
//! use brewkit::platform::{Host, resolve_prefix};
//!
//! let host = Host::new("Darwin", "arm64");
//! let prefix = resolve_prefix(&host, true, true).unwrap();
//! assert_eq!(prefix.to_string(), "arch -x86_64 /usr/local/bin/brew");
//! ```

use crate::error::{Error, Result};
use crate::types::Invocation;
use std::fmt;
use std::path::Path;

/// Homebrew on Apple silicon.
pub const APPLE_SILICON_BREW: &str = "/opt/homebrew/bin/brew";

/// Homebrew on Intel Macs (and under Rosetta on Apple silicon).
pub const INTEL_BREW: &str = "/usr/local/bin/brew";

/// Homebrew on Linux.
pub const LINUXBREW: &str = "/home/linuxbrew/.linuxbrew/bin/brew";

/// Program used to run commands under architecture translation.
const ARCH_PROGRAM: &str = "arch";
const ARCH_X86_64: &str = "-x86_64";

/// System name and machine architecture, `uname`-style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    /// System name (`Darwin`, `Linux`, ...)
    pub sysname: String,
    /// Machine architecture (`arm64`, `x86_64`, ...)
    pub machine: String,
}

impl Host {
    /// Create a host description from explicit values.
    pub fn new(sysname: impl Into<String>, machine: impl Into<String>) -> Self {
        Self {
            sysname: sysname.into(),
            machine: machine.into(),
        }
    }

    /// Describe the host this process is running on.
    pub fn detect() -> Self {
        let os = std::env::consts::OS;
        let arch = std::env::consts::ARCH;

        let sysname = match os {
            "macos" => "Darwin",
            "linux" => "Linux",
            "windows" => "Windows_NT",
            "freebsd" => "FreeBSD",
            other => other,
        };

        // uname reports Apple silicon as arm64, Linux keeps aarch64
        let machine = match (os, arch) {
            ("macos", "aarch64") => "arm64",
            (_, other) => other,
        };

        Self::new(sysname, machine)
    }

    /// Whether this is a Mac running on Apple silicon.
    pub fn is_apple_silicon(&self) -> bool {
        self.sysname == "Darwin" && self.machine == "arm64"
    }
}

/// A resolved Homebrew prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    /// Path to the `brew` executable
    pub path: &'static str,
    /// Whether commands run under `arch -x86_64`
    pub translated: bool,
}

impl Prefix {
    /// Start an invocation of `brew` through this prefix.
    pub fn command(&self) -> Invocation {
        if self.translated {
            Invocation::new(ARCH_PROGRAM).args([ARCH_X86_64, self.path])
        } else {
            Invocation::new(self.path)
        }
    }

    /// Path to the `brew` executable.
    pub fn as_path(&self) -> &Path {
        Path::new(self.path)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.translated {
            write!(f, "{ARCH_PROGRAM} {ARCH_X86_64} {}", self.path)
        } else {
            f.write_str(self.path)
        }
    }
}

/// Resolve the Homebrew prefix for a host.
///
/// `force_intel` selects the Intel installation on Apple silicon.
/// `for_command` adds the architecture-translation wrapper in that case;
/// without it the bare Intel path is returned.
///
/// # Errors
///
/// Returns `Error::UnsupportedPlatform` for anything that is neither
/// Darwin nor Linux.
pub fn resolve_prefix(host: &Host, force_intel: bool, for_command: bool) -> Result<Prefix> {
    match host.sysname.as_str() {
        "Darwin" if host.machine == "arm64" => {
            if force_intel {
                Ok(Prefix {
                    path: INTEL_BREW,
                    translated: for_command,
                })
            } else {
                Ok(Prefix {
                    path: APPLE_SILICON_BREW,
                    translated: false,
                })
            }
        }
        "Darwin" => Ok(Prefix {
            path: INTEL_BREW,
            translated: false,
        }),
        "Linux" => Ok(Prefix {
            path: LINUXBREW,
            translated: false,
        }),
        other => Err(Error::UnsupportedPlatform {
            os: other.to_string(),
        }),
    }
}
