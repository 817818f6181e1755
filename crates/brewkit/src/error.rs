//! Error types for Homebrew operations.
//!
//! Only failures that have no sensible local fallback are errors here.
//! A `brew install` that exits non-zero is not an error: callers get the
//! exit code and decide what it means for them.

use crate::types::PackageKind;
use thiserror::Error;

/// Errors that can occur while driving Homebrew.
#[derive(Debug, Error)]
pub enum Error {
    /// The host operating system has no known Homebrew prefix
    #[error("unsupported OS: {os}")]
    UnsupportedPlatform {
        /// System name as reported by the host (e.g. `Windows_NT`)
        os: String,
    },

    /// `brew list` exited non-zero
    #[error("error listing {kind}: {stderr}")]
    ListFailed {
        /// Kind of package that was being listed
        kind: PackageKind,
        /// Standard error captured from the listing command
        stderr: String,
    },

    /// A command could not be started or waited on
    #[error("failed to execute {program}: {source}")]
    Spawn {
        /// Program that was being executed
        program: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for Homebrew operations.
pub type Result<T> = std::result::Result<T, Error>;
