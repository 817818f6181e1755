//! Backend that runs real processes on this host.

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::platform::Host;
use crate::types::{Captured, Invocation, StdioOptions};
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Exit code a shell reports for a command that does not exist.
const COMMAND_NOT_FOUND: i32 = 127;

/// Backend that executes commands with `std::process`.
pub struct SystemBackend {
    host: Host,
}

impl SystemBackend {
    /// Create a backend for the current host.
    pub fn new() -> Self {
        Self {
            host: Host::detect(),
        }
    }
}

impl Default for SystemBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SystemBackend {
    fn host(&self) -> &Host {
        &self.host
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn status(&self, invocation: &Invocation, stdio: &StdioOptions, cwd: &Path) -> Result<i32> {
        log::debug!("Running `{}` in {}", invocation, cwd.display());

        let result = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(cwd)
            .stdin(stream(stdio.stdin))
            .stdout(stream(stdio.stdout))
            .stderr(stream(stdio.stderr))
            .status();

        match result {
            Ok(status) => {
                let code = exit_code(status);
                log::debug!("`{}` exited with {}", invocation.program, code);
                Ok(code)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} not found", invocation.program);
                Ok(COMMAND_NOT_FOUND)
            }
            Err(e) => Err(Error::Spawn {
                program: invocation.program.clone(),
                source: e,
            }),
        }
    }

    fn capture(&self, invocation: &Invocation) -> Result<Captured> {
        log::debug!("Capturing `{}`", invocation);

        let result = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output();

        match result {
            Ok(output) => Ok(Captured {
                code: exit_code(output.status),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Captured {
                code: COMMAND_NOT_FOUND,
                stdout: String::new(),
                stderr: format!("{}: command not found", invocation.program),
            }),
            Err(e) => Err(Error::Spawn {
                program: invocation.program.clone(),
                source: e,
            }),
        }
    }
}

/// Inherit the stream, or detach it.
fn stream(inherit: bool) -> Stdio {
    if inherit {
        Stdio::inherit()
    } else {
        Stdio::null()
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
