//! Core types for driving the `brew` command line.

use std::fmt;

/// Kind of installable Homebrew package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    /// Homebrew formula (CLI tool or library)
    Formula,
    /// Homebrew cask (GUI application or binary artifact)
    Cask,
}

impl PackageKind {
    /// Flag name used by `brew list --<flag>`.
    pub fn list_flag(&self) -> &'static str {
        match self {
            PackageKind::Formula => "formulae",
            PackageKind::Cask => "casks",
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.list_flag())
    }
}

/// A mutating brew subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `brew install [--cask] <name>`
    Install(PackageKind, String),
    /// `brew reinstall [--cask] <name>`
    Reinstall(PackageKind, String),
    /// `brew tap <name>`
    Tap(String),
    /// `brew bundle --verbose --file=<path>`
    Bundle(String),
}

impl Action {
    /// Arguments passed to `brew` for this action.
    pub fn args(&self) -> Vec<String> {
        match self {
            Action::Install(kind, name) => package_args("install", *kind, name),
            Action::Reinstall(kind, name) => package_args("reinstall", *kind, name),
            Action::Tap(name) => vec!["tap".to_string(), name.clone()],
            Action::Bundle(path) => vec![
                "bundle".to_string(),
                "--verbose".to_string(),
                format!("--file={path}"),
            ],
        }
    }
}

fn package_args(subcommand: &str, kind: PackageKind, name: &str) -> Vec<String> {
    let mut args = vec![subcommand.to_string()];
    if kind == PackageKind::Cask {
        args.push("--cask".to_string());
    }
    args.push(name.to_string());
    args
}

/// A program plus its argument vector.
///
/// Arguments are passed to the process as-is, so names containing spaces
/// or shell metacharacters are never reinterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to execute
    pub program: String,
    /// Arguments, not including the program
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Which standard streams a child process inherits.
///
/// A stream set to `false` is detached from the terminal: input reads as
/// empty and output is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdioOptions {
    /// Inherit standard input
    pub stdin: bool,
    /// Inherit standard output
    pub stdout: bool,
    /// Inherit standard error
    pub stderr: bool,
}

impl Default for StdioOptions {
    fn default() -> Self {
        Self {
            stdin: true,
            stdout: true,
            stderr: true,
        }
    }
}

/// Output of a command run with captured streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    /// Exit code (-1 if terminated by a signal)
    pub code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl Captured {
    /// Whether the command exited with code 0.
    pub fn success(&self) -> bool {
        self.code == 0
    }
}
