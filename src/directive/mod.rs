//! Homebrew directives
//!
//! A config file names directives (`install-brew`, `brew`, `cask`, `tap`,
//! `brewfile`) and attaches loosely-typed data to each. The [`Processor`]
//! turns one occurrence into action:
//!
//! 1. resolve the effective [`Options`] from the layered defaults,
//! 2. check the data against the shape the directive accepts,
//! 3. run the directive's handler, which queries brew and runs commands.
//!
//! Malformed data is reported and fails the directive without running
//! anything. Failures that leave no sensible way to continue (unsupported
//! platform, `brew list` failing) are returned as errors.

pub mod data;
mod handlers;
pub mod options;

use anyhow::{Result, anyhow};
use brewkit::{Client, PackageKind};
use serde_yaml::{Mapping, Value};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::report::Reporter;

use data::InstallData;
pub use data::{DirectiveData, ValidationError};
pub use options::Options;

/// The directives handled by this tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    InstallBrew,
    Brew,
    Cask,
    Tap,
    Brewfile,
}

impl Directive {
    pub const ALL: [Directive; 5] = [
        Directive::InstallBrew,
        Directive::Brew,
        Directive::Cask,
        Directive::Tap,
        Directive::Brewfile,
    ];

    /// Name used in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Directive::InstallBrew => "install-brew",
            Directive::Brew => "brew",
            Directive::Cask => "cask",
            Directive::Tap => "tap",
            Directive::Brewfile => "brewfile",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Option key holding the list of targets when data is a mapping.
    pub fn targets_key(&self) -> Option<&'static str> {
        match self {
            Directive::InstallBrew => None,
            Directive::Brew => Some("packages"),
            Directive::Cask => Some("casks"),
            Directive::Tap => Some("taps"),
            Directive::Brewfile => Some("brewfiles"),
        }
    }

    /// Built-in options specific to this directive.
    ///
    /// A fresh mapping on every call; user defaults are merged into the
    /// copy, never into a shared template.
    pub fn builtin_defaults(&self) -> Mapping {
        let mut defaults = Mapping::new();
        match self {
            Directive::InstallBrew => {
                defaults.insert("install".into(), true.into());
                defaults.insert("force".into(), false.into());
            }
            Directive::Brew | Directive::Cask => {
                if let Some(key) = self.targets_key() {
                    defaults.insert(key.into(), Value::Sequence(Vec::new()));
                }
                defaults.insert("force".into(), false.into());
            }
            Directive::Tap | Directive::Brewfile => {
                if let Some(key) = self.targets_key() {
                    defaults.insert(key.into(), Value::Sequence(Vec::new()));
                }
            }
        }
        defaults
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `name` is one of the directives handled here.
pub fn can_handle(name: &str) -> bool {
    Directive::from_name(name).is_some()
}

/// What a handler needs from its surroundings.
pub struct Context<'a> {
    pub brew: &'a Client,
    pub reporter: &'a dyn Reporter,
    pub base_directory: &'a Path,
}

/// Routes directive occurrences to their handlers.
pub struct Processor<'a> {
    brew: &'a Client,
    reporter: &'a dyn Reporter,
    base_directory: PathBuf,
    defaults: Mapping,
}

impl<'a> Processor<'a> {
    pub fn new(brew: &'a Client, reporter: &'a dyn Reporter, base_directory: PathBuf) -> Self {
        Self {
            brew,
            reporter,
            base_directory,
            defaults: Mapping::new(),
        }
    }

    /// Replace the user defaults, keyed by `homebrew` or directive name.
    pub fn set_defaults(&mut self, defaults: Mapping) {
        self.defaults = defaults;
    }

    pub fn can_handle(&self, name: &str) -> bool {
        can_handle(name)
    }

    /// Run one directive occurrence and return whether it succeeded.
    ///
    /// # Errors
    ///
    /// Fails if `name` is not a handled directive (callers check
    /// [`can_handle`] first), if the platform has no Homebrew prefix, or if
    /// listing installed packages fails.
    pub fn handle(&self, name: &str, data: &Value) -> Result<bool> {
        let directive =
            Directive::from_name(name).ok_or_else(|| anyhow!("Unsupported directive: {name}"))?;

        let (plan, options) = match plan(directive, &self.defaults, data) {
            Ok(planned) => planned,
            Err(e) => {
                self.reporter.error(&e.to_string());
                return Ok(false);
            }
        };

        log::debug!("{directive}: effective options {:?}", options.values());

        let ctx = Context {
            brew: self.brew,
            reporter: self.reporter,
            base_directory: &self.base_directory,
        };

        match plan {
            Plan::Install(install) => handlers::install_brew(&ctx, install, &options),
            Plan::Packages(kind, names) => handlers::packages(&ctx, kind, &names, &options),
            Plan::Taps(taps) => handlers::taps(&ctx, &taps, &options),
            Plan::Brewfiles(brewfiles) => handlers::brewfiles(&ctx, &brewfiles, &options),
        }
    }
}

/// What a directive occurrence will do once its data is checked.
enum Plan {
    Install(InstallData),
    Packages(PackageKind, Vec<String>),
    Taps(Vec<String>),
    Brewfiles(Vec<String>),
}

fn plan(directive: Directive, defaults: &Mapping, data: &Value) -> Result<(Plan, Options), ValidationError> {
    let options = Options::resolve(directive, defaults, data)?;
    let plan = match DirectiveData::parse(directive, data)? {
        DirectiveData::Install(install) => Plan::Install(install),
        DirectiveData::Targets(targets) => {
            let targets = targets.resolve(directive, &options)?;
            match directive {
                Directive::Brew => Plan::Packages(PackageKind::Formula, targets),
                Directive::Cask => Plan::Packages(PackageKind::Cask, targets),
                Directive::Tap => Plan::Taps(targets),
                Directive::Brewfile => Plan::Brewfiles(targets),
                Directive::InstallBrew => return Err(ValidationError::InvalidData { directive }),
            }
        }
    };
    Ok((plan, options))
}

/// Check one directive occurrence without running anything.
///
/// # Errors
///
/// Returns the first problem with the data or the options it resolves to.
pub fn validate(directive: Directive, defaults: &Mapping, data: &Value) -> Result<(), ValidationError> {
    plan(directive, defaults, data).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Level, RecordingReporter};
    use brewkit::StdioOptions;
    use brewkit::backend::MockBackend;
    use brewkit::platform::{APPLE_SILICON_BREW, Host};

    const BREW: &str = "/opt/homebrew/bin/brew";

    fn mock() -> MockBackend {
        MockBackend::new(Host::new("Darwin", "arm64"))
    }

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    fn handle(mock: &MockBackend, name: &str, data: &str) -> (bool, RecordingReporter) {
        handle_with_defaults(mock, Mapping::new(), name, data)
    }

    fn handle_with_defaults(
        mock: &MockBackend,
        defaults: Mapping,
        name: &str,
        data: &str,
    ) -> (bool, RecordingReporter) {
        let client = Client::with_backend(Box::new(mock.clone()));
        let reporter = RecordingReporter::default();
        let mut processor = Processor::new(&client, &reporter, PathBuf::from("/dotfiles"));
        processor.set_defaults(defaults);
        let ok = processor.handle(name, &yaml(data)).unwrap();
        (ok, reporter)
    }

    // =========================================================================
    // Routing
    // =========================================================================

    #[test]
    fn test_can_handle() {
        for name in ["install-brew", "brew", "cask", "tap", "brewfile"] {
            assert!(can_handle(name), "{name}");
        }
        for name in ["link", "shell", "Brew", "casks", "", "install_brew"] {
            assert!(!can_handle(name), "{name}");
        }
    }

    #[test]
    fn test_directive_names_round_trip() {
        for directive in Directive::ALL {
            assert_eq!(Directive::from_name(directive.name()), Some(directive));
        }
    }

    #[test]
    fn test_builtin_defaults_are_fresh() {
        let mut first = Directive::Brew.builtin_defaults();
        first.insert("force".into(), true.into());
        assert_eq!(
            Directive::Brew.builtin_defaults().get("force"),
            Some(&Value::Bool(false))
        );
    }

    #[test]
    fn test_handle_unknown_directive_is_error() {
        let client = Client::with_backend(Box::new(mock()));
        let reporter = RecordingReporter::default();
        let processor = Processor::new(&client, &reporter, PathBuf::from("/"));
        assert!(processor.handle("link", &Value::Null).is_err());
    }

    // =========================================================================
    // brew / cask
    // =========================================================================

    #[test]
    fn test_brew_installs_missing_packages() {
        let mock = mock();
        let (ok, reporter) = handle(&mock, "brew", "[git, wget]");
        assert!(ok);
        assert_eq!(
            mock.commands(),
            vec![format!("{BREW} install git"), format!("{BREW} install wget")]
        );
        assert!(reporter.contains(Level::Info, "Installing git"));
        assert!(reporter.contains(Level::Info, "wget installed"));
        assert!(reporter.contains(Level::Info, "All packages installed successfully"));
    }

    #[test]
    fn test_brew_result_is_and_of_exit_codes() {
        let mock = mock();
        mock.fail_command(format!("{BREW} install git"), 1);
        let (ok, reporter) = handle(&mock, "brew", "[git, wget]");
        assert!(!ok);
        assert_eq!(mock.invocations().len(), 2);
        assert!(reporter.contains(Level::Error, "Error installing git"));
        assert!(reporter.contains(Level::Info, "wget installed"));
        assert!(reporter.contains(Level::Error, "Some packages failed to install"));
    }

    #[test]
    fn test_brew_skips_installed_package() {
        let mock = mock();
        mock.set_installed(PackageKind::Formula, ["git"]);
        let (ok, reporter) = handle(&mock, "brew", "[git]");
        assert!(ok);
        assert!(mock.invocations().is_empty());
        assert!(reporter.contains(Level::Info, "git is already installed"));
        assert!(reporter.contains(Level::Info, "All packages installed successfully"));
    }

    #[test]
    fn test_brew_force_reinstalls_installed_package() {
        let mock = mock();
        mock.set_installed(PackageKind::Formula, ["git"]);
        let (ok, reporter) = handle(&mock, "brew", "{packages: [git, wget], force: true}");
        assert!(ok);
        assert_eq!(
            mock.commands(),
            vec![format!("{BREW} reinstall git"), format!("{BREW} install wget")]
        );
        assert!(reporter.contains(Level::Info, "Reinstalling git"));
    }

    #[test]
    fn test_brew_invocation_force_beats_defaults() {
        let mock = mock();
        mock.set_installed(PackageKind::Formula, ["git"]);
        let defaults = match yaml("{homebrew: {force: false}, brew: {force: false}}") {
            Value::Mapping(m) => m,
            _ => unreachable!(),
        };
        let (ok, _) = handle_with_defaults(&mock, defaults, "brew", "{packages: [git], force: true}");
        assert!(ok);
        assert_eq!(mock.commands(), vec![format!("{BREW} reinstall git")]);
    }

    #[test]
    fn test_brew_lists_once_per_call() {
        let mock = mock();
        let (ok, _) = handle(&mock, "brew", "[git, wget, jq]");
        assert!(ok);
        assert_eq!(mock.captures().len(), 1);
        assert_eq!(
            mock.captures()[0].to_string(),
            format!("{BREW} list --formulae -1")
        );
    }

    #[test]
    fn test_brew_repeated_name_installs_once() {
        let mock = mock();
        let (ok, reporter) = handle(&mock, "brew", "[git, git]");
        assert!(ok);
        assert_eq!(mock.commands(), vec![format!("{BREW} install git")]);
        assert!(reporter.contains(Level::Info, "git is already installed"));
    }

    #[test]
    fn test_brew_empty_list_does_not_query() {
        let mock = mock();
        mock.fail_listing("should not be called");
        let (ok, _) = handle(&mock, "brew", "[]");
        assert!(ok);
        assert!(mock.captures().is_empty());
    }

    #[test]
    fn test_brew_listing_failure_propagates() {
        let mock = mock();
        mock.fail_listing("Error: Permission denied");
        let client = Client::with_backend(Box::new(mock.clone()));
        let reporter = RecordingReporter::default();
        let processor = Processor::new(&client, &reporter, PathBuf::from("/"));
        let err = processor.handle("brew", &yaml("[git]")).unwrap_err();
        assert!(err.to_string().contains("Error: Permission denied"));
        assert!(mock.invocations().is_empty());
    }

    #[test]
    fn test_brew_force_intel_uses_translated_prefix() {
        let mock = mock();
        let (ok, _) = handle(&mock, "brew", "{packages: [git], force-intel: true}");
        assert!(ok);
        assert_eq!(
            mock.commands(),
            vec!["arch -x86_64 /usr/local/bin/brew install git"]
        );
    }

    #[test]
    fn test_cask_uses_cask_namespace() {
        let mock = mock();
        mock.set_installed(PackageKind::Cask, ["firefox"]);
        // a formula with the same name must not count as an installed cask
        mock.set_installed(PackageKind::Formula, ["iterm2"]);
        let (ok, reporter) = handle(&mock, "cask", "[firefox, iterm2]");
        assert!(ok);
        assert_eq!(mock.commands(), vec![format!("{BREW} install --cask iterm2")]);
        assert_eq!(
            mock.captures()[0].to_string(),
            format!("{BREW} list --casks -1")
        );
        assert!(reporter.contains(Level::Info, "firefox is already installed"));
        assert!(reporter.contains(Level::Info, "All casks installed successfully"));
    }

    #[test]
    fn test_cask_force_reinstalls() {
        let mock = mock();
        mock.set_installed(PackageKind::Cask, ["firefox"]);
        let (ok, _) = handle(&mock, "cask", "{casks: [firefox], force: true}");
        assert!(ok);
        assert_eq!(
            mock.commands(),
            vec![format!("{BREW} reinstall --cask firefox")]
        );
    }

    #[test]
    fn test_cask_failure_summary() {
        let mock = mock();
        mock.fail_command(format!("{BREW} install --cask firefox"), 1);
        let (ok, reporter) = handle(&mock, "cask", "[firefox]");
        assert!(!ok);
        assert!(reporter.contains(Level::Error, "Some casks failed to install"));
    }

    // =========================================================================
    // tap / brewfile
    // =========================================================================

    #[test]
    fn test_tap_attempts_every_entry() {
        let mock = mock();
        mock.fail_command(format!("{BREW} tap b/b"), 1);
        let (ok, reporter) = handle(&mock, "tap", "[a/a, b/b, c/c]");
        assert!(!ok);
        assert_eq!(
            mock.commands(),
            vec![
                format!("{BREW} tap a/a"),
                format!("{BREW} tap b/b"),
                format!("{BREW} tap c/c"),
            ]
        );
        assert!(mock.captures().is_empty());
        assert!(reporter.contains(Level::Info, "Tapping c/c"));
        assert!(reporter.contains(Level::Info, "c/c tapped"));
        assert!(reporter.contains(Level::Error, "Error tapping b/b"));
        assert!(reporter.contains(Level::Error, "Some taps failed"));
    }

    #[test]
    fn test_tap_from_mapping() {
        let mock = mock();
        let (ok, reporter) = handle(&mock, "tap", "{taps: [homebrew/cask-fonts]}");
        assert!(ok);
        assert_eq!(mock.commands(), vec![format!("{BREW} tap homebrew/cask-fonts")]);
        assert!(reporter.contains(Level::Info, "All taps were successful"));
    }

    #[test]
    fn test_brewfile_runs_bundle() {
        let mock = mock();
        let (ok, reporter) = handle(&mock, "brewfile", "[Brewfile, work/Brewfile]");
        assert!(ok);
        assert_eq!(
            mock.commands(),
            vec![
                format!("{BREW} bundle --verbose --file=Brewfile"),
                format!("{BREW} bundle --verbose --file=work/Brewfile"),
            ]
        );
        assert!(reporter.contains(Level::Info, "Installing packages and casks from Brewfile"));
        assert!(reporter.contains(Level::Info, "All Brewfiles were successful"));
    }

    #[test]
    fn test_brewfile_failure() {
        let mock = mock();
        mock.fail_command(format!("{BREW} bundle --verbose --file=Brewfile"), 1);
        let (ok, reporter) = handle(&mock, "brewfile", "{brewfiles: [Brewfile]}");
        assert!(!ok);
        assert!(reporter.contains(
            Level::Error,
            "Error installing packages and casks from Brewfile"
        ));
        assert!(reporter.contains(Level::Error, "Some Brewfiles failed"));
    }

    #[test]
    fn test_tap_ignores_flags_it_does_not_read() {
        let mock = mock();
        let (ok, reporter) = handle(&mock, "tap", "{taps: [a/b], install: later, force: maybe}");
        assert!(ok);
        assert!(reporter.errors().is_empty());
        assert_eq!(mock.commands(), vec![format!("{BREW} tap a/b")]);
    }

    // =========================================================================
    // Streams and working directory
    // =========================================================================

    #[test]
    fn test_commands_run_in_base_directory_with_default_streams() {
        let mock = mock();
        let (ok, _) = handle(&mock, "brewfile", "[Brewfile]");
        assert!(ok);
        let runs = mock.runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].cwd, PathBuf::from("/dotfiles"));
        assert_eq!(runs[0].stdio, StdioOptions::default());
    }

    #[test]
    fn test_invocation_streams_reach_runner() {
        let mock = mock();
        let (ok, _) = handle(&mock, "brew", "{packages: [git], stdout: false}");
        assert!(ok);
        assert_eq!(
            mock.runs()[0].stdio,
            StdioOptions {
                stdin: true,
                stdout: false,
                stderr: true
            }
        );
    }

    #[test]
    fn test_plugin_stream_defaults_reach_runner() {
        let mock = mock();
        let defaults = match yaml("{homebrew: {stderr: false, stdin: false}}") {
            Value::Mapping(m) => m,
            _ => unreachable!(),
        };
        let (ok, _) = handle_with_defaults(&mock, defaults.clone(), "tap", "[a/b]");
        assert!(ok);
        let (ok, _) = handle_with_defaults(&mock, defaults, "install-brew", "true");
        assert!(ok);

        let quiet = StdioOptions {
            stdin: false,
            stdout: true,
            stderr: false,
        };
        let runs = mock.runs();
        assert_eq!(runs.len(), 2);
        for run in runs {
            assert_eq!(run.stdio, quiet, "{}", run.invocation);
            assert_eq!(run.cwd, PathBuf::from("/dotfiles"));
        }
    }

    // =========================================================================
    // install-brew
    // =========================================================================

    #[test]
    fn test_install_brew_false_skips() {
        let mock = mock();
        let (ok, reporter) = handle(&mock, "install-brew", "false");
        assert!(ok);
        assert!(mock.invocations().is_empty());
        assert!(reporter.contains(Level::Info, "Skipping Homebrew installation"));
    }

    #[test]
    fn test_install_brew_mapping_install_false_skips() {
        let mock = mock();
        let (ok, _) = handle(&mock, "install-brew", "{install: false}");
        assert!(ok);
        assert!(mock.invocations().is_empty());
    }

    #[test]
    fn test_install_brew_already_installed() {
        let mock = mock();
        mock.add_path(APPLE_SILICON_BREW);
        for data in ["true", "{install: true}"] {
            let (ok, reporter) = handle(&mock, "install-brew", data);
            assert!(ok);
            assert!(reporter.contains(Level::Info, "Homebrew is already installed"));
        }
        assert!(mock.invocations().is_empty());
    }

    #[test]
    fn test_install_brew_runs_installer() {
        let mock = mock();
        let (ok, reporter) = handle(&mock, "install-brew", "true");
        assert!(ok);
        let invocations = mock.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].program, "/bin/bash");
        assert!(reporter.contains(Level::Info, "Installing Homebrew"));
        assert!(reporter.contains(Level::Info, "Homebrew installed"));
    }

    #[test]
    fn test_install_brew_reflects_exit_code() {
        let mock = mock();
        let client = Client::with_backend(Box::new(mock.clone()));
        let script = client.install_script(false).unwrap();
        mock.fail_command(script.to_string(), 1);

        let (ok, reporter) = handle(&mock, "install-brew", "true");
        assert!(!ok);
        assert!(reporter.contains(Level::Error, "Error installing Homebrew"));
    }

    #[test]
    fn test_install_brew_force_reinstalls_over_existing() {
        let mock = mock();
        mock.add_path(APPLE_SILICON_BREW);
        let (ok, _) = handle(&mock, "install-brew", "{force: true}");
        assert!(ok);
        assert_eq!(mock.invocations().len(), 1);
    }

    #[test]
    fn test_install_brew_force_intel_checks_intel_path() {
        let mock = mock();
        mock.add_path(APPLE_SILICON_BREW);
        let (ok, _) = handle(&mock, "install-brew", "{force-intel: true}");
        assert!(ok);
        let invocations = mock.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].program, "arch");
    }

    #[test]
    fn test_install_brew_user_default_disables_install() {
        let mock = mock();
        let defaults = match yaml("{install-brew: {install: false}}") {
            Value::Mapping(m) => m,
            _ => unreachable!(),
        };
        let (ok, reporter) = handle_with_defaults(&mock, defaults.clone(), "install-brew", "{}");
        assert!(ok);
        assert!(reporter.contains(Level::Info, "Skipping Homebrew installation"));

        // a bare boolean is the install flag itself
        let (ok, reporter) = handle_with_defaults(&mock, defaults, "install-brew", "true");
        assert!(ok);
        assert!(reporter.contains(Level::Info, "Installing Homebrew"));
    }

    #[test]
    fn test_install_brew_unsupported_platform_is_error() {
        let mock = MockBackend::new(Host::new("Windows_NT", "x86_64"));
        let client = Client::with_backend(Box::new(mock.clone()));
        let reporter = RecordingReporter::default();
        let processor = Processor::new(&client, &reporter, PathBuf::from("/"));
        assert!(processor.handle("install-brew", &Value::Bool(true)).is_err());
        assert!(mock.invocations().is_empty());
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn test_invalid_shapes_fail_without_commands() {
        let cases = [
            ("install-brew", "\"yes\""),
            ("install-brew", "[git]"),
            ("brew", "git"),
            ("brew", "true"),
            ("brew", "[git, 3]"),
            ("brew", "{packages: git}"),
            ("cask", "firefox"),
            ("tap", "homebrew/cask"),
            ("brewfile", "Brewfile"),
            ("brewfile", "{brewfiles: Brewfile}"),
            ("brew", "~"),
        ];

        for (name, data) in cases {
            let mock = mock();
            let (ok, reporter) = handle(&mock, name, data);
            assert!(!ok, "{name}: {data}");
            assert!(mock.invocations().is_empty(), "{name}: {data}");
            assert!(mock.captures().is_empty(), "{name}: {data}");
            assert_eq!(reporter.errors().len(), 1, "{name}: {data}");
        }
    }

    #[test]
    fn test_invalid_data_message() {
        let mock = mock();
        let (_, reporter) = handle(&mock, "brew", "git");
        assert_eq!(reporter.errors(), vec!["Invalid data for the `brew` directive"]);

        let (_, reporter) = handle(&mock, "brew", "{packages: git}");
        assert_eq!(reporter.errors(), vec!["Invalid packages for the `brew` directive"]);
    }

    #[test]
    fn test_invalid_option_type_fails() {
        let mock = mock();
        let (ok, reporter) = handle(&mock, "brew", "{packages: [git], force: \"yes\"}");
        assert!(!ok);
        assert!(mock.invocations().is_empty());
        assert_eq!(reporter.messages().len(), 1);
    }

    #[test]
    fn test_validate_runs_nothing() {
        let defaults = Mapping::new();
        assert!(validate(Directive::Brew, &defaults, &yaml("[git]")).is_ok());
        assert!(validate(Directive::InstallBrew, &defaults, &yaml("{force: true}")).is_ok());
        assert_eq!(
            validate(Directive::Tap, &defaults, &yaml("{taps: a/b}")),
            Err(ValidationError::InvalidItems {
                directive: Directive::Tap,
                key: "taps"
            })
        );
    }
}
