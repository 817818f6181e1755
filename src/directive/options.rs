//! Option resolution
//!
//! Effective options are built from four layers, lowest precedence first:
//!
//! 1. built-in global defaults (`stdin`, `stdout`, `stderr`, `force-intel`)
//! 2. user defaults under the `homebrew` key
//! 3. the directive's built-in defaults, overlaid with user defaults under
//!    the directive's own name
//! 4. the directive data itself, when it is a mapping
//!
//! Each layer overwrites values of the previous ones and never removes keys.
//! Unknown keys are carried through untouched.

use brewkit::StdioOptions;
use serde_yaml::{Mapping, Value};

use super::Directive;
use super::data::ValidationError;

/// Defaults key shared by every directive.
pub const PLUGIN_NAMESPACE: &str = "homebrew";

fn global_defaults() -> Mapping {
    let mut defaults = Mapping::new();
    defaults.insert("stdin".into(), true.into());
    defaults.insert("stdout".into(), true.into());
    defaults.insert("stderr".into(), true.into());
    defaults.insert("force-intel".into(), false.into());
    defaults
}

/// Merge every layer into one flat mapping.
///
/// `defaults` is the user defaults mapping, keyed by `homebrew` or by
/// directive name. Nothing passed in is modified.
pub fn resolve_layers(
    directive: Directive,
    defaults: &Mapping,
    data: &Value,
) -> Result<Mapping, ValidationError> {
    let mut options = global_defaults();

    if let Some(plugin) = user_layer(defaults, PLUGIN_NAMESPACE)? {
        overlay(&mut options, plugin);
    }

    let mut specific = directive.builtin_defaults();
    if let Some(user) = user_layer(defaults, directive.name())? {
        overlay(&mut specific, user);
    }
    overlay(&mut options, &specific);

    if let Value::Mapping(data) = data {
        overlay(&mut options, data);
    }

    Ok(options)
}

fn user_layer<'a>(defaults: &'a Mapping, key: &str) -> Result<Option<&'a Mapping>, ValidationError> {
    match defaults.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Mapping(layer)) => Ok(Some(layer)),
        Some(_) => Err(ValidationError::InvalidDefaults {
            key: key.to_string(),
        }),
    }
}

fn overlay(base: &mut Mapping, layer: &Mapping) {
    for (key, value) in layer {
        base.insert(key.clone(), value.clone());
    }
}

/// Effective options for one directive occurrence.
#[derive(Debug, Clone)]
pub struct Options {
    pub streams: StdioOptions,
    pub force_intel: bool,
    /// Always false for `tap` and `brewfile`
    pub force: bool,
    /// Always true outside `install-brew`
    pub install: bool,
    values: Mapping,
}

impl Options {
    /// Resolve all layers and read the recognized flags.
    ///
    /// # Errors
    ///
    /// Fails if a defaults entry is not a mapping, or a flag the directive
    /// reads holds something other than a boolean. Flags the directive does
    /// not read are left unchecked in [`Options::values`].
    pub fn resolve(
        directive: Directive,
        defaults: &Mapping,
        data: &Value,
    ) -> Result<Self, ValidationError> {
        let values = resolve_layers(directive, defaults, data)?;
        Self::from_values(directive, values)
    }

    fn from_values(directive: Directive, values: Mapping) -> Result<Self, ValidationError> {
        let reads_force = matches!(
            directive,
            Directive::InstallBrew | Directive::Brew | Directive::Cask
        );
        let reads_install = directive == Directive::InstallBrew;

        Ok(Self {
            streams: StdioOptions {
                stdin: flag(directive, &values, "stdin", true)?,
                stdout: flag(directive, &values, "stdout", true)?,
                stderr: flag(directive, &values, "stderr", true)?,
            },
            force_intel: flag(directive, &values, "force-intel", false)?,
            force: reads_force && flag(directive, &values, "force", false)?,
            install: !reads_install || flag(directive, &values, "install", true)?,
            values,
        })
    }

    /// The merged mapping, including keys this tool does not recognize.
    pub fn values(&self) -> &Mapping {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

fn flag(
    directive: Directive,
    values: &Mapping,
    key: &str,
    default: bool,
) -> Result<bool, ValidationError> {
    match values.get(key) {
        None => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ValidationError::InvalidOption {
            directive,
            key: key.to_string(),
        }),
    }
}
