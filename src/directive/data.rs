//! Accepted shapes of directive data
//!
//! Config data is untyped. Each directive accepts a small set of shapes and
//! everything else is rejected here, before any command runs:
//!
//! - `install-brew`: a boolean, or a mapping of options
//! - `brew`, `cask`, `tap`, `brewfile`: a list of strings, or a mapping of
//!   options holding the list under `packages`, `casks`, `taps` or
//!   `brewfiles`

use serde_yaml::Value;
use thiserror::Error;

use super::Directive;
use super::options::Options;

/// Directive data or options that do not have an accepted shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid data for the `{directive}` directive")]
    InvalidData { directive: Directive },

    #[error("Invalid {key} for the `{directive}` directive")]
    InvalidItems {
        directive: Directive,
        key: &'static str,
    },

    #[error("Invalid value for option `{key}` of the `{directive}` directive: expected a boolean")]
    InvalidOption { directive: Directive, key: String },

    #[error("Invalid defaults for `{key}`: expected a mapping")]
    InvalidDefaults { key: String },
}

/// Data of `install-brew`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallData {
    /// Bare boolean: whether to install
    Flag(bool),
    /// Mapping: the `install` option decides
    Options,
}

/// Data of the list-driven directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetData {
    /// Bare list of names or paths
    Items(Vec<String>),
    /// Mapping: the list lives under the directive's targets key
    Options,
}

impl TargetData {
    /// The names to act on.
    pub fn resolve(self, directive: Directive, options: &Options) -> Result<Vec<String>, ValidationError> {
        match self {
            TargetData::Items(items) => Ok(items),
            TargetData::Options => {
                let key = directive
                    .targets_key()
                    .ok_or(ValidationError::InvalidData { directive })?;
                options
                    .get(key)
                    .and_then(string_items)
                    .ok_or(ValidationError::InvalidItems { directive, key })
            }
        }
    }
}

/// Directive data after shape checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveData {
    Install(InstallData),
    Targets(TargetData),
}

impl DirectiveData {
    pub fn parse(directive: Directive, data: &Value) -> Result<Self, ValidationError> {
        let invalid = ValidationError::InvalidData { directive };
        match (directive, data) {
            (Directive::InstallBrew, Value::Bool(b)) => Ok(Self::Install(InstallData::Flag(*b))),
            (Directive::InstallBrew, Value::Mapping(_)) => Ok(Self::Install(InstallData::Options)),
            (Directive::InstallBrew, _) => Err(invalid),
            (_, Value::Mapping(_)) => Ok(Self::Targets(TargetData::Options)),
            (_, list @ Value::Sequence(_)) => string_items(list)
                .map(|items| Self::Targets(TargetData::Items(items)))
                .ok_or(invalid),
            (_, _) => Err(invalid),
        }
    }
}

/// A sequence of strings, or nothing.
fn string_items(value: &Value) -> Option<Vec<String>> {
    value
        .as_sequence()?
        .iter()
        .map(|item| item.as_str().map(ToString::to_string))
        .collect()
}
