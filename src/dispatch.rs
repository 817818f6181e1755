//! Task dispatch
//!
//! Feeds config tasks to the directive [`Processor`] in order, keeps the
//! current defaults, applies `--only`/`--except` and turns the per-task
//! results into one overall result.

use serde_yaml::{Mapping, Value};

use crate::config::{DEFAULTS_DIRECTIVE, Task};
use crate::directive::Processor;
use crate::report::Reporter;

/// How tasks are selected and what happens on failure.
#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    /// Run only these directives (all when empty)
    pub only: Vec<String>,
    /// Never run these directives
    pub except: Vec<String>,
    /// Stop after the first failed task
    pub exit_on_failure: bool,
}

impl DispatchOptions {
    fn allows(&self, directive: &str) -> bool {
        let selected = self.only.is_empty() || self.only.iter().any(|d| d == directive);
        selected && !self.except.iter().any(|d| d == directive)
    }
}

/// Run every task and return whether all of them succeeded.
///
/// `defaults` tasks always run, whatever the filters say.
pub fn dispatch(
    tasks: &[Task],
    processor: &mut Processor,
    reporter: &dyn Reporter,
    options: &DispatchOptions,
) -> bool {
    let mut success = true;

    for task in tasks {
        let name = task.directive.as_str();

        if name == DEFAULTS_DIRECTIVE {
            match &task.data {
                Value::Mapping(defaults) => processor.set_defaults(defaults.clone()),
                Value::Null => processor.set_defaults(Mapping::new()),
                _ => {
                    reporter.error("Invalid defaults: expected a mapping");
                    success = false;
                }
            }
        } else if !options.allows(name) {
            log::debug!("Skipping action {name}");
        } else if !processor.can_handle(name) {
            reporter.error(&format!("Action {name} not handled"));
            success = false;
        } else {
            match processor.handle(name, &task.data) {
                Ok(ok) => success &= ok,
                Err(e) => {
                    reporter.error(&format!(
                        "An error was encountered while executing action {name}"
                    ));
                    reporter.error(&format!("{e:#}"));
                    success = false;
                }
            }
        }

        if !success && options.exit_on_failure {
            reporter.error("Exiting after the first failed task");
            break;
        }
    }

    success
}
