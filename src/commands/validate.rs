use anyhow::{Result, bail};
use serde_yaml::{Mapping, Value};

use crate::Context;
use crate::cli::ValidateArgs;
use crate::config::{Config, DEFAULTS_DIRECTIVE, Task};
use crate::directive::{self, Directive};
use crate::paths;
use crate::ui;

/// A task that would fail before running any command.
#[derive(Debug, PartialEq, Eq)]
struct Problem {
    index: usize,
    directive: String,
    message: String,
}

pub fn run(ctx: &Context, args: ValidateArgs) -> Result<()> {
    let config_path = paths::expand(&args.config);
    let config = Config::load(&config_path)?;
    let problems = check(&config.tasks, args.strict);

    if problems.is_empty() {
        if !ctx.quiet {
            ui::success(&format!(
                "{} is valid ({} tasks)",
                config.path.display(),
                config.tasks.len()
            ));
        }
        return Ok(());
    }

    for problem in &problems {
        ui::error(&format!(
            "task {} ({}): {}",
            problem.index + 1,
            problem.directive,
            problem.message
        ));
    }
    bail!("{} problem(s) found in {}", problems.len(), config.path.display())
}

/// Check every task against the defaults in effect at that point.
///
/// Directives this tool does not handle are only problems when `strict`.
fn check(tasks: &[Task], strict: bool) -> Vec<Problem> {
    let mut defaults = Mapping::new();
    let mut problems = Vec::new();

    for (index, task) in tasks.iter().enumerate() {
        let problem = |message: String| Problem {
            index,
            directive: task.directive.clone(),
            message,
        };

        if task.directive == DEFAULTS_DIRECTIVE {
            match &task.data {
                Value::Mapping(mapping) => defaults = mapping.clone(),
                Value::Null => defaults = Mapping::new(),
                _ => problems.push(problem("expected a mapping".to_string())),
            }
            continue;
        }

        match Directive::from_name(&task.directive) {
            Some(d) => {
                if let Err(e) = directive::validate(d, &defaults, &task.data) {
                    problems.push(problem(e.to_string()));
                }
            }
            None if strict => problems.push(problem("not handled".to_string())),
            None => log::debug!("Ignoring action {}", task.directive),
        }
    }

    problems
}
