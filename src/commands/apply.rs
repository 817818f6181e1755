use anyhow::{Result, bail};
use brewkit::Client;

use crate::Context;
use crate::cli::ApplyArgs;
use crate::config::Config;
use crate::directive::Processor;
use crate::dispatch::{DispatchOptions, dispatch};
use crate::paths;
use crate::report::{ConsoleReporter, Reporter};
use crate::ui;

pub fn run(ctx: &Context, args: ApplyArgs) -> Result<()> {
    let config_path = paths::expand(&args.config);
    let config = Config::load(&config_path)?;
    let base_directory = paths::base_directory(args.base_directory.as_deref(), &config_path)?;

    if ctx.verbose > 0 {
        ui::dim(&format!("config: {}", config.path.display()));
        ui::dim(&format!("base directory: {}", base_directory.display()));
    }

    let reporter = ConsoleReporter::new(ctx.quiet);
    if config.tasks.is_empty() {
        reporter.warning(&format!("No tasks found in {}", config.path.display()));
        return Ok(());
    }

    let client = Client::new();
    let mut processor = Processor::new(&client, &reporter, base_directory);
    let options = DispatchOptions {
        only: args.only,
        except: args.except,
        exit_on_failure: args.exit_on_failure,
    };

    if dispatch(&config.tasks, &mut processor, &reporter, &options) {
        if !ctx.quiet {
            ui::success("All tasks executed successfully");
        }
        Ok(())
    } else {
        bail!("Some tasks were not executed successfully")
    }
}
