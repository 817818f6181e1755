use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::paths::{DEFAULT_CONFIG, ENV_CONFIG};

#[derive(Parser)]
#[command(name = "dotbrew")]
#[command(version)]
#[command(about = "Install Homebrew, taps, formulae, casks and Brewfiles from a dotfiles config", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the Homebrew directives in a config file
    Apply(ApplyArgs),

    /// Check a config file without running anything
    Validate(ValidateArgs),

    /// Show the detected platform and Homebrew prefixes
    Doctor,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Config file (YAML or JSON)
    #[arg(short, long, env = ENV_CONFIG, default_value = DEFAULT_CONFIG)]
    pub config: String,

    /// Directory commands run from (defaults to the config file's directory)
    #[arg(short = 'd', long)]
    pub base_directory: Option<String>,

    /// Only run these directives
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip these directives
    #[arg(long, value_delimiter = ',')]
    pub except: Vec<String>,

    /// Stop after the first failed task
    #[arg(short = 'x', long)]
    pub exit_on_failure: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Config file (YAML or JSON)
    #[arg(short, long, env = ENV_CONFIG, default_value = DEFAULT_CONFIG)]
    pub config: String,

    /// Also fail on directives this tool does not handle
    #[arg(long)]
    pub strict: bool,
}
