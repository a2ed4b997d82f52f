use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use bookstall_core::VERSION;

/// Bookstall - a small book rental inventory tracker
#[derive(Parser)]
#[command(name = "bookstall")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "BOOKSTALL_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `session` command
#[derive(Args, Default)]
pub struct SessionArgs {
    /// Stock the inventory from a JSON seed file
    #[arg(long, value_name = "FILE")]
    pub seed: Option<String>,

    /// Disable interactive prompts (read commands from stdin)
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an inventory session (the default)
    Session(SessionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
