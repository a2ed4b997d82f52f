//! Bookstall CLI - a small book rental inventory tracker
//!
//! This is the command-line interface for Bookstall. It wires one
//! in-memory inventory ledger into an interactive (or scripted) session.

mod cli;
mod config;
mod helpers;
mod output;
mod session;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use crate::cli::{Cli, Commands, SessionArgs};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions(args)) = &cli.command {
        let mut cmd = Cli::command();
        generate(args.shell, &mut cmd, "bookstall", &mut std::io::stdout());
        return Ok(());
    }

    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Some(Commands::Session(args)) => session::run(args, config, cli.quiet),
        Some(Commands::Completions(_)) => unreachable!("handled above"),
        // Bare invocation opens a session.
        None => session::run(SessionArgs::default(), config, cli.quiet),
    }
}
