//! The inventory session.
//!
//! A session owns one ledger for the life of the process; when it ends,
//! the stock list goes with it. Interactive mode prompts for commands;
//! when stdin is not a terminal (or `--no-input` is given), commands are
//! read line by line from stdin instead.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Input;

use bookstall_core::inventory::seed;
use bookstall_core::InventoryLedger;

use crate::cli::SessionArgs;
use crate::config::BookstallConfig;
use crate::helpers::parsing::{self, SessionCommand};
use crate::output::{self, OutputFormat};

enum Flow {
    Continue,
    Quit,
}

pub fn run(args: SessionArgs, config: BookstallConfig, quiet: bool) -> anyhow::Result<()> {
    let mut session = Session::new(config, quiet);

    if let Some(path) = args.seed.as_deref() {
        session.load_seed(path)?;
    }

    if !args.no_input && io::stdin().is_terminal() {
        session.run_interactive()
    } else {
        session.run_scripted()
    }
}

struct Session {
    ledger: InventoryLedger,
    config: BookstallConfig,
    quiet: bool,
    color: bool,
}

impl Session {
    fn new(config: BookstallConfig, quiet: bool) -> Self {
        let color = config.display.color && io::stdout().is_terminal();
        Self {
            ledger: InventoryLedger::new(),
            config,
            quiet,
            color,
        }
    }

    fn load_seed(&mut self, path: &str) -> anyhow::Result<()> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read seed file {}: {}", path, e))?;
        let books = seed::from_json(&contents)?;
        let count = books.len();
        for book in books {
            self.ledger.add_book(book);
        }
        if !self.quiet {
            println!("Stocked {} book(s) from {}", count, path);
        }
        Ok(())
    }

    fn run_interactive(mut self) -> anyhow::Result<()> {
        if !self.quiet {
            println!(
                "Bookstall v{} - type `help` for commands",
                bookstall_core::VERSION
            );
        }
        loop {
            let line = match Input::<String>::new()
                .with_prompt(self.config.session.prompt.clone())
                .allow_empty(true)
                .interact_text()
            {
                Ok(value) => value,
                // stdin closed or the prompt was interrupted
                Err(_) => break,
            };
            match self.dispatch(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => eprintln!("Error: {}", err),
            }
        }
        Ok(())
    }

    fn run_scripted(mut self) -> anyhow::Result<()> {
        for line in io::stdin().lock().lines() {
            let line = line.map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
            match self.dispatch(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => eprintln!("Error: {}", err),
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> anyhow::Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        match parsing::parse_command(line)? {
            SessionCommand::Add(book) => {
                let title = book.title.clone();
                self.ledger.add_book(book);
                self.feedback(&format!("Added \"{}\"", title));
            }
            SessionCommand::Delete(title) => {
                self.ledger.delete_book(&title);
                // The ledger never reports whether anything was removed.
                self.feedback(&format!(
                    "Deleted \"{}\" if it was present and not rented",
                    title
                ));
            }
            SessionCommand::Rent(title) => {
                if self.ledger.rent_book(&title) {
                    self.feedback(&format!("Rented \"{}\"", title));
                } else {
                    self.warn(&format!("\"{}\" is unavailable or already rented", title));
                }
            }
            SessionCommand::Return(title) => {
                if self.ledger.return_book(&title) {
                    self.feedback(&format!("Returned \"{}\"", title));
                } else {
                    self.warn(&format!("\"{}\" is not rented or does not exist", title));
                }
            }
            SessionCommand::List(format) => self.list(format)?,
            SessionCommand::Count => {
                println!("Available: {}", self.ledger.available_count());
            }
            SessionCommand::Export => {
                println!("{}", seed::to_json(self.ledger.inventory())?);
            }
            SessionCommand::Help => print_help(),
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn list(&self, format: Option<OutputFormat>) -> anyhow::Result<()> {
        let format = format.unwrap_or_else(|| self.config.display.format.as_output());
        match format {
            OutputFormat::Json => {
                let value = output::json::inventory_json(
                    self.ledger.inventory(),
                    self.ledger.available_count(),
                );
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Plain => output::text::print_plain(
                self.ledger.inventory(),
                self.ledger.available_count(),
                &self.config.display.currency,
            ),
            OutputFormat::Table => output::text::print_table(
                self.ledger.inventory(),
                self.ledger.available_count(),
                &self.config.display.currency,
                self.color,
            ),
        }
        Ok(())
    }

    fn feedback(&self, message: &str) {
        if !self.quiet {
            println!("{}", output::text::success(message, self.color));
        }
    }

    fn warn(&self, message: &str) {
        println!("{}", output::text::warning(message, self.color));
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add <title> <author> <price> <rent_cost>   Add a book");
    println!("  delete <title>                             Remove unrented copies of a title");
    println!("  rent <title>                               Check a book out");
    println!("  return <title>                             Check a book back in");
    println!("  list [table|plain|json]                    Show the inventory");
    println!("  count                                      Show the available count");
    println!("  export                                     Dump the inventory as JSON");
    println!("  quit                                       End the session");
}
