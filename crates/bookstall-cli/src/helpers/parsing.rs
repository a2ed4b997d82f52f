//! Parsing for session command lines.
//!
//! Numeric parsing happens here, at the presentation boundary: a bad price
//! is reported to the user and the add is never attempted, so no partial
//! state is created.

use bookstall_core::NewBook;

use crate::output::OutputFormat;

/// A parsed session command.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    Add(NewBook),
    Delete(String),
    Rent(String),
    Return(String),
    List(Option<OutputFormat>),
    Count,
    Export,
    Help,
    Quit,
}

/// Parse one line of session input.
pub fn parse_command(line: &str) -> anyhow::Result<SessionCommand> {
    let words = split_words(line)?;
    let Some((command, args)) = words.split_first() else {
        return Err(anyhow::anyhow!("Empty command"));
    };

    match command.as_str() {
        "add" => {
            if args.len() != 4 {
                return Err(anyhow::anyhow!(
                    "Usage: add <title> <author> <price> <rent_cost>"
                ));
            }
            let title = args[0].trim();
            let author = args[1].trim();
            if title.is_empty() {
                return Err(anyhow::anyhow!("Title must not be empty"));
            }
            if author.is_empty() {
                return Err(anyhow::anyhow!("Author must not be empty"));
            }
            let price = parse_price("price", &args[2])?;
            let rent_cost = parse_price("rent cost", &args[3])?;
            Ok(SessionCommand::Add(NewBook::new(
                title, author, price, rent_cost,
            )))
        }
        "delete" => Ok(SessionCommand::Delete(title_arg(command, args)?)),
        "rent" => Ok(SessionCommand::Rent(title_arg(command, args)?)),
        "return" => Ok(SessionCommand::Return(title_arg(command, args)?)),
        "list" => match args {
            [] => Ok(SessionCommand::List(None)),
            [format] => Ok(SessionCommand::List(Some(parse_format(format)?))),
            _ => Err(anyhow::anyhow!("Usage: list [table|plain|json]")),
        },
        "count" => Ok(SessionCommand::Count),
        "export" => Ok(SessionCommand::Export),
        "help" => Ok(SessionCommand::Help),
        "quit" | "exit" => Ok(SessionCommand::Quit),
        other => Err(anyhow::anyhow!("Unknown command \"{}\" (try `help`)", other)),
    }
}

/// Parse a price or rent cost field.
///
/// Only parse failures are rejected; negative values pass through, since
/// the ledger performs no numeric validation of its own.
pub fn parse_price(field: &str, value: &str) -> anyhow::Result<f64> {
    value
        .parse::<f64>()
        .map_err(|_| anyhow::anyhow!("Invalid {}: {} (expected a number)", field, value))
}

/// Split a command line into words, honoring double quotes.
pub fn split_words(line: &str) -> anyhow::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                if in_quotes {
                    // Closing quote ends the word, even an empty one.
                    words.push(std::mem::take(&mut current));
                }
                in_quotes = !in_quotes;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(anyhow::anyhow!("Unterminated quote"));
    }
    if !current.is_empty() {
        words.push(current);
    }
    Ok(words)
}

fn title_arg(command: &str, args: &[String]) -> anyhow::Result<String> {
    if args.is_empty() {
        return Err(anyhow::anyhow!("Usage: {} <title>", command));
    }
    Ok(args.join(" "))
}

fn parse_format(value: &str) -> anyhow::Result<OutputFormat> {
    match value {
        "table" => Ok(OutputFormat::Table),
        "plain" => Ok(OutputFormat::Plain),
        "json" => Ok(OutputFormat::Json),
        other => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table, plain, or json)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_with_quotes() {
        let words = split_words(r#"add "The Left Hand of Darkness" "Le Guin" 9.0 1.5"#)
            .expect("line should split");
        assert_eq!(
            words,
            [
                "add",
                "The Left Hand of Darkness",
                "Le Guin",
                "9.0",
                "1.5"
            ]
        );
    }

    #[test]
    fn test_split_words_unterminated_quote_fails() {
        assert!(split_words(r#"rent "Dune"#).is_err());
    }

    #[test]
    fn test_parse_add() {
        let command = parse_command(r#"add "Dune" "Herbert" 10.0 2.0"#).expect("should parse");
        match command {
            SessionCommand::Add(book) => {
                assert_eq!(book.title, "Dune");
                assert_eq!(book.author, "Herbert");
                assert_eq!(book.price, 10.0);
                assert_eq!(book.rent_cost, 2.0);
            }
            other => panic!("expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_rejects_bad_price() {
        let result = parse_command(r#"add "Dune" "Herbert" ten 2.0"#);
        let message = result.expect_err("should fail").to_string();
        assert!(message.contains("Invalid price"));
    }

    #[test]
    fn test_parse_add_rejects_empty_title() {
        assert!(parse_command(r#"add "" "Herbert" 10.0 2.0"#).is_err());
    }

    #[test]
    fn test_parse_add_accepts_negative_price() {
        // The ledger does not validate numeric ranges, so neither do we.
        let command = parse_command(r#"add "Dune" "Herbert" -1.0 2.0"#).expect("should parse");
        match command {
            SessionCommand::Add(book) => assert_eq!(book.price, -1.0),
            other => panic!("expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_title_commands_join_bare_words() {
        let command = parse_command("rent The Dispossessed").expect("should parse");
        match command {
            SessionCommand::Rent(title) => assert_eq!(title, "The Dispossessed"),
            other => panic!("expected Rent, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_formats() {
        assert!(matches!(
            parse_command("list").expect("should parse"),
            SessionCommand::List(None)
        ));
        assert!(matches!(
            parse_command("list json").expect("should parse"),
            SessionCommand::List(Some(OutputFormat::Json))
        ));
        assert!(parse_command("list fancy").is_err());
    }

    #[test]
    fn test_parse_unknown_command_fails() {
        let message = parse_command("frobnicate").expect_err("should fail").to_string();
        assert!(message.contains("Unknown command"));
    }
}
