//! Text and table output for the inventory.

use bookstall_core::BookRecord;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;

/// Style a success feedback line.
pub fn success(message: &str, color: bool) -> String {
    if color {
        message.green().to_string()
    } else {
        message.to_string()
    }
}

/// Style a warning feedback line.
pub fn warning(message: &str, color: bool) -> String {
    if color {
        message.yellow().to_string()
    } else {
        message.to_string()
    }
}

/// Print the inventory as a table, followed by the available count.
pub fn print_table(records: &[BookRecord], available: i64, currency: &str, color: bool) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Title", "Author", "Price", "Rent", "Status", "Added"]);

    for record in records {
        let status = if color {
            let fg = if record.rented {
                Color::Red
            } else {
                Color::Green
            };
            Cell::new(record.status()).fg(fg)
        } else {
            Cell::new(record.status())
        };
        table.add_row(vec![
            Cell::new(&record.title),
            Cell::new(&record.author),
            Cell::new(format!("{}{:.2}", currency, record.price)),
            Cell::new(format!("{}{:.2}", currency, record.rent_cost)),
            status,
            Cell::new(record.added_at.format("%Y-%m-%d").to_string()),
        ]);
    }

    println!("{table}");
    println!("Available: {}", available);
}

/// Print the inventory as plain rows, followed by the available count.
pub fn print_plain(records: &[BookRecord], available: i64, currency: &str) {
    for record in records {
        println!(
            "{} | {} | {}{:.2} | {}{:.2} | {}",
            record.title,
            record.author,
            currency,
            record.price,
            currency,
            record.rent_cost,
            record.status()
        );
    }
    println!("Available: {}", available);
}
