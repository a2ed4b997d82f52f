//! Seed file format: a JSON array of books to stock a fresh session with.
//!
//! Seeding is explicit operator input, not persistence; the ledger itself
//! never reads or writes files.

use crate::error::{InventoryError, Result};

use super::types::{BookRecord, NewBook};

/// Parse a seed file's contents into books ready for `add_book`.
///
/// # Errors
///
/// Returns `InventoryError::Seed` if the JSON is malformed, or
/// `InventoryError::InvalidInput` if a record has an empty title.
pub fn from_json(contents: &str) -> Result<Vec<NewBook>> {
    let books: Vec<NewBook> = serde_json::from_str(contents)?;
    for (index, book) in books.iter().enumerate() {
        if book.title.trim().is_empty() {
            return Err(InventoryError::InvalidInput(format!(
                "seed record {}: title is empty",
                index + 1
            )));
        }
    }
    Ok(books)
}

/// Render the current records as pretty JSON.
///
/// The output carries full records (id, rented state, timestamps); loading
/// it back as a seed keeps only the fields a `NewBook` needs.
pub fn to_json(records: &[BookRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
