//! The inventory ledger.
//!
//! The availability counter is maintained incrementally alongside each
//! mutation rather than recomputed from record state. The two can drift:
//! `delete_book` decrements once (floored at zero) whether or not anything
//! was removed, and removes every unrented copy of a duplicated title.
//! That drift is part of the documented contract, not an accident of this
//! implementation.

use chrono::Utc;
use uuid::Uuid;

use super::types::{BookRecord, NewBook};

/// In-memory ledger of book records plus the maintained availability counter.
///
/// Insertion order is preserved and significant: rent and return act on the
/// first record whose title matches. The counter is signed because the
/// mutation rules above can drive it below zero once it has drifted.
#[derive(Debug, Default)]
pub struct InventoryLedger {
    books: Vec<BookRecord>,
    available: i64,
}

impl InventoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record with `rented = false`.
    ///
    /// Always succeeds. No duplicate-title or negative-price validation is
    /// performed. Increments the availability counter by one.
    ///
    /// # Returns
    ///
    /// Returns the id of the created record.
    pub fn add_book(&mut self, book: NewBook) -> Uuid {
        let record = BookRecord {
            id: Uuid::new_v4(),
            title: book.title,
            author: book.author,
            price: book.price,
            rent_cost: book.rent_cost,
            rented: false,
            added_at: Utc::now(),
        };
        let id = record.id;
        self.books.push(record);
        self.available += 1;
        id
    }

    /// Remove every unrented record whose title matches.
    ///
    /// Rented copies stay. The availability counter is decremented exactly
    /// once, floored at zero, whether zero, one, or several records were
    /// removed. Nothing is reported back to the caller.
    pub fn delete_book(&mut self, title: &str) {
        self.books.retain(|book| book.title != title || book.rented);
        self.available = (self.available - 1).max(0);
    }

    /// Rent the first record whose title matches.
    ///
    /// Returns true and decrements the availability counter if that record
    /// was not already rented. Returns false if no title matches or the
    /// first matching record is already checked out; later duplicates are
    /// not considered.
    pub fn rent_book(&mut self, title: &str) -> bool {
        match self.books.iter_mut().find(|book| book.title == title) {
            Some(book) if !book.rented => {
                book.rented = true;
                self.available -= 1;
                true
            }
            _ => false,
        }
    }

    /// Return the first rented record whose title matches.
    ///
    /// Returns true and increments the availability counter on success;
    /// false if no matching rented record exists.
    pub fn return_book(&mut self, title: &str) -> bool {
        match self
            .books
            .iter_mut()
            .find(|book| book.title == title && book.rented)
        {
            Some(book) => {
                book.rented = false;
                self.available += 1;
                true
            }
            None => false,
        }
    }

    /// Ordered read-only view of all records, rented and available.
    pub fn inventory(&self) -> &[BookRecord] {
        &self.books
    }

    /// The maintained availability counter.
    ///
    /// Not guaranteed to equal the number of unrented records; see the
    /// module docs for how the two can drift.
    pub fn available_count(&self) -> i64 {
        self.available
    }

    /// Number of records in the ledger.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the ledger holds no records.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
