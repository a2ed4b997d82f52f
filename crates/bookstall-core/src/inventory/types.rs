//! Core data types for the inventory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single book held by the stall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    /// Unique identifier for this record (descriptive; lookup is by title)
    pub id: Uuid,

    /// Title, used as the lookup key (duplicates permitted)
    pub title: String,

    /// Author, descriptive only
    pub author: String,

    /// Purchase price, descriptive only
    pub price: f64,

    /// Cost of renting, descriptive only
    pub rent_cost: f64,

    /// Whether this copy is currently checked out
    pub rented: bool,

    /// When this record was added
    pub added_at: DateTime<Utc>,
}

impl BookRecord {
    /// Human-readable status string for display.
    pub fn status(&self) -> &'static str {
        if self.rented {
            "Rented"
        } else {
            "Available"
        }
    }
}

/// Input for adding a book to the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    /// Title (lookup key)
    pub title: String,

    /// Author
    pub author: String,

    /// Purchase price
    pub price: f64,

    /// Cost of renting
    pub rent_cost: f64,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
        rent_cost: f64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price,
            rent_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_builder() {
        let book = NewBook::new("Dune", "Herbert", 10.0, 2.0);

        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.price, 10.0);
        assert_eq!(book.rent_cost, 2.0);
    }

    #[test]
    fn test_record_status_label() {
        let mut record = BookRecord {
            id: Uuid::new_v4(),
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            price: 10.0,
            rent_cost: 2.0,
            rented: false,
            added_at: Utc::now(),
        };
        assert_eq!(record.status(), "Available");

        record.rented = true;
        assert_eq!(record.status(), "Rented");
    }
}
