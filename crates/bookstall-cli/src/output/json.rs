//! JSON output for the inventory.

use bookstall_core::BookRecord;

/// Convert a record to JSON for output.
pub fn book_json(record: &BookRecord) -> serde_json::Value {
    serde_json::json!({
        "id": record.id,
        "title": record.title,
        "author": record.author,
        "price": record.price,
        "rent_cost": record.rent_cost,
        "rented": record.rented,
        "status": record.status(),
        "added_at": record.added_at,
    })
}

/// Convert the full inventory plus the available count to JSON.
pub fn inventory_json(records: &[BookRecord], available: i64) -> serde_json::Value {
    let books: Vec<serde_json::Value> = records.iter().map(book_json).collect();
    serde_json::json!({
        "books": books,
        "available": available,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstall_core::{InventoryLedger, NewBook};

    #[test]
    fn test_inventory_json_shape() {
        let mut ledger = InventoryLedger::new();
        ledger.add_book(NewBook::new("Dune", "Herbert", 10.0, 2.0));
        assert!(ledger.rent_book("Dune"));

        let value = inventory_json(ledger.inventory(), ledger.available_count());
        assert_eq!(value["available"], 0);
        assert_eq!(value["books"].as_array().expect("array").len(), 1);
        assert_eq!(value["books"][0]["title"], "Dune");
        assert_eq!(value["books"][0]["rented"], true);
        assert_eq!(value["books"][0]["status"], "Rented");
    }
}
