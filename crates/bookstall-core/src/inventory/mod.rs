//! Inventory ledger and data model.
//!
//! The ledger owns an ordered list of book records plus a separately
//! maintained availability counter. Lookup is by title and the first
//! match wins; titles are not required to be unique.

mod ledger;
pub mod seed;
mod types;

pub use ledger::InventoryLedger;
pub use types::{BookRecord, NewBook};
