//! Error types for Bookstall core operations.
//!
//! The ledger itself never errors: rent and return report failure through
//! their boolean results, and add/delete are unconditional. Errors exist
//! only at the data boundary, where seed files are parsed and validated.

use thiserror::Error;

/// Result type alias for Bookstall operations.
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Core error type for Bookstall operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Seed file could not be parsed or rendered
    #[error("Seed error: {0}")]
    Seed(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Seed(err.to_string())
    }
}
