//! Output formatting helpers for the CLI.
//!
//! `text` renders the inventory as a table or plain rows; `json` builds
//! machine-readable values.

pub mod json;
pub mod text;

/// Inventory listing format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
    Json,
}
