//! # Bookstall Core
//!
//! Core library for Bookstall - a small book rental inventory tracker.
//!
//! This crate provides the inventory ledger and data model independent of
//! the CLI interface. Everything is in-memory and single-threaded: the
//! ledger lives exactly as long as the process that owns it.
//!
//! ## Architecture
//!
//! - **inventory**: Book records, the inventory ledger, and the seed format
//! - **error**: Error types for the seed/data boundary

pub mod error;
pub mod inventory;

pub use error::{InventoryError, Result};
pub use inventory::{BookRecord, InventoryLedger, NewBook};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
