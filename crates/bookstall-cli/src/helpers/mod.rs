//! Helper utilities for the CLI.

pub mod parsing;
