//!
//! Utility module for the ledger dashboard.
//!
//! Re-exports amount conversion and formatting helpers for use throughout the codebase.
/// Conversion helpers between decimal ether amounts and wei
pub mod index;

pub use index::{ether_to_wei, ether_to_wei_hex, format_ether};
