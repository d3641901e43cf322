//! Ledger service integration module
//!
//! This module provides the client and types for interacting with the remote
//! balance-ledger HTTP service. The ledger is the backend of record for
//! balances and fund-movement operations; the dashboard never computes a
//! balance itself.

/// HTTP client for the ledger service endpoints
mod client;
/// Trait and wire types for ledger data structures
mod types;

pub use client::HttpLedgerClient;
pub use types::*;
