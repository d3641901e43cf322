//! Types for the balance-ledger HTTP service integration

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Per-account balance payload from `POST /balance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
	/// The account's ledger balance in ether.
	pub balance: f64,
}

/// Pool balance payload from `GET /balance/contract`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractBalanceResponse {
	/// The contract/pool balance in ether.
	#[serde(rename = "contractBalance")]
	pub contract_balance: f64,
}

/// A fund movement recorded by the ledger service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
	/// Source address.
	pub from: String,
	/// Destination address.
	pub to: String,
	/// Amount moved, in ether.
	pub amount: f64,
	/// Operation kind that produced the record (deposit, withdraw, transfer).
	#[serde(rename = "transactionType")]
	pub transaction_type: String,
	/// Unix timestamp of the movement.
	pub timestamp: i64,
}

impl TransactionRecord {
	/// Build a record for a native transfer broadcast just now.
	pub fn native_transfer(from: &str, to: &str, amount: f64) -> Self {
		Self {
			from: from.to_string(),
			to: to.to_string(),
			amount,
			transaction_type: "transfer".to_string(),
			timestamp: Utc::now().timestamp(),
		}
	}
}

/// Envelope of `GET /transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
	pub transactions: Vec<TransactionRecord>,
}

/// Error types for ledger service operations
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
	#[error("ledger service error {status}: {message}")]
	Api { status: u16, message: String },

	#[error("HTTP error: {0}")]
	HttpError(#[from] reqwest::Error),

	#[error("JSON parse error: {0}")]
	JsonError(#[from] serde_json::Error),
}

/// Interface to the remote balance-ledger service.
///
/// Every hard operation lives on the other side of this boundary; the
/// dashboard only shuttles requests and responses. Faults propagate to the
/// caller, who owns user notification.
#[async_trait::async_trait]
pub trait LedgerApi: Send + Sync {
	/// Register a wallet session with the ledger service.
	async fn connect_wallet(&self) -> Result<Vec<String>, LedgerError>;

	/// Addresses the ledger service currently considers connected.
	async fn wallet_status(&self) -> Result<Vec<String>, LedgerError>;

	/// Ledger balance of the given account, in ether.
	async fn wallet_balance(&self, address: &str) -> Result<f64, LedgerError>;

	/// Balance held by the pool contract, in ether.
	async fn contract_balance(&self) -> Result<f64, LedgerError>;

	/// Submit a deposit backed by a wallet-signed transaction.
	async fn deposit(&self, signed_tx: &str, amount: f64) -> Result<(), LedgerError>;

	/// Submit a withdrawal backed by a wallet-signed transaction.
	async fn withdraw(&self, signed_tx: &str, amount: f64) -> Result<(), LedgerError>;

	/// Submit a transfer to `to_address` backed by a wallet-signed transaction.
	async fn transfer(
		&self,
		signed_tx: &str,
		to_address: &str,
		amount: f64,
	) -> Result<(), LedgerError>;

	/// Full movement history known to the ledger service.
	async fn transactions(&self) -> Result<Vec<TransactionRecord>, LedgerError>;

	/// Report an externally broadcast transfer for inclusion in the history.
	async fn record_transfer(&self, record: &TransactionRecord) -> Result<bool, LedgerError>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_transactions_response_wire_format() {
		let raw = r#"{
			"transactions": [
				{"from": "0xaaa", "to": "0xbbb", "amount": 2.5, "transactionType": "deposit", "timestamp": 1700000000}
			]
		}"#;
		let response: TransactionsResponse = serde_json::from_str(raw).unwrap();
		assert_eq!(response.transactions.len(), 1);
		let record = &response.transactions[0];
		assert_eq!(record.from, "0xaaa");
		assert_eq!(record.transaction_type, "deposit");
		assert_eq!(record.timestamp, 1_700_000_000);
	}

	#[test]
	fn test_contract_balance_wire_format() {
		let response: ContractBalanceResponse =
			serde_json::from_str(r#"{"contractBalance": 10.0}"#).unwrap();
		assert_eq!(response.contract_balance, 10.0);
	}

	#[test]
	fn test_native_transfer_record_shape() {
		let record = TransactionRecord::native_transfer("0xaaa", "0xbbb", 0.25);
		assert_eq!(record.transaction_type, "transfer");
		assert!(record.timestamp > 0);
		let encoded = serde_json::to_value(&record).unwrap();
		assert!(encoded.get("transactionType").is_some());
	}
}
