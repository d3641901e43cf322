//!
//! HTTP client for the remote balance-ledger service.
//!
//! This module provides an async client for the ledger service's REST
//! endpoints: wallet session management, balance queries, fund-movement
//! operations, and the transaction history. All methods are async and
//! designed for use with Tokio.

use super::types::*;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Balance-ledger service client
#[derive(Clone)]
pub struct HttpLedgerClient {
	/// The underlying HTTP client.
	http_client: Client,
	/// The base URL of the ledger service.
	base_url: String,
}

impl HttpLedgerClient {
	/// Create a new ledger client.
	///
	/// # Arguments
	/// * `base_url` - The base URL of the ledger service, without a trailing slash.
	pub fn new(base_url: String) -> Self {
		let http_client = Client::builder()
			.timeout(Duration::from_secs(30))
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			base_url,
		}
	}

	/// Execute a GET request against a ledger endpoint.
	async fn get(&self, path: &str) -> Result<serde_json::Value, LedgerError> {
		let url = format!("{}{}", self.base_url, path);
		debug!("Ledger GET {}", url);

		let response = self.http_client.get(&url).send().await?;
		Self::read_json(response).await
	}

	/// Execute a POST request with a JSON body against a ledger endpoint.
	async fn post(
		&self,
		path: &str,
		body: serde_json::Value,
	) -> Result<serde_json::Value, LedgerError> {
		let url = format!("{}{}", self.base_url, path);
		debug!("Ledger POST {}", url);

		let response = self
			.http_client
			.post(&url)
			.header("Content-Type", "application/json")
			.json(&body)
			.send()
			.await?;
		Self::read_json(response).await
	}

	/// Check the response status and decode the JSON payload.
	async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, LedgerError> {
		let status = response.status();
		if !status.is_success() {
			let message = response.text().await.unwrap_or_default();
			return Err(LedgerError::Api {
				status: status.as_u16(),
				message,
			});
		}

		Ok(response.json().await?)
	}
}

#[async_trait::async_trait]
impl LedgerApi for HttpLedgerClient {
	async fn connect_wallet(&self) -> Result<Vec<String>, LedgerError> {
		let response = self.post("/wallet/connect", serde_json::Value::Null).await?;
		Ok(serde_json::from_value(response)?)
	}

	async fn wallet_status(&self) -> Result<Vec<String>, LedgerError> {
		let response = self.get("/wallet/status").await?;
		Ok(serde_json::from_value(response)?)
	}

	async fn wallet_balance(&self, address: &str) -> Result<f64, LedgerError> {
		let response = self.post("/balance", json!({ "address": address })).await?;
		let balance: BalanceResponse = serde_json::from_value(response)?;
		Ok(balance.balance)
	}

	async fn contract_balance(&self) -> Result<f64, LedgerError> {
		let response = self.get("/balance/contract").await?;
		let balance: ContractBalanceResponse = serde_json::from_value(response)?;
		Ok(balance.contract_balance)
	}

	async fn deposit(&self, signed_tx: &str, amount: f64) -> Result<(), LedgerError> {
		self.post(
			"/deposit",
			json!({ "signed_tx": signed_tx, "amount_in_ether": amount }),
		)
		.await?;
		Ok(())
	}

	async fn withdraw(&self, signed_tx: &str, amount: f64) -> Result<(), LedgerError> {
		self.post(
			"/withdraw",
			json!({ "signed_tx": signed_tx, "amount_in_ether": amount }),
		)
		.await?;
		Ok(())
	}

	async fn transfer(
		&self,
		signed_tx: &str,
		to_address: &str,
		amount: f64,
	) -> Result<(), LedgerError> {
		self.post(
			"/transfer",
			json!({
				"signed_tx": signed_tx,
				"to_address": to_address,
				"amount_in_ether": amount,
			}),
		)
		.await?;
		Ok(())
	}

	async fn transactions(&self) -> Result<Vec<TransactionRecord>, LedgerError> {
		let response = self.get("/transactions").await?;
		let envelope: TransactionsResponse = serde_json::from_value(response)?;
		Ok(envelope.transactions)
	}

	async fn record_transfer(&self, record: &TransactionRecord) -> Result<bool, LedgerError> {
		let response = self
			.post("/transaction", serde_json::to_value(record)?)
			.await?;
		Ok(serde_json::from_value(response)?)
	}
}
