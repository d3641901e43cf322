//!
//! JSON-RPC client for an external wallet provider.
//!
//! This module provides an async client that speaks the standard
//! injected-provider contract over HTTP JSON-RPC: requesting account access,
//! reading authorized accounts, and submitting transactions for signing and
//! broadcast. The provider owns all key material and transaction state; the
//! dashboard only sees addresses and transaction hashes.

use super::types::*;
use reqwest::Client;
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// Wallet provider client speaking JSON-RPC 2.0 over HTTP
pub struct JsonRpcWalletProvider {
	/// The underlying HTTP client for RPC calls.
	http_client: Client,
	/// The provider's JSON-RPC endpoint.
	rpc_url: String,
	/// Monotonic request id counter.
	next_id: AtomicU64,
}

impl JsonRpcWalletProvider {
	/// Create a new provider client for the given JSON-RPC endpoint.
	pub fn new(rpc_url: String) -> Self {
		let http_client = Client::builder()
			.timeout(Duration::from_secs(30))
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			rpc_url,
			next_id: AtomicU64::new(1),
		}
	}

	/// Execute a JSON-RPC request and unwrap the result payload.
	///
	/// A provider error carrying the user-rejection code is mapped to
	/// `ProviderError::Rejected` so callers can treat cancellation
	/// distinctly from genuine failures.
	async fn request(
		&self,
		method: &str,
		params: serde_json::Value,
	) -> Result<serde_json::Value, ProviderError> {
		let id = self.next_id.fetch_add(1, Ordering::Relaxed);
		let request_body = json!({
			"jsonrpc": "2.0",
			"id": id,
			"method": method,
			"params": params,
		});

		debug!("Provider request {}: {}", id, method);

		let response = self
			.http_client
			.post(&self.rpc_url)
			.header("Content-Type", "application/json")
			.json(&request_body)
			.send()
			.await?;

		if !response.status().is_success() {
			return Err(ProviderError::Rpc {
				code: response.status().as_u16() as i64,
				message: format!("HTTP error: {}", response.status()),
			});
		}

		let response: RpcResponse = response.json().await?;

		if let Some(error) = response.error {
			return Err(error.into());
		}

		response.result.ok_or(ProviderError::NoData)
	}
}

#[async_trait::async_trait]
impl WalletProvider for JsonRpcWalletProvider {
	async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
		let result = self.request("eth_requestAccounts", json!([])).await?;
		Ok(serde_json::from_value(result)?)
	}

	async fn accounts(&self) -> Result<Vec<String>, ProviderError> {
		let result = self.request("eth_accounts", json!([])).await?;
		Ok(serde_json::from_value(result)?)
	}

	async fn send_transaction(
		&self,
		request: &TransactionRequest,
	) -> Result<String, ProviderError> {
		let result = self
			.request("eth_sendTransaction", json!([request]))
			.await?;
		Ok(serde_json::from_value(result)?)
	}
}
