//!
//! Dashboard configuration loaded from environment variables.
//!
//! Controls the ledger service endpoint and the optional wallet provider
//! endpoint. A missing `WALLET_RPC_URL` means no provider is available and
//! the dashboard runs without signing capability.

use std::env;
use tracing::info;

/// Default ledger service endpoint (local development backend).
const DEFAULT_LEDGER_API_URL: &str = "http://127.0.0.1:8000";

/// Configuration for the dashboard client.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
	/// Base URL of the balance-ledger HTTP service.
	pub ledger_api_url: String,
	/// JSON-RPC endpoint of the wallet provider, if one is installed.
	pub wallet_rpc_url: Option<String>,
}

impl DashboardConfig {
	/// Load configuration from environment variables.
	///
	/// Environment variables:
	/// - `LEDGER_API_URL`: ledger service base URL (default `http://127.0.0.1:8000`)
	/// - `WALLET_RPC_URL`: wallet provider JSON-RPC endpoint (optional; when
	///   unset, no provider is resolved)
	pub fn from_env() -> Self {
		let ledger_api_url =
			env::var("LEDGER_API_URL").unwrap_or_else(|_| DEFAULT_LEDGER_API_URL.to_string());
		info!("Ledger API URL: {}", ledger_api_url);

		let wallet_rpc_url = env::var("WALLET_RPC_URL").ok();
		match &wallet_rpc_url {
			Some(url) => info!("Wallet provider RPC URL: {}", url),
			None => info!("No wallet provider RPC URL configured"),
		}

		Self {
			ledger_api_url,
			wallet_rpc_url,
		}
	}
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			ledger_api_url: DEFAULT_LEDGER_API_URL.to_string(),
			wallet_rpc_url: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_points_at_local_ledger() {
		let config = DashboardConfig::default();
		assert_eq!(config.ledger_api_url, "http://127.0.0.1:8000");
		assert!(config.wallet_rpc_url.is_none());
	}
}
