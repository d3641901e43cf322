//! Types for the wallet provider capability.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::utils::ether_to_wei_hex;

/// Error code a provider returns when the wallet owner rejects a request
/// (EIP-1193).
pub const USER_REJECTED_CODE: i64 = 4001;

/// Gas limit for a plain native value transfer (21000).
pub const NATIVE_TRANSFER_GAS: &str = "0x5208";

/// A value-transfer request handed to the provider for signing and broadcast.
///
/// Field names follow the provider's `eth_sendTransaction` parameter object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRequest {
	/// Sending account address.
	pub from: String,
	/// Destination address.
	pub to: String,
	/// Gas limit as a hex string.
	pub gas: String,
	/// Transfer value in wei as a hex string.
	pub value: String,
	/// Call data; empty for plain transfers.
	pub data: String,
}

impl TransactionRequest {
	/// Build a native value transfer of `amount` ether from `from` to `to`.
	pub fn native_transfer(from: &str, to: &str, amount: f64) -> Self {
		Self {
			from: from.to_string(),
			to: to.to_string(),
			gas: NATIVE_TRANSFER_GAS.to_string(),
			value: ether_to_wei_hex(amount),
			data: "0x".to_string(),
		}
	}
}

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
pub struct RpcResponse {
	pub result: Option<serde_json::Value>,
	pub error: Option<RpcErrorBody>,
}

/// Error object inside a JSON-RPC response.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorBody {
	pub code: i64,
	pub message: String,
}

impl RpcErrorBody {
	/// Whether this error means the wallet owner declined the request.
	pub fn is_rejection(&self) -> bool {
		self.code == USER_REJECTED_CODE
	}
}

/// Error types for wallet provider operations
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
	#[error("request rejected by the wallet owner")]
	Rejected,

	#[error("provider error {code}: {message}")]
	Rpc { code: i64, message: String },

	#[error("no result returned")]
	NoData,

	#[error("HTTP error: {0}")]
	HttpError(#[from] reqwest::Error),

	#[error("JSON parse error: {0}")]
	JsonError(#[from] serde_json::Error),
}

impl From<RpcErrorBody> for ProviderError {
	fn from(body: RpcErrorBody) -> Self {
		if body.is_rejection() {
			ProviderError::Rejected
		} else {
			ProviderError::Rpc {
				code: body.code,
				message: body.message,
			}
		}
	}
}

impl ProviderError {
	/// Whether this error is an intentional cancellation by the wallet
	/// owner, which is never surfaced as a failure.
	pub fn is_rejection(&self) -> bool {
		matches!(self, ProviderError::Rejected)
	}
}

/// Capability interface of an external wallet provider.
///
/// The standard injected-provider contract reduced to the three calls the
/// dashboard needs: prompt for account access, read already-authorized
/// accounts, and sign-and-broadcast a value transaction.
#[async_trait::async_trait]
pub trait WalletProvider: Send + Sync {
	/// Request account access, prompting the wallet owner if necessary.
	async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

	/// Return already-authorized accounts without prompting.
	async fn accounts(&self) -> Result<Vec<String>, ProviderError>;

	/// Ask the provider to sign and broadcast a transaction.
	///
	/// Returns the transaction hash produced by the provider.
	async fn send_transaction(
		&self,
		request: &TransactionRequest,
	) -> Result<String, ProviderError>;
}

/// A wallet provider resolved once at startup.
///
/// The explicit `Absent` variant replaces the original's nullable global:
/// callers must handle the no-provider case rather than trip over a missing
/// object at call time.
#[derive(Clone)]
pub enum ProviderHandle {
	/// A provider is installed and reachable.
	Detected(Arc<dyn WalletProvider>),
	/// No provider is installed.
	Absent,
}

impl ProviderHandle {
	/// The provider, if one was detected.
	pub fn get(&self) -> Option<&Arc<dyn WalletProvider>> {
		match self {
			ProviderHandle::Detected(provider) => Some(provider),
			ProviderHandle::Absent => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_native_transfer_request() {
		let request = TransactionRequest::native_transfer("0xabc", "0xdef", 1.5);
		assert_eq!(request.from, "0xabc");
		assert_eq!(request.to, "0xdef");
		assert_eq!(request.gas, "0x5208");
		assert_eq!(request.value, "0x14d1120d7b160000");
		assert_eq!(request.data, "0x");
	}

	#[test]
	fn test_rejection_code_maps_to_rejected() {
		let body = RpcErrorBody {
			code: USER_REJECTED_CODE,
			message: "User denied transaction signature".to_string(),
		};
		assert!(ProviderError::from(body).is_rejection());

		let body = RpcErrorBody {
			code: -32602,
			message: "invalid params".to_string(),
		};
		let error = ProviderError::from(body);
		assert!(!error.is_rejection());
		assert!(matches!(error, ProviderError::Rpc { code: -32602, .. }));
	}

	#[test]
	fn test_rpc_response_parses_error_body() {
		let raw = r#"{"jsonrpc":"2.0","id":1,"error":{"code":4001,"message":"User rejected the request."}}"#;
		let response: RpcResponse = serde_json::from_str(raw).unwrap();
		assert!(response.result.is_none());
		assert!(response.error.unwrap().is_rejection());
	}
}
