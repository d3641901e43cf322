//! Wallet service wrapping the provider and the ledger history.
//!
//! The bridge owns the user-facing policy around raw provider calls: which
//! failures become notices, which stay in the log, and which are silent
//! because the wallet owner cancelled on purpose. Callers always get a
//! usable value back (`[]` or `false`), never an error.

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::ledger::{LedgerApi, TransactionRecord};
use crate::notify::UserNotifier;
use crate::provider::{ProviderHandle, TransactionRequest};
use crate::utils::{ether_to_wei, format_ether};

/// User-facing wallet operations over the provider and ledger bridges
pub struct WalletBridge {
	provider: ProviderHandle,
	ledger: Arc<dyn LedgerApi>,
	notifier: Arc<dyn UserNotifier>,
}

impl WalletBridge {
	pub fn new(
		provider: ProviderHandle,
		ledger: Arc<dyn LedgerApi>,
		notifier: Arc<dyn UserNotifier>,
	) -> Self {
		Self {
			provider,
			ledger,
			notifier,
		}
	}

	/// Request account access from the provider.
	///
	/// An absent provider and genuine failures are surfaced; a rejection by
	/// the wallet owner is swallowed silently. Returns `[]` on any failure.
	pub async fn connect(&self) -> Vec<String> {
		let Some(provider) = self.provider.get() else {
			self.notifier.error("Please install a wallet provider");
			return Vec::new();
		};

		match provider.request_accounts().await {
			Ok(accounts) => accounts,
			Err(e) if e.is_rejection() => {
				debug!("Wallet connection rejected by the owner");
				Vec::new()
			}
			Err(e) => {
				error!("Failed to connect wallet: {}", e);
				self.notifier.error("Failed to connect wallet");
				Vec::new()
			}
		}
	}

	/// Already-authorized accounts, without prompting the owner.
	///
	/// Failures are logged, never surfaced. Returns `[]` when no provider
	/// is installed or on any failure.
	pub async fn connected_accounts(&self) -> Vec<String> {
		let Some(provider) = self.provider.get() else {
			return Vec::new();
		};

		match provider.accounts().await {
			Ok(accounts) => accounts,
			Err(e) => {
				error!("Failed to check wallet connection: {}", e);
				Vec::new()
			}
		}
	}

	/// Sign and broadcast a native value transfer from the connected
	/// account, then report it to the ledger history.
	///
	/// The provider owns all transaction state; the only local side effect
	/// is the history record, whose failure is logged but does not fail the
	/// transfer. Returns whether the transfer was broadcast.
	pub async fn send_native_transfer(&self, to_address: &str, amount: f64) -> bool {
		let Some(provider) = self.provider.get() else {
			self.notifier.error("Please install a wallet provider");
			return false;
		};

		let accounts = self.connected_accounts().await;
		let Some(account) = accounts.first() else {
			self.notifier.error("Please connect your wallet first");
			return false;
		};

		info!(
			"Requesting signature for a {} ether transfer to {}",
			format_ether(ether_to_wei(amount)),
			to_address
		);
		let request = TransactionRequest::native_transfer(account, to_address, amount);

		match provider.send_transaction(&request).await {
			Ok(tx_hash) => {
				info!("Broadcast native transfer {}", tx_hash);
				self.notifier.success("Transaction sent successfully");

				let record = TransactionRecord::native_transfer(account, to_address, amount);
				if let Err(e) = self.ledger.record_transfer(&record).await {
					error!("Failed to record transfer with the ledger: {}", e);
				}
				true
			}
			Err(e) if e.is_rejection() => {
				debug!("Native transfer rejected by the owner");
				false
			}
			Err(e) => {
				error!("Failed to send transaction: {}", e);
				self.notifier.error("Failed to send transaction");
				false
			}
		}
	}

	/// Fetch the full movement history from the ledger service.
	///
	/// Failures are logged, never surfaced. Returns `[]` on failure.
	pub async fn all_transactions(&self) -> Vec<TransactionRecord> {
		match self.ledger.transactions().await {
			Ok(transactions) => transactions,
			Err(e) => {
				error!("Failed to fetch transactions: {}", e);
				Vec::new()
			}
		}
	}

	/// Register a wallet session with the ledger service itself.
	///
	/// The server-side counterpart of `connect`; failures are logged only.
	pub async fn server_connect(&self) -> Vec<String> {
		match self.ledger.connect_wallet().await {
			Ok(addresses) => addresses,
			Err(e) => {
				error!("Ledger wallet connection error: {}", e);
				Vec::new()
			}
		}
	}

	/// Addresses the ledger service currently considers connected.
	///
	/// Failures are logged only.
	pub async fn server_wallet_status(&self) -> Vec<String> {
		match self.ledger.wallet_status().await {
			Ok(addresses) => addresses,
			Err(e) => {
				error!("Ledger wallet status error: {}", e);
				Vec::new()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ledger::LedgerError;
	use crate::provider::{ProviderError, WalletProvider};
	use std::sync::Mutex;

	#[derive(Default)]
	struct FakeProvider {
		accounts: Vec<String>,
		reject_requests: bool,
		reject_send: bool,
	}

	#[async_trait::async_trait]
	impl WalletProvider for FakeProvider {
		async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
			if self.reject_requests {
				return Err(ProviderError::Rejected);
			}
			Ok(self.accounts.clone())
		}

		async fn accounts(&self) -> Result<Vec<String>, ProviderError> {
			Ok(self.accounts.clone())
		}

		async fn send_transaction(
			&self,
			_request: &TransactionRequest,
		) -> Result<String, ProviderError> {
			if self.reject_send {
				return Err(ProviderError::Rejected);
			}
			Ok("0xsignedtx".to_string())
		}
	}

	#[derive(Default)]
	struct FakeLedger {
		recorded: Mutex<Vec<TransactionRecord>>,
		fail_transactions: bool,
	}

	#[async_trait::async_trait]
	impl LedgerApi for FakeLedger {
		async fn connect_wallet(&self) -> Result<Vec<String>, LedgerError> {
			Ok(vec!["0xserver".to_string()])
		}

		async fn wallet_status(&self) -> Result<Vec<String>, LedgerError> {
			Ok(Vec::new())
		}

		async fn wallet_balance(&self, _address: &str) -> Result<f64, LedgerError> {
			Ok(0.0)
		}

		async fn contract_balance(&self) -> Result<f64, LedgerError> {
			Ok(0.0)
		}

		async fn deposit(&self, _signed_tx: &str, _amount: f64) -> Result<(), LedgerError> {
			Ok(())
		}

		async fn withdraw(&self, _signed_tx: &str, _amount: f64) -> Result<(), LedgerError> {
			Ok(())
		}

		async fn transfer(
			&self,
			_signed_tx: &str,
			_to_address: &str,
			_amount: f64,
		) -> Result<(), LedgerError> {
			Ok(())
		}

		async fn transactions(&self) -> Result<Vec<TransactionRecord>, LedgerError> {
			if self.fail_transactions {
				return Err(LedgerError::Api {
					status: 502,
					message: "bad gateway".to_string(),
				});
			}
			Ok(vec![TransactionRecord::native_transfer("0xa", "0xb", 1.0)])
		}

		async fn record_transfer(&self, record: &TransactionRecord) -> Result<bool, LedgerError> {
			self.recorded.lock().unwrap().push(record.clone());
			Ok(true)
		}
	}

	#[derive(Default)]
	struct RecordingNotifier {
		successes: Mutex<Vec<String>>,
		errors: Mutex<Vec<String>>,
	}

	impl UserNotifier for RecordingNotifier {
		fn success(&self, message: &str) {
			self.successes.lock().unwrap().push(message.to_string());
		}

		fn error(&self, message: &str) {
			self.errors.lock().unwrap().push(message.to_string());
		}
	}

	fn bridge(
		provider: ProviderHandle,
		ledger: &Arc<FakeLedger>,
		notifier: &Arc<RecordingNotifier>,
	) -> WalletBridge {
		WalletBridge::new(provider, ledger.clone(), notifier.clone())
	}

	#[tokio::test]
	async fn test_connect_without_provider_is_surfaced() {
		let ledger = Arc::new(FakeLedger::default());
		let notifier = Arc::new(RecordingNotifier::default());
		let bridge = bridge(ProviderHandle::Absent, &ledger, &notifier);

		assert!(bridge.connect().await.is_empty());
		assert_eq!(
			*notifier.errors.lock().unwrap(),
			vec!["Please install a wallet provider"]
		);
	}

	#[tokio::test]
	async fn test_connect_rejection_is_silent() {
		let ledger = Arc::new(FakeLedger::default());
		let notifier = Arc::new(RecordingNotifier::default());
		let provider = Arc::new(FakeProvider {
			reject_requests: true,
			..Default::default()
		});
		let bridge = bridge(ProviderHandle::Detected(provider), &ledger, &notifier);

		assert!(bridge.connect().await.is_empty());
		assert!(notifier.errors.lock().unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_send_without_connected_account() {
		let ledger = Arc::new(FakeLedger::default());
		let notifier = Arc::new(RecordingNotifier::default());
		let provider = Arc::new(FakeProvider::default());
		let bridge = bridge(ProviderHandle::Detected(provider), &ledger, &notifier);

		assert!(!bridge.send_native_transfer("0xbob", 0.5).await);
		assert_eq!(
			*notifier.errors.lock().unwrap(),
			vec!["Please connect your wallet first"]
		);
	}

	#[tokio::test]
	async fn test_send_success_records_transfer() {
		let ledger = Arc::new(FakeLedger::default());
		let notifier = Arc::new(RecordingNotifier::default());
		let provider = Arc::new(FakeProvider {
			accounts: vec!["0xa11ce".to_string()],
			..Default::default()
		});
		let bridge = bridge(ProviderHandle::Detected(provider), &ledger, &notifier);

		assert!(bridge.send_native_transfer("0xbob", 0.5).await);
		assert_eq!(
			*notifier.successes.lock().unwrap(),
			vec!["Transaction sent successfully"]
		);

		let recorded = ledger.recorded.lock().unwrap();
		assert_eq!(recorded.len(), 1);
		assert_eq!(recorded[0].from, "0xa11ce");
		assert_eq!(recorded[0].to, "0xbob");
		assert_eq!(recorded[0].amount, 0.5);
	}

	#[tokio::test]
	async fn test_send_rejection_is_silent() {
		let ledger = Arc::new(FakeLedger::default());
		let notifier = Arc::new(RecordingNotifier::default());
		let provider = Arc::new(FakeProvider {
			accounts: vec!["0xa11ce".to_string()],
			reject_send: true,
			..Default::default()
		});
		let bridge = bridge(ProviderHandle::Detected(provider), &ledger, &notifier);

		assert!(!bridge.send_native_transfer("0xbob", 0.5).await);
		assert!(notifier.errors.lock().unwrap().is_empty());
		assert!(ledger.recorded.lock().unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_history_failure_falls_back_to_empty() {
		let ledger = Arc::new(FakeLedger {
			fail_transactions: true,
			..Default::default()
		});
		let notifier = Arc::new(RecordingNotifier::default());
		let provider = Arc::new(FakeProvider::default());
		let bridge = bridge(ProviderHandle::Detected(provider), &ledger, &notifier);

		assert!(bridge.all_transactions().await.is_empty());
		assert!(notifier.errors.lock().unwrap().is_empty());
	}
}
