//! Operation orchestrator and integration point for the submit workflow.
//!
//! This module defines the `OperationOrchestrator`, which coordinates every
//! component involved in moving funds: the wallet provider (for signing),
//! the ledger service (for submission and balances), and the notifier (for
//! user-facing notices).
//!
//! The orchestrator is responsible for:
//! - Connecting the wallet and remembering the authorized account
//! - Validating a submission before anything leaves the process
//! - Driving each submission through Signing, Submitting and Refreshing
//! - Converting every fault into a user notice, or silence for an
//!   intentional cancellation, so no fault escapes this boundary
//!
//! A submission has exactly one terminal phase, Idle. There is no retry
//! loop and no cancellation of an in-flight submission; a single-flight
//! guard refuses overlapping submissions instead.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};

use crate::dashboard::form::{OperationForm, OperationKind, ValidationError};
use crate::dashboard::state::{BalanceSnapshot, DashboardState, SubmissionPhase};
use crate::ledger::LedgerApi;
use crate::notify::UserNotifier;
use crate::provider::{ProviderHandle, TransactionRequest};

/// Result of driving one submission through the workflow.
///
/// Every fault is converted here; callers never see a raw error.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationOutcome {
	/// The ledger accepted the operation. The balance refresh that follows
	/// reports its own failures and does not change this outcome.
	Completed,
	/// Another submission is in flight; this one was refused.
	Busy,
	/// The form failed validation; nothing left the process.
	Invalid(ValidationError),
	/// No provider installed or no account connected.
	NotConnected,
	/// The wallet owner declined the signature. Not surfaced as an error.
	Cancelled,
	/// The provider failed to sign for a reason other than rejection.
	SigningFailed,
	/// The ledger service refused or failed to accept the operation.
	SubmissionFailed,
}

impl OperationOutcome {
	pub fn is_success(&self) -> bool {
		matches!(self, OperationOutcome::Completed)
	}
}

/// Coordinates the end-to-end submit workflow.
///
/// All collaborators are injected at construction; the orchestrator owns
/// only the in-memory dashboard state.
pub struct OperationOrchestrator {
	provider: ProviderHandle,
	ledger: Arc<dyn LedgerApi>,
	notifier: Arc<dyn UserNotifier>,
	state: Mutex<DashboardState>,
	/// Single-flight guard: set while a submission is in flight.
	in_flight: AtomicBool,
}

impl OperationOrchestrator {
	/// Create a new orchestrator with the given collaborators.
	pub fn new(
		provider: ProviderHandle,
		ledger: Arc<dyn LedgerApi>,
		notifier: Arc<dyn UserNotifier>,
	) -> Self {
		Self {
			provider,
			ledger,
			notifier,
			state: Mutex::new(DashboardState::default()),
			in_flight: AtomicBool::new(false),
		}
	}

	/// Snapshot of the current dashboard state.
	pub fn state(&self) -> DashboardState {
		self.state.lock().unwrap().clone()
	}

	/// Connect the wallet and refresh balances for the authorized account.
	///
	/// Returns the connected account address, or `None` when no provider is
	/// installed, the owner rejected the prompt, or no account was
	/// authorized. Only the absent-provider and genuine-failure cases are
	/// surfaced; rejection is an intentional cancellation and stays silent.
	pub async fn connect(&self) -> Option<String> {
		let Some(provider) = self.provider.get() else {
			self.notifier.error("Please install a wallet provider");
			return None;
		};

		match provider.request_accounts().await {
			Ok(accounts) => {
				let Some(account) = accounts.into_iter().next() else {
					info!("Wallet connect returned no authorized accounts");
					return None;
				};
				info!("Connected wallet account {}", account);
				self.state.lock().unwrap().account = Some(account.clone());
				self.refresh_balances().await;
				Some(account)
			}
			Err(e) if e.is_rejection() => {
				debug!("Wallet connection rejected by the owner");
				None
			}
			Err(e) => {
				error!("Failed to connect wallet: {}", e);
				self.notifier.error("Failed to connect wallet");
				None
			}
		}
	}

	/// Re-fetch both balances and update the snapshot.
	///
	/// The account balance and the contract balance are fetched
	/// concurrently; the snapshot only changes when both fetches succeed.
	/// A failure of either is a single "failed to fetch" notice.
	pub async fn refresh_balances(&self) -> bool {
		let account = self.state.lock().unwrap().account.clone();
		let Some(account) = account else {
			debug!("Skipping balance refresh: no connected account");
			return false;
		};

		let fetched = tokio::try_join!(
			self.ledger.wallet_balance(&account),
			self.ledger.contract_balance(),
		);

		match fetched {
			Ok((balance, contract_balance)) => {
				info!(
					"Balances updated: account {} ether, contract {} ether",
					balance, contract_balance
				);
				self.state.lock().unwrap().balances = BalanceSnapshot {
					balance,
					contract_balance,
				};
				true
			}
			Err(e) => {
				error!("Failed to fetch balances: {}", e);
				self.notifier.error("Failed to fetch balances");
				false
			}
		}
	}

	/// Drive one submission through the workflow.
	///
	/// On success the form is cleared and balances are refreshed. Every
	/// fault is converted to an outcome and, where the taxonomy calls for
	/// it, a user notice; a rejection at the signing step returns the
	/// workflow to idle without any notice.
	pub async fn submit(&self, form: &mut OperationForm) -> OperationOutcome {
		if self.in_flight.swap(true, Ordering::Acquire) {
			warn!("Submission already in progress, refusing a second one");
			return OperationOutcome::Busy;
		}

		let outcome = self.run_submission(form).await;

		self.set_phase(SubmissionPhase::Idle);
		self.in_flight.store(false, Ordering::Release);
		outcome
	}

	async fn run_submission(&self, form: &mut OperationForm) -> OperationOutcome {
		let request = match form.validate() {
			Ok(request) => request,
			Err(e) => {
				self.notifier.error(&e.to_string());
				return OperationOutcome::Invalid(e);
			}
		};

		let Some(provider) = self.provider.get() else {
			self.notifier.error("Please install a wallet provider");
			return OperationOutcome::NotConnected;
		};

		let account = self.state.lock().unwrap().account.clone();
		let Some(account) = account else {
			self.notifier.error("Please connect your wallet first");
			return OperationOutcome::NotConnected;
		};

		info!(
			"Submitting {} of {} ether from {}",
			request.kind, request.amount, account
		);

		self.set_phase(SubmissionPhase::Signing);
		// Deposit and withdraw move funds between the account and the pool,
		// so the signed transaction targets the account itself.
		let destination = request
			.to_address
			.clone()
			.unwrap_or_else(|| account.clone());
		let tx_request = TransactionRequest::native_transfer(&account, &destination, request.amount);

		let signed_tx = match provider.send_transaction(&tx_request).await {
			Ok(hash) => hash,
			Err(e) if e.is_rejection() => {
				info!("{} cancelled by the wallet owner", request.kind);
				return OperationOutcome::Cancelled;
			}
			Err(e) => {
				error!("Failed to sign {}: {}", request.kind, e);
				self.notifier
					.error(&format!("Failed to {}", request.kind));
				return OperationOutcome::SigningFailed;
			}
		};

		self.set_phase(SubmissionPhase::Submitting);
		let submission = match request.kind {
			OperationKind::Deposit => self.ledger.deposit(&signed_tx, request.amount).await,
			OperationKind::Withdraw => self.ledger.withdraw(&signed_tx, request.amount).await,
			OperationKind::Transfer => {
				self.ledger
					.transfer(&signed_tx, &destination, request.amount)
					.await
			}
		};

		if let Err(e) = submission {
			error!("Ledger rejected {}: {}", request.kind, e);
			self.notifier
				.error(&format!("Failed to {}", request.kind));
			return OperationOutcome::SubmissionFailed;
		}

		self.notifier
			.success(&format!("{} successful", request.kind));
		form.reset();

		self.set_phase(SubmissionPhase::Refreshing);
		self.refresh_balances().await;

		OperationOutcome::Completed
	}

	fn set_phase(&self, phase: SubmissionPhase) {
		let mut state = self.state.lock().unwrap();
		if state.phase != phase {
			debug!("Submission phase {:?} -> {:?}", state.phase, phase);
			state.phase = phase;
		}
	}
}
