mod config;
mod dashboard;
mod ledger;
mod notify;
mod provider;
mod utils;
mod wallet;

use std::sync::Arc;

use chrono::DateTime;
use tracing::{error, info};

use crate::config::DashboardConfig;
use crate::dashboard::{OperationForm, OperationKind, OperationOrchestrator};
use crate::ledger::{HttpLedgerClient, LedgerApi};
use crate::notify::{TracingNotifier, UserNotifier};
use crate::wallet::WalletBridge;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::from_default_env()
				.add_directive(tracing::Level::INFO.into()),
		)
		.with_target(false)
		.with_file(false)
		.with_line_number(false)
		.init();

	info!("Starting ledger dashboard");

	let config = DashboardConfig::from_env();

	let ledger: Arc<dyn LedgerApi> = Arc::new(HttpLedgerClient::new(config.ledger_api_url.clone()));
	let notifier: Arc<dyn UserNotifier> = Arc::new(TracingNotifier);

	// The provider is resolved exactly once; everything downstream handles
	// the absent case explicitly.
	let provider = provider::detect(&config);

	let orchestrator =
		OperationOrchestrator::new(provider.clone(), ledger.clone(), notifier.clone());
	let bridge = WalletBridge::new(provider, ledger, notifier);

	let server_side = bridge.server_wallet_status().await;
	info!(
		"Ledger service reports {} connected wallet(s)",
		server_side.len()
	);

	// Connect through the wallet service first (the sign-in flow)...
	let accounts = bridge.connect().await;
	if accounts.is_empty() {
		error!("No wallet account authorized, dashboard cannot operate");
		return;
	}

	// ...then let the dashboard establish its own session and balances.
	let Some(account) = orchestrator.connect().await else {
		error!("Wallet session lost before the dashboard could start");
		return;
	};

	// Mirror the provider-side session on the ledger service.
	let registered = bridge.server_connect().await;
	info!(
		"Registered wallet session with the ledger ({} address(es))",
		registered.len()
	);

	let state = orchestrator.state();
	info!(
		"Account {}: balance {} ether, contract balance {} ether",
		account, state.balances.balance, state.balances.contract_balance
	);

	let transactions = bridge.all_transactions().await;
	info!("Ledger history holds {} movement(s)", transactions.len());
	for record in transactions.iter().rev().take(5) {
		let timestamp = DateTime::from_timestamp(record.timestamp, 0)
			.map(|t| t.to_rfc3339())
			.unwrap_or_else(|| record.timestamp.to_string());
		info!(
			"  {} {} ether from {} to {} at {}",
			record.transaction_type, record.amount, record.from, record.to, timestamp
		);
	}

	// Demo flow: a small deposit through the full submit workflow.
	let mut form = OperationForm::new(OperationKind::Deposit);
	form.amount = "0.001".to_string();

	let outcome = orchestrator.submit(&mut form).await;
	if !outcome.is_success() {
		info!("Demo deposit ended with {:?}", outcome);
	}

	// A ledger transfer to a throwaway recipient.
	form.set_operation(OperationKind::Transfer);
	form.amount = "0.0005".to_string();
	form.to_address = wallet::random_address();

	let outcome = orchestrator.submit(&mut form).await;
	if !outcome.is_success() {
		info!("Demo transfer ended with {:?}", outcome);
	}

	// And a native transfer, broadcast by the provider and recorded in the
	// ledger history.
	let recipient = wallet::random_address();
	if bridge.send_native_transfer(&recipient, 0.0005).await {
		info!("Demo native transfer to {} broadcast", recipient);
	}

	let state = orchestrator.state();
	info!(
		"Final balances: account {} ether, contract {} ether",
		state.balances.balance, state.balances.contract_balance
	);
}
