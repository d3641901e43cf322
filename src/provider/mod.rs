//! Wallet provider integration module
//!
//! This module abstracts over an external wallet provider: software that
//! holds the user's keys and exposes account access and transaction signing.
//! The provider is resolved exactly once at startup into a `ProviderHandle`
//! with an explicit `Absent` variant for machines without one installed.

/// JSON-RPC client implementing the provider contract
mod client;
/// Capability trait and wire types for provider interaction
mod types;

pub use client::JsonRpcWalletProvider;
pub use types::*;

use std::sync::Arc;

use crate::config::DashboardConfig;

/// Resolve the wallet provider from configuration.
///
/// Returns `ProviderHandle::Absent` when no provider endpoint is configured.
pub fn detect(config: &DashboardConfig) -> ProviderHandle {
	match &config.wallet_rpc_url {
		Some(url) => {
			tracing::info!("Wallet provider detected at {}", url);
			ProviderHandle::Detected(Arc::new(JsonRpcWalletProvider::new(url.clone())))
		}
		None => {
			tracing::info!("No wallet provider installed");
			ProviderHandle::Absent
		}
	}
}
