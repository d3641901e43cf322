/// Number of wei in one ether.
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Convert a decimal ether amount to wei.
///
/// Amounts arrive from the operation form as decimal ether, while the wallet
/// provider expects transaction values in wei. Rounds to the nearest wei.
pub fn ether_to_wei(amount: f64) -> u128 {
	(amount * WEI_PER_ETHER as f64).round() as u128
}

/// Convert a decimal ether amount to the 0x-prefixed hex wei string expected
/// by the provider's `eth_sendTransaction` call.
pub fn ether_to_wei_hex(amount: f64) -> String {
	format!("{:#x}", ether_to_wei(amount))
}

/// Format a wei amount as a decimal ether string for display.
pub fn format_ether(wei: u128) -> String {
	format!("{:.6}", wei as f64 / WEI_PER_ETHER as f64)
}
