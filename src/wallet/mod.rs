pub mod bridge;

pub use bridge::WalletBridge;

use rand::Rng;

/// Generate a random 0x-prefixed address, used as a demo recipient.
pub fn random_address() -> String {
	let mut bytes = [0u8; 20];
	rand::rng().fill(&mut bytes);
	format!("0x{}", hex::encode(bytes))
}
