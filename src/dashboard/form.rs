//! Operation form and submission validation.
//!
//! The form mirrors what the user fills in: an operation kind, a decimal
//! amount, and a destination address that only matters for transfers.
//! Validation runs once, at the moment a submission leaves the idle state;
//! a valid form yields an `OperationRequest` with parsed values.

use std::fmt;
use thiserror::Error;

/// Smallest amount the ledger accepts, in ether.
pub const MIN_OPERATION_AMOUNT: f64 = 0.000001;

/// Kind of fund-movement operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
	Deposit,
	Withdraw,
	Transfer,
}

impl OperationKind {
	/// Operation name used on the wire and in user-facing messages.
	pub fn as_str(&self) -> &'static str {
		match self {
			OperationKind::Deposit => "deposit",
			OperationKind::Withdraw => "withdraw",
			OperationKind::Transfer => "transfer",
		}
	}
}

impl fmt::Display for OperationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Validation faults surfaced to the user as field-level notices
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
	#[error("please enter an amount")]
	AmountMissing,

	#[error("amount must be a decimal number")]
	AmountInvalid,

	#[error("amount must be at least {0}")]
	AmountBelowMinimum(f64),

	#[error("please provide a recipient address")]
	RecipientRequired,
}

/// A validated, ready-to-submit operation.
///
/// `to_address` is `Some` only for transfers; deposit and withdraw ignore
/// whatever the destination field held.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
	pub kind: OperationKind,
	pub amount: f64,
	pub to_address: Option<String>,
}

/// User input backing a submission
#[derive(Debug, Clone)]
pub struct OperationForm {
	pub kind: OperationKind,
	pub amount: String,
	pub to_address: String,
}

impl OperationForm {
	/// Create an empty form for the given operation kind.
	pub fn new(kind: OperationKind) -> Self {
		Self {
			kind,
			amount: String::new(),
			to_address: String::new(),
		}
	}

	/// Switch the form to a different operation kind, clearing both fields.
	pub fn set_operation(&mut self, kind: OperationKind) {
		self.kind = kind;
		self.reset();
	}

	/// Clear the input fields, keeping the selected kind.
	pub fn reset(&mut self) {
		self.amount.clear();
		self.to_address.clear();
	}

	/// Validate the form and produce an `OperationRequest`.
	///
	/// The amount must parse to a finite decimal of at least
	/// `MIN_OPERATION_AMOUNT`. A destination is required (non-empty) only
	/// when the kind is transfer.
	pub fn validate(&self) -> Result<OperationRequest, ValidationError> {
		let raw_amount = self.amount.trim();
		if raw_amount.is_empty() {
			return Err(ValidationError::AmountMissing);
		}

		let amount: f64 = raw_amount
			.parse()
			.map_err(|_| ValidationError::AmountInvalid)?;
		if !amount.is_finite() {
			return Err(ValidationError::AmountInvalid);
		}
		if amount < MIN_OPERATION_AMOUNT {
			return Err(ValidationError::AmountBelowMinimum(MIN_OPERATION_AMOUNT));
		}

		let to_address = match self.kind {
			OperationKind::Transfer => {
				let destination = self.to_address.trim();
				if destination.is_empty() {
					return Err(ValidationError::RecipientRequired);
				}
				Some(destination.to_string())
			}
			OperationKind::Deposit | OperationKind::Withdraw => None,
		};

		Ok(OperationRequest {
			kind: self.kind,
			amount,
			to_address,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn form(kind: OperationKind, amount: &str, to_address: &str) -> OperationForm {
		OperationForm {
			kind,
			amount: amount.to_string(),
			to_address: to_address.to_string(),
		}
	}

	#[test]
	fn test_deposit_ignores_empty_destination() {
		let request = form(OperationKind::Deposit, "1.5", "").validate().unwrap();
		assert_eq!(request.amount, 1.5);
		assert_eq!(request.to_address, None);
	}

	#[test]
	fn test_withdraw_ignores_filled_destination() {
		let request = form(OperationKind::Withdraw, "0.5", "0xabc")
			.validate()
			.unwrap();
		assert_eq!(request.to_address, None);
	}

	#[test]
	fn test_transfer_requires_destination() {
		let result = form(OperationKind::Transfer, "1.5", "  ").validate();
		assert_eq!(result, Err(ValidationError::RecipientRequired));

		let request = form(OperationKind::Transfer, "1.5", "0xabc")
			.validate()
			.unwrap();
		assert_eq!(request.to_address.as_deref(), Some("0xabc"));
	}

	#[test]
	fn test_amount_below_minimum_is_rejected() {
		let result = form(OperationKind::Deposit, "0.0000001", "").validate();
		assert_eq!(
			result,
			Err(ValidationError::AmountBelowMinimum(MIN_OPERATION_AMOUNT))
		);
	}

	#[test]
	fn test_minimum_amount_is_accepted() {
		let request = form(OperationKind::Deposit, "0.000001", "")
			.validate()
			.unwrap();
		assert_eq!(request.amount, MIN_OPERATION_AMOUNT);
	}

	#[test]
	fn test_missing_and_malformed_amounts() {
		assert_eq!(
			form(OperationKind::Deposit, "", "").validate(),
			Err(ValidationError::AmountMissing)
		);
		assert_eq!(
			form(OperationKind::Deposit, "abc", "").validate(),
			Err(ValidationError::AmountInvalid)
		);
		assert_eq!(
			form(OperationKind::Deposit, "NaN", "").validate(),
			Err(ValidationError::AmountInvalid)
		);
		assert_eq!(
			form(OperationKind::Deposit, "-1", "").validate(),
			Err(ValidationError::AmountBelowMinimum(MIN_OPERATION_AMOUNT))
		);
	}

	#[test]
	fn test_set_operation_clears_fields() {
		let mut form = form(OperationKind::Deposit, "1.0", "0xabc");
		form.set_operation(OperationKind::Transfer);
		assert_eq!(form.kind, OperationKind::Transfer);
		assert!(form.amount.is_empty());
		assert!(form.to_address.is_empty());
	}
}
