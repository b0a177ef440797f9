//! Exact conversions between a chain's smallest accounting unit and
//! human-readable decimal amounts.
//!
//! All scaling is integer or fixed-point arithmetic; nothing here goes
//! through floating point. The native asset always uses 18 decimal
//! places; token scales are read from the contract per call and passed in.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use thiserror::Error;

/// Decimal places of the native asset.
pub const NATIVE_DECIMALS: u8 = 18;

// Largest scale rust_decimal can represent.
const MAX_SCALE: u32 = 28;

/// Errors from base-unit conversion.
#[derive(Debug, Error)]
pub enum AmountError {
	/// The amount is negative.
	#[error("amount must not be negative")]
	Negative,
	/// The value cannot be represented at the requested scale.
	#[error("amount is not representable at {0} decimal places")]
	Unrepresentable(u8),
}

/// Converts a decimal amount into base units, truncating any fractional
/// digits beyond `decimals`.
pub fn to_base_units(amount: Decimal, decimals: u8) -> Result<U256, AmountError> {
	if amount < Decimal::ZERO {
		return Err(AmountError::Negative);
	}

	// Rescale the mantissa directly so no intermediate result is rounded.
	let mantissa = U256::from(amount.mantissa().unsigned_abs());
	let scale = amount.scale();
	let target = u32::from(decimals);

	if target >= scale {
		let factor = U256::from(10u8)
			.checked_pow(U256::from(target - scale))
			.ok_or(AmountError::Unrepresentable(decimals))?;
		mantissa
			.checked_mul(factor)
			.ok_or(AmountError::Unrepresentable(decimals))
	} else {
		let divisor = U256::from(10u8)
			.checked_pow(U256::from(scale - target))
			.ok_or(AmountError::Unrepresentable(decimals))?;
		Ok(mantissa / divisor)
	}
}

/// Converts a base-unit value into an exact decimal amount with `decimals`
/// fractional digits.
pub fn from_base_units(value: U256, decimals: u8) -> Result<Decimal, AmountError> {
	if u32::from(decimals) > MAX_SCALE {
		return Err(AmountError::Unrepresentable(decimals));
	}

	let raw = Decimal::from_str_exact(&value.to_string())
		.map_err(|_| AmountError::Unrepresentable(decimals))?;

	// Decimal::new(1, d) is exactly 10^-d, so this divides without loss.
	raw.checked_mul(Decimal::new(1, u32::from(decimals)))
		.ok_or(AmountError::Unrepresentable(decimals))
}
