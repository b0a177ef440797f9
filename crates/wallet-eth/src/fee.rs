//! Fee accounting for settled transactions.
//!
//! A transaction's wire type selects one of two pricing schemes; anything
//! else is rejected rather than silently priced at zero.

use crate::EthError;
use alloy_primitives::U256;
use rust_decimal::Decimal;
use wallet_types::{units, NodeBlock, NodeTransaction};

/// Pricing scheme of a transaction, derived from its wire type.
///
/// Dynamic-fee pricing charges `base_fee + tip_cap` per unit of gas. This
/// is an approximation of the effective-gas-price rule, which additionally
/// clamps at the transaction's fee cap; the clamp is omitted on purpose to
/// stay compatible with existing fee reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeePricing {
	/// Single-price transactions (type 0).
	Legacy { gas_price: u128 },
	/// Tip/base-fee transactions (type 2).
	DynamicFee { tip_cap: u128, base_fee: u128 },
}

impl FeePricing {
	/// Derives the pricing scheme from a transaction and its containing
	/// block.
	pub fn from_transaction(tx: &NodeTransaction, block: &NodeBlock) -> Result<Self, EthError> {
		match tx.transaction_type {
			0 => Ok(FeePricing::Legacy {
				gas_price: tx.gas_price.unwrap_or_default(),
			}),
			2 => Ok(FeePricing::DynamicFee {
				tip_cap: tx.max_priority_fee_per_gas.unwrap_or_default(),
				base_fee: block.base_fee_per_gas.unwrap_or_default(),
			}),
			other => Err(EthError::UnsupportedTransactionType(other)),
		}
	}

	/// Fee paid in native units for the given gas consumption.
	pub fn fee(&self, gas_used: u64) -> Result<Decimal, EthError> {
		let price_per_gas = match self {
			FeePricing::Legacy { gas_price } => *gas_price,
			FeePricing::DynamicFee { tip_cap, base_fee } => base_fee.saturating_add(*tip_cap),
		};

		let wei = U256::from(price_per_gas) * U256::from(gas_used);
		Ok(units::from_base_units(wei, units::NATIVE_DECIMALS)?)
	}
}
