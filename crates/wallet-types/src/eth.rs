//! Normalized account-chain types.
//!
//! These are the value objects the classification engine produces and the
//! request shape transaction construction consumes. All of them are plain
//! data: once returned they are never mutated.

use alloy_primitives::{Address, B256, U256};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Confirmation-gated lifecycle status of a submitted transaction.
///
/// `Pending` moves to exactly one of the terminal states once the
/// transaction's block is buried deeper than the configured confirmation
/// threshold. `Default` is the unclassified placeholder and is never
/// returned by a completed classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementState {
	#[default]
	Default,
	Pending,
	Success,
	Fail,
}

impl SettlementState {
	/// Whether the state is terminal.
	pub fn is_final(&self) -> bool {
		matches!(self, SettlementState::Success | SettlementState::Fail)
	}
}

/// Normalized view of a classified transaction.
///
/// `token_address` is `None` for a native-asset transfer and carries the
/// emitting contract for a token transfer. `amount` is already scaled to
/// decimal units (18 places for the native asset, the contract's declared
/// `decimals` for tokens).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInfo {
	pub id: B256,
	pub block_number: u64,
	pub time: DateTime<Utc>,
	pub from: Address,
	pub to: Address,
	pub token_address: Option<Address>,
	pub amount: Decimal,
	pub fee: Decimal,
	pub state: SettlementState,
}

/// A block together with every transaction the classifier understood.
///
/// Transactions appear in on-chain order; those the classifier cannot
/// interpret are omitted, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
	pub number: u64,
	pub hash: B256,
	pub time: DateTime<Utc>,
	pub transactions: Vec<TransactionInfo>,
}

/// Metadata of a standard token contract, fetched fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc20Info {
	pub address: Address,
	pub name: String,
	pub symbol: String,
	pub decimals: u8,
	pub total_supply: U256,
}

/// Caller-supplied input for building an unsigned transaction.
///
/// `amount` and `max_fee_per_gas` are decimal strings in native units
/// (the latter per unit of gas); `tip` is in wei. `gas_limit` is the only
/// field construction may overwrite, when automatic gas estimation is
/// enabled for a token transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
	pub token_address: Option<Address>,
	pub from: Address,
	pub to: Address,
	pub amount: String,
	pub gas_limit: u64,
	pub max_fee_per_gas: String,
	pub tip: u64,
	pub disable_estimate_gas: bool,
	pub nonce: u64,
}
