//! Data shapes exchanged with the node collaborator.
//!
//! The node surface is an abstract capability, not a concrete RPC API, so
//! these types carry exactly the fields the engine consumes and stay
//! independent of any transport library's own representations.

use alloy_primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// A transaction as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTransaction {
	pub hash: B256,
	pub nonce: u64,
	pub from: Address,
	/// `None` for contract-creation transactions.
	pub to: Option<Address>,
	pub value: U256,
	pub input: Bytes,
	pub gas_limit: u64,
	pub gas_price: Option<u128>,
	pub max_fee_per_gas: Option<u128>,
	pub max_priority_fee_per_gas: Option<u128>,
	/// Wire type: 0 legacy, 2 dynamic-fee.
	pub transaction_type: u8,
}

/// An event log attached to a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLog {
	pub address: Address,
	pub topics: Vec<B256>,
	pub data: Bytes,
}

/// Execution outcome of a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeReceipt {
	pub transaction_hash: B256,
	pub status: bool,
	pub gas_used: u64,
	pub block_number: u64,
	pub logs: Vec<NodeLog>,
}

/// A block with its transactions in on-chain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeBlock {
	pub number: u64,
	pub hash: B256,
	pub timestamp: u64,
	/// Absent on blocks produced before dynamic-fee pricing activated.
	pub base_fee_per_gas: Option<u128>,
	pub transactions: Vec<NodeTransaction>,
}

/// Read-only call (or gas-estimation) parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRequest {
	pub from: Option<Address>,
	pub to: Address,
	pub value: U256,
	pub data: Bytes,
}
