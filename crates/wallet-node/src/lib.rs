//! Node collaborator interface for the wallet gateway.
//!
//! The engine never talks to a chain endpoint directly; it consumes the
//! [`EthNode`] trait defined here. The trait mirrors the read/write
//! capabilities the engine needs and nothing more, so tests can stand in
//! an in-memory node and the transport library stays confined to the
//! [`alloy`] implementation module.

use alloy_primitives::{Address, Bytes, B256, U256};
use async_trait::async_trait;
use thiserror::Error;
use wallet_types::{CallRequest, NodeBlock, NodeReceipt, NodeTransaction};

pub mod alloy;

/// Errors that can occur while talking to the node.
#[derive(Debug, Error)]
pub enum NodeError {
	/// The endpoint could not be reached or answered out of protocol.
	#[error("transport error: {0}")]
	Transport(String),
	/// The node answered with an error response, e.g. a reverted call.
	#[error("node error: {0}")]
	Rpc(String),
}

/// Outcome of probing an address for contract code.
///
/// Transport failures stay in the `Err` channel; a successful probe always
/// yields one of these two tags, so callers never have to pattern-match an
/// error message to learn whether an address is a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeProbe {
	Contract,
	NotContract,
}

/// Read/write surface of a trusted account-chain node.
#[async_trait]
pub trait EthNode: Send + Sync {
	/// Looks up a transaction by hash. The boolean is true while the
	/// transaction is still waiting in the mempool.
	async fn transaction_by_hash(
		&self,
		hash: B256,
	) -> Result<Option<(NodeTransaction, bool)>, NodeError>;

	/// Fetches the receipt of a mined transaction.
	async fn transaction_receipt(&self, hash: B256) -> Result<Option<NodeReceipt>, NodeError>;

	/// Fetches a block with its full transaction bodies.
	async fn block_by_number(&self, number: u64) -> Result<Option<NodeBlock>, NodeError>;

	/// Current chain height.
	async fn block_number(&self) -> Result<u64, NodeError>;

	/// Probes an address for deployed contract code.
	async fn code_at(&self, address: Address) -> Result<CodeProbe, NodeError>;

	/// Executes a read-only call and returns the raw return data.
	async fn call(&self, request: CallRequest) -> Result<Bytes, NodeError>;

	/// Asks the node for a gas estimate of the given call.
	async fn estimate_gas(&self, request: CallRequest) -> Result<u64, NodeError>;

	/// Suggested gas price in wei.
	async fn gas_price(&self) -> Result<u128, NodeError>;

	/// Chain identifier used for replay-protected signing.
	async fn chain_id(&self) -> Result<u64, NodeError>;

	/// Submits a signed, encoded transaction and returns its hash.
	async fn send_raw_transaction(&self, raw: Bytes) -> Result<B256, NodeError>;

	/// Native-asset balance in wei.
	async fn balance(&self, address: Address) -> Result<U256, NodeError>;

	/// Next valid nonce for the address, including pending transactions.
	async fn transaction_count(&self, address: Address) -> Result<u64, NodeError>;
}
