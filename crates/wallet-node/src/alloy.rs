//! Alloy-backed node implementation.
//!
//! Maps the [`EthNode`] capability surface onto an HTTP provider. All
//! transport-library types are converted into the gateway's own node
//! shapes at this boundary.

use crate::{CodeProbe, EthNode, NodeError};
use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_provider::{Provider, RootProvider};
use alloy_rpc_types::{
	Block, BlockNumberOrTag, BlockTransactions, Transaction as RpcTransaction,
	TransactionRequest, TransactionTrait,
};
use alloy_transport::{RpcError, TransportErrorKind};
use alloy_transport_http::Http;
use async_trait::async_trait;
use wallet_types::{CallRequest, NodeBlock, NodeLog, NodeReceipt, NodeTransaction};

/// HTTP node client.
pub struct AlloyNode {
	provider: RootProvider<Http<reqwest::Client>>,
}

impl AlloyNode {
	/// Connects to the given RPC endpoint.
	pub fn new(rpc_url: &str) -> Result<Self, NodeError> {
		let url = rpc_url
			.parse()
			.map_err(|e| NodeError::Transport(format!("invalid RPC URL {rpc_url:?}: {e}")))?;

		Ok(Self {
			provider: RootProvider::new_http(url),
		})
	}
}

fn node_error(err: RpcError<TransportErrorKind>) -> NodeError {
	match err {
		RpcError::ErrorResp(payload) => NodeError::Rpc(payload.to_string()),
		other => NodeError::Transport(other.to_string()),
	}
}

fn into_node_transaction(tx: RpcTransaction) -> NodeTransaction {
	NodeTransaction {
		hash: *tx.inner.tx_hash(),
		nonce: tx.nonce(),
		from: tx.from,
		to: tx.kind().to().copied(),
		value: tx.value(),
		input: tx.input().clone(),
		gas_limit: tx.gas_limit(),
		gas_price: tx.gas_price(),
		max_fee_per_gas: tx.gas_price().is_none().then(|| tx.max_fee_per_gas()),
		max_priority_fee_per_gas: tx.max_priority_fee_per_gas(),
		transaction_type: tx.inner.tx_type() as u8,
	}
}

fn into_node_block(block: Block) -> NodeBlock {
	let transactions = match block.transactions {
		BlockTransactions::Full(txs) => txs.into_iter().map(into_node_transaction).collect(),
		// The engine always requests full bodies.
		_ => Vec::new(),
	};

	NodeBlock {
		number: block.header.number,
		hash: block.header.hash,
		timestamp: block.header.timestamp,
		base_fee_per_gas: block.header.base_fee_per_gas.map(|fee| fee as u128),
		transactions,
	}
}

fn into_call_request(request: CallRequest) -> TransactionRequest {
	let mut tx = TransactionRequest::default()
		.to(request.to)
		.value(request.value)
		.input(request.data.into());
	if let Some(from) = request.from {
		tx = tx.from(from);
	}
	tx
}

#[async_trait]
impl EthNode for AlloyNode {
	async fn transaction_by_hash(
		&self,
		hash: B256,
	) -> Result<Option<(NodeTransaction, bool)>, NodeError> {
		let tx = self
			.provider
			.get_transaction_by_hash(hash)
			.await
			.map_err(node_error)?;

		Ok(tx.map(|tx| {
			let pending = tx.block_number.is_none();
			(into_node_transaction(tx), pending)
		}))
	}

	async fn transaction_receipt(&self, hash: B256) -> Result<Option<NodeReceipt>, NodeError> {
		let receipt = self
			.provider
			.get_transaction_receipt(hash)
			.await
			.map_err(node_error)?;

		Ok(receipt.map(|receipt| {
			let logs = receipt
				.inner
				.logs()
				.iter()
				.map(|log| NodeLog {
					address: log.inner.address,
					topics: log.inner.data.topics().to_vec(),
					data: log.inner.data.data.clone(),
				})
				.collect();

			NodeReceipt {
				transaction_hash: receipt.transaction_hash,
				status: receipt.status(),
				gas_used: receipt.gas_used.try_into().unwrap_or(u64::MAX),
				block_number: receipt.block_number.unwrap_or_default(),
				logs,
			}
		}))
	}

	async fn block_by_number(&self, number: u64) -> Result<Option<NodeBlock>, NodeError> {
		let block = self
			.provider
			.get_block_by_number(BlockNumberOrTag::Number(number), true.into())
			.await
			.map_err(node_error)?;

		Ok(block.map(into_node_block))
	}

	async fn block_number(&self) -> Result<u64, NodeError> {
		self.provider.get_block_number().await.map_err(node_error)
	}

	async fn code_at(&self, address: Address) -> Result<CodeProbe, NodeError> {
		let code = self
			.provider
			.get_code_at(address)
			.await
			.map_err(node_error)?;

		Ok(if code.is_empty() {
			CodeProbe::NotContract
		} else {
			CodeProbe::Contract
		})
	}

	async fn call(&self, request: CallRequest) -> Result<Bytes, NodeError> {
		self.provider
			.call(&into_call_request(request))
			.await
			.map_err(node_error)
	}

	async fn estimate_gas(&self, request: CallRequest) -> Result<u64, NodeError> {
		let estimate = self
			.provider
			.estimate_gas(&into_call_request(request))
			.await
			.map_err(node_error)?;

		Ok(estimate.try_into().unwrap_or(u64::MAX))
	}

	async fn gas_price(&self) -> Result<u128, NodeError> {
		self.provider.get_gas_price().await.map_err(node_error)
	}

	async fn chain_id(&self) -> Result<u64, NodeError> {
		self.provider.get_chain_id().await.map_err(node_error)
	}

	async fn send_raw_transaction(&self, raw: Bytes) -> Result<B256, NodeError> {
		let pending = self
			.provider
			.send_raw_transaction(&raw)
			.await
			.map_err(node_error)?;

		let hash = *pending.tx_hash();
		tracing::info!(tx_hash = %hex::encode(hash), "submitted transaction");
		Ok(hash)
	}

	async fn balance(&self, address: Address) -> Result<U256, NodeError> {
		self.provider.get_balance(address).await.map_err(node_error)
	}

	async fn transaction_count(&self, address: Address) -> Result<u64, NodeError> {
		self.provider
			.get_transaction_count(address)
			.pending()
			.await
			.map_err(node_error)
	}
}
