//! Account-chain helper service.
//!
//! [`EthService`] orchestrates the build → sign → broadcast → fetch →
//! classify lifecycle against a trusted node: it assembles unsigned
//! transfers (native or token), signs them with chain-bound replay
//! protection, submits them, and reconstructs normalized
//! [`TransactionInfo`] views of mined transactions. The service is
//! stateless between calls; every query reads fresh chain state.

use std::str::FromStr;
use std::sync::Arc;

use alloy_consensus::{SignableTransaction, TxEnvelope, TxLegacy};
use alloy_eips::eip2718::Encodable2718;
use alloy_network::TxSigner;
use alloy_primitives::{Address, Bytes, TxKind, B256, U256};
use alloy_signer_local::PrivateKeySigner;
use rust_decimal::Decimal;
use thiserror::Error;
use wallet_node::{EthNode, NodeError};
use wallet_types::{
	units, AmountError, BlockInfo, CallRequest, CreateTransactionRequest, Erc20Info,
	SecretString, TransactionInfo,
};

pub mod classify;
pub mod fee;
pub mod token;

pub use classify::settlement_state;
pub use fee::FeePricing;
pub use token::TokenTransfer;

/// One gwei in wei; fee tips are quoted in this sub-unit.
const GWEI: u64 = 1_000_000_000;

/// Errors surfaced by the account-chain service.
#[derive(Debug, Error)]
pub enum EthError {
	/// Malformed or negative amount, or a malformed signing key.
	#[error("invalid input: {0}")]
	InvalidInput(String),
	/// The destination is a contract but the call is not a token transfer
	/// the decoder understands.
	#[error("the transaction is not a supported transfer")]
	UnsupportedTransaction,
	/// The transaction uses a fee-pricing scheme the service cannot price.
	#[error("unsupported transaction type {0}")]
	UnsupportedTransactionType(u8),
	/// Unknown transaction, or one still waiting in the mempool.
	#[error("{0} was not found")]
	NotFound(String),
	/// Transport failure, propagated unchanged from the node.
	#[error(transparent)]
	Node(#[from] NodeError),
}

impl From<AmountError> for EthError {
	fn from(err: AmountError) -> Self {
		EthError::InvalidInput(err.to_string())
	}
}

/// Lifecycle coordinator for the account chain.
///
/// Holds only the injected node collaborator and two scalars of
/// configuration; safe to share and call concurrently.
pub struct EthService {
	node: Arc<dyn EthNode>,
	confirmations: u64,
	gas_estimate_multiplier: f64,
}

impl EthService {
	/// Creates a new service around a node collaborator.
	///
	/// `confirmations` gates the settlement state machine;
	/// `gas_estimate_multiplier` (≥ 1.0) pads node gas estimates when
	/// building token transfers.
	pub fn new(node: Arc<dyn EthNode>, confirmations: u64, gas_estimate_multiplier: f64) -> Self {
		Self {
			node,
			confirmations,
			gas_estimate_multiplier,
		}
	}

	/// Current chain height.
	pub async fn current_height(&self) -> Result<u64, EthError> {
		Ok(self.node.block_number().await?)
	}

	/// Next nonce for an address, including mempool transactions.
	pub async fn nonce(&self, address: Address) -> Result<u64, EthError> {
		Ok(self.node.transaction_count(address).await?)
	}

	/// Native-asset balance in decimal units.
	pub async fn balance(&self, address: Address) -> Result<Decimal, EthError> {
		let wei = self.node.balance(address).await?;
		Ok(units::from_base_units(wei, units::NATIVE_DECIMALS)?)
	}

	/// Metadata of a token contract, fetched fresh.
	pub async fn erc20_info(&self, address: Address) -> Result<Erc20Info, EthError> {
		token::erc20_info(self.node.as_ref(), address).await
	}

	/// Token balance of a holder, scaled by the contract's decimals.
	pub async fn erc20_balance(&self, token: Address, owner: Address) -> Result<Decimal, EthError> {
		let info = token::erc20_info(self.node.as_ref(), token).await?;
		let raw = token::balance_of(self.node.as_ref(), token, owner).await?;
		Ok(units::from_base_units(raw, info.decimals)?)
	}

	/// Node-suggested gas price in native units.
	pub async fn suggest_gas_price(&self) -> Result<Decimal, EthError> {
		let wei = self.node.gas_price().await?;
		Ok(units::from_base_units(U256::from(wei), units::NATIVE_DECIMALS)?)
	}

	/// Suggested fee cap: the node's gas price plus a tip, in native
	/// units. The tip is quoted in gwei.
	pub async fn max_fee(&self, tip_gwei: u64) -> Result<Decimal, EthError> {
		let gas_price = self.suggest_gas_price().await?;
		let tip_wei = U256::from(tip_gwei) * U256::from(GWEI);
		let tip = units::from_base_units(tip_wei, units::NATIVE_DECIMALS)?;
		Ok(gas_price + tip)
	}

	/// Builds an unsigned transfer from the request.
	///
	/// Native transfers carry the scaled amount as transaction value.
	/// Token transfers call `transfer` on the contract with the amount
	/// scaled by the contract's decimals, and unless disabled replace the
	/// requested gas limit with the node's padded estimate. The result
	/// uses the legacy transaction shape and is not signed.
	pub async fn create_transaction(
		&self,
		mut request: CreateTransactionRequest,
	) -> Result<TxLegacy, EthError> {
		let amount = Decimal::from_str(&request.amount)
			.map_err(|e| EthError::InvalidInput(format!("amount {:?}: {e}", request.amount)))?;
		if amount < Decimal::ZERO {
			return Err(EthError::InvalidInput(
				"amount must not be negative".to_string(),
			));
		}

		let max_fee = Decimal::from_str(&request.max_fee_per_gas).map_err(|e| {
			EthError::InvalidInput(format!(
				"max fee per gas {:?}: {e}",
				request.max_fee_per_gas
			))
		})?;
		let gas_price = u128::try_from(units::to_base_units(max_fee, units::NATIVE_DECIMALS)?)
			.map_err(|_| EthError::InvalidInput("max fee per gas is out of range".to_string()))?;

		let Some(token_address) = request.token_address else {
			return Ok(TxLegacy {
				chain_id: None,
				nonce: request.nonce,
				gas_price,
				gas_limit: request.gas_limit,
				to: TxKind::Call(request.to),
				value: units::to_base_units(amount, units::NATIVE_DECIMALS)?,
				input: Bytes::new(),
			});
		};

		let info = token::erc20_info(self.node.as_ref(), token_address).await?;
		let raw_amount = units::to_base_units(amount, info.decimals)?;
		let data = token::encode_transfer(request.to, raw_amount);

		if !request.disable_estimate_gas {
			let estimate = self
				.node
				.estimate_gas(CallRequest {
					from: Some(request.from),
					to: token_address,
					value: U256::ZERO,
					data: data.clone().into(),
				})
				.await?;

			request.gas_limit = (estimate as f64 * self.gas_estimate_multiplier) as u64;
			tracing::debug!(
				estimate,
				gas_limit = request.gas_limit,
				token = %token_address,
				"padded node gas estimate"
			);
		}

		Ok(TxLegacy {
			chain_id: None,
			nonce: request.nonce,
			gas_price,
			gas_limit: request.gas_limit,
			to: TxKind::Call(token_address),
			value: U256::ZERO,
			input: data.into(),
		})
	}

	/// Signs a transaction with a hex-encoded private key (with or
	/// without `0x` prefix), bound to the node's chain id.
	pub async fn sign_transaction(
		&self,
		mut tx: TxLegacy,
		private_key: &SecretString,
	) -> Result<TxEnvelope, EthError> {
		let key = private_key.expose().trim_start_matches("0x");
		let signer = PrivateKeySigner::from_str(key)
			.map_err(|e| EthError::InvalidInput(format!("private key: {e}")))?;

		tx.chain_id = Some(self.node.chain_id().await?);

		let signature = TxSigner::sign_transaction(&signer, &mut tx)
			.await
			.map_err(|e| EthError::InvalidInput(format!("signing failed: {e}")))?;

		Ok(TxEnvelope::from(tx.into_signed(signature)))
	}

	/// Submits a signed transaction without waiting for inclusion.
	pub async fn broadcast(&self, tx: &TxEnvelope) -> Result<B256, EthError> {
		let raw = tx.encoded_2718();
		Ok(self.node.send_raw_transaction(raw.into()).await?)
	}

	/// Fetches and classifies a mined transaction.
	///
	/// Transactions still waiting in the mempool are reported as not
	/// found; this service does not inspect unconfirmed transactions.
	pub async fn transaction(&self, id: B256) -> Result<TransactionInfo, EthError> {
		let (tx, is_pending) = self
			.node
			.transaction_by_hash(id)
			.await?
			.ok_or_else(|| EthError::NotFound(format!("transaction {id}")))?;
		if is_pending {
			return Err(EthError::NotFound(format!("transaction {id}")));
		}

		let receipt = self
			.node
			.transaction_receipt(id)
			.await?
			.ok_or_else(|| EthError::NotFound(format!("receipt for transaction {id}")))?;

		let current_height = self.node.block_number().await?;
		let block = self
			.node
			.block_by_number(receipt.block_number)
			.await?
			.ok_or_else(|| EthError::NotFound(format!("block {}", receipt.block_number)))?;

		classify::classify_transaction(
			self.node.as_ref(),
			&tx,
			&receipt,
			&block,
			current_height,
			self.confirmations,
		)
		.await
	}

	/// Fetches a block and classifies every transaction in it.
	///
	/// Transactions the classifier cannot interpret are omitted from the
	/// result; transport failures abort the whole call.
	pub async fn block(&self, number: u64) -> Result<BlockInfo, EthError> {
		let block = self
			.node
			.block_by_number(number)
			.await?
			.ok_or_else(|| EthError::NotFound(format!("block {number}")))?;
		let current_height = self.node.block_number().await?;

		let mut info = BlockInfo {
			number: block.number,
			hash: block.hash,
			time: classify::block_time(block.timestamp),
			transactions: Vec::new(),
		};

		for tx in &block.transactions {
			let receipt = self
				.node
				.transaction_receipt(tx.hash)
				.await?
				.ok_or_else(|| EthError::NotFound(format!("receipt for transaction {}", tx.hash)))?;

			match classify::classify_transaction(
				self.node.as_ref(),
				tx,
				&receipt,
				&block,
				current_height,
				self.confirmations,
			)
			.await
			{
				Ok(tx_info) => info.transactions.push(tx_info),
				Err(EthError::Node(err)) => return Err(EthError::Node(err)),
				Err(err) => {
					tracing::debug!(tx = %tx.hash, %err, "omitting uninterpretable transaction");
				}
			}
		}

		Ok(info)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;
	use alloy_sol_types::{SolCall, SolEvent};
	use async_trait::async_trait;
	use crate::token::IErc20;
	use std::collections::HashMap;
	use wallet_node::CodeProbe;
	use wallet_types::{NodeBlock, NodeLog, NodeReceipt, NodeTransaction, SettlementState};

	const SENDER: Address = address!("e280029a7867ba5c9154434886c241775ea87e53");
	const RECIPIENT: Address = address!("68db32d26d9529b2a142927c6f1af248fc6ba7e9");
	const TOKEN: Address = address!("f3585fcd969502624c6a8acf73721d1fce214e83");
	const SENDER_KEY: &str = "0xf1b3f8e0d52caec13491368449ab8d90f3d222a3e485aa7f02591bbceb5efba5";

	const GAS_PRICE: u128 = 20_000_000_000;

	#[derive(Default)]
	struct MockNode {
		transactions: HashMap<B256, (NodeTransaction, bool)>,
		receipts: HashMap<B256, NodeReceipt>,
		blocks: HashMap<u64, NodeBlock>,
		contracts: HashMap<Address, HashMap<Vec<u8>, Bytes>>,
		height: u64,
		gas_price: u128,
		chain_id: u64,
		gas_estimate: u64,
	}

	impl MockNode {
		fn with_erc20(mut self, token: Address, name: &str, symbol: &str, decimals: u8) -> Self {
			let mut reads = HashMap::new();
			reads.insert(
				IErc20::nameCall::SELECTOR.to_vec(),
				IErc20::nameCall::abi_encode_returns(&(name.to_string(),)).into(),
			);
			reads.insert(
				IErc20::symbolCall::SELECTOR.to_vec(),
				IErc20::symbolCall::abi_encode_returns(&(symbol.to_string(),)).into(),
			);
			reads.insert(
				IErc20::decimalsCall::SELECTOR.to_vec(),
				IErc20::decimalsCall::abi_encode_returns(&(decimals,)).into(),
			);
			reads.insert(
				IErc20::totalSupplyCall::SELECTOR.to_vec(),
				IErc20::totalSupplyCall::abi_encode_returns(&(U256::from(1_000_000u64),)).into(),
			);
			self.contracts.insert(token, reads);
			self
		}

		/// A deployed contract whose reads all revert.
		fn with_opaque_contract(mut self, address: Address) -> Self {
			self.contracts.insert(address, HashMap::new());
			self
		}

		fn with_mined(
			mut self,
			tx: NodeTransaction,
			receipt: NodeReceipt,
			block: NodeBlock,
		) -> Self {
			self.transactions.insert(tx.hash, (tx.clone(), false));
			self.receipts.insert(tx.hash, receipt);
			let number = block.number;
			self.blocks
				.entry(number)
				.or_insert(block)
				.transactions
				.push(tx);
			self
		}
	}

	#[async_trait]
	impl EthNode for MockNode {
		async fn transaction_by_hash(
			&self,
			hash: B256,
		) -> Result<Option<(NodeTransaction, bool)>, NodeError> {
			Ok(self.transactions.get(&hash).cloned())
		}

		async fn transaction_receipt(
			&self,
			hash: B256,
		) -> Result<Option<NodeReceipt>, NodeError> {
			Ok(self.receipts.get(&hash).cloned())
		}

		async fn block_by_number(&self, number: u64) -> Result<Option<NodeBlock>, NodeError> {
			Ok(self.blocks.get(&number).cloned())
		}

		async fn block_number(&self) -> Result<u64, NodeError> {
			Ok(self.height)
		}

		async fn code_at(&self, address: Address) -> Result<CodeProbe, NodeError> {
			Ok(if self.contracts.contains_key(&address) {
				CodeProbe::Contract
			} else {
				CodeProbe::NotContract
			})
		}

		async fn call(&self, request: CallRequest) -> Result<Bytes, NodeError> {
			if request.data.len() < 4 {
				return Err(NodeError::Rpc("execution reverted".to_string()));
			}
			self.contracts
				.get(&request.to)
				.and_then(|reads| reads.get(&request.data[..4].to_vec()))
				.cloned()
				.ok_or_else(|| NodeError::Rpc("execution reverted".to_string()))
		}

		async fn estimate_gas(&self, _request: CallRequest) -> Result<u64, NodeError> {
			Ok(self.gas_estimate)
		}

		async fn gas_price(&self) -> Result<u128, NodeError> {
			Ok(self.gas_price)
		}

		async fn chain_id(&self) -> Result<u64, NodeError> {
			Ok(self.chain_id)
		}

		async fn send_raw_transaction(&self, _raw: Bytes) -> Result<B256, NodeError> {
			Ok(B256::ZERO)
		}

		async fn balance(&self, _address: Address) -> Result<U256, NodeError> {
			Ok(U256::ZERO)
		}

		async fn transaction_count(&self, _address: Address) -> Result<u64, NodeError> {
			Ok(0)
		}
	}

	fn service(node: MockNode) -> EthService {
		EthService::new(Arc::new(node), 6, 1.5)
	}

	fn hash(n: u8) -> B256 {
		B256::repeat_byte(n)
	}

	fn native_transfer(h: B256, value: U256) -> NodeTransaction {
		NodeTransaction {
			hash: h,
			nonce: 0,
			from: SENDER,
			to: Some(RECIPIENT),
			value,
			input: Bytes::new(),
			gas_limit: 21_000,
			gas_price: Some(GAS_PRICE),
			max_fee_per_gas: None,
			max_priority_fee_per_gas: None,
			transaction_type: 0,
		}
	}

	fn token_transfer(h: B256, to: Address, input: Vec<u8>) -> NodeTransaction {
		NodeTransaction {
			input: input.into(),
			to: Some(to),
			value: U256::ZERO,
			..native_transfer(h, U256::ZERO)
		}
	}

	fn receipt(h: B256, status: bool, logs: Vec<NodeLog>) -> NodeReceipt {
		NodeReceipt {
			transaction_hash: h,
			status,
			gas_used: 21_000,
			block_number: 100,
			logs,
		}
	}

	fn block(number: u64) -> NodeBlock {
		NodeBlock {
			number,
			hash: hash(0xbb),
			timestamp: 1_700_000_000,
			base_fee_per_gas: Some(8_000_000_000),
			transactions: Vec::new(),
		}
	}

	fn transfer_log(from: Address, to: Address, value: U256) -> NodeLog {
		NodeLog {
			address: TOKEN,
			topics: vec![
				IErc20::Transfer::SIGNATURE_HASH,
				from.into_word(),
				to.into_word(),
			],
			data: Bytes::from(value.to_be_bytes::<32>()),
		}
	}

	fn request(amount: &str) -> CreateTransactionRequest {
		CreateTransactionRequest {
			token_address: None,
			from: SENDER,
			to: RECIPIENT,
			amount: amount.to_string(),
			gas_limit: 21_000,
			max_fee_per_gas: "0.00000002".to_string(),
			tip: 2_000_000_000,
			disable_estimate_gas: false,
			nonce: 7,
		}
	}

	fn dec(s: &str) -> Decimal {
		Decimal::from_str(s).unwrap()
	}

	#[tokio::test]
	async fn negative_amounts_are_rejected() {
		let svc = service(MockNode::default());
		let err = svc.create_transaction(request("-1")).await.unwrap_err();
		assert!(matches!(err, EthError::InvalidInput(_)));
	}

	#[tokio::test]
	async fn unparseable_amounts_are_rejected() {
		let svc = service(MockNode::default());
		let err = svc
			.create_transaction(request("one and a half"))
			.await
			.unwrap_err();
		assert!(matches!(err, EthError::InvalidInput(_)));
	}

	#[tokio::test]
	async fn builds_a_native_value_transfer() {
		let svc = service(MockNode::default());
		let tx = svc.create_transaction(request("0.0001")).await.unwrap();

		assert_eq!(tx.to, TxKind::Call(RECIPIENT));
		assert_eq!(tx.value, U256::from(100_000_000_000_000u64));
		assert_eq!(tx.gas_price, GAS_PRICE);
		assert_eq!(tx.gas_limit, 21_000);
		assert_eq!(tx.nonce, 7);
		assert!(tx.input.is_empty());
	}

	#[tokio::test]
	async fn builds_a_token_transfer_with_padded_gas_estimate() {
		let node = MockNode {
			gas_estimate: 60_000,
			..MockNode::default()
		}
		.with_erc20(TOKEN, "Gavin", "GAV", 6);
		let svc = service(node);

		let mut req = request("2");
		req.token_address = Some(TOKEN);
		let tx = svc.create_transaction(req).await.unwrap();

		assert_eq!(tx.to, TxKind::Call(TOKEN));
		assert_eq!(tx.value, U256::ZERO);
		// 60000 * 1.5
		assert_eq!(tx.gas_limit, 90_000);
		assert_eq!(
			tx.input.as_ref(),
			token::encode_transfer(RECIPIENT, U256::from(2_000_000u64))
		);
	}

	#[tokio::test]
	async fn honors_disabled_gas_estimation() {
		let node = MockNode {
			gas_estimate: 60_000,
			..MockNode::default()
		}
		.with_erc20(TOKEN, "Gavin", "GAV", 6);
		let svc = service(node);

		let mut req = request("2");
		req.token_address = Some(TOKEN);
		req.disable_estimate_gas = true;
		let tx = svc.create_transaction(req).await.unwrap();

		assert_eq!(tx.gas_limit, 21_000);
	}

	#[tokio::test]
	async fn signs_with_the_chain_id_of_the_node() {
		let node = MockNode {
			chain_id: 1337,
			..MockNode::default()
		};
		let svc = service(node);

		let tx = svc.create_transaction(request("0.0001")).await.unwrap();
		let envelope = svc
			.sign_transaction(tx, &SecretString::from(SENDER_KEY))
			.await
			.unwrap();

		match envelope {
			TxEnvelope::Legacy(signed) => {
				assert_eq!(signed.tx().chain_id, Some(1337));
				assert_eq!(signed.tx().nonce, 7);
			}
			other => panic!("expected a legacy envelope, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn rejects_malformed_private_keys() {
		let svc = service(MockNode::default());
		let tx = svc.create_transaction(request("0.0001")).await.unwrap();

		let err = svc
			.sign_transaction(tx, &SecretString::from("0xnot-a-key"))
			.await
			.unwrap_err();
		assert!(matches!(err, EthError::InvalidInput(_)));
	}

	#[tokio::test]
	async fn mempool_transactions_are_not_found() {
		let h = hash(1);
		let mut node = MockNode::default();
		node.transactions
			.insert(h, (native_transfer(h, U256::from(1u64)), true));
		let svc = service(node);

		let err = svc.transaction(h).await.unwrap_err();
		assert!(matches!(err, EthError::NotFound(_)));
	}

	#[tokio::test]
	async fn unknown_transactions_are_not_found() {
		let svc = service(MockNode::default());
		let err = svc.transaction(hash(9)).await.unwrap_err();
		assert!(matches!(err, EthError::NotFound(_)));
	}

	#[tokio::test]
	async fn classifies_a_native_transfer() {
		let h = hash(1);
		let one_eth = U256::from(10u64).pow(U256::from(18u64));
		let node = MockNode {
			height: 110,
			..MockNode::default()
		}
		.with_mined(
			native_transfer(h, one_eth),
			receipt(h, true, Vec::new()),
			block(100),
		);
		let svc = service(node);

		let info = svc.transaction(h).await.unwrap();
		assert_eq!(info.id, h);
		assert_eq!(info.from, SENDER);
		assert_eq!(info.to, RECIPIENT);
		assert_eq!(info.token_address, None);
		assert_eq!(info.amount, dec("1"));
		// 20 gwei * 21000 gas
		assert_eq!(info.fee, dec("0.00042"));
		assert_eq!(info.state, SettlementState::Success);
		assert_eq!(info.block_number, 100);
	}

	#[tokio::test]
	async fn recent_transactions_stay_pending() {
		let h = hash(1);
		let node = MockNode {
			height: 103,
			..MockNode::default()
		}
		.with_mined(
			native_transfer(h, U256::from(1u64)),
			receipt(h, true, Vec::new()),
			block(100),
		);
		let svc = service(node);

		let info = svc.transaction(h).await.unwrap();
		assert_eq!(info.state, SettlementState::Pending);
	}

	#[tokio::test]
	async fn classifies_a_token_transfer_from_its_log() {
		let h = hash(2);
		let raw = U256::from(2_000_000u64);
		let input = token::encode_transfer(RECIPIENT, raw);
		let node = MockNode {
			height: 110,
			..MockNode::default()
		}
		.with_erc20(TOKEN, "Gavin", "GAV", 6)
		.with_mined(
			token_transfer(h, TOKEN, input),
			receipt(h, true, vec![transfer_log(SENDER, RECIPIENT, raw)]),
			block(100),
		);
		let svc = service(node);

		let info = svc.transaction(h).await.unwrap();
		assert_eq!(info.token_address, Some(TOKEN));
		assert_eq!(info.from, SENDER);
		assert_eq!(info.to, RECIPIENT);
		assert_eq!(info.amount, dec("2"));
		assert_eq!(info.state, SettlementState::Success);
	}

	#[tokio::test]
	async fn failed_token_transfers_fall_back_to_input_decoding() {
		let h = hash(3);
		let raw = U256::from(2_000_000u64);
		let input = token::encode_transfer(RECIPIENT, raw);
		let node = MockNode {
			height: 110,
			..MockNode::default()
		}
		.with_erc20(TOKEN, "Gavin", "GAV", 6)
		.with_mined(
			token_transfer(h, TOKEN, input),
			// Reverted: no logs, status false.
			receipt(h, false, Vec::new()),
			block(100),
		);
		let svc = service(node);

		let info = svc.transaction(h).await.unwrap();
		assert_eq!(info.token_address, Some(TOKEN));
		assert_eq!(info.from, SENDER);
		assert_eq!(info.to, RECIPIENT);
		assert_eq!(info.amount, dec("2"));
		assert_eq!(info.state, SettlementState::Fail);
	}

	#[tokio::test]
	async fn non_transfer_contract_calls_are_unsupported() {
		let h = hash(4);
		let opaque = Address::repeat_byte(0x42);
		let node = MockNode {
			height: 110,
			..MockNode::default()
		}
		.with_opaque_contract(opaque)
		.with_mined(
			token_transfer(h, opaque, vec![0xde, 0xad, 0xbe, 0xef]),
			receipt(h, true, Vec::new()),
			block(100),
		);
		let svc = service(node);

		let err = svc.transaction(h).await.unwrap_err();
		assert!(matches!(err, EthError::UnsupportedTransaction));
	}

	#[tokio::test]
	async fn block_scans_omit_what_they_cannot_interpret() {
		let native = hash(1);
		let unknown = hash(4);
		let opaque = Address::repeat_byte(0x42);
		let node = MockNode {
			height: 110,
			..MockNode::default()
		}
		.with_opaque_contract(opaque)
		.with_mined(
			native_transfer(native, U256::from(10u64).pow(U256::from(18u64))),
			receipt(native, true, Vec::new()),
			block(100),
		)
		.with_mined(
			token_transfer(unknown, opaque, vec![0xde, 0xad, 0xbe, 0xef]),
			receipt(unknown, true, Vec::new()),
			block(100),
		);
		let svc = service(node);

		let info = svc.block(100).await.unwrap();
		assert_eq!(info.number, 100);
		assert_eq!(info.transactions.len(), 1);
		assert_eq!(info.transactions[0].id, native);
		assert_eq!(info.transactions[0].amount, dec("1"));
	}

	#[tokio::test]
	async fn missing_blocks_are_not_found() {
		let svc = service(MockNode::default());
		let err = svc.block(5).await.unwrap_err();
		assert!(matches!(err, EthError::NotFound(_)));
	}

	#[tokio::test]
	async fn max_fee_adds_the_tip_in_gwei() {
		let node = MockNode {
			gas_price: GAS_PRICE,
			..MockNode::default()
		};
		let svc = service(node);

		// 20 gwei suggested + 2 gwei tip
		assert_eq!(svc.max_fee(2).await.unwrap(), dec("0.000000022"));
	}

	#[tokio::test]
	async fn reads_token_metadata_and_balances() {
		let node = MockNode::default().with_erc20(TOKEN, "Gavin", "GAV", 6);
		let svc = service(node);

		let info = svc.erc20_info(TOKEN).await.unwrap();
		assert_eq!(info.name, "Gavin");
		assert_eq!(info.symbol, "GAV");
		assert_eq!(info.decimals, 6);
		assert_eq!(info.total_supply, U256::from(1_000_000u64));
	}
}
