//! Transaction classification and the settlement state machine.
//!
//! Classification turns a raw transaction, its receipt, and its containing
//! block into a [`TransactionInfo`]: it prices the fee, assigns a
//! settlement state, and decodes the transfer either as a native value
//! move or through the token decoder when the destination is a contract.

use crate::{fee::FeePricing, token, EthError};
use chrono::{DateTime, Utc};
use wallet_node::{CodeProbe, EthNode};
use wallet_types::{
	units, NodeBlock, NodeReceipt, NodeTransaction, SettlementState, TransactionInfo,
};

/// Assigns the settlement state for a transaction mined at `tx_height`.
///
/// The receipt status is only trusted once the transaction's block is
/// buried deeper than `confirmations` blocks; until then the transaction
/// is `Pending` regardless of status.
pub fn settlement_state(
	current_height: u64,
	tx_height: u64,
	confirmations: u64,
	receipt_ok: bool,
) -> SettlementState {
	if current_height <= tx_height.saturating_add(confirmations) {
		SettlementState::Pending
	} else if receipt_ok {
		SettlementState::Success
	} else {
		SettlementState::Fail
	}
}

pub(crate) fn block_time(timestamp: u64) -> DateTime<Utc> {
	DateTime::from_timestamp(timestamp as i64, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Classifies one mined transaction.
///
/// Fails with [`EthError::UnsupportedTransaction`] when the destination is
/// a contract but the call is not a token transfer the decoder
/// understands; such failures are local to this transaction.
pub(crate) async fn classify_transaction(
	node: &dyn EthNode,
	tx: &NodeTransaction,
	receipt: &NodeReceipt,
	block: &NodeBlock,
	current_height: u64,
	confirmations: u64,
) -> Result<TransactionInfo, EthError> {
	// Contract creations have no destination to classify against.
	let to = tx.to.ok_or(EthError::UnsupportedTransaction)?;

	let fee = FeePricing::from_transaction(tx, block)?.fee(receipt.gas_used)?;
	let state = settlement_state(
		current_height,
		receipt.block_number,
		confirmations,
		receipt.status,
	);
	let time = block_time(block.timestamp);

	match node.code_at(to).await? {
		CodeProbe::NotContract => Ok(TransactionInfo {
			id: tx.hash,
			block_number: receipt.block_number,
			time,
			from: tx.from,
			to,
			token_address: None,
			amount: units::from_base_units(tx.value, units::NATIVE_DECIMALS)?,
			fee,
			state,
		}),
		CodeProbe::Contract => {
			// The destination only counts as a token once its metadata
			// answers; any other contract is not a transfer we understand.
			let info = token::erc20_info(node, to)
				.await
				.map_err(|_| EthError::UnsupportedTransaction)?;

			// A failed call emits no logs, so fall back to the input data.
			let transfer = match receipt.logs.first() {
				Some(log) => token::transfer_from_log(log)?,
				None => token::transfer_from_input(to, tx.from, &tx.input)?,
			};

			Ok(TransactionInfo {
				id: tx.hash,
				block_number: receipt.block_number,
				time,
				from: transfer.from,
				to: transfer.to,
				token_address: Some(transfer.token),
				amount: units::from_base_units(transfer.amount, info.decimals)?,
				fee,
				state,
			})
		}
	}
}
