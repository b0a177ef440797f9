//! Standard-token reads and transfer decoding.
//!
//! The token interface is declared once with `sol!`; metadata reads go
//! through the node's read-only call capability, and transfers are
//! recovered either from the emitted `Transfer` event or, when a receipt
//! carries no logs, from the call input itself.

use crate::EthError;
use alloy_primitives::{Address, Log, LogData, U256};
use alloy_sol_types::{sol, SolCall, SolEvent};
use wallet_node::EthNode;
use wallet_types::{CallRequest, Erc20Info, NodeLog};

sol! {
	/// Read surface and transfer entry points of the standard token
	/// interface.
	interface IErc20 {
		function name() external view returns (string);
		function symbol() external view returns (string);
		function decimals() external view returns (uint8);
		function totalSupply() external view returns (uint256);
		function balanceOf(address owner) external view returns (uint256);
		function transfer(address to, uint256 amount) external returns (bool);

		event Transfer(address indexed from, address indexed to, uint256 value);
	}
}

/// A decoded token transfer with the amount still in base units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTransfer {
	/// Contract the transfer was routed through.
	pub token: Address,
	pub from: Address,
	pub to: Address,
	pub amount: U256,
}

async fn read<C: SolCall>(node: &dyn EthNode, to: Address, call: C) -> Result<C::Return, EthError> {
	let data = node
		.call(CallRequest {
			from: None,
			to,
			value: U256::ZERO,
			data: call.abi_encode().into(),
		})
		.await?;

	C::abi_decode_returns(&data, true).map_err(|_| EthError::UnsupportedTransaction)
}

/// Fetches the metadata of a token contract.
///
/// Nothing is cached: `decimals` in particular must reflect the contract
/// at classification time.
pub(crate) async fn erc20_info(node: &dyn EthNode, address: Address) -> Result<Erc20Info, EthError> {
	let name = read(node, address, IErc20::nameCall {}).await?._0;
	let decimals = read(node, address, IErc20::decimalsCall {}).await?._0;
	let symbol = read(node, address, IErc20::symbolCall {}).await?._0;
	let total_supply = read(node, address, IErc20::totalSupplyCall {}).await?._0;

	Ok(Erc20Info {
		address,
		name,
		symbol,
		decimals,
		total_supply,
	})
}

/// Reads a holder's token balance in base units.
pub(crate) async fn balance_of(
	node: &dyn EthNode,
	token: Address,
	owner: Address,
) -> Result<U256, EthError> {
	Ok(read(node, token, IErc20::balanceOfCall { owner }).await?._0)
}

/// Encodes `transfer(to, amount)` call data.
pub(crate) fn encode_transfer(to: Address, amount: U256) -> Vec<u8> {
	IErc20::transferCall { to, amount }.abi_encode()
}

/// Decodes a transfer from an emitted `Transfer` event log.
pub fn transfer_from_log(log: &NodeLog) -> Result<TokenTransfer, EthError> {
	let data = LogData::new(log.topics.clone(), log.data.clone())
		.ok_or(EthError::UnsupportedTransaction)?;
	let log = Log {
		address: log.address,
		data,
	};

	let event =
		IErc20::Transfer::decode_log(&log, true).map_err(|_| EthError::UnsupportedTransaction)?;

	Ok(TokenTransfer {
		token: event.address,
		from: event.data.from,
		to: event.data.to,
		amount: event.data.value,
	})
}

/// Decodes a transfer from raw call input.
///
/// Used when the receipt carries no logs, e.g. for a reverted call that
/// still consumed gas. The sender is the transaction sender; the input
/// must start with the `transfer(address,uint256)` selector.
pub fn transfer_from_input(
	token: Address,
	sender: Address,
	input: &[u8],
) -> Result<TokenTransfer, EthError> {
	if input.len() < 4 || input[..4] != IErc20::transferCall::SELECTOR {
		return Err(EthError::UnsupportedTransaction);
	}

	let call = IErc20::transferCall::abi_decode(input, true)
		.map_err(|_| EthError::UnsupportedTransaction)?;

	Ok(TokenTransfer {
		token,
		from: sender,
		to: call.to,
		amount: call.amount,
	})
}
