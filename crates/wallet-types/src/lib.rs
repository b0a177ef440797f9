//! Common types module for the wallet gateway.
//!
//! This crate defines the value objects shared across the gateway: the
//! normalized transaction and block views produced by classification, the
//! data shapes exchanged with the node collaborator, and the exact
//! base-unit arithmetic every monetary amount goes through.

/// Normalized transaction, block, and request types for the account chain.
pub mod eth;
/// Data shapes returned by the node collaborator.
pub mod node;
/// Zeroizing wrapper for private key material.
pub mod secret_string;
/// Exact conversions between base units and decimal amounts.
pub mod units;

// Re-export all types for convenient access
pub use eth::{
	BlockInfo, CreateTransactionRequest, Erc20Info, SettlementState, TransactionInfo,
};
pub use node::{CallRequest, NodeBlock, NodeLog, NodeReceipt, NodeTransaction};
pub use secret_string::SecretString;
pub use units::{from_base_units, to_base_units, AmountError, NATIVE_DECIMALS};
