//! Configuration module for the wallet gateway.
//!
//! Loads gateway configuration from TOML and validates it before any
//! component is constructed. All tunables have defaults except the node
//! endpoint, which must be provided.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the input dump
		ConfigError::Parse(err.message().to_string())
	}
}

/// Top-level gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Node collaborator settings.
	pub node: NodeConfig,
	/// Account-chain engine settings.
	#[serde(default)]
	pub eth: EthConfig,
}

/// Connection settings for the node collaborator.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodeConfig {
	/// HTTP(S) RPC endpoint of the trusted node.
	pub rpc_url: String,
}

/// Settings consumed by the account-chain engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EthConfig {
	/// Blocks required on top of a transaction's block before its receipt
	/// status is trusted as final.
	#[serde(default = "default_confirmations")]
	pub confirmations: u64,
	/// Factor applied to node gas estimates when building token transfers.
	#[serde(default = "default_gas_estimate_multiplier")]
	pub gas_estimate_multiplier: f64,
}

impl Default for EthConfig {
	fn default() -> Self {
		Self {
			confirmations: default_confirmations(),
			gas_estimate_multiplier: default_gas_estimate_multiplier(),
		}
	}
}

fn default_confirmations() -> u64 {
	6
}

fn default_gas_estimate_multiplier() -> f64 {
	1.0
}

impl Config {
	/// Loads and validates configuration from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let raw = std::fs::read_to_string(path)?;
		Self::from_toml(&raw)
	}

	/// Parses and validates configuration from a TOML string.
	pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
		let config: Config = toml::from_str(raw)?;
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.node.rpc_url.is_empty() {
			return Err(ConfigError::Validation(
				"node.rpc_url must not be empty".to_string(),
			));
		}
		if self.eth.gas_estimate_multiplier < 1.0 {
			return Err(ConfigError::Validation(
				"eth.gas_estimate_multiplier must be at least 1.0".to_string(),
			));
		}
		Ok(())
	}
}
