//! Command-line entry point for the wallet gateway.
//!
//! Wires the configuration, the node collaborator, and the account-chain
//! service together and exposes the query surface as subcommands. Output
//! is JSON so the tool slots into scripts.

use alloy_primitives::{Address, B256};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use wallet_config::Config;
use wallet_eth::EthService;
use wallet_node::alloy::AlloyNode;

/// Command-line arguments for the gateway.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Classify a mined transaction by hash
	Tx { hash: B256 },
	/// Classify every transaction in a block
	Block { number: u64 },
	/// Native balance of an address
	Balance { address: Address },
	/// Node-suggested gas price in native units
	GasPrice,
	/// Current chain height
	Height,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));
	fmt().with_env_filter(env_filter).init();

	let config = Config::from_file(&args.config)?;
	tracing::info!(rpc_url = %config.node.rpc_url, "loaded configuration");

	let node = Arc::new(AlloyNode::new(&config.node.rpc_url)?);
	let service = EthService::new(
		node,
		config.eth.confirmations,
		config.eth.gas_estimate_multiplier,
	);

	match args.command {
		Command::Tx { hash } => print_json(&service.transaction(hash).await?)?,
		Command::Block { number } => print_json(&service.block(number).await?)?,
		Command::Balance { address } => println!("{}", service.balance(address).await?),
		Command::GasPrice => println!("{}", service.suggest_gas_price().await?),
		Command::Height => println!("{}", service.current_height().await?),
	}

	Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}
