use crate::prelude::*;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const BINARY_NAME: &str = "batch-sender";
pub const DEFAULT_RPC_URL: &str = "https://tea-sepolia.g.alchemy.com/public";
pub const DEFAULT_NATIVE_SYMBOL: &str = "TEA";
pub const DEFAULT_NATIVE_DECIMALS: u8 = 18;

/// Sends a randomized amount to every address in a recipient file, one
/// transaction at a time with a random pause in between.
///
/// Amount and delay ranges are asked for interactively, and nothing is sent
/// before the plan has been confirmed with `yes`. The signing key is read from
/// `PRIVATE_KEY`, optionally via a `.env` file. Every attempt is recorded in a
/// CSV log.
#[derive(Debug, Parser)]
#[command(name = BINARY_NAME, author)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct CliArgs {
    /// JSON-RPC endpoint of the node to submit transactions to.
    #[arg(long, global = true, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// File with one recipient address per line.
    #[arg(long, global = true, default_value = DEFAULT_RECIPIENTS_PATH)]
    pub recipients: PathBuf,

    /// CSV file every transfer attempt is recorded in. Truncated on start.
    #[arg(long, global = true, default_value = DEFAULT_AUDIT_LOG_PATH)]
    pub log_file: PathBuf,

    /// Seed for amounts and delays, for a reproducible plan.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send the chain's native currency.
    Native(NativeArgs),
    /// Send an ERC-20 token.
    Token(TokenArgs),
}

#[derive(Debug, Args)]
pub struct NativeArgs {
    /// Symbol the native currency is displayed with.
    #[arg(long, default_value = DEFAULT_NATIVE_SYMBOL)]
    pub native_symbol: String,

    /// Number of decimals of the native currency.
    #[arg(long, default_value_t = DEFAULT_NATIVE_DECIMALS)]
    pub native_decimals: u8,
}

#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Address of the token contract, asked for when omitted.
    #[arg(long)]
    pub contract: Option<Address>,
}

impl CliArgs {
    pub fn rpc_url(&self) -> Result<Url, InvalidCliArgs> {
        Url::parse(&self.rpc_url).map_err(|_| InvalidCliArgs::RpcUrlInvalid {
            bad_value: self.rpc_url.clone(),
        })
    }
}
