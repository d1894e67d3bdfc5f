use crate::prelude::*;

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Builder)]
pub struct TokenMetadata {
    #[getset(get = "pub")]
    #[builder(into)]
    symbol: String,

    #[getset(get_copy = "pub")]
    decimals: u8,
}

/// Failures reported by the chain or the node. Every variant is recoverable
/// for a single recipient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Failed to connect to {url}: {underlying}")]
    Connect { url: String, underlying: String },

    #[error("Invalid signing key: {underlying}")]
    InvalidSigningKey { underlying: String },

    #[error("Query failed: {underlying}")]
    Query { underlying: String },

    #[error("Value {value} does not fit in 128 bits")]
    ValueTooLarge { value: String },

    #[error("Submission rejected: {underlying}")]
    Submission { underlying: String },

    #[error("Waiting for confirmation of {tx_hash} failed: {underlying}")]
    Confirmation { tx_hash: TxHash, underlying: String },

    #[error("Transaction {tx_hash} was dropped before confirmation")]
    Dropped { tx_hash: TxHash },

    #[error("Transaction {tx_hash} reverted")]
    Reverted { tx_hash: TxHash },
}

/// Chain access used by a run: balance queries and confirmed transfers from
/// a single signing account.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// The account funds are sent from.
    fn sender_address(&self) -> Address;

    async fn native_balance(&self) -> Result<BaseUnits, LedgerError>;

    /// Submits a native transfer and waits until it is confirmed.
    async fn send_native(
        &self,
        recipient: Address,
        amount: BaseUnits,
    ) -> Result<TxHash, LedgerError>;

    async fn token_metadata(&self, contract: Address) -> Result<TokenMetadata, LedgerError>;

    async fn token_balance(&self, contract: Address) -> Result<BaseUnits, LedgerError>;

    /// Submits a token transfer and waits until it is confirmed.
    async fn send_token(
        &self,
        contract: Address,
        recipient: Address,
        amount: BaseUnits,
    ) -> Result<TxHash, LedgerError>;
}
