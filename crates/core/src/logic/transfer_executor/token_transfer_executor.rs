use crate::prelude::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Transfers through a fungible token contract.
#[derive(Debug)]
pub struct TokenTransferExecutor<L> {
    ledger: Arc<L>,
    contract: Address,
    currency: Currency,
}

impl<L: LedgerClient> TokenTransferExecutor<L> {
    /// Reads symbol and decimals from the token contract.
    pub async fn bootstrap(ledger: Arc<L>, contract: Address) -> Result<Self, LedgerError> {
        let metadata = ledger.token_metadata(contract).await?;
        info!(
            "🪙 Token {contract}: symbol {}, {} decimals",
            metadata.symbol(),
            metadata.decimals()
        );
        let currency = Currency::builder()
            .kind(CurrencyKind::Token(contract))
            .symbol(metadata.symbol().clone())
            .decimals(metadata.decimals())
            .build();
        Ok(Self {
            ledger,
            contract,
            currency,
        })
    }

    pub fn contract(&self) -> Address {
        self.contract
    }
}

#[async_trait]
impl<L: LedgerClient> TransferExecutor for TokenTransferExecutor<L> {
    fn currency(&self) -> &Currency {
        &self.currency
    }

    async fn balance(&self) -> Result<BaseUnits, LedgerError> {
        self.ledger.token_balance(self.contract).await
    }

    async fn submit(&self, recipient: Address, amount: BaseUnits) -> Result<TxHash, LedgerError> {
        self.ledger
            .send_token(self.contract, recipient, amount)
            .await
    }

    fn refreshes_balance(&self) -> bool {
        true
    }
}
