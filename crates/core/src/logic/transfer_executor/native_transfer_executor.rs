use crate::prelude::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Direct value transfers of the chain's base currency.
#[derive(Debug)]
pub struct NativeTransferExecutor<L> {
    ledger: Arc<L>,
    currency: Currency,
}

impl<L: LedgerClient> NativeTransferExecutor<L> {
    pub fn new(ledger: Arc<L>, symbol: impl Into<String>, decimals: u8) -> Self {
        let currency = Currency::builder()
            .kind(CurrencyKind::Native)
            .symbol(symbol)
            .decimals(decimals)
            .build();
        Self { ledger, currency }
    }
}

#[async_trait]
impl<L: LedgerClient> TransferExecutor for NativeTransferExecutor<L> {
    fn currency(&self) -> &Currency {
        &self.currency
    }

    async fn balance(&self) -> Result<BaseUnits, LedgerError> {
        self.ledger.native_balance().await
    }

    async fn submit(&self, recipient: Address, amount: BaseUnits) -> Result<TxHash, LedgerError> {
        self.ledger.send_native(recipient, amount).await
    }
}
