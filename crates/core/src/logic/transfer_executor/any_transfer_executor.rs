use crate::prelude::*;

use async_trait::async_trait;

/// The transfer kind chosen for a run.
#[derive(Debug, From)]
pub enum AnyTransferExecutor<L> {
    Native(NativeTransferExecutor<L>),
    Token(TokenTransferExecutor<L>),
}

#[async_trait]
impl<L: LedgerClient> TransferExecutor for AnyTransferExecutor<L> {
    fn currency(&self) -> &Currency {
        match self {
            AnyTransferExecutor::Native(e) => e.currency(),
            AnyTransferExecutor::Token(e) => e.currency(),
        }
    }

    async fn balance(&self) -> Result<BaseUnits, LedgerError> {
        match self {
            AnyTransferExecutor::Native(e) => e.balance().await,
            AnyTransferExecutor::Token(e) => e.balance().await,
        }
    }

    async fn submit(&self, recipient: Address, amount: BaseUnits) -> Result<TxHash, LedgerError> {
        match self {
            AnyTransferExecutor::Native(e) => e.submit(recipient, amount).await,
            AnyTransferExecutor::Token(e) => e.submit(recipient, amount).await,
        }
    }

    fn refreshes_balance(&self) -> bool {
        match self {
            AnyTransferExecutor::Native(e) => e.refreshes_balance(),
            AnyTransferExecutor::Token(e) => e.refreshes_balance(),
        }
    }
}
