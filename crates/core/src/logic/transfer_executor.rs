mod any_transfer_executor;
mod native_transfer_executor;
mod token_transfer_executor;

pub use any_transfer_executor::*;
pub use native_transfer_executor::*;
pub use token_transfer_executor::*;

use crate::prelude::*;

use async_trait::async_trait;

/// Submits the transfers of one run, all in the same currency.
#[async_trait]
pub trait TransferExecutor: Send + Sync {
    fn currency(&self) -> &Currency;

    /// Live balance of the sending account in this currency.
    async fn balance(&self) -> Result<BaseUnits, LedgerError>;

    /// Submits one transfer and waits for its confirmation.
    async fn submit(&self, recipient: Address, amount: BaseUnits) -> Result<TxHash, LedgerError>;

    /// Whether the dispatcher re-queries the balance after each confirmed
    /// transfer.
    fn refreshes_balance(&self) -> bool {
        false
    }

    /// Runs `plan` to completion. Never fails: any error becomes a
    /// [`TransferStatus::Failed`] result.
    async fn execute(&self, plan: &TransferPlan) -> TransferResult {
        let amount = match self.currency().to_base_units(plan.amount()) {
            Ok(amount) => amount,
            Err(e) => return TransferResult::failed(plan, e),
        };
        match self.submit(*plan.recipient(), amount).await {
            Ok(tx_hash) => TransferResult::succeeded(plan, tx_hash),
            Err(e) => TransferResult::failed(plan, e),
        }
    }
}
