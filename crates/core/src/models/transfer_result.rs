use crate::prelude::*;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum TransferStatus {
    #[display("SUCCESS")]
    #[serde(rename = "SUCCESS")]
    Success,

    #[display("FAILED")]
    #[serde(rename = "FAILED")]
    Failed,
}

/// Outcome of exactly one [`TransferPlan`]. `detail` holds the transaction
/// hash on success and the human readable cause on failure.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct TransferResult {
    #[getset(get = "pub")]
    recipient: Address,

    #[getset(get_copy = "pub")]
    amount: Decimal,

    #[getset(get_copy = "pub")]
    status: TransferStatus,

    #[getset(get = "pub")]
    detail: String,
}

impl TransferResult {
    pub fn succeeded(plan: &TransferPlan, tx_hash: TxHash) -> Self {
        Self {
            recipient: *plan.recipient(),
            amount: plan.amount(),
            status: TransferStatus::Success,
            detail: tx_hash.to_string(),
        }
    }

    pub fn failed(plan: &TransferPlan, cause: impl std::fmt::Display) -> Self {
        Self {
            recipient: *plan.recipient(),
            amount: plan.amount(),
            status: TransferStatus::Failed,
            detail: cause.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == TransferStatus::Success
    }
}
