use crate::prelude::*;

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that end a run before or outside the per recipient transfers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Load recipients error {0}")]
    LoadRecipients(#[from] LoadRecipientsError),

    #[error("Planning error {0}")]
    Planning(#[from] PlanningError),

    #[error("Preflight error {0}")]
    Preflight(#[from] PreflightError),

    #[error("Audit log error {0}")]
    AuditLog(#[from] AuditLogError),

    #[error("Ledger error {0}")]
    Ledger(#[from] LedgerError),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadRecipientsError {
    #[error("Failed to read recipients file {}: {underlying}", path.display())]
    Unreadable {
        path: PathBuf,
        underlying: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanningError {
    #[error("No amount in [{min}, {max}] can be expressed with {precision} fractional digits")]
    RangeBelowPrecision {
        min: Decimal,
        max: Decimal,
        precision: u32,
    },

    #[error("Amount range [{min}, {max}] is too large")]
    RangeTooLarge { min: Decimal, max: Decimal },
}

#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    #[error("Insufficient balance: have {balance}, need {needed}")]
    InsufficientBalance { balance: String, needed: String },

    #[error("Planned total does not fit in base units")]
    TotalOverflow,

    #[error("Planned amount cannot be sent: {0}")]
    UnsendableAmount(#[from] AmountConversionError),

    #[error("Failed to query balance: {0}")]
    BalanceUnavailable(#[from] LedgerError),
}

#[derive(Debug, thiserror::Error)]
pub enum AuditLogError {
    #[error("Failed to create audit log {}: {underlying}", path.display())]
    Create {
        path: PathBuf,
        underlying: std::io::Error,
    },

    #[error("Failed to write audit log record: {0}")]
    Write(#[from] csv::Error),

    #[error("Failed to persist audit log: {0}")]
    Persist(#[from] std::io::Error),
}
