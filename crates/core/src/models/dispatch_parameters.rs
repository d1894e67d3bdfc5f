use crate::prelude::*;

use std::path::PathBuf;

pub const DEFAULT_RECIPIENTS_PATH: &str = "recipients.txt";
pub const DEFAULT_AUDIT_LOG_PATH: &str = "batch-log.csv";

/// Configuration of a run, built once at startup and never mutated.
#[derive(Debug, Clone, Getters, CopyGetters, Builder)]
pub struct DispatchParameters {
    #[getset(get = "pub")]
    #[builder(into, default = PathBuf::from(DEFAULT_RECIPIENTS_PATH))]
    recipients_path: PathBuf,

    #[getset(get = "pub")]
    #[builder(into, default = PathBuf::from(DEFAULT_AUDIT_LOG_PATH))]
    audit_log_path: PathBuf,

    #[getset(get = "pub")]
    amount_range: AmountRange,

    #[getset(get = "pub")]
    delay_range: DelayRange,

    /// Seeds amount and delay generation for a reproducible run.
    #[getset(get_copy = "pub")]
    seed: Option<u64>,
}
