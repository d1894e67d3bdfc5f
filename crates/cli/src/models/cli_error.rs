use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("RPC url invalid {bad_value}")]
    RpcUrlInvalid { bad_value: String },

    #[error("Invalid amount range: {0}")]
    AmountRange(#[from] InvalidAmountRange),
}

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Input closed while waiting for: {question}")]
    InputClosed { question: String },

    #[error("Failed to read or write the terminal: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("Core error: {0}")]
    CoreError(#[from] Error),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("`PRIVATE_KEY` is not set in the environment or in `.env`")]
    MissingPrivateKey,

    #[error("Run not confirmed, nothing was sent")]
    Declined,
}
