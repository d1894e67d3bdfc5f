mod evm_ledger;
mod ledger_client;
#[cfg(test)]
mod scripted_ledger;

pub use evm_ledger::*;
pub use ledger_client::*;
#[cfg(test)]
pub(crate) use scripted_ledger::*;
