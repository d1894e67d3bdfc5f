mod amount_randomizer;
mod audit_log;
mod delay_scheduler;
mod dispatcher;
mod ledger;
mod preflight;
mod recipient_loader;
mod transfer_executor;

pub use amount_randomizer::*;
pub use audit_log::*;
pub use delay_scheduler::*;
pub use dispatcher::*;
pub use ledger::*;
pub use preflight::*;
pub use recipient_loader::*;
pub use transfer_executor::*;
