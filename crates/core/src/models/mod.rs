mod address;
mod amount_range;
mod batch_session;
mod config_correction;
mod currency;
mod delay_range;
mod dispatch_parameters;
mod dispatch_report;
mod dispatch_state;
mod error;
mod transfer_plan;
mod transfer_result;
mod tx_hash;

pub use address::*;
pub use amount_range::*;
pub use batch_session::*;
pub use config_correction::*;
pub use currency::*;
pub use delay_range::*;
pub use dispatch_parameters::*;
pub use dispatch_report::*;
pub use dispatch_state::*;
pub use error::*;
pub use transfer_plan::*;
pub use transfer_result::*;
pub use tx_hash::*;
