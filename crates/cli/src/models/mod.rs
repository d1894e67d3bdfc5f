mod cli_args;
mod cli_error;
mod operator_input;

pub use cli_args::*;
pub use cli_error::*;
pub use operator_input::*;
