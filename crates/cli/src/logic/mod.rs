mod init_logging;
mod prompt;
mod run;

pub use init_logging::*;
pub use prompt::*;
pub use run::*;
