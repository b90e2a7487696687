pub mod dispatch;
pub mod registry;

pub use dispatch::{dispatch, run_command};
pub use registry::{CommandHandler, CommandRegistry};
