//! Process lifecycle: shutdown signals and exit codes

mod exit;
mod shutdown;

pub use exit::{report, Outcome};
pub use shutdown::ShutdownSignal;
