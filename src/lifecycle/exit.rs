//! Run outcomes and process exit codes

use tracing::{error, info};

use crate::hotkey::HookError;

/// How a run of the relay ended
#[derive(Debug)]
pub enum Outcome {
    /// The user interrupted the process
    Interrupted,
    /// The keyboard hook could not be installed, or died
    HookFailed(HookError),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Interrupted => 0,
            Outcome::HookFailed(_) => 1,
        }
    }
}

/// Log how the run ended and pick the exit code
pub fn report(result: anyhow::Result<Outcome>) -> u8 {
    match result {
        Ok(outcome) => {
            match &outcome {
                Outcome::Interrupted => info!("interrupted, exiting"),
                Outcome::HookFailed(err) => {
                    error!(error = %err, "keyboard hook failed");
                    if let Some(hint) = err.hint() {
                        error!("{hint}");
                    }
                }
            }
            outcome.exit_code()
        }
        Err(err) => {
            // {:?} on anyhow::Error prints the cause chain and any captured backtrace
            error!("unexpected error: {err:?}");
            1
        }
    }
}
