//! key-relay: forwards global key presses to a local listener over UDP
//!
//! Installs a system-wide keyboard hook and turns a fixed set of keys into
//! short text commands:
//! - Numpad 0 (or anything reporting scan code 82) sends `toggle`
//! - Arrow keys send `nav:up`, `nav:down`, `nav:left`, `nav:right`
//!
//! Each command is one UDP datagram to 127.0.0.1:3002. Delivery is best
//! effort: no acknowledgment, no retry.

mod config;
mod dispatch;
mod hotkey;
mod lifecycle;

use std::future::Future;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::dispatch::{Dispatcher, UdpSink};
use crate::hotkey::{HookError, HotkeyListener, KeySource, RdevSource};
use crate::lifecycle::{Outcome, ShutdownSignal};

/// How long a freshly started hook gets to report a registration failure
const HOOK_STARTUP_GRACE: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> ExitCode {
    let result = match init_logging() {
        Ok(()) => relay().await,
        Err(e) => Err(e),
    };

    ExitCode::from(lifecycle::report(result))
}

/// Log filter from `RUST_LOG`, falling back to `info` when unset or invalid
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging on stderr
fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to initialize logging")
}

async fn relay() -> Result<Outcome> {
    info!(version = env!("CARGO_PKG_VERSION"), "key-relay starting");

    let config = Config::load().context("failed to load configuration")?;
    let shutdown = ShutdownSignal::new();

    Ok(run(RdevSource, &config, shutdown.wait()).await)
}

/// Install the hook and relay key presses until interrupted or the hook fails
async fn run<K>(source: K, config: &Config, shutdown: impl Future<Output = ()>) -> Outcome
where
    K: KeySource + Send + 'static,
{
    tokio::pin!(shutdown);

    info!("[1/3] registering key press handler");
    let sink = UdpSink::new(config.command_addr);
    let mut failure = match HotkeyListener::new(source).start(Dispatcher::new(sink)) {
        Ok(failure) => failure,
        Err(e) => return Outcome::HookFailed(e),
    };
    info!(addr = %sink.addr(), "[1/3] key press handler registered");

    info!("[2/3] waiting for keyboard hook");
    tokio::select! {
        _ = &mut shutdown => return Outcome::Interrupted,
        result = &mut failure => {
            return Outcome::HookFailed(result.unwrap_or(HookError::Stopped));
        }
        _ = tokio::time::sleep(HOOK_STARTUP_GRACE) => {}
    }
    info!("[2/3] keyboard hook active");

    info!("[3/3] listening for keys (Numpad0, Arrow keys), press Ctrl+C to exit");
    tokio::select! {
        _ = &mut shutdown => Outcome::Interrupted,
        result = &mut failure => Outcome::HookFailed(result.unwrap_or(HookError::Stopped)),
    }
}
