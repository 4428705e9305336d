//! Best-effort UDP delivery of commands
//!
//! Every command goes out on a fresh socket that is dropped right after the
//! send. Nothing is retried and nothing is acknowledged.

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

use tracing::{debug, info, warn};

use super::command::Command;
use crate::hotkey::KeyEvent;

/// Errors that can occur while sending a command
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("failed to open UDP socket: {0}")]
    Bind(#[source] io::Error),

    #[error("failed to send datagram to {addr}: {source}")]
    Send {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}

/// Somewhere commands can be delivered
pub trait CommandSink {
    /// Deliver one command, returning the number of bytes written
    fn send(&self, command: Command) -> Result<usize, SendError>;
}

/// Sends each command as a single UDP datagram
#[derive(Debug, Clone, Copy)]
pub struct UdpSink {
    addr: SocketAddr,
}

impl UdpSink {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn local_addr(&self) -> SocketAddr {
        match self.addr {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        }
    }
}

impl CommandSink for UdpSink {
    fn send(&self, command: Command) -> Result<usize, SendError> {
        let socket = UdpSocket::bind(self.local_addr()).map_err(SendError::Bind)?;
        socket
            .send_to(command.as_str().as_bytes(), self.addr)
            .map_err(|source| SendError::Send {
                addr: self.addr,
                source,
            })
    }
}

/// Maps key presses to commands and hands them to a sink
pub struct Dispatcher<S> {
    sink: S,
}

impl<S: CommandSink> Dispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Handle one key press
    ///
    /// Returns the matched command, whether or not delivery succeeded. Send
    /// failures are logged and swallowed.
    pub fn handle(&self, event: &KeyEvent) -> Option<Command> {
        debug!(key = %event.name, scan_code = event.scan_code, "key pressed");

        let command = Command::for_key(event)?;
        match self.sink.send(command) {
            Ok(bytes) => info!(%command, key = %event.name, bytes, "command sent"),
            Err(e) => warn!(%command, error = %e, "failed to send command"),
        }

        Some(command)
    }
}
