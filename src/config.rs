//! Configuration loading and management

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use anyhow::Result;

/// Where commands are sent: the listener on loopback port 3002
pub const COMMAND_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3002));

/// Relay configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Destination for command datagrams
    pub command_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_addr: COMMAND_ADDR,
        }
    }
}

impl Config {
    /// Load configuration from defaults
    ///
    /// The command address is fixed. Logging is configured separately
    /// through `RUST_LOG`.
    pub fn load() -> Result<Self> {
        Ok(Self::default())
    }
}
