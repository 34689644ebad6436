//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
        }
    }
}

impl HostConfig {
    /// Build from the environment.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is set but does not parse.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_values(
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    /// # Errors
    ///
    /// Returns an error if a provided value does not parse.
    pub fn from_values(bind_addr: Option<&str>, port: Option<&str>) -> Result<Self, HostError> {
        let mut config = Self::default();
        if let Some(raw) = bind_addr.map(str::trim).filter(|v| !v.is_empty()) {
            config.bind_addr = raw
                .parse()
                .map_err(|_| HostError::InvalidBindAddr(raw.to_owned()))?;
        }
        if let Some(raw) = port.map(str::trim).filter(|v| !v.is_empty()) {
            config.port = raw.parse().map_err(|_| HostError::InvalidPort(raw.to_owned()))?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
