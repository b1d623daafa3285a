//! Host configuration read from the environment.
//!
//! Leptos options (`site_addr`, `site_root`, output name) come from the
//! `cargo-leptos` metadata via `get_configuration`; the variables here only
//! override them for deployment.
//!
//! - `PORT`: listen port, replacing the port of `site_addr`
//! - `SITE_ROOT`: directory holding the built `pkg/` assets

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    pub port: Option<u16>,
    pub site_root: Option<PathBuf>,
}

impl HostConfig {
    /// Build the host config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_root = parse_site_root(std::env::var("SITE_ROOT").ok().as_deref());
        Ok(Self { port, site_root })
    }

    /// Address to bind, starting from the Leptos `site_addr`.
    #[must_use]
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        let mut addr = site_addr;
        if let Some(port) = self.port {
            addr.set_port(port);
        }
        addr
    }

    /// Asset directory, starting from the Leptos `site_root`.
    #[must_use]
    pub fn site_root(&self, leptos_site_root: &str) -> PathBuf {
        self.site_root.clone().unwrap_or_else(|| PathBuf::from(leptos_site_root))
    }
}

fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u16>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_site_root(raw: Option<&str>) -> Option<PathBuf> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(PathBuf::from)
}
