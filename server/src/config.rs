//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port; the Leptos `site-addr` is used when absent
//! - `SITE_ROOT`: directory holding the built `pkg/` assets; overrides the
//!   Leptos `site-root`

use std::net::SocketAddr;
use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("SITE_ROOT").ok().as_deref(),
        )
    }

    /// Build typed config from raw variable values.
    pub fn from_vars(port: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        let port = port
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(|raw| raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned())))
            .transpose()?;
        let site_root = site_root
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);
        Ok(Self { port, site_root })
    }

    /// Address to bind: `PORT` on all interfaces, else the Leptos default.
    #[must_use]
    pub fn bind_addr(&self, leptos_addr: SocketAddr) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::from(([0, 0, 0, 0], port)),
            None => leptos_addr,
        }
    }

    /// Directory served under `/pkg`'s parent.
    #[must_use]
    pub fn site_root(&self, leptos_site_root: &str) -> PathBuf {
        self.site_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(leptos_site_root))
    }
}
