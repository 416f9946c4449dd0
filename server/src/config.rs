//! Host configuration parsed from the environment.
//!
//! Leptos options (site root, address, output name) come from
//! `[workspace.metadata.leptos]` via the `LEPTOS_*` variables cargo-leptos
//! exports. `PORT` overrides the port of the site address so the binary can
//! run behind platforms that assign one.

use std::net::SocketAddr;

use leptos::config::{LeptosOptions, get_configuration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid PORT '{value}'")]
    InvalidPort { value: String },
}

#[derive(Debug, Clone)]
pub struct HostConfig {
    pub leptos_options: LeptosOptions,
    pub addr: SocketAddr,
}

impl HostConfig {
    /// Build the host config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the Leptos options cannot be loaded or `PORT` is
    /// set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let addr = apply_port_override(leptos_options.site_addr, std::env::var("PORT").ok().as_deref())?;
        Ok(Self { leptos_options, addr })
    }
}

/// Replace the port of `addr` with `raw` when present and non-empty.
pub fn apply_port_override(addr: SocketAddr, raw: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(addr);
    };
    let port = raw
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort { value: raw.to_owned() })?;
    Ok(SocketAddr::new(addr.ip(), port))
}

/// Tracing filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
