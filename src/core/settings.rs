//! Resolved application settings
//!
//! Each setting comes from the first source that provides it:
//! 1. CLI argument (or its environment variable)
//! 2. Config file (~/.config/fontshelf/settings.json)
//! 3. Built-in default

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::ui::theme::ThemeVariant;
use anyhow::{anyhow, Context, Result};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use tracing::debug;

/// API host of a server on the default bind address
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Address the server listens on by default
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// Environment variable selecting the API host
pub const BASE_URL_ENV: &str = "FONTSHELF_BASE_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_address: SocketAddr,
    pub base_url: String,
    /// Fixture file; `None` uses the embedded fixtures
    pub data_path: Option<PathBuf>,
    pub theme: ThemeVariant,
    /// Pages read fixtures in-process instead of through the API
    pub direct: bool,
    pub log_to_file: bool,
}

impl Settings {
    pub fn resolve(cli: &CliArgs, config: Option<&ConfigFile>) -> Result<Self> {
        let bind_address = match cli.bind.or_else(|| config.and_then(|c| c.bind_address)) {
            Some(addr) => addr,
            None => DEFAULT_BIND_ADDRESS
                .parse()
                .context("Invalid default bind address")?,
        };

        let base_url = cli
            .base_url
            .clone()
            .or_else(|| config.and_then(|c| c.base_url.clone()))
            .unwrap_or_else(|| local_base_url(bind_address));

        let data_path = cli
            .data
            .clone()
            .or_else(|| config.and_then(|c| c.data_path.clone()));

        let theme = Self::resolve_theme(cli, config)?;

        let settings = Self {
            bind_address,
            base_url,
            data_path,
            theme,
            direct: cli.direct,
            log_to_file: cli.log_file,
        };
        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }

    fn resolve_theme(cli: &CliArgs, config: Option<&ConfigFile>) -> Result<ThemeVariant> {
        if let Some(name) = &cli.theme {
            return ThemeVariant::parse(name).ok_or_else(|| anyhow!("Unknown theme: '{name}'"));
        }

        if let Some(name) = config.and_then(|c| c.default_theme.as_deref()) {
            match ThemeVariant::parse(name) {
                Some(variant) => return Ok(variant),
                None => tracing::warn!("Ignoring unknown theme '{}' in settings.json", name),
            }
        }

        Ok(ThemeVariant::default())
    }
}

/// URL at which this server reaches its own API when bound to `bind_address`
pub fn local_base_url(bind_address: SocketAddr) -> String {
    let mut addr = bind_address;
    if addr.ip().is_unspecified() {
        let loopback = match addr {
            SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
            SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::LOCALHOST),
        };
        addr.set_ip(loopback);
    }
    format!("http://{addr}")
}
