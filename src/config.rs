use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use crate::models::errors::ConfigError;
use crate::models::wrapper_models::WrapperPreset;

const DEFAULT_PORT: u16 = 4545;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub prod: bool,
    pub wrapper_preset: WrapperPreset,
    pub metrics_port: Option<u16>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => parse_port("PORT", raw)?,
            None => DEFAULT_PORT,
        };
        let prod = lookup("PROD").is_some_and(|raw| raw == "true");
        let wrapper_preset = match lookup("WRAPPER_PRESET") {
            Some(raw) => raw.parse()?,
            None => WrapperPreset::default(),
        };
        let metrics_port = lookup("METRICS_PORT")
            .map(|raw| parse_port("METRICS_PORT", raw))
            .transpose()?;

        Ok(Self {
            port,
            prod,
            wrapper_preset,
            metrics_port,
        })
    }

    /// Production binds IPv4 on all interfaces, otherwise the IPv6 wildcard.
    pub fn bind_addr(&self) -> SocketAddr {
        self.wildcard_addr(self.port)
    }

    /// Prometheus exporter address, on the same interfaces as the server.
    pub fn metrics_addr(&self) -> Option<SocketAddr> {
        self.metrics_port.map(|port| self.wildcard_addr(port))
    }

    fn wildcard_addr(&self, port: u16) -> SocketAddr {
        if self.prod {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, port))
        }
    }
}

fn parse_port(name: &'static str, raw: String) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort { name, value: raw })
}
