//! Configuration module
//!
//! Resolves the bind address for the backend. Sources, lowest to highest
//! priority: compiled defaults, an optional `config.toml`, and
//! `BACKEND`-prefixed environment variables. The defaults preserve the
//! reference address `127.0.0.1:8081` so existing harnesses work unconfigured.

use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from the default `config` file if one exists
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("BACKEND"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8081)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_address() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8081);
        assert_eq!(
            cfg.socket_addr().unwrap(),
            "127.0.0.1:8081".parse().unwrap()
        );
    }

    #[test]
    fn test_unparseable_host_is_rejected() {
        let cfg = Config {
            server: ServerConfig {
                host: "not an address".to_string(),
                port: 8081,
            },
        };
        assert!(cfg.socket_addr().is_err());
    }
}
