// src/config.rs
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_API_URL: &str = "https://api.mistral.ai/v1";
pub const DEFAULT_MODEL: &str = "mistral-small-latest";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Settings for the upstream chat-completion API.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub generator: GeneratorConfig,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// | Variable                 | Default                     |
    /// |--------------------------|-----------------------------|
    /// | `PORT`                   | `8000`                      |
    /// | `MISTRAL_API_KEY`        | none (static replies)       |
    /// | `MISTRAL_API_URL`        | `https://api.mistral.ai/v1` |
    /// | `MISTRAL_MODEL`          | `mistral-small-latest`      |
    /// | `GENERATOR_TIMEOUT_SECS` | `60`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => parse(&raw, "PORT")?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("GENERATOR_TIMEOUT_SECS") {
            Some(raw) => parse(&raw, "GENERATOR_TIMEOUT_SECS")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            port,
            generator: GeneratorConfig {
                api_key: get("MISTRAL_API_KEY"),
                api_url: get("MISTRAL_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into()),
                model: get("MISTRAL_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    /// Wildcard address on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse<T: std::str::FromStr>(raw: &str, key: &'static str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
        assert!(config.generator.api_key.is_none());
        assert_eq!(config.generator.api_url, DEFAULT_API_URL);
        assert_eq!(config.generator.model, DEFAULT_MODEL);
        assert_eq!(config.generator.timeout, Duration::from_secs(60));
    }

    #[test]
    fn empty_port_uses_default() {
        let config = config_from(&[("PORT", "")]).unwrap();
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn port_is_read_from_env() {
        let config = config_from(&[("PORT", "5050"), ("MISTRAL_API_KEY", "k")]).unwrap();
        assert_eq!(config.port, 5050);
        assert_eq!(config.generator.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
