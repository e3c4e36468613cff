//! Process configuration, read once at startup from the environment.

use std::net::SocketAddr;

use anyhow::Context;

pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";
pub const LOG_FILTER_VAR: &str = "CATALOG_LOG";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Fallback log filter; `RUST_LOG` still takes precedence.
    pub log_filter: String,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_VAR} is not a socket address: {raw_addr:?}"))?;

        let log_filter = lookup(LOG_FILTER_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            bind_addr,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:3000"),
            (LOG_FILTER_VAR, "catalog_products=debug"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.log_filter, "catalog_products=debug");
    }

    #[test]
    fn blank_log_filter_falls_back_to_default() {
        let config = ApiConfig::from_lookup(lookup_from(&[(LOG_FILTER_VAR, "  ")])).unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn invalid_bind_addr_names_the_variable() {
        let err = ApiConfig::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));
    }
}
