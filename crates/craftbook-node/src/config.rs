//! Node configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use craftbook_catalog::InMemoryCatalog;
use serde::Deserialize;

/// Environment variable overriding the listen address.
pub const ADDR_VAR: &str = "CRAFTBOOK_ADDR";

/// Environment variable pointing at a JSON catalog file.
pub const CATALOG_VAR: &str = "CRAFTBOOK_CATALOG";

/// Configuration for the tool host.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// JSON catalog to load instead of the built-in dataset.
    pub catalog_path: Option<PathBuf>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            catalog_path: None,
        }
    }
}

impl NodeConfig {
    /// Defaults overlaid with `CRAFTBOOK_ADDR` and `CRAFTBOOK_CATALOG`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(addr) = lookup(ADDR_VAR) {
            config.bind_addr = addr
                .parse()
                .with_context(|| format!("{} is not a socket address: {}", ADDR_VAR, addr))?;
        }

        if let Some(path) = lookup(CATALOG_VAR).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Load the configured catalog.
    pub fn load_catalog(&self) -> anyhow::Result<InMemoryCatalog> {
        match &self.catalog_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading catalog {}", path.display()))?;
                InMemoryCatalog::from_json(&json)
                    .with_context(|| format!("loading catalog {}", path.display()))
            }
            None => InMemoryCatalog::sample().context("loading built-in catalog"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftbook_catalog::CatalogStore;

    #[test]
    fn test_defaults_without_vars() {
        let config = NodeConfig::from_vars(|_| None).unwrap();
        assert_eq!(config, NodeConfig::default());
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_vars_override() {
        let config = NodeConfig::from_vars(|key| match key {
            ADDR_VAR => Some("127.0.0.1:8080".to_string()),
            CATALOG_VAR => Some("/tmp/crafts.json".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/crafts.json")));
    }

    #[test]
    fn test_invalid_addr() {
        let result = NodeConfig::from_vars(|key| (key == ADDR_VAR).then(|| "nowhere".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: NodeConfig =
            serde_json::from_str(r#"{"bind_addr": "127.0.0.1:9000"}"#).unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_load_builtin_catalog() {
        let catalog = NodeConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_load_missing_file() {
        let config = NodeConfig {
            catalog_path: Some(PathBuf::from("/definitely/not/here.json")),
            ..NodeConfig::default()
        };
        assert!(config.load_catalog().is_err());
    }
}
