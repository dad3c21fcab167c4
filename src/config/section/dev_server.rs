//! `[dev_server]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [dev_server]
//! hot_reload = true       # push component/style updates instead of reloading
//! ```
//!
//! Omitting the section disables hot reload entirely.

use serde::{Deserialize, Serialize};

/// Development server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevServerConfig {
    /// Compute hot-reload payloads on rebuilds.
    pub hot_reload: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self { hot_reload: true }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_dev_server_absent() {
        let config = test_parse_config("");
        assert!(config.dev_server.is_none());
    }

    #[test]
    fn test_dev_server_defaults() {
        let config = test_parse_config("[dev_server]");
        assert!(config.dev_server.is_some_and(|d| d.hot_reload));
    }

    #[test]
    fn test_hot_reload_disabled() {
        let config = test_parse_config("[dev_server]\nhot_reload = false");
        assert!(config.dev_server.is_some_and(|d| !d.hot_reload));
    }
}
