//! Project configuration management for `hotmod.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── dev_server # [dev_server]
//! │   └── output     # [[output_targets]]
//! ├── types/         # Utility types
//! │   └── error      # ConfigError, ConfigDiagnostics
//! └── mod.rs         # ProjectConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! namespace = "app"
//! log_level = "info"
//!
//! [[output_targets]]
//! type = "www"
//! dir = "dist/www"
//!
//! [dev_server]
//! hot_reload = true
//! ```

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{DevServerConfig, OutputKind, OutputTarget};
pub use types::{ConfigDiagnostics, ConfigError};

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Logging verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Debug,
}

/// Root configuration structure representing hotmod.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Project namespace, shown in log output
    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub log_level: LogLevel,

    /// Build destinations
    #[serde(default)]
    pub output_targets: Vec<OutputTarget>,

    /// Development server settings (absent = hot reload off)
    #[serde(default)]
    pub dev_server: Option<DevServerConfig>,
}

impl ProjectConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A missing file is not
    /// an error: defaults apply, which leaves hot reload disabled.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => Self::load_from(&path)?,
            None => {
                log!(
                    "warning";
                    "config file '{}' not found, hot reload disabled",
                    cli.config.display()
                );
                let mut config = Self::default();
                config.root = crate::utils::path::normalize_path(&cwd);
                config
            }
        };

        config.apply_cli(cli);
        Ok(config)
    }

    /// Load, normalize, and validate a config file at a known path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::from_path(path)?;

        config.config_path = crate::utils::path::normalize_path(path);
        let root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.set_root(&root);

        // Before normalization: joining turns an empty `dir` into the root
        config.validate()?;
        config.normalize_paths();

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} (ignored): {}", display_path, fields.join(", "));
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Whether hot-reload payloads are computed at all.
    pub fn hot_reload_enabled(&self) -> bool {
        self.dev_server.as_ref().is_some_and(|d| d.hot_reload)
    }

    /// Namespace for log output, falling back to the root directory name.
    pub fn display_name(&self) -> String {
        self.namespace.clone().unwrap_or_else(|| {
            self.root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "project".to_string())
        })
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global CLI options.
    fn apply_cli(&mut self, cli: &Cli) {
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        crate::logger::set_verbose(self.log_level == LogLevel::Debug);
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve relative target directories against the root.
    fn normalize_paths(&mut self) {
        let root = self.root.clone();
        for target in &mut self.output_targets {
            target.normalize(&root);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        section::validate_output_targets(&self.output_targets, &mut diag);

        if self.dev_server.is_some()
            && !self.output_targets.iter().any(|t| t.kind == OutputKind::Www)
        {
            diag.warn(
                "dev_server",
                "no www output target: external stylesheet updates are disabled",
            );
        }

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ProjectConfig {
    let (parsed, ignored) = ProjectConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
