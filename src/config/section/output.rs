//! `[[output_targets]]` configuration.
//!
//! # Example
//!
//! ```toml
//! [[output_targets]]
//! type = "www"            # only www targets serve stylesheets to the dev server
//! dir = "dist/www"        # relative to the config file's directory
//!
//! [[output_targets]]
//! type = "dist"
//! dir = "dist/lib"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Kind of build destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Static site served by the dev server
    Www,
    /// Distributable component library
    Dist,
    /// Generated documentation
    Docs,
    /// Any other target type (never participates in hot reload)
    #[serde(other)]
    Other,
}

/// A configured build destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTarget {
    #[serde(rename = "type")]
    pub kind: OutputKind,

    pub dir: PathBuf,
}

impl OutputTarget {
    #[cfg(test)]
    pub fn new(kind: OutputKind, dir: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            dir: dir.into(),
        }
    }

    /// Resolve a relative `dir` against the project root.
    pub(crate) fn normalize(&mut self, root: &Path) {
        if self.dir.is_relative() {
            self.dir = root.join(&self.dir);
        }
    }
}

/// Validate the target list.
///
/// Empty directories are errors; repeated `www` directories are warnings
/// because every stylesheet would be reported once per duplicate.
pub(crate) fn validate(targets: &[OutputTarget], diag: &mut ConfigDiagnostics) {
    for (i, target) in targets.iter().enumerate() {
        if target.dir.as_os_str().is_empty() {
            diag.error_with_hint(
                format!("output_targets[{i}].dir"),
                "output directory must not be empty",
                "set `dir` to the directory this target writes to",
            );
        }
    }

    let www: Vec<_> = targets
        .iter()
        .filter(|t| t.kind == OutputKind::Www)
        .collect();
    for (i, target) in www.iter().enumerate() {
        if www[..i].iter().any(|earlier| earlier.dir == target.dir) {
            diag.warn(
                "output_targets",
                format!("duplicate www target dir `{}`", target.dir.display()),
            );
        }
    }
}
