//! Build snapshot loading.
//!
//! The compile phase writes one JSON snapshot per build cycle: every module
//! record plus the cycle's build context. This is the only input format the
//! CLI reads; nothing here writes it back.
//!
//! ```json
//! {
//!   "modules": [
//!     { "sourcePath": "/src/bar.tsx", "localImports": ["/src/foo.tsx"],
//!       "cmpMeta": { "tagName": "my-bar" } }
//!   ],
//!   "buildCtx": { "filesChanged": ["/src/foo.tsx"], "isRebuild": true }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::BuildContext;
use crate::registry::{ModuleFile, ModuleRegistry};

/// Snapshot loading errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error when reading snapshot `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed snapshot `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}

/// One build cycle's module graph and build context.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSnapshot {
    #[serde(default)]
    pub modules: Vec<ModuleFile>,

    #[serde(default)]
    pub build_ctx: BuildContext,
}

impl BuildSnapshot {
    /// Read and parse a snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content =
            fs::read_to_string(path).map_err(|err| SnapshotError::Io(path.to_path_buf(), err))?;
        serde_json::from_str(&content).map_err(|err| SnapshotError::Json(path.to_path_buf(), err))
    }

    /// Split into the registry and build context the engine consumes.
    pub fn into_parts(self) -> (ModuleRegistry, BuildContext) {
        (self.modules.into_iter().collect(), self.build_ctx)
    }
}
