//! Per-cycle build context.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Component tag → inline style text, in the order the compiler reported them.
pub type StyleMap = IndexMap<String, String>;

/// Snapshot of what one build cycle changed and wrote.
///
/// Produced by the compile phase after it has finished the cycle; never
/// mutated while hot-reload data is computed from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildContext {
    /// Paths touched since the previous cycle (`None` on the initial build).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_changed: Option<Vec<PathBuf>>,

    /// Output paths written in this cycle.
    #[serde(default)]
    pub files_written: Vec<PathBuf>,

    /// Component tag → new inline style text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles_updated: Option<StyleMap>,

    /// False for the initial full build, true for every cycle after it.
    #[serde(default)]
    pub is_rebuild: bool,
}

impl BuildContext {
    /// Context for the initial full build.
    #[cfg(test)]
    pub fn initial() -> Self {
        Self::default()
    }

    /// Context for an incremental rebuild.
    #[cfg(test)]
    pub fn rebuild() -> Self {
        Self {
            is_rebuild: true,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn with_changed<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files_changed = Some(files.into_iter().map(Into::into).collect());
        self
    }

    #[cfg(test)]
    pub fn with_written<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files_written = files.into_iter().map(Into::into).collect();
        self
    }

    #[cfg(test)]
    pub fn with_style(mut self, tag: impl Into<String>, style: impl Into<String>) -> Self {
        self.styles_updated
            .get_or_insert_with(StyleMap::new)
            .insert(tag.into(), style.into());
        self
    }

    /// Changed files as a slice, if any were reported.
    #[inline]
    pub fn changed(&self) -> Option<&[PathBuf]> {
        self.files_changed.as_deref()
    }
}
