//! File category definitions.

use std::path::Path;

/// Kind of build file, determines which hot-reload path a change takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Component source or compiled script (.ts, .tsx, .js)
    Script,
    /// Stylesheet (.css)
    Stylesheet,
}

impl FileKind {
    /// Detect file kind from extension.
    ///
    /// Matching is case-sensitive: `App.TSX` is not a script.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "ts" | "tsx" | "js" => Some(Self::Script),
            "css" => Some(Self::Stylesheet),
            _ => None,
        }
    }

    /// Detect file kind from file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Check if a path is a script file.
    #[inline]
    pub fn is_script(path: &Path) -> bool {
        Self::from_path(path) == Some(Self::Script)
    }

    /// Check if a path is a stylesheet.
    #[inline]
    pub fn is_stylesheet(path: &Path) -> bool {
        Self::from_path(path) == Some(Self::Stylesheet)
    }
}
