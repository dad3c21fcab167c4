//! Module registry snapshot.
//!
//! The compile phase owns the live module map and hands the engine one
//! immutable [`ModuleRegistry`] per build cycle. Lookups are keyed by
//! source path so graph traversal never scans the module list.
//!
//! # Invariants
//! - `source_path` is unique: inserting a module with an existing key replaces it
//! - Import edges may point at paths with no registry entry (dead ends)
//! - Import edges may form cycles

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Component metadata attached to a module that defines a UI component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
    /// Custom element tag, unique per component.
    pub tag_name: String,
}

impl ComponentMeta {
    #[cfg(test)]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
        }
    }
}

/// Compiler record of a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleFile {
    /// Canonical path of the original source file (registry key).
    pub source_path: PathBuf,

    /// Path of the emitted artifact, once compiled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiled_output_path: Option<PathBuf>,

    /// Source paths this module imports directly, in import order.
    #[serde(default)]
    pub local_imports: Vec<PathBuf>,

    /// Present only if this module defines a component.
    #[serde(default, rename = "cmpMeta", skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentMeta>,
}

impl ModuleFile {
    /// Create a plain module with no output, imports, or component.
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            compiled_output_path: None,
            local_imports: Vec::new(),
            component: None,
        }
    }

    #[cfg(test)]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.compiled_output_path = Some(path.into());
        self
    }

    #[cfg(test)]
    pub fn with_imports<I, P>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.local_imports = imports.into_iter().map(Into::into).collect();
        self
    }

    #[cfg(test)]
    pub fn with_component(mut self, tag_name: impl Into<String>) -> Self {
        self.component = Some(ComponentMeta::new(tag_name));
        self
    }

    /// Tag name if this module defines a component.
    #[inline]
    pub fn tag_name(&self) -> Option<&str> {
        self.component.as_ref().map(|c| c.tag_name.as_str())
    }

    /// True if `file` is this module's source or its compiled output.
    #[inline]
    pub fn is_file(&self, file: &Path) -> bool {
        self.source_path == file || self.compiled_output_path.as_deref() == Some(file)
    }
}

/// Read-only mapping from source path to module metadata.
#[derive(Debug, Default, Clone)]
pub struct ModuleRegistry {
    modules: FxHashMap<PathBuf, ModuleFile>,
}

impl ModuleRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a module, replacing any previous entry with the same source path.
    pub fn insert(&mut self, module: ModuleFile) -> Option<ModuleFile> {
        self.modules.insert(module.source_path.clone(), module)
    }

    /// Look up a module by source path.
    #[inline]
    pub fn get(&self, source_path: &Path) -> Option<&ModuleFile> {
        self.modules.get(source_path)
    }

    /// Iterate over modules that define a component.
    pub fn components(&self) -> impl Iterator<Item = (&ModuleFile, &str)> {
        self.modules
            .values()
            .filter_map(|m| m.tag_name().map(|tag| (m, tag)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl FromIterator<ModuleFile> for ModuleRegistry {
    fn from_iter<T: IntoIterator<Item = ModuleFile>>(iter: T) -> Self {
        let mut registry = Self::new();
        for module in iter {
            registry.insert(module);
        }
        registry
    }
}
