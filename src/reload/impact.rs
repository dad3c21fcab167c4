//! Change Impact Resolution
//!
//! Pure functions that map a batch of changed script files to the set of
//! component tags whose compiled definitions are stale.
//!
//! A component module is impacted by a changed file when:
//! - the file is its own source or compiled output, or
//! - the file is reachable through its local imports, transitively.
//!
//! The search walks the "depends on" direction from each component module.
//! Each (component, changed file) pair gets a fresh visited set, so cyclic
//! import graphs terminate. Results are not memoized across components.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::core::FileKind;
use crate::registry::{ModuleFile, ModuleRegistry};

/// Resolve the sorted, deduplicated tag names impacted by `changed_files`.
///
/// Returns `None` when `changed_files` is absent, contains no script files,
/// or impacts no component.
pub fn resolve(registry: &ModuleRegistry, changed_files: Option<&[PathBuf]>) -> Option<Vec<String>> {
    let scripts = changed_scripts(changed_files?);
    if scripts.is_empty() {
        return None;
    }

    // BTreeSet gives set semantics keyed by tag and lexicographic order
    let mut impacted = BTreeSet::new();
    for changed in &scripts {
        for (module, tag) in registry.components() {
            if impacted.contains(tag) {
                continue;
            }
            if depends_on(registry, module, changed) {
                impacted.insert(tag.to_owned());
            }
        }
    }

    crate::debug!("impact"; "{} script change(s) impacted {} component(s)",
        scripts.len(), impacted.len());

    if impacted.is_empty() {
        None
    } else {
        Some(impacted.into_iter().collect())
    }
}

/// Filter changed paths down to script files, preserving order.
pub fn changed_scripts(changed_files: &[PathBuf]) -> Vec<&Path> {
    changed_files
        .iter()
        .map(PathBuf::as_path)
        .filter(|p| FileKind::is_script(p))
        .collect()
}

/// Check whether `module` is `changed` or depends on it through local imports.
///
/// Depth-first over an explicit stack. Imports without a registry entry are
/// dead ends. Every source path is expanded at most once per call.
pub fn depends_on(registry: &ModuleRegistry, module: &ModuleFile, changed: &Path) -> bool {
    let mut visited: FxHashSet<&Path> = FxHashSet::default();
    let mut stack: Vec<&ModuleFile> = vec![module];
    visited.insert(module.source_path.as_path());

    while let Some(current) = stack.pop() {
        if current.is_file(changed) {
            return true;
        }

        // Reverse keeps pop order equal to import order
        for import in current.local_imports.iter().rev() {
            if !visited.insert(import.as_path()) {
                continue;
            }
            if let Some(imported) = registry.get(import) {
                stack.push(imported);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(modules: impl IntoIterator<Item = ModuleFile>) -> ModuleRegistry {
        modules.into_iter().collect()
    }

    fn changed(files: &[&str]) -> Vec<PathBuf> {
        files.iter().map(PathBuf::from).collect()
    }

    fn resolve_with(registry: &ModuleRegistry, files: &[&str]) -> Option<Vec<String>> {
        let files = changed(files);
        resolve(registry, Some(&files))
    }

    mod filtering {
        use super::*;

        #[test]
        fn absent_changes_resolve_nothing() {
            let reg = registry([ModuleFile::new("foo.tsx").with_component("my-foo")]);
            assert_eq!(resolve(&reg, None), None);
        }

        #[test]
        fn empty_changes_resolve_nothing() {
            let reg = registry([ModuleFile::new("foo.tsx").with_component("my-foo")]);
            assert_eq!(resolve_with(&reg, &[]), None);
        }

        #[test]
        fn non_script_changes_are_ignored() {
            // Scenario C: the image path even matches a module key
            let reg = registry([
                ModuleFile::new("app.png").with_component("my-img"),
                ModuleFile::new("foo.tsx").with_component("my-foo").with_imports(["app.png"]),
            ]);
            assert_eq!(resolve_with(&reg, &["app.png"]), None);
        }

        #[test]
        fn changed_scripts_preserves_order() {
            let files = changed(&["b.ts", "x.css", "a.js", "c.tsx", "d.md"]);
            let scripts = changed_scripts(&files);
            assert_eq!(
                scripts,
                [Path::new("b.ts"), Path::new("a.js"), Path::new("c.tsx")]
            );
        }
    }

    mod reachability {
        use super::*;

        #[test]
        fn direct_and_transitive_dependents() {
            // Scenario A
            let reg = registry([
                ModuleFile::new("foo.tsx").with_component("my-foo"),
                ModuleFile::new("bar.tsx").with_component("my-bar").with_imports(["foo.tsx"]),
            ]);
            assert_eq!(
                resolve_with(&reg, &["foo.tsx"]),
                Some(vec!["my-bar".to_string(), "my-foo".to_string()])
            );
        }

        #[test]
        fn deep_chain_through_plain_modules() {
            let reg = registry([
                ModuleFile::new("/src/utils/format.ts"),
                ModuleFile::new("/src/utils/index.ts").with_imports(["/src/utils/format.ts"]),
                ModuleFile::new("/src/cmp/card.tsx")
                    .with_component("ui-card")
                    .with_imports(["/src/utils/index.ts"]),
                ModuleFile::new("/src/cmp/other.tsx").with_component("ui-other"),
            ]);
            assert_eq!(
                resolve_with(&reg, &["/src/utils/format.ts"]),
                Some(vec!["ui-card".to_string()])
            );
        }

        #[test]
        fn compiled_output_path_matches() {
            let reg = registry([ModuleFile::new("/src/a.tsx")
                .with_output("/build/a.js")
                .with_component("my-a")]);
            assert_eq!(
                resolve_with(&reg, &["/build/a.js"]),
                Some(vec!["my-a".to_string()])
            );
        }

        #[test]
        fn compiled_output_of_import_matches() {
            let reg = registry([
                ModuleFile::new("/src/dep.ts").with_output("/build/dep.js"),
                ModuleFile::new("/src/a.tsx")
                    .with_component("my-a")
                    .with_imports(["/src/dep.ts"]),
            ]);
            assert_eq!(
                resolve_with(&reg, &["/build/dep.js"]),
                Some(vec!["my-a".to_string()])
            );
        }

        #[test]
        fn missing_import_is_dead_end() {
            let reg = registry([ModuleFile::new("/src/a.tsx")
                .with_component("my-a")
                .with_imports(["/node_modules/lib/index.js", "/src/gone.ts"])]);
            assert_eq!(resolve_with(&reg, &["/src/gone.ts"]), None);
            assert_eq!(resolve_with(&reg, &["/src/unrelated.ts"]), None);
        }

        #[test]
        fn unrelated_change_resolves_nothing() {
            let reg = registry([
                ModuleFile::new("foo.tsx").with_component("my-foo"),
                ModuleFile::new("util.ts"),
            ]);
            assert_eq!(resolve_with(&reg, &["util.ts"]), None);
        }

        #[test]
        fn non_component_dependents_are_not_reported() {
            let reg = registry([
                ModuleFile::new("util.ts"),
                ModuleFile::new("helper.ts").with_imports(["util.ts"]),
            ]);
            assert_eq!(resolve_with(&reg, &["util.ts"]), None);
        }
    }

    mod cycles {
        use super::*;

        #[test]
        fn two_module_cycle_terminates() {
            let reg = registry([
                ModuleFile::new("a.tsx").with_component("my-a").with_imports(["b.ts"]),
                ModuleFile::new("b.ts").with_imports(["a.tsx"]),
            ]);
            assert_eq!(resolve_with(&reg, &["b.ts"]), Some(vec!["my-a".to_string()]));
            assert_eq!(resolve_with(&reg, &["c.ts"]), None);
        }

        #[test]
        fn component_cycle_reports_each_once() {
            let reg = registry([
                ModuleFile::new("a.tsx").with_component("my-a").with_imports(["b.tsx"]),
                ModuleFile::new("b.tsx").with_component("my-b").with_imports(["a.tsx"]),
            ]);
            assert_eq!(
                resolve_with(&reg, &["a.tsx"]),
                Some(vec!["my-a".to_string(), "my-b".to_string()])
            );
        }

        #[test]
        fn self_import_terminates() {
            let reg = registry([ModuleFile::new("a.tsx")
                .with_component("my-a")
                .with_imports(["a.tsx"])]);
            assert_eq!(resolve_with(&reg, &["x.ts"]), None);
        }

        #[test]
        fn unreachable_cycle_is_ignored() {
            let reg = registry([
                ModuleFile::new("x.ts").with_imports(["y.ts"]),
                ModuleFile::new("y.ts").with_imports(["x.ts"]),
                ModuleFile::new("a.tsx").with_component("my-a").with_imports(["x.ts"]),
            ]);
            assert_eq!(resolve_with(&reg, &["z.ts"]), None);
            assert_eq!(resolve_with(&reg, &["y.ts"]), Some(vec!["my-a".to_string()]));
        }
    }

    mod dedup {
        use super::*;

        #[test]
        fn two_changed_files_same_component() {
            let reg = registry([
                ModuleFile::new("x.ts"),
                ModuleFile::new("y.ts"),
                ModuleFile::new("a.tsx")
                    .with_component("my-a")
                    .with_imports(["x.ts", "y.ts"]),
            ]);
            assert_eq!(
                resolve_with(&reg, &["x.ts", "y.ts"]),
                Some(vec!["my-a".to_string()])
            );
        }

        #[test]
        fn diamond_import_paths() {
            let reg = registry([
                ModuleFile::new("shared.ts"),
                ModuleFile::new("left.ts").with_imports(["shared.ts"]),
                ModuleFile::new("right.ts").with_imports(["shared.ts"]),
                ModuleFile::new("a.tsx")
                    .with_component("my-a")
                    .with_imports(["left.ts", "right.ts"]),
            ]);
            assert_eq!(resolve_with(&reg, &["shared.ts"]), Some(vec!["my-a".to_string()]));
        }

        #[test]
        fn duplicate_changed_entries() {
            let reg = registry([ModuleFile::new("a.tsx").with_component("my-a")]);
            assert_eq!(
                resolve_with(&reg, &["a.tsx", "a.tsx"]),
                Some(vec!["my-a".to_string()])
            );
        }
    }

    #[test]
    fn output_is_sorted() {
        let reg = registry([
            ModuleFile::new("z.tsx").with_component("z-cmp").with_imports(["dep.ts"]),
            ModuleFile::new("m.tsx").with_component("m-cmp").with_imports(["dep.ts"]),
            ModuleFile::new("a.tsx").with_component("a-cmp").with_imports(["dep.ts"]),
            ModuleFile::new("dep.ts"),
        ]);
        assert_eq!(
            resolve_with(&reg, &["dep.ts"]),
            Some(vec!["a-cmp".to_string(), "m-cmp".to_string(), "z-cmp".to_string()])
        );
    }

    #[test]
    fn depends_on_directly() {
        let reg = registry([ModuleFile::new("a.tsx").with_imports(["b.ts"])]);
        let module = reg.get(Path::new("a.tsx")).unwrap();
        assert!(depends_on(&reg, module, Path::new("a.tsx")));
        assert!(!depends_on(&reg, module, Path::new("b.ts")));
    }
}
