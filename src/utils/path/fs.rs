//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `relative_path` - lexical relative path between two paths

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Compute the path of `path` relative to the directory `base`.
///
/// Purely lexical: never touches the file system. `.` segments are dropped,
/// `..` segments are folded into their parent, and a `path` outside `base`
/// yields leading `..` segments. Identical inputs give an empty path.
///
/// # Example
/// ```ignore
/// relative_path(Path::new("/dist/www"), Path::new("/dist/www/build/app.css"))
///     == PathBuf::from("build/app.css");
/// relative_path(Path::new("/dist/www"), Path::new("/dist/other/x.css"))
///     == PathBuf::from("../other/x.css");
/// ```
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    let base = lexical_components(base);
    let path = lexical_components(path);

    let common = base
        .iter()
        .zip(&path)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push(Component::ParentDir);
    }
    for component in &path[common..] {
        relative.push(component);
    }
    relative
}

/// Split a path into components with `.` removed and `..` folded.
fn lexical_components(path: &Path) -> Vec<Component<'_>> {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            _ => out.push(component),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_relative_nested() {
        assert_eq!(
            relative_path(Path::new("/dist/www"), Path::new("/dist/www/build/app.css")),
            PathBuf::from("build/app.css")
        );
    }

    #[test]
    fn test_relative_sibling() {
        assert_eq!(
            relative_path(Path::new("/dist/www"), Path::new("/dist/other/x.css")),
            PathBuf::from("../other/x.css")
        );
    }

    #[test]
    fn test_relative_identical() {
        assert_eq!(
            relative_path(Path::new("/dist/www"), Path::new("/dist/www")),
            PathBuf::new()
        );
    }

    #[test]
    fn test_relative_trailing_slash_and_dots() {
        assert_eq!(
            relative_path(Path::new("/dist/www/"), Path::new("/dist/./www/a/../b.css")),
            PathBuf::from("b.css")
        );
    }

    #[test]
    fn test_relative_disjoint_roots() {
        assert_eq!(
            relative_path(Path::new("/a/b"), Path::new("/c/d.css")),
            PathBuf::from("../../c/d.css")
        );
    }
}
