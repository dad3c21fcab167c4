//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// An absolute `config_name` that exists is returned as-is. Otherwise walks
/// up parent directories until `start/../config_name` exists.
///
/// # Example
/// ```text
/// /home/user/app/src/components/  ← start
/// /home/user/app/hotmod.toml      ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_in_start_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("hotmod.toml");
        fs::write(&config, "").unwrap();

        assert_eq!(
            find_config_file(Path::new("hotmod.toml"), dir.path()),
            Some(config)
        );
    }

    #[test]
    fn test_find_walks_upward() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("hotmod.toml");
        fs::write(&config, "").unwrap();
        let nested = dir.path().join("src/components/card");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_config_file(Path::new("hotmod.toml"), &nested),
            Some(config)
        );
    }

    #[test]
    fn test_find_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("custom.toml");

        assert_eq!(find_config_file(&config, dir.path()), None);
        fs::write(&config, "").unwrap();
        assert_eq!(find_config_file(&config, Path::new("/")), Some(config));
    }

    #[test]
    fn test_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            find_config_file(Path::new("no-such-config-4f1c.toml"), dir.path()),
            None
        );
    }
}
