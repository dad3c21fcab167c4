//! URL utilities.

use std::path::{Component, Path};

/// Convert a relative file path into a site-root-relative URL.
///
/// Components are joined with `/` regardless of the platform separator.
///
/// # Examples
/// ```ignore
/// assert_eq!(root_url(Path::new("build/app.css")), "/build/app.css");
/// assert_eq!(root_url(Path::new("../other/x.css")), "/../other/x.css");
/// assert_eq!(root_url(Path::new("")), "/");
/// ```
pub fn root_url(relative: &Path) -> String {
    let mut url = String::with_capacity(relative.as_os_str().len() + 1);
    for component in relative.components() {
        let segment = match component {
            Component::Normal(name) => name.to_string_lossy(),
            Component::ParentDir => "..".into(),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => continue,
        };
        url.push('/');
        url.push_str(&segment);
    }
    if url.is_empty() {
        url.push('/');
    }
    url
}
