//! Style Change Tracking
//!
//! Two independent sources of style updates, both silent outside rebuilds:
//! - inline component styles already computed by the compile phase
//! - stylesheet files written into `www` output targets

use std::path::PathBuf;

use crate::config::{OutputKind, OutputTarget};
use crate::core::{BuildContext, FileKind, StyleMap};
use crate::utils::path::{relative_path, root_url};

/// Owned copy of the inline style delta.
///
/// Returns `None` on the initial build or when no styles changed. The copy
/// shares nothing with `ctx`, so later changes to the context never leak
/// into an emitted payload.
pub fn inline_styles(ctx: &BuildContext) -> Option<StyleMap> {
    if !ctx.is_rebuild {
        return None;
    }
    ctx.styles_updated
        .as_ref()
        .filter(|styles| !styles.is_empty())
        .cloned()
}

/// Root-relative URLs of stylesheets written into `www` targets.
///
/// One URL per (written `.css` file, `www` target) pair, sorted
/// lexicographically. Duplicates are kept.
pub fn external_styles(targets: &[OutputTarget], ctx: &BuildContext) -> Option<Vec<String>> {
    if !ctx.is_rebuild {
        return None;
    }

    let www: Vec<&PathBuf> = targets
        .iter()
        .filter(|t| t.kind == OutputKind::Www)
        .map(|t| &t.dir)
        .collect();
    if www.is_empty() {
        return None;
    }

    let css: Vec<&PathBuf> = ctx
        .files_written
        .iter()
        .filter(|f| FileKind::is_stylesheet(f))
        .collect();
    if css.is_empty() {
        return None;
    }

    let mut urls: Vec<String> = css
        .iter()
        .flat_map(|file| www.iter().map(move |dir| root_url(&relative_path(dir, file))))
        .collect();
    urls.sort_unstable();

    Some(urls)
}
