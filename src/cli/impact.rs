//! One-shot payload computation.

use std::io::{Write, stdout};
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::ProjectConfig;
use crate::reload::{HotReloadPayload, build_payload};
use crate::snapshot::BuildSnapshot;

/// Load `snapshot`, compute its payload, and print it to stdout.
///
/// Prints `null` when the cycle is not eligible for hot reload.
pub fn run_impact(
    config: &ProjectConfig,
    snapshot: &Path,
    force_rebuild: bool,
    pretty: bool,
) -> Result<()> {
    let (registry, mut ctx) = BuildSnapshot::load(snapshot)?.into_parts();
    if force_rebuild {
        ctx.is_rebuild = true;
    }

    crate::debug!("impact"; "{} modules, {} changed, {} written",
        registry.len(),
        ctx.changed().map_or(0, <[std::path::PathBuf]>::len),
        ctx.files_written.len());

    let payload = build_payload(config, &registry, &ctx);
    if payload.is_none() {
        crate::debug!("impact"; "not a hot-reload cycle (rebuild: {}, hot reload: {})",
            ctx.is_rebuild, config.hot_reload_enabled());
    }

    let json = render(payload.as_ref(), pretty)?;
    let mut out = stdout().lock();
    writeln!(out, "{json}").context("failed to write payload")?;
    Ok(())
}

/// Serialize a payload, or `null` for no payload.
pub fn render(payload: Option<&HotReloadPayload>, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    Ok(json)
}
