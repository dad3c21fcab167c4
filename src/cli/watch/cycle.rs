//! Build cycle bookkeeping for watch mode.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::ProjectConfig;
use crate::reload::{HotReloadPayload, build_payload};
use crate::snapshot::BuildSnapshot;

/// Outcome of one watch cycle.
#[derive(Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// First successful cycle: the full build, never hot reloaded
    Initial,
    /// Rebuild with hot reload disabled in config
    Disabled,
    /// Rebuild payload (may be empty)
    Payload(HotReloadPayload),
}

/// Loads the snapshot once per cycle and decides whether it is a rebuild.
///
/// The first successfully loaded snapshot is the initial build; every later
/// one is a rebuild, whatever its own `isRebuild` says. Failed cycles do not
/// count.
pub struct WatchCycle<'a> {
    config: &'a ProjectConfig,
    snapshot: PathBuf,
    completed: u64,
}

impl<'a> WatchCycle<'a> {
    pub fn new(config: &'a ProjectConfig, snapshot: impl Into<PathBuf>) -> Self {
        Self {
            config,
            snapshot: snapshot.into(),
            completed: 0,
        }
    }

    pub fn snapshot(&self) -> &Path {
        &self.snapshot
    }

    /// Number of successfully computed cycles.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Run one cycle to completion.
    ///
    /// Takes `&mut self`, so cycles over one snapshot never overlap.
    pub fn run(&mut self) -> Result<CycleOutcome> {
        let (registry, mut ctx) = BuildSnapshot::load(&self.snapshot)?.into_parts();
        if registry.is_empty() {
            crate::debug!("watch"; "snapshot has no modules");
        }
        ctx.is_rebuild = self.completed > 0;
        self.completed += 1;

        let outcome = match build_payload(self.config, &registry, &ctx) {
            Some(payload) => CycleOutcome::Payload(payload),
            None if ctx.is_rebuild => CycleOutcome::Disabled,
            None => CycleOutcome::Initial,
        };
        Ok(outcome)
    }
}
