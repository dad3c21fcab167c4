//! Watch mode: recompute the payload whenever the build snapshot changes.
//!
//! ```text
//! notify thread ──events──┐
//!                         ├─> select! ─> Debouncer ─> WatchCycle ─> stdout
//! Ctrl+C handler ─signal──┘
//! ```
//!
//! Cycles run strictly one after another on the loop thread. Setup errors
//! are fatal; per-cycle errors are reported and the loop keeps going.

mod cycle;
mod debouncer;

pub use cycle::{CycleOutcome, WatchCycle};

use std::io::stdout;
use std::path::Path;

use anyhow::{Context, Result};
use crossbeam::channel::{self, select};
use notify::{RecursiveMode, Watcher};

use crate::config::ProjectConfig;
use crate::core::{is_shutdown, register_watcher};
use crate::logger::{
    status_detach, status_error, status_print_below, status_success, status_unchanged,
};
use crate::utils::path::normalize_path;
use crate::{debug, log};

use debouncer::Debouncer;

/// Watch `snapshot` until Ctrl+C.
pub fn watch_snapshot(config: &ProjectConfig, snapshot: &Path) -> Result<()> {
    let snapshot = normalize_path(snapshot);
    let dir = snapshot
        .parent()
        .context("snapshot path has no parent directory")?
        .to_path_buf();

    let (event_tx, event_rx) = channel::unbounded::<notify::Result<notify::Event>>();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = event_tx.send(res);
    })
    .context("failed to create file watcher")?;
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", dir.display()))?;

    let (shutdown_tx, shutdown_rx) = channel::bounded::<()>(1);
    register_watcher(shutdown_tx);

    log!("watch"; "{}: watching {}", config.display_name(), snapshot.display());
    if !config.hot_reload_enabled() {
        log!("watch"; "hot reload is disabled, rebuilds will not produce payloads");
    }

    let mut cycle = WatchCycle::new(config, snapshot.clone());
    let mut debouncer = Debouncer::new(&snapshot);

    // The snapshot may not exist until the first build finishes
    if snapshot.exists() {
        let outcome = cycle.run();
        report(&cycle, outcome);
    }

    loop {
        select! {
            recv(event_rx) -> msg => match msg {
                Ok(Ok(event)) => debouncer.add_event(&event),
                Ok(Err(e)) => {
                    log!("watch"; "notify error: {}", e);
                    status_detach();
                }
                Err(_) => break,
            },
            recv(shutdown_rx) -> _ => break,
            default(debouncer.sleep_duration()) => {}
        }

        if is_shutdown() {
            break;
        }

        if debouncer.take_if_ready() {
            let outcome = cycle.run();
            report(&cycle, outcome);
        }
    }

    debug!("watch"; "stopped after {} cycle(s)", cycle.completed());
    Ok(())
}

/// Report a cycle outcome: status line, plus one JSON line for payloads.
fn report(cycle: &WatchCycle<'_>, outcome: Result<CycleOutcome>) {
    let n = cycle.completed();
    match outcome {
        Ok(CycleOutcome::Initial) => status_unchanged(&format!("cycle {n}: initial build")),
        Ok(CycleOutcome::Disabled) => status_unchanged(&format!("cycle {n}: rebuild")),
        Ok(CycleOutcome::Payload(payload)) if payload.is_empty() => {
            status_unchanged(&format!("cycle {n}: no hot-reload changes"));
        }
        Ok(CycleOutcome::Payload(payload)) => {
            status_success(&format!("cycle {n}: {}", payload.summary()));
            emit(&payload.to_json());
        }
        Err(e) => {
            status_error(
                &format!("cycle failed: {}", cycle.snapshot().display()),
                &format!("{e:#}"),
            );
        }
    }
}

/// Write one payload line to stdout for the transport, below the status line.
fn emit(json: &str) {
    if status_print_below(&mut stdout().lock(), json).is_err() {
        log!("error"; "failed to write payload to stdout");
    }
}
