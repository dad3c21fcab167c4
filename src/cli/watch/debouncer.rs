use std::ffi::OsString;
use std::path::Path;
use std::time::{Duration, Instant};

pub(super) const DEBOUNCE_MS: u64 = 150;
pub(super) const CYCLE_COOLDOWN_MS: u64 = 300;

/// Pure debouncer: only handles timing and event filtering for one file.
/// No business logic, no global state access.
///
/// Compile phases often write the snapshot through a temp file + rename, so
/// the parent directory is watched and events are matched by file name.
pub(super) struct Debouncer {
    file_name: OsString,
    debounce: Duration,
    cooldown: Duration,
    pub(super) pending: bool,
    pub(super) last_event: Option<Instant>,
    pub(super) last_cycle: Option<Instant>,
}

impl Debouncer {
    pub(super) fn new(target: &Path) -> Self {
        Self::with_timing(
            target,
            Duration::from_millis(DEBOUNCE_MS),
            Duration::from_millis(CYCLE_COOLDOWN_MS),
        )
    }

    pub(super) fn with_timing(target: &Path, debounce: Duration, cooldown: Duration) -> Self {
        Self {
            file_name: target.file_name().map(OsString::from).unwrap_or_default(),
            debounce,
            cooldown,
            pending: false,
            last_event: None,
            last_cycle: None,
        }
    }

    /// Record a notify event if it touches the snapshot file.
    ///
    /// Removals are ignored: a replaced snapshot always ends with a create
    /// or modify event, and a deleted one has nothing to compute.
    pub(super) fn add_event(&mut self, event: &notify::Event) {
        use notify::EventKind;

        match event.kind {
            EventKind::Create(_) => {}
            // Metadata-only changes (mtime/atime/chmod) carry no new content
            EventKind::Modify(notify::event::ModifyKind::Metadata(_)) => return,
            EventKind::Modify(_) => {}
            _ => return,
        }

        let touched = event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(self.file_name.as_os_str()));
        if !touched {
            return;
        }

        crate::debug!("watch"; "event {:?}: {:?}", event.kind, event.paths);
        self.pending = true;
        self.last_event = Some(Instant::now());
    }

    /// Consume the pending change if debounce + cooldown elapsed.
    pub(super) fn take_if_ready(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.pending = false;
        self.last_event = None;
        self.last_cycle = Some(Instant::now());
        true
    }

    pub(super) fn is_ready(&self) -> bool {
        let Some(last_event) = self.last_event else {
            return false;
        };

        if last_event.elapsed() < self.debounce {
            return false;
        }

        if let Some(last_cycle) = self.last_cycle
            && last_cycle.elapsed() < self.cooldown
        {
            return false;
        }

        self.pending
    }

    /// Precise sleep duration until next possible ready time.
    pub(super) fn sleep_duration(&self) -> Duration {
        let Some(last_event) = self.last_event else {
            return Duration::from_secs(86400);
        };

        let debounce_remaining = self.debounce.saturating_sub(last_event.elapsed());

        let cooldown_remaining = self
            .last_cycle
            .map(|t| self.cooldown.saturating_sub(t.elapsed()))
            .unwrap_or(Duration::ZERO);

        debounce_remaining
            .max(cooldown_remaining)
            .max(Duration::from_millis(1))
    }
}
