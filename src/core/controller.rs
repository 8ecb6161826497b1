//! Application controller - UI-agnostic orchestration
//!
//! Owns the file collection, the settings, and the active processing run.
//! State changes are published as typed [`AppEvent`]s over a channel; the
//! presentation layer drains them and re-renders. The controller never
//! touches any UI type, so the whole flow is testable without a window.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crate::core::collection::FileCollection;
use crate::core::media::{FileEntry, collect_media_files};
use crate::core::settings::{Destination, TransferSettings};
use crate::processing::{ProcessingWorker, RunId, WorkerEvent};

/// Per-file delay of the simulated processing pass
pub const STEP_DELAY: Duration = Duration::from_millis(500);

/// Where the controller currently is
///
/// `Processing` returns to `Ready` when the run finishes - the selection
/// stays in place so the user can run again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No files selected
    Idle,
    /// Files selected, no run active
    Ready,
    /// A run is in flight
    Processing,
}

/// Events published to the presentation layer
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The selection was replaced; carries the full new list
    FilesChanged(Vec<FileEntry>),
    /// A setting changed; carries the new summary text
    SettingsChanged(String),
    /// A processing step completed (1-100)
    Progress(u8),
    /// The active run completed
    ProcessingFinished,
}

/// Why a run could not be started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    /// No files are selected
    EmptySelection,
    /// A run is already in flight
    AlreadyRunning,
}

impl std::fmt::Display for StartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartError::EmptySelection => write!(f, "no files selected for processing"),
            StartError::AlreadyRunning => write!(f, "processing is already running"),
        }
    }
}

impl std::error::Error for StartError {}

/// Orchestrates the selection, settings, and processing runs
pub struct AppController {
    files: FileCollection,
    settings: TransferSettings,
    phase: Phase,
    worker: Option<ProcessingWorker>,
    last_progress: u8,
    step_delay: Duration,
    events: Sender<AppEvent>,
}

impl AppController {
    /// Create a controller and the receiving end of its event channel
    pub fn new() -> (Self, Receiver<AppEvent>) {
        Self::with_step_delay(STEP_DELAY)
    }

    /// Create a controller with a custom per-file delay
    pub fn with_step_delay(step_delay: Duration) -> (Self, Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel();
        let controller = Self {
            files: FileCollection::new(),
            settings: TransferSettings::new(),
            phase: Phase::Idle,
            worker: None,
            last_progress: 0,
            step_delay,
            events: tx,
        };
        (controller, rx)
    }

    fn emit(&self, event: AppEvent) {
        // A dropped receiver just means nobody is listening anymore
        let _ = self.events.send(event);
    }

    #[allow(dead_code)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn files(&self) -> &FileCollection {
        &self.files
    }

    pub fn settings(&self) -> &TransferSettings {
        &self.settings
    }

    /// Last reported completion percentage of the current run
    pub fn progress(&self) -> u8 {
        self.last_progress
    }

    pub fn is_processing(&self) -> bool {
        self.phase == Phase::Processing
    }

    /// Whether a run may start: files selected and nothing in flight
    pub fn can_start(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Replace the selection with the media files found in `paths`
    ///
    /// Directories are expanded into the media files they contain. An input
    /// that yields no media files (picker cancel, or nothing usable in a
    /// drop) leaves the selection unchanged.
    pub fn select_files(&mut self, paths: &[PathBuf]) {
        if self.is_processing() {
            log::warn!("Ignoring selection change during an active run");
            return;
        }

        if paths.is_empty() {
            return;
        }

        let media = collect_media_files(paths);
        if media.is_empty() {
            log::info!("Selection contained no media files - keeping current list");
            return;
        }

        let entries = self.files.set_files(&media).to_vec();
        log::info!("Selected {} files", entries.len());
        self.phase = Phase::Ready;
        self.emit(AppEvent::FilesChanged(entries));
    }

    /// Handle files arriving via drag-and-drop
    ///
    /// Same replacement semantics as the picker.
    pub fn drop_files(&mut self, paths: &[PathBuf]) {
        self.select_files(paths);
    }

    /// Empty the selection
    pub fn clear_files(&mut self) {
        if self.is_processing() {
            log::warn!("Ignoring clear during an active run");
            return;
        }

        self.files.clear();
        self.phase = Phase::Idle;
        self.emit(AppEvent::FilesChanged(Vec::new()));
    }

    pub fn set_destination(&mut self, destination: Destination) {
        if self.is_processing() {
            log::warn!("Ignoring settings change during an active run");
            return;
        }
        self.settings.set_destination(destination);
        self.emit(AppEvent::SettingsChanged(self.settings.summary()));
    }

    pub fn set_date_folder(&mut self, enabled: bool) {
        if self.is_processing() {
            log::warn!("Ignoring settings change during an active run");
            return;
        }
        self.settings.set_date_folder(enabled);
        self.emit(AppEvent::SettingsChanged(self.settings.summary()));
    }

    pub fn set_device_folder(&mut self, enabled: bool) {
        if self.is_processing() {
            log::warn!("Ignoring settings change during an active run");
            return;
        }
        self.settings.set_device_folder(enabled);
        self.emit(AppEvent::SettingsChanged(self.settings.summary()));
    }

    pub fn set_duplicate_check(&mut self, enabled: bool) {
        if self.is_processing() {
            log::warn!("Ignoring settings change during an active run");
            return;
        }
        self.settings.set_duplicate_check(enabled);
        self.emit(AppEvent::SettingsChanged(self.settings.summary()));
    }

    /// Start a processing run over the current selection
    ///
    /// The worker takes a snapshot of the file count at start; the
    /// selection cannot change underneath it.
    pub fn start_processing(&mut self) -> Result<RunId, StartError> {
        match self.phase {
            Phase::Processing => return Err(StartError::AlreadyRunning),
            Phase::Idle => return Err(StartError::EmptySelection),
            Phase::Ready => {}
        }

        let worker = ProcessingWorker::start(self.files.len(), self.step_delay).map_err(|e| {
            log::error!("Failed to start processing: {}", e);
            StartError::EmptySelection
        })?;

        let run_id = worker.run_id().clone();
        self.worker = Some(worker);
        self.last_progress = 0;
        self.phase = Phase::Processing;
        Ok(run_id)
    }

    /// Drain worker events and publish them
    ///
    /// Call this periodically while a run is active. Returns true when
    /// anything was published (useful to drive a UI refresh).
    pub fn poll(&mut self) -> bool {
        let Some(worker) = &self.worker else {
            return false;
        };

        let pending: Vec<WorkerEvent> = worker.drain_events().collect();
        if pending.is_empty() {
            return false;
        }

        let mut finished = false;
        for event in pending {
            match event {
                WorkerEvent::Progress { percent } => {
                    self.last_progress = percent;
                    self.emit(AppEvent::Progress(percent));
                }
                WorkerEvent::Finished => finished = true,
            }
        }

        if finished {
            if let Some(mut worker) = self.worker.take() {
                worker.join();
                log::info!("{} complete, selection retained", worker.run_id());
            }
            self.phase = Phase::Ready;
            self.emit(AppEvent::ProcessingFinished);
        }

        true
    }
}
