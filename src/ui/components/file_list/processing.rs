//! Processing operations for FileList
//!
//! Starts runs, pumps the controller while one is active, and queues the
//! dialogs shown from the render loop.

use std::time::Duration;

use gpui::{AsyncApp, Context, Timer, WeakEntity};

use crate::core::{AppEvent, StartError};

use super::FileList;

impl FileList {
    /// Start processing the current selection
    ///
    /// An empty selection queues a warning dialog instead of starting.
    pub fn start_processing(&mut self, cx: &mut Context<Self>) {
        match self.controller.start_processing() {
            Ok(run_id) => {
                log::info!("Processing started ({})", run_id);
                Self::start_progress_polling(cx);
                cx.notify();
            }
            Err(StartError::EmptySelection) => {
                self.pending_warning = Some((
                    "No Files Selected".to_string(),
                    "Select media files before starting processing.".to_string(),
                ));
                cx.notify();
            }
            Err(StartError::AlreadyRunning) => {
                // Button is disabled while running; nothing to do
                log::debug!("Start ignored - run already active");
            }
        }
    }

    /// Drain controller events queued since the last render
    ///
    /// Returns true if any event arrived.
    pub(super) fn drain_app_events(&mut self) -> bool {
        let mut had_events = false;
        for event in self.app_events.try_iter() {
            had_events = true;
            match event {
                AppEvent::ProcessingFinished => {
                    self.pending_completion = true;
                }
                AppEvent::FilesChanged(entries) => {
                    log::debug!("Selection now {} files", entries.len());
                }
                AppEvent::SettingsChanged(summary) => {
                    log::debug!("Settings: {}", summary.replace('\n', "; "));
                }
                AppEvent::Progress(_) => {}
            }
        }
        had_events
    }

    /// Start a polling loop that pumps the controller and refreshes the UI
    /// while a run is active
    pub(super) fn start_progress_polling(cx: &mut Context<Self>) {
        cx.spawn(|this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut async_cx = cx.clone();
            async move {
                loop {
                    let cx_for_after_await = async_cx.clone();

                    // Wait 50ms between UI updates for smooth progress
                    Timer::after(Duration::from_millis(50)).await;

                    let still_running = this
                        .update(&mut async_cx, |this, cx| {
                            this.controller.poll();
                            this.drain_app_events();
                            cx.notify();
                            this.controller.is_processing()
                        })
                        .unwrap_or(false);

                    if !still_running {
                        break;
                    }

                    // Refresh all windows to show updated progress
                    let _ = cx_for_after_await.refresh();

                    async_cx = cx_for_after_await;
                }

                // Final refresh so the completion dialog shows promptly
                let _ = async_cx.refresh();
            }
        })
        .detach();
    }
}
