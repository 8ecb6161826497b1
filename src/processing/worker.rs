//! Simulated background processing worker
//!
//! One run walks a fixed number of steps on a single background thread,
//! sleeping per step to stand in for real per-file work, and reports
//! progress over an mpsc channel. The thread is joined when the worker is
//! dropped, so no run outlives its owner.

use std::sync::mpsc::{self, Receiver, TryIter};
use std::thread::JoinHandle;
use std::time::Duration;

use super::events::WorkerEvent;

/// Unique identifier for one processing run (used in logs)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunId(String);

impl RunId {
    fn new() -> Self {
        RunId(format!("run:{}", uuid::Uuid::new_v4()))
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single in-flight (or completed) processing run
///
/// Constructed via [`ProcessingWorker::start`]; a completed run cannot be
/// restarted - start a fresh worker instead.
pub struct ProcessingWorker {
    run_id: RunId,
    handle: Option<JoinHandle<()>>,
    events: Receiver<WorkerEvent>,
}

impl ProcessingWorker {
    /// Start a run over `total` items, sleeping `step_delay` per item
    ///
    /// Rejects an empty run: processing must not start with nothing to do.
    pub fn start(total: usize, step_delay: Duration) -> Result<Self, String> {
        if total == 0 {
            return Err("Cannot start processing with zero files".to_string());
        }

        let run_id = RunId::new();
        let (tx, rx) = mpsc::channel();

        log::info!("{} started: {} files", run_id, total);

        let thread_run_id = run_id.clone();
        let handle = std::thread::spawn(move || {
            for step in 0..total {
                std::thread::sleep(step_delay);

                let percent = ((step + 1) * 100).div_ceil(total) as u8;
                if tx.send(WorkerEvent::Progress { percent }).is_err() {
                    // Receiver gone - the owner was torn down mid-run
                    log::debug!("{} abandoned at step {}", thread_run_id, step + 1);
                    return;
                }
            }

            let _ = tx.send(WorkerEvent::Finished);
            log::info!("{} finished", thread_run_id);
        });

        Ok(Self {
            run_id,
            handle: Some(handle),
            events: rx,
        })
    }

    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }

    /// Drain any events the run has produced so far (non-blocking)
    pub fn drain_events(&self) -> TryIter<'_, WorkerEvent> {
        self.events.try_iter()
    }

    /// Block until the next event or `timeout` elapses
    ///
    /// Test helper for deterministically observing the event sequence.
    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<WorkerEvent> {
        self.events.recv_timeout(timeout).ok()
    }

    /// Wait for the run's thread to exit
    pub fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("{} worker thread panicked", self.run_id);
            }
        }
    }
}

impl Drop for ProcessingWorker {
    fn drop(&mut self) {
        self.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(1);
    const WAIT: Duration = Duration::from_secs(5);

    /// Collect every event of a run, in order
    fn collect_run(worker: &ProcessingWorker) -> Vec<WorkerEvent> {
        let mut events = Vec::new();
        while let Some(event) = worker.recv_timeout(WAIT) {
            let done = event == WorkerEvent::Finished;
            events.push(event);
            if done {
                break;
            }
        }
        events
    }

    #[test]
    fn test_start_with_zero_files_is_rejected() {
        assert!(ProcessingWorker::start(0, STEP).is_err());
    }

    #[test]
    fn test_four_files_emit_quarter_steps() {
        let worker = ProcessingWorker::start(4, STEP).unwrap();
        let events = collect_run(&worker);
        assert_eq!(
            events,
            vec![
                WorkerEvent::Progress { percent: 25 },
                WorkerEvent::Progress { percent: 50 },
                WorkerEvent::Progress { percent: 75 },
                WorkerEvent::Progress { percent: 100 },
                WorkerEvent::Finished,
            ]
        );
    }

    #[test]
    fn test_three_files_round_up() {
        let worker = ProcessingWorker::start(3, STEP).unwrap();
        let events = collect_run(&worker);
        assert_eq!(
            events,
            vec![
                WorkerEvent::Progress { percent: 34 },
                WorkerEvent::Progress { percent: 67 },
                WorkerEvent::Progress { percent: 100 },
                WorkerEvent::Finished,
            ]
        );
    }

    #[test]
    fn test_single_file_goes_straight_to_complete() {
        let worker = ProcessingWorker::start(1, STEP).unwrap();
        let events = collect_run(&worker);
        assert_eq!(
            events,
            vec![WorkerEvent::Progress { percent: 100 }, WorkerEvent::Finished]
        );
    }

    #[test]
    fn test_progress_is_strictly_increasing() {
        let worker = ProcessingWorker::start(25, STEP).unwrap();
        let events = collect_run(&worker);

        let percents: Vec<u8> = events
            .iter()
            .filter_map(|e| match e {
                WorkerEvent::Progress { percent } => Some(*percent),
                WorkerEvent::Finished => None,
            })
            .collect();

        assert_eq!(percents.len(), 25);
        assert!(percents.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*percents.last().unwrap(), 100);
        // Finished arrives exactly once, last
        assert_eq!(events.last(), Some(&WorkerEvent::Finished));
        assert_eq!(
            events.iter().filter(|e| **e == WorkerEvent::Finished).count(),
            1
        );
    }

    #[test]
    fn test_join_waits_for_completion() {
        let mut worker = ProcessingWorker::start(5, STEP).unwrap();
        worker.join();
        // After the join, the full sequence is already buffered
        let events: Vec<_> = worker.drain_events().collect();
        assert_eq!(events.len(), 6);
        assert_eq!(events.last(), Some(&WorkerEvent::Finished));
    }

    #[test]
    fn test_drop_joins_without_panicking() {
        let worker = ProcessingWorker::start(3, STEP).unwrap();
        drop(worker);
    }

    #[test]
    fn test_run_ids_are_unique() {
        let a = ProcessingWorker::start(1, STEP).unwrap();
        let b = ProcessingWorker::start(1, STEP).unwrap();
        assert_ne!(a.run_id(), b.run_id());
    }
}
