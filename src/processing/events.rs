//! Events emitted by the background processing worker

/// Progress notifications from a processing run
///
/// Delivered over an mpsc channel in step order; `Finished` arrives exactly
/// once, after the last `Progress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerEvent {
    /// A step completed; `percent` is the overall completion (1-100)
    Progress { percent: u8 },
    /// The run is complete
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_event_eq() {
        assert_eq!(
            WorkerEvent::Progress { percent: 50 },
            WorkerEvent::Progress { percent: 50 }
        );
        assert_ne!(WorkerEvent::Progress { percent: 50 }, WorkerEvent::Finished);
    }
}
