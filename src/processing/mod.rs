//! Simulated background processing
//!
//! This module contains:
//! - The worker that steps through a run on a background thread
//! - The events it reports back to the owning controller

mod events;
mod worker;

pub use events::WorkerEvent;
pub use worker::{ProcessingWorker, RunId};
