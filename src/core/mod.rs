//! Core application logic and state
//!
//! This module contains:
//! - The file entry model and media discovery helpers
//! - The ordered collection of selected files
//! - Transfer settings (destination + organization rules)
//! - The controller orchestrating selection, settings, and runs
//! - Persisted window state

mod collection;
mod controller;
mod media;
mod settings;
mod state;

pub use collection::FileCollection;
pub use controller::{AppController, AppEvent, Phase, StartError};
pub use media::{FileEntry, MediaKind, collect_media_files, format_size, is_media_file};
pub use settings::{Destination, TransferSettings};
pub use state::WindowState;
