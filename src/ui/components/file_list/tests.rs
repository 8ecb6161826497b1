//! Tests for FileList view logic that runs without a window

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tempfile::TempDir;

use super::*;
use crate::core::{Destination, Phase};
use crate::ui::components::settings_panel::Rule;

fn media_files(dir: &TempDir, count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| {
            let path = dir.path().join(format!("clip_{}.mp4", i));
            File::create(&path).unwrap();
            path
        })
        .collect()
}

#[test]
fn test_file_list_new() {
    let list = FileList::new_for_test();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(list.pending_warning.is_none());
    assert!(!list.pending_completion);
}

#[test]
fn test_selection_through_controller() {
    let temp_dir = TempDir::new().unwrap();
    let paths = media_files(&temp_dir, 3);

    let mut list = FileList::new_for_test();
    list.controller.select_files(&paths);

    assert_eq!(list.len(), 3);
    assert_eq!(list.controller.phase(), Phase::Ready);
}

#[test]
fn test_toggle_rule_flips_controller_settings() {
    let mut list = FileList::new_for_test();
    assert!(list.controller.settings().date_folder);

    list.toggle_rule(Rule::DateFolder);
    assert!(!list.controller.settings().date_folder);

    list.toggle_rule(Rule::DeviceFolder);
    assert!(list.controller.settings().device_folder);
}

#[test]
fn test_set_destination() {
    let mut list = FileList::new_for_test();
    list.set_destination(Destination::S3);
    assert_eq!(list.controller.settings().destination, Destination::S3);
}

#[test]
fn test_completion_flag_set_after_run() {
    let temp_dir = TempDir::new().unwrap();
    let paths = media_files(&temp_dir, 2);

    let mut list = FileList::new_for_test();
    list.controller.select_files(&paths);
    list.controller.start_processing().unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while list.controller.is_processing() {
        list.controller.poll();
        list.drain_app_events();
        assert!(Instant::now() < deadline, "run never finished");
        std::thread::sleep(Duration::from_millis(1));
    }
    list.drain_app_events();

    assert!(list.pending_completion);
    assert_eq!(list.controller.phase(), Phase::Ready);
    assert_eq!(list.len(), 2);
}
