//! The ordered collection of selected files
//!
//! Selection and drag-drop both replace the whole collection; there is no
//! per-item add or remove. Entries are re-derived from their paths on every
//! replacement so sizes stay current with the filesystem.

use std::path::PathBuf;

use crate::core::media::FileEntry;

/// Ordered list of the currently selected files
///
/// Insertion order is selection order. Duplicate paths are kept as given;
/// the collection does not deduplicate.
#[derive(Debug, Default)]
pub struct FileCollection {
    entries: Vec<FileEntry>,
}

impl FileCollection {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Replace the entire collection with entries derived from `paths`
    ///
    /// Returns the new entries.
    pub fn set_files(&mut self, paths: &[PathBuf]) -> &[FileEntry] {
        self.entries = paths.iter().map(|p| FileEntry::from_path(p)).collect();
        &self.entries
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Total size in bytes across all entries
    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|e| e.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, len: usize) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(&vec![0u8; len]).unwrap();
        path
    }

    #[test]
    fn test_new_collection_is_empty() {
        let collection = FileCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert_eq!(collection.total_size(), 0);
    }

    #[test]
    fn test_set_files_replaces_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_file(&temp_dir, "a.jpg", 100);
        let b = write_file(&temp_dir, "b.mp4", 200);
        let c = write_file(&temp_dir, "c.png", 300);

        let mut collection = FileCollection::new();
        collection.set_files(&[a.clone(), b.clone(), c.clone()]);
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.total_size(), 600);

        // A second selection overwrites, never appends
        collection.set_files(&[b.clone()]);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.entries()[0].path, b);
    }

    #[test]
    fn test_set_files_then_clear_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_file(&temp_dir, "a.jpg", 10);
        let b = write_file(&temp_dir, "b.jpg", 10);
        let c = write_file(&temp_dir, "c.jpg", 10);

        let mut collection = FileCollection::new();
        collection.set_files(&[a, b, c]);
        collection.clear();
        assert!(collection.is_empty());
        assert!(collection.entries().is_empty());
    }

    #[test]
    fn test_set_files_empty_equals_clear() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_file(&temp_dir, "a.jpg", 10);

        let mut collection = FileCollection::new();
        collection.set_files(&[a]);
        collection.set_files(&[]);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_file(&temp_dir, "a.jpg", 50);

        let mut collection = FileCollection::new();
        collection.set_files(&[a.clone(), a.clone()]);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.total_size(), 100);
    }

    #[test]
    fn test_order_is_selection_order() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_file(&temp_dir, "a.jpg", 1);
        let b = write_file(&temp_dir, "b.jpg", 1);

        let mut collection = FileCollection::new();
        collection.set_files(&[b.clone(), a.clone()]);
        let names: Vec<_> = collection.iter().map(|e| e.display_name.clone()).collect();
        assert_eq!(names, vec!["b.jpg", "a.jpg"]);
    }
}
