//! Media file discovery and the per-file display model
//!
//! This module provides the `FileEntry` view of a selected path (name, size,
//! extension, kind) plus helpers for classifying media files and expanding
//! dropped directories into the media files they contain.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The kind of media a file holds, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    /// Classify a lowercase extension
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "jpg" | "jpeg" | "png" | "gif" => MediaKind::Image,
            "mp4" | "mov" | "avi" | "mkv" | "wmv" => MediaKind::Video,
            _ => MediaKind::Other,
        }
    }

    /// Display glyph for list rows
    pub fn icon(&self) -> &'static str {
        match self {
            MediaKind::Image => "📸",
            MediaKind::Video => "🎬",
            MediaKind::Other => "📄",
        }
    }
}

/// Check if a file is a media file (image or video) based on its extension
pub fn is_media_file(path: &Path) -> bool {
    if let Some(ext) = path.extension() {
        let ext = ext.to_string_lossy().to_lowercase();
        !matches!(MediaKind::from_extension(&ext), MediaKind::Other)
    } else {
        false
    }
}

/// A single selected file as shown in the list
///
/// Immutable once constructed; the collection re-derives every entry when
/// the selection is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    /// File name portion of the path
    pub display_name: String,
    /// Size in bytes (0 when metadata is unavailable)
    pub size: u64,
    /// Lowercase extension, empty when the path has none
    pub extension: String,
    pub kind: MediaKind,
}

impl FileEntry {
    /// Derive an entry from a path
    ///
    /// Never fails: a path whose metadata cannot be read is shown with a
    /// zero size, matching what the file picker hands us for anything the
    /// user could select.
    pub fn from_path(path: &Path) -> Self {
        let display_name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        let extension = path
            .extension()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let size = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                log::debug!("No metadata for {}: {}", path.display(), e);
                0
            }
        };

        let kind = MediaKind::from_extension(&extension);

        Self {
            path: path.to_path_buf(),
            display_name,
            size,
            extension,
            kind,
        }
    }

    /// Uppercase extension for the type tag in the list (e.g., "MP4")
    pub fn type_tag(&self) -> String {
        self.extension.to_uppercase()
    }
}

/// Expand a set of dropped or picked paths into media file paths
///
/// Plain media files are kept in order; directories are walked recursively
/// and contribute their media files in sorted order. Everything else is
/// skipped.
pub fn collect_media_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .follow_links(false)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.into_path())
                .filter(|p| p.is_file() && is_media_file(p))
                .collect();
            found.sort();
            log::debug!(
                "Expanded directory {} into {} media files",
                path.display(),
                found.len()
            );
            files.extend(found);
        } else if is_media_file(path) {
            files.push(path.clone());
        } else {
            log::debug!("Skipping non-media path: {}", path.display());
        }
    }

    files
}

/// Format a byte count for display
///
/// Whole units below GB, one decimal place for GB.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{} KB", bytes / KB)
    } else if bytes < GB {
        format!("{} MB", bytes / MB)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kb_mb() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1 KB"); // truncates
        assert_eq!(format_size(1048576), "1 MB");
        assert_eq!(format_size(5 * 1048576 + 999), "5 MB");
    }

    #[test]
    fn test_format_size_gb() {
        assert_eq!(format_size(1073741824), "1.0 GB");
        assert_eq!(format_size(1610612736), "1.5 GB");
    }

    #[test]
    fn test_recognizes_media_formats() {
        assert!(is_media_file(Path::new("photo.jpg")));
        assert!(is_media_file(Path::new("photo.JPEG")));
        assert!(is_media_file(Path::new("clip.mp4")));
        assert!(is_media_file(Path::new("clip.MOV")));
    }

    #[test]
    fn test_rejects_non_media() {
        assert!(!is_media_file(Path::new("notes.txt")));
        assert!(!is_media_file(Path::new("archive.zip")));
        assert!(!is_media_file(Path::new("noextension")));
    }

    #[test]
    fn test_media_kind_classification() {
        assert_eq!(MediaKind::from_extension("png"), MediaKind::Image);
        assert_eq!(MediaKind::from_extension("mkv"), MediaKind::Video);
        assert_eq!(MediaKind::from_extension("pdf"), MediaKind::Other);
    }

    #[test]
    fn test_media_kind_icons() {
        assert_eq!(MediaKind::Image.icon(), "📸");
        assert_eq!(MediaKind::Video.icon(), "🎬");
        assert_eq!(MediaKind::Other.icon(), "📄");
    }

    #[test]
    fn test_file_entry_from_real_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Vacation.JPG");
        let mut file = File::create(&path).unwrap();
        file.write_all(&[0u8; 2048]).unwrap();

        let entry = FileEntry::from_path(&path);
        assert_eq!(entry.display_name, "Vacation.JPG");
        assert_eq!(entry.size, 2048);
        assert_eq!(entry.extension, "jpg");
        assert_eq!(entry.kind, MediaKind::Image);
        assert_eq!(entry.type_tag(), "JPG");
    }

    #[test]
    fn test_file_entry_missing_file_has_zero_size() {
        let entry = FileEntry::from_path(Path::new("/nonexistent/clip.mp4"));
        assert_eq!(entry.size, 0);
        assert_eq!(entry.display_name, "clip.mp4");
        assert_eq!(entry.kind, MediaKind::Video);
    }

    #[test]
    fn test_collect_media_files_keeps_order_and_filters() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.jpg");
        let b = temp_dir.path().join("b.txt");
        let c = temp_dir.path().join("c.mp4");
        for p in [&a, &b, &c] {
            File::create(p).unwrap();
        }

        let collected = collect_media_files(&[c.clone(), b.clone(), a.clone()]);
        assert_eq!(collected, vec![c, a]);
    }

    #[test]
    fn test_collect_media_files_expands_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("trip");
        std::fs::create_dir(&nested).unwrap();
        File::create(nested.join("one.png")).unwrap();
        File::create(nested.join("two.mov")).unwrap();
        File::create(nested.join("skip.doc")).unwrap();

        let collected = collect_media_files(&[temp_dir.path().to_path_buf()]);
        assert_eq!(collected.len(), 2);
        assert!(collected.iter().all(|p| is_media_file(p)));
    }

    #[test]
    fn test_collect_media_files_empty_input() {
        assert!(collect_media_files(&[]).is_empty());
    }
}
