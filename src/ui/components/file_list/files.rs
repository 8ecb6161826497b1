//! File selection operations for FileList
//!
//! Handles the file picker dialog, external drops, and clearing.

use std::path::PathBuf;

use gpui::{AppContext, AsyncApp, Context, PathPromptOptions, WeakEntity};

use super::FileList;

impl FileList {
    /// Returns the number of selected files
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.controller.files().len()
    }

    /// Returns true if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.controller.files().is_empty()
    }

    /// Show the native picker and replace the selection with its result
    ///
    /// Directories are allowed; they are expanded into the media files they
    /// contain. A cancelled picker leaves the selection untouched.
    pub fn select_files_dialog(&mut self, cx: &mut Context<Self>) {
        if self.controller.is_processing() {
            log::debug!("Picker suppressed during an active run");
            return;
        }

        let options = PathPromptOptions {
            files: true,
            directories: true,
            multiple: true,
            prompt: None,
        };
        let receiver = cx.prompt_for_paths(options);

        cx.spawn(|this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut async_cx = cx.clone();
            async move {
                if let Ok(Ok(Some(paths))) = receiver.await {
                    let _ = this.update(&mut async_cx, |this, cx| {
                        this.controller.select_files(&paths);
                        cx.notify();
                    });
                }
            }
        })
        .detach();
    }

    /// Handle external file drop from Finder
    pub fn handle_external_drop(&mut self, paths: &[PathBuf], cx: &mut Context<Self>) {
        self.controller.drop_files(paths);
        cx.notify();
    }

    /// Empty the selection
    pub fn clear_files(&mut self, cx: &mut Context<Self>) {
        self.controller.clear_files();
        cx.notify();
    }
}
