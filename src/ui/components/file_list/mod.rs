//! FileList component - The main application view
//!
//! This is the root view of the application, containing:
//! - Header
//! - File list with external drag-and-drop
//! - Settings panel
//! - Status bar with the process button and progress display

mod files;
mod processing;
mod render;
mod settings;
#[cfg(test)]
mod tests;

use std::sync::mpsc::Receiver;

use gpui::{Context, FocusHandle, ScrollHandle};

use crate::core::{AppController, AppEvent};

/// The main file list view
///
/// Owns the UI-agnostic controller and drains its event channel from the
/// render loop; all widget state below is presentation plumbing.
pub struct FileList {
    /// Orchestrates selection, settings, and processing runs
    pub(crate) controller: AppController,
    /// Receiving end of the controller's event channel
    pub(crate) app_events: Receiver<AppEvent>,
    /// Handle for scroll state
    pub(crate) scroll_handle: ScrollHandle,
    /// Focus handle for receiving actions (None in tests)
    pub(crate) focus_handle: Option<FocusHandle>,
    /// Whether we've subscribed to appearance changes
    pub(crate) appearance_subscription_set: bool,
    /// Whether we've subscribed to bounds changes (for saving window state)
    pub(crate) bounds_subscription_set: bool,
    /// Whether we need to grab initial focus (for menu items to work)
    pub(crate) needs_initial_focus: bool,
    /// Pending warning dialog (title, message), shown from the render loop
    pub(crate) pending_warning: Option<(String, String)>,
    /// Whether the completion dialog is waiting to be shown
    pub(crate) pending_completion: bool,
}

impl FileList {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let (controller, app_events) = AppController::new();
        Self {
            controller,
            app_events,
            scroll_handle: ScrollHandle::new(),
            focus_handle: Some(cx.focus_handle()),
            appearance_subscription_set: false,
            bounds_subscription_set: false,
            needs_initial_focus: true,
            pending_warning: None,
            pending_completion: false,
        }
    }

    /// Create a FileList for testing (without GPUI context)
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        use std::time::Duration;

        let (controller, app_events) =
            AppController::with_step_delay(Duration::from_millis(1));
        Self {
            controller,
            app_events,
            scroll_handle: ScrollHandle::new(),
            focus_handle: None,
            appearance_subscription_set: false,
            bounds_subscription_set: false,
            needs_initial_focus: false,
            pending_warning: None,
            pending_completion: false,
        }
    }
}
