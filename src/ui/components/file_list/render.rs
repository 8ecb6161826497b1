//! Rendering implementation for FileList
//!
//! Contains the Render trait implementation and all rendering helper methods.

use gpui::{
    Context, ExternalPaths, IntoElement, PromptLevel, Render, SharedString, Window, div,
    prelude::*, px, rgb,
};

use crate::actions::{ClearFiles, SelectFiles};
use crate::core::WindowState;
use crate::ui::Theme;
use crate::ui::components::file_item::render_file_item;
use crate::ui::components::header::Header;
use crate::ui::components::settings_panel::render_settings_panel;
use crate::ui::components::status_bar::{StatusBarProps, render_status_bar};

use super::FileList;

impl FileList {
    /// Render the empty state drop zone
    fn render_empty_state(&self, theme: &Theme, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_2()
            .text_color(theme.text_muted)
            .child(div().text_2xl().child("📂"))
            .child(div().text_lg().child("Drop photos and videos here"))
            .child(
                div()
                    .id(SharedString::from("select-files-button"))
                    .mt(px(8.))
                    .px_4()
                    .py_2()
                    .bg(theme.accent)
                    .text_color(gpui::white())
                    .text_sm()
                    .rounded_md()
                    .cursor_pointer()
                    .hover(|s| s.bg(rgb(0x2563eb)))
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.select_files_dialog(cx);
                    }))
                    .child("📁 Select Files"),
            )
    }

    /// Render the populated file list
    fn render_file_items(&self, theme: &Theme) -> impl IntoElement {
        let mut list = div().w_full().flex().flex_col().gap_2();
        for entry in self.controller.files().iter() {
            list = list.child(render_file_item(entry, theme));
        }
        list
    }

    /// Build the StatusBarProps from current controller state
    fn build_status_bar_props(&self) -> StatusBarProps {
        StatusBarProps {
            file_count: self.controller.files().len(),
            total_size: self.controller.files().total_size(),
            is_processing: self.controller.is_processing(),
            progress_percent: self.controller.progress(),
            can_start: self.controller.can_start(),
        }
    }

    /// Show any pending warning dialog
    ///
    /// This is called from the render loop to display messages like the
    /// empty-selection warning.
    fn show_pending_warning_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Some((title, message)) = self.pending_warning.take() {
            let _future = window.prompt(
                PromptLevel::Warning,
                &title,
                Some(&message),
                &["OK"],
                cx,
            );
            // We don't need to wait for the response - just showing the dialog
        }
    }

    /// Show the completion dialog once a run has finished
    fn show_pending_completion_dialog(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.pending_completion {
            self.pending_completion = false;
            let _future = window.prompt(
                PromptLevel::Info,
                "Processing Complete",
                Some("All files were processed successfully."),
                &["OK"],
                cx,
            );
        }
    }
}

impl Render for FileList {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Subscribe to appearance changes (once)
        if !self.appearance_subscription_set {
            self.appearance_subscription_set = true;
            cx.observe_window_appearance(window, |_this, _window, cx| {
                cx.notify();
            })
            .detach();
        }

        // Subscribe to bounds changes to save window state (once)
        if !self.bounds_subscription_set {
            self.bounds_subscription_set = true;
            cx.observe_window_bounds(window, |_this, window, _cx| {
                let bounds = window.bounds();
                let state = WindowState {
                    x: bounds.origin.x.into(),
                    y: bounds.origin.y.into(),
                    width: bounds.size.width.into(),
                    height: bounds.size.height.into(),
                };
                if let Err(e) = state.save() {
                    log::error!("Failed to save window state: {}", e);
                }
            })
            .detach();
        }

        // Grab initial focus so menu items work immediately
        if self.needs_initial_focus {
            self.needs_initial_focus = false;
            if let Some(ref focus_handle) = self.focus_handle {
                focus_handle.focus(window);
            }
        }

        // Pick up controller events that arrived outside the polling loop
        self.drain_app_events();

        // Show any pending dialogs
        self.show_pending_warning_dialog(window, cx);
        self.show_pending_completion_dialog(window, cx);

        // Get theme based on OS appearance
        let theme = Theme::from_appearance(window.appearance());
        let is_empty = self.is_empty();

        // Capture listeners first (before borrowing for child elements)
        let on_external_drop = cx.listener(|this, paths: &ExternalPaths, _window, cx| {
            this.handle_external_drop(paths.paths(), cx);
        });
        let on_select_files = cx.listener(|this, _: &SelectFiles, _window, cx| {
            this.select_files_dialog(cx);
        });
        let on_clear_files = cx.listener(|this, _: &ClearFiles, _window, cx| {
            this.clear_files(cx);
        });

        // Build the list content
        let list_content = if is_empty {
            self.render_empty_state(&theme, cx).into_any_element()
        } else {
            self.render_file_items(&theme).into_any_element()
        };

        // Settings panel works from a snapshot; changes flow back through
        // the callbacks
        let settings_snapshot = self.controller.settings().clone();
        let settings_panel = render_settings_panel(
            &settings_snapshot,
            &theme,
            cx,
            |view: &mut Self, destination| view.set_destination(destination),
            |view: &mut Self, rule| view.toggle_rule(rule),
        );

        let status_bar = render_status_bar(
            self.build_status_bar_props(),
            &theme,
            cx,
            |view: &mut Self, cx| view.start_processing(cx),
        );

        // Build the base container
        let mut container = div().size_full().flex().flex_col().bg(theme.bg);

        // Track focus if we have a focus handle (not in tests)
        if let Some(ref focus_handle) = self.focus_handle {
            container = container.track_focus(focus_handle);
        }

        container
            .on_action(on_select_files)
            .on_action(on_clear_files)
            // Handle external file drops on the entire window
            .on_drop(on_external_drop)
            // Style when dragging external files over the window
            .drag_over::<ExternalPaths>(|style, _, _, _| style.bg(rgb(0x3d3d3d)))
            .child(Header::render())
            // Main content area - file list (scrollable) + settings panel
            .child(
                div()
                    .flex_1()
                    .w_full()
                    .flex()
                    .gap_4()
                    .px_6()
                    .py_4()
                    .overflow_hidden()
                    .child(
                        div()
                            .id("file-list-scroll")
                            .flex_1()
                            .h_full()
                            .overflow_scroll()
                            .track_scroll(&self.scroll_handle)
                            .child(list_content),
                    )
                    .child(div().w(px(280.)).child(settings_panel)),
            )
            // Status bar at bottom
            .child(status_bar)
    }
}
