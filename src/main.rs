//! Media Transfer Tool - GPUI Application
//!
//! A native desktop application for selecting photos and videos and running
//! an organization/transfer pass over them with progress reporting.

mod actions;
mod core;
mod logging;
mod processing;
mod ui;

use gpui::{
    App, Application, Bounds, KeyBinding, Menu, MenuItem, WindowBounds, WindowHandle,
    WindowOptions, point, prelude::*, px, size,
};

use actions::{About, ClearFiles, Quit, SelectFiles};
use core::WindowState;
use ui::components::{AboutBox, FileList};

/// Build the application menus
fn build_menus() -> Vec<Menu> {
    vec![
        Menu {
            name: "Media Transfer Tool".into(),
            items: vec![
                MenuItem::action("About Media Transfer Tool", About),
                MenuItem::separator(),
                MenuItem::action("Quit", Quit),
            ],
        },
        Menu {
            name: "File".into(),
            items: vec![
                MenuItem::action("Select Files...", SelectFiles),
                MenuItem::separator(),
                MenuItem::action("Clear Files", ClearFiles),
            ],
        },
    ]
}

fn main() {
    logging::init_logging();

    Application::new().run(|cx: &mut App| {
        // Register action handlers
        cx.on_action(|_: &Quit, cx| cx.quit());
        cx.on_action(|_: &About, cx| {
            AboutBox::open(cx);
        });
        // Note: SelectFiles/ClearFiles handlers are registered on the
        // FileList view itself via on_action in render(). The view has
        // focus, so it receives the actions dispatched from menu items.

        // Bind keyboard shortcuts
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("cmd-o", SelectFiles, None),
            KeyBinding::new("cmd-backspace", ClearFiles, None),
        ]);

        // Set up the application menu
        cx.set_menus(build_menus());

        // Restore the last window geometry
        let window_state = WindowState::load();
        let bounds = Bounds {
            origin: point(px(window_state.x as f32), px(window_state.y as f32)),
            size: size(
                px(window_state.width as f32),
                px(window_state.height as f32),
            ),
        };

        // Open the main window
        let window_handle: WindowHandle<FileList> = cx
            .open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    window_min_size: Some(size(px(800.), px(560.))),
                    titlebar: Some(gpui::TitlebarOptions {
                        title: Some("Media Transfer Tool".into()),
                        appears_transparent: false,
                        traffic_light_position: None,
                    }),
                    ..Default::default()
                },
                |_window, cx| cx.new(FileList::new),
            )
            .unwrap();

        // Quit the app when the main window is closed
        // This is appropriate for a single-window utility app
        cx.on_window_closed(|cx| {
            cx.quit();
        })
        .detach();

        // window_handle keeps the window alive
        let _ = window_handle;

        cx.activate(true);
    });
}
