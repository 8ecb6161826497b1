//! StatusBar component - Bottom bar with selection stats and the process button

use gpui::{Context, IntoElement, SharedString, div, prelude::*, px, relative};

use crate::core::format_size;
use crate::ui::Theme;

/// Properties for the status bar
pub struct StatusBarProps {
    pub file_count: usize,
    pub total_size: u64,
    pub is_processing: bool,
    /// Completion percentage of the active run (0-100)
    pub progress_percent: u8,
    /// Whether the process button may be clicked
    pub can_start: bool,
}

impl StatusBarProps {
    fn stats_text(&self) -> String {
        match self.file_count {
            0 => "No files selected".to_string(),
            1 => format!("1 file selected, {}", format_size(self.total_size)),
            n => format!("{} files selected, {}", n, format_size(self.total_size)),
        }
    }
}

/// Render the in-flight progress box: percentage label over a fill bar
fn render_progress_box(percent: u8, theme: &Theme) -> impl IntoElement {
    div()
        .flex()
        .flex_col()
        .items_center()
        .gap_1()
        .child(
            div()
                .text_sm()
                .text_color(theme.text)
                .child(format!("⏳ {}% complete", percent)),
        )
        .child(
            div()
                .w(px(192.))
                .h(px(6.))
                .rounded_md()
                .bg(theme.progress_track)
                .overflow_hidden()
                .child(
                    div()
                        .w(relative(percent as f32 / 100.0))
                        .h_full()
                        .bg(theme.progress_fill),
                ),
        )
}

/// Render the status bar
///
/// Displays selection stats on the left; on the right either the process
/// button or, while a run is active, the progress box.
pub fn render_status_bar<V: 'static>(
    props: StatusBarProps,
    theme: &Theme,
    cx: &mut Context<V>,
    on_start: impl Fn(&mut V, &mut Context<V>) + 'static,
) -> impl IntoElement {
    let stats_text = props.stats_text();
    let can_start = props.can_start;
    let success = theme.success;
    let success_hover = theme.success_hover;
    let disabled = theme.disabled;

    let right_panel = if props.is_processing {
        render_progress_box(props.progress_percent, theme).into_any_element()
    } else {
        div()
            .id(SharedString::from("process-button"))
            .px_4()
            .py_2()
            .bg(if can_start { success } else { disabled })
            .text_color(gpui::white())
            .text_sm()
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .rounded_md()
            .when(can_start, |el| {
                el.cursor_pointer().hover(move |s| s.bg(success_hover))
            })
            .on_click(cx.listener(move |view, _event, _window, cx| {
                if can_start {
                    on_start(view, cx);
                }
            }))
            .child("🚀 Start Processing")
            .into_any_element()
    };

    div()
        .py_3()
        .px_6()
        .h(px(64.))
        .flex()
        .items_center()
        .justify_between()
        .bg(theme.bg)
        .border_t_1()
        .border_color(theme.border)
        .text_sm()
        .child(div().text_color(theme.text_muted).child(stats_text))
        .child(right_panel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_text_empty() {
        let props = StatusBarProps {
            file_count: 0,
            total_size: 0,
            is_processing: false,
            progress_percent: 0,
            can_start: false,
        };
        assert_eq!(props.stats_text(), "No files selected");
    }

    #[test]
    fn test_stats_text_singular() {
        let props = StatusBarProps {
            file_count: 1,
            total_size: 2048,
            is_processing: false,
            progress_percent: 0,
            can_start: true,
        };
        assert_eq!(props.stats_text(), "1 file selected, 2 KB");
    }

    #[test]
    fn test_stats_text_plural() {
        let props = StatusBarProps {
            file_count: 3,
            total_size: 3 * 1048576,
            is_processing: false,
            progress_percent: 0,
            can_start: true,
        };
        assert_eq!(props.stats_text(), "3 files selected, 3 MB");
    }
}
