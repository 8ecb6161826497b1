//! FileItem component - A single file entry in the selection list

use gpui::{IntoElement, div, prelude::*, rgb};

use crate::core::{FileEntry, format_size};
use crate::ui::Theme;

/// Renders a single file row in the list
///
/// This is a stateless render function rather than a component because the
/// entries are owned wholesale by the parent FileList and never mutated
/// individually.
pub fn render_file_item(entry: &FileEntry, theme: &Theme) -> impl IntoElement {
    let name = entry.display_name.clone();
    let size_text = format_size(entry.size);
    let type_tag = entry.type_tag();

    div()
        .w_full()
        .h_12()
        .flex_shrink_0() // Prevent shrinking when in scrollable container
        .flex()
        .items_center()
        .gap_3()
        .px_3()
        .bg(theme.bg_card)
        .border_1()
        .border_color(theme.border)
        .rounded_md()
        .hover(|s| s.bg(theme.bg_card_hover))
        // Kind icon
        .child(
            div()
                .size_8()
                .rounded_sm()
                .bg(rgb(0x404040))
                .flex()
                .items_center()
                .justify_center()
                .child(div().text_lg().child(entry.kind.icon())),
        )
        // File name
        .child(
            div()
                .flex_1()
                .text_sm()
                .text_color(theme.text)
                .overflow_hidden()
                .text_ellipsis()
                .child(name),
        )
        // Size
        .child(
            div()
                .text_xs()
                .text_color(theme.text_muted)
                .child(size_text),
        )
        // Type tag
        .child(
            div()
                .text_xs()
                .font_weight(gpui::FontWeight::BOLD)
                .text_color(theme.accent)
                .child(type_tag),
        )
}
