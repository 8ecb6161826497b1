//! Header component - Application title banner

use gpui::{IntoElement, div, prelude::*, px, rgb};

/// Render the application header
pub struct Header;

impl Header {
    /// Render the header with title and subtitle
    pub fn render() -> impl IntoElement {
        div()
            .w_full()
            .h(px(80.))
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_1()
            .bg(rgb(0x1e293b))
            .child(
                div()
                    .text_color(gpui::white())
                    .text_lg()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child("📷 Media Transfer Tool"),
            )
            .child(
                div()
                    .text_color(rgb(0x94a3b8))
                    .text_sm()
                    .child("Organize and transfer photos & videos"),
            )
    }
}
