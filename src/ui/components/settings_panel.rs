//! SettingsPanel component - Destination and organization rule controls
//!
//! Stateless render functions; the selected values live in the controller
//! owned by the parent view, which passes a snapshot in and receives
//! changes through the callbacks.

use gpui::{Context, IntoElement, SharedString, div, prelude::*};

use crate::core::{Destination, TransferSettings};
use crate::ui::Theme;

/// One of the three organization rule flags, for callback dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    DateFolder,
    DeviceFolder,
    DuplicateCheck,
}

impl Rule {
    fn label(&self) -> &'static str {
        match self {
            Rule::DateFolder => "📅 Date folders",
            Rule::DeviceFolder => "📱 Device folders",
            Rule::DuplicateCheck => "🔍 Duplicate detection",
        }
    }
}

/// Render a destination radio row
fn render_radio<V: 'static>(
    destination: Destination,
    selected: bool,
    theme: &Theme,
    cx: &mut Context<V>,
    on_select: impl Fn(&mut V, Destination) + 'static,
) -> impl IntoElement {
    let radio_icon = if selected { "◉" } else { "○" };
    let accent = theme.accent;
    let text_color = theme.text;
    let text_muted = theme.text_muted;
    let bg_hover = theme.bg_card_hover;

    div()
        .id(SharedString::from(format!("dest-{}", destination.label())))
        .flex()
        .items_center()
        .gap_2()
        .px_2()
        .py_1()
        .rounded_md()
        .cursor_pointer()
        .hover(|s| s.bg(bg_hover))
        .on_click(cx.listener(move |view, _event, _window, cx| {
            on_select(view, destination);
            cx.notify();
        }))
        .child(
            div()
                .text_color(if selected { accent } else { text_muted })
                .child(radio_icon),
        )
        .child(
            div()
                .text_sm()
                .text_color(text_color)
                .child(format!("{} {}", destination.icon(), destination.label())),
        )
}

/// Render an organization rule checkbox row
fn render_checkbox<V: 'static>(
    rule: Rule,
    checked: bool,
    theme: &Theme,
    cx: &mut Context<V>,
    on_toggle: impl Fn(&mut V, Rule) + 'static,
) -> impl IntoElement {
    let checkbox_icon = if checked { "☑" } else { "☐" };
    let accent = theme.accent;
    let text_color = theme.text;
    let text_muted = theme.text_muted;
    let bg_hover = theme.bg_card_hover;

    div()
        .id(SharedString::from(format!("rule-{:?}", rule)))
        .flex()
        .items_center()
        .gap_2()
        .px_2()
        .py_1()
        .rounded_md()
        .cursor_pointer()
        .hover(|s| s.bg(bg_hover))
        .on_click(cx.listener(move |view, _event, _window, cx| {
            on_toggle(view, rule);
            cx.notify();
        }))
        .child(
            div()
                .text_lg()
                .text_color(if checked { accent } else { text_muted })
                .child(checkbox_icon),
        )
        .child(div().text_sm().text_color(text_color).child(rule.label()))
}

/// Render the settings panel: destination group, rules group, summary
pub fn render_settings_panel<V: 'static, T: Fn(&mut V, Destination) + 'static + Clone, U: Fn(&mut V, Rule) + 'static + Clone>(
    settings: &TransferSettings,
    theme: &Theme,
    cx: &mut Context<V>,
    on_destination: T,
    on_toggle_rule: U,
) -> impl IntoElement + use<V, T, U> {
    // Destination group
    let mut destination_group = div()
        .flex()
        .flex_col()
        .gap_1()
        .p_3()
        .bg(theme.bg_card)
        .border_1()
        .border_color(theme.border)
        .rounded_md()
        .child(
            div()
                .text_sm()
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(theme.text)
                .pb_1()
                .child("🎯 Destination"),
        );

    for destination in Destination::all() {
        destination_group = destination_group.child(render_radio(
            destination,
            settings.destination == destination,
            theme,
            cx,
            on_destination.clone(),
        ));
    }

    // Rules group
    let rules = [
        (Rule::DateFolder, settings.date_folder),
        (Rule::DeviceFolder, settings.device_folder),
        (Rule::DuplicateCheck, settings.duplicate_check),
    ];

    let mut rules_group = div()
        .flex()
        .flex_col()
        .gap_1()
        .p_3()
        .bg(theme.bg_card)
        .border_1()
        .border_color(theme.border)
        .rounded_md()
        .child(
            div()
                .text_sm()
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(theme.text)
                .pb_1()
                .child("⚙️ Organize Rules"),
        );

    for (rule, checked) in rules {
        rules_group = rules_group.child(render_checkbox(
            rule,
            checked,
            theme,
            cx,
            on_toggle_rule.clone(),
        ));
    }

    // Summary box (one div per line; the summary is at most two lines)
    let mut summary_box = div()
        .flex()
        .flex_col()
        .gap_1()
        .p_3()
        .bg(theme.bg_card)
        .border_1()
        .border_color(theme.border)
        .rounded_md();

    for line in settings.summary().lines() {
        summary_box = summary_box.child(
            div()
                .text_xs()
                .text_color(theme.text_muted)
                .child(line.to_string()),
        );
    }

    div()
        .flex()
        .flex_col()
        .gap_3()
        .child(destination_group)
        .child(rules_group)
        .child(summary_box)
}
