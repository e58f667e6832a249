use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn dragged_border() -> Style {
    Style::default()
        .fg(DRAGGED_BORDER)
        .add_modifier(Modifier::BOLD)
}

/// Cards sliding out after completion render dimmed.
pub fn moving_text() -> Style {
    Style::default()
        .fg(MOVING_TEXT)
        .add_modifier(Modifier::ITALIC)
}

pub fn celebration_text() -> Style {
    Style::default()
        .fg(CELEBRATION)
        .add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}

pub fn active_tab() -> Style {
    Style::default()
        .fg(FOCUSED_BORDER)
        .add_modifier(Modifier::BOLD)
}
