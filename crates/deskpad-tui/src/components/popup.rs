use crate::theme::{focused_border, highlight_text, popup_bg};
use deskpad_core::InputState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Text-input popup with a title, a label line, and a bordered input
/// field showing the cursor.
pub fn render_input_popup(frame: &mut Frame, title: &str, label: &str, input: &InputState) {
    let area = centered_rect(60, 30, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(label).style(highlight_text()), chunks[0]);

    let field = Paragraph::new(input.text()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focused_border()),
    );
    frame.render_widget(field, chunks[1]);

    // Input longer than the field must not push the cursor through the
    // right border.
    let cursor_x = (chunks[1].x + 1 + input.cursor_pos() as u16)
        .min(chunks[1].x + chunks[1].width.saturating_sub(2));
    frame.set_cursor_position((cursor_x, chunks[1].y + 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn field_rect(frame_area: Rect) -> Rect {
        let area = centered_rect(60, 30, frame_area);
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);
        chunks[1]
    }

    #[test]
    fn test_cursor_tracks_short_input() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputState::new();
        input.set("abc");
        terminal
            .draw(|frame| render_input_popup(frame, "Edit", "Text", &input))
            .unwrap();
        let field = field_rect(Rect::new(0, 0, 60, 20));
        let pos = terminal.get_cursor_position().unwrap();
        assert_eq!(pos.x, field.x + 4);
        assert_eq!(pos.y, field.y + 1);
    }

    #[test]
    fn test_cursor_clamped_to_field_for_long_input() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputState::new();
        input.set(&"x".repeat(200));
        terminal
            .draw(|frame| render_input_popup(frame, "Edit", "Text", &input))
            .unwrap();
        let field = field_rect(Rect::new(0, 0, 60, 20));
        let pos = terminal.get_cursor_position().unwrap();
        assert_eq!(pos.x, field.x + field.width - 2);
        assert!(pos.x < field.x + field.width - 1);
    }
}
