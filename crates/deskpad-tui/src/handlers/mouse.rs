use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Section};

/// Resolve mouse input against the regions recorded during the last
/// draw. The board drags cards between columns; notes drag freely with
/// the grab offset captured on press.
pub fn handle(app: &mut App, mouse: MouseEvent) {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match app.section {
            Section::Projects => {
                if let Some(card) = app.hits.card_at(x, y) {
                    app.board.begin_drag(card);
                }
            }
            Section::Notes => {
                if let Some(note) = app.hits.note_at(x, y) {
                    if let Some((nx, ny)) = note_space(app, x, y) {
                        app.notes.begin_drag(note, nx, ny);
                        if let Some(idx) = app.notes.notes.iter().position(|n| n.id == note) {
                            app.note_cursor.set(Some(idx));
                        }
                    }
                }
            }
            _ => {}
        },
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.section == Section::Notes {
                if let Some((nx, ny)) = note_space(app, x, y) {
                    app.notes.drag_to(nx, ny);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => match app.section {
            Section::Projects => {
                // Release over a column drops there; anywhere else the
                // drag ends without a move.
                match app.hits.column_at(x, y) {
                    Some(column) => app.board.drop_on(column),
                    None => app.board.cancel_drag(),
                }
            }
            Section::Notes => app.notes.end_drag(),
            _ => {}
        },
        _ => {}
    }
}

/// Translate screen coordinates into the notes workspace, where note
/// positions live.
fn note_space(app: &App, x: u16, y: u16) -> Option<(i32, i32)> {
    let area = app.hits.notes_area?;
    Some((x as i32 - area.x as i32, y as i32 - area.y as i32))
}
