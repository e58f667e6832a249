use crossterm::event::{KeyCode, KeyEvent};

use deskpad_domain::notes::NoteId;

use crate::app::{App, AppMode};
use crate::dialog::{handle_dialog_input, DialogAction};

pub fn selected_note(app: &App) -> Option<NoteId> {
    let idx = app.note_cursor.get()?;
    app.notes.notes.get(idx).map(|n| n.id)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') => {
            let id = app.notes.add_note(&mut rand::thread_rng());
            app.note_cursor.set(Some(app.notes.notes.len() - 1));
            app.input.clear();
            app.mode = AppMode::EditNote { note: id };
        }
        KeyCode::Char('j') => app.note_cursor.next_wrapping(app.notes.notes.len()),
        KeyCode::Char('k') => app.note_cursor.prev_wrapping(app.notes.notes.len()),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = selected_note(app) {
                app.notes.start_edit(id);
                let text = app
                    .notes
                    .note(id)
                    .map(|n| n.text.clone())
                    .unwrap_or_default();
                app.input.set(&text);
                app.mode = AppMode::EditNote { note: id };
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = selected_note(app) {
                app.notes.delete_note(id);
                app.note_cursor.clamp(app.notes.notes.len());
            }
        }
        // Arrow keys nudge the selected note; position is unconstrained.
        KeyCode::Left => nudge(app, -2, 0),
        KeyCode::Right => nudge(app, 2, 0),
        KeyCode::Up => nudge(app, 0, -1),
        KeyCode::Down => nudge(app, 0, 1),
        _ => {}
    }
}

fn nudge(app: &mut App, dx: i32, dy: i32) {
    if let Some(id) = selected_note(app) {
        if let Some(note) = app.notes.note(id) {
            let (x, y) = (note.x + dx, note.y + dy);
            app.notes.move_note(id, x, y);
        }
    }
}

pub fn handle_dialog(app: &mut App, key: KeyEvent) {
    let AppMode::EditNote { note } = app.mode.clone() else {
        return;
    };
    match handle_dialog_input(&mut app.input, key.code, true) {
        DialogAction::Confirm => {
            let text = app.input.take_trimmed();
            app.notes.save_edit(note, &text);
            app.mode = AppMode::Normal;
        }
        DialogAction::Cancel => {
            app.notes.cancel_edit();
            app.input.clear();
            app.mode = AppMode::Normal;
        }
        DialogAction::None => {}
    }
}
