use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;

use deskpad_domain::workpad::{FontSize, Language, PadMode};

use crate::app::App;

/// The editor section consumes plain characters as buffer input, so all
/// commands ride on Ctrl (plus PageUp/PageDown for page navigation).
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('t') => {
                app.workpad.mode = match app.workpad.mode {
                    PadMode::Code => PadMode::Text,
                    PadMode::Text => PadMode::Code,
                };
            }
            KeyCode::Char('l') => {
                if app.workpad.mode == PadMode::Code {
                    let all = Language::ALL;
                    let current = all
                        .iter()
                        .position(|l| *l == app.workpad.language())
                        .unwrap_or(0);
                    app.workpad.set_language(all[(current + 1) % all.len()]);
                }
            }
            KeyCode::Char('n') => {
                if app.workpad.mode == PadMode::Text {
                    app.workpad.add_page();
                }
            }
            KeyCode::Char('f') => {
                let all = FontSize::ALL;
                let current = all
                    .iter()
                    .position(|f| *f == app.workpad.font_size)
                    .unwrap_or(0);
                app.workpad.font_size = all[(current + 1) % all.len()];
            }
            KeyCode::Char('e') => match app.workpad.mode {
                PadMode::Code => match app.workpad.export_code(Path::new(".")) {
                    Ok(path) => {
                        app.status = Some(format!("Exported code to {}", path.display()));
                    }
                    Err(e) => {
                        app.status = Some(format!("Export failed: {}", e));
                        tracing::error!("Failed to export code: {}", e);
                    }
                },
                PadMode::Text => {
                    // Document export is an acknowledged stub.
                    app.status = Some("Export as docx/pdf is not implemented".to_string());
                }
            },
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::PageUp => app.workpad.prev_page(),
        KeyCode::PageDown => app.workpad.next_page(),
        KeyCode::Char(c) => type_char(app, c),
        KeyCode::Enter => type_char(app, '\n'),
        KeyCode::Backspace => {
            match app.workpad.mode {
                PadMode::Code => {
                    app.workpad.code.pop();
                }
                PadMode::Text => {
                    let mut text = app.workpad.page_text().to_string();
                    text.pop();
                    app.workpad.set_page_text(text);
                }
            };
        }
        _ => {}
    }
}

fn type_char(app: &mut App, c: char) {
    match app.workpad.mode {
        PadMode::Code => app.workpad.code.push(c),
        PadMode::Text => {
            let mut text = app.workpad.page_text().to_string();
            text.push(c);
            app.workpad.set_page_text(text);
        }
    }
}
