use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

use deskpad_domain::card::CardId;

use crate::app::{App, AppMode};
use crate::dialog::{handle_dialog_input, DialogAction};

pub fn selected_card(app: &App) -> Option<CardId> {
    let column = app.board.columns.get(app.column_cursor)?;
    let idx = app.card_cursor.get()?;
    app.board.cards_in(column.id).nth(idx).map(|c| c.id)
}

fn column_card_count(app: &App) -> usize {
    app.board
        .columns
        .get(app.column_cursor)
        .map(|col| app.board.cards_in(col.id).count())
        .unwrap_or(0)
}

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            if app.column_cursor > 0 {
                app.column_cursor -= 1;
            }
            app.card_cursor.clamp(column_card_count(app));
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.column_cursor + 1 < app.board.columns.len() {
                app.column_cursor += 1;
            }
            app.card_cursor.clamp(column_card_count(app));
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.card_cursor.next_wrapping(column_card_count(app));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.card_cursor.prev_wrapping(column_card_count(app));
        }
        KeyCode::Char('n') => {
            if let Some(column) = app.board.columns.get(app.column_cursor) {
                app.mode = AppMode::AddCardTitle { column: column.id };
                app.input.clear();
            }
        }
        KeyCode::Char('N') => {
            app.mode = AppMode::AddColumn;
            app.input.clear();
        }
        KeyCode::Char('e') => {
            if let Some(id) = selected_card(app) {
                if let Some(card) = app.board.card(id) {
                    let title = card.title.clone();
                    app.input.set(&title);
                    app.mode = AppMode::EditCardTitle { card: id };
                }
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = selected_card(app) {
                app.board.delete_card(id);
                app.card_cursor.clamp(column_card_count(app));
            }
        }
        KeyCode::Char('m') => {
            if let Some(id) = selected_card(app) {
                app.board.begin_drag(id);
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            // While a drag is in flight Enter drops onto the highlighted
            // column; otherwise it completes the selected card.
            if app.board.dragged().is_some() {
                if let Some(column) = app.board.columns.get(app.column_cursor) {
                    app.board.drop_on(column.id);
                }
            } else if let Some(id) = selected_card(app) {
                app.board.complete_card(id, now);
                app.card_cursor.clamp(column_card_count(app));
            }
        }
        KeyCode::Esc => {
            app.board.cancel_drag();
        }
        KeyCode::Char('x') => {
            let filename = format!(
                "board-{}.json",
                chrono::Utc::now().format("%Y%m%d-%H%M%S")
            );
            app.input.set(&filename);
            app.mode = AppMode::ExportBoard;
        }
        _ => {}
    }
}

pub fn handle_dialog(app: &mut App, key: KeyEvent) {
    match app.mode.clone() {
        AppMode::AddColumn => match handle_dialog_input(&mut app.input, key.code, false) {
            DialogAction::Confirm => {
                let name = app.input.take_trimmed();
                if let Some(id) = app.board.add_column(&name) {
                    tracing::info!("Added column: {} (id: {})", name, id);
                }
                app.mode = AppMode::Normal;
            }
            DialogAction::Cancel => close(app),
            DialogAction::None => {}
        },
        AppMode::AddCardTitle { column } => {
            match handle_dialog_input(&mut app.input, key.code, false) {
                DialogAction::Confirm => {
                    let title = app.input.take_trimmed();
                    app.mode = AppMode::AddCardDescription { column, title };
                }
                DialogAction::Cancel => close(app),
                DialogAction::None => {}
            }
        }
        AppMode::AddCardDescription { column, title } => {
            match handle_dialog_input(&mut app.input, key.code, true) {
                DialogAction::Confirm => {
                    let description = app.input.take_trimmed();
                    if let Some(id) = app.board.add_card(column, &title, &description) {
                        tracing::info!("Added card: {} (id: {})", title, id);
                    }
                    app.mode = AppMode::Normal;
                }
                DialogAction::Cancel => close(app),
                DialogAction::None => {}
            }
        }
        AppMode::EditCardTitle { card } => {
            match handle_dialog_input(&mut app.input, key.code, false) {
                DialogAction::Confirm => {
                    let title = app.input.take_trimmed();
                    let description = app
                        .board
                        .card(card)
                        .map(|c| c.description.clone())
                        .unwrap_or_default();
                    app.input.set(&description);
                    app.mode = AppMode::EditCardDescription { card, title };
                }
                DialogAction::Cancel => close(app),
                DialogAction::None => {}
            }
        }
        AppMode::EditCardDescription { card, title } => {
            match handle_dialog_input(&mut app.input, key.code, true) {
                DialogAction::Confirm => {
                    let description = app.input.take_trimmed();
                    app.board.edit_card(card, &title, &description);
                    app.mode = AppMode::Normal;
                }
                DialogAction::Cancel => close(app),
                DialogAction::None => {}
            }
        }
        AppMode::ExportBoard => match handle_dialog_input(&mut app.input, key.code, false) {
            DialogAction::Confirm => {
                let filename = app.input.take_trimmed();
                match export_board(app, &filename) {
                    Ok(()) => {
                        app.status = Some(format!("Exported board to {}", filename));
                        tracing::info!("Exported board to: {}", filename);
                    }
                    Err(e) => {
                        app.status = Some(format!("Export failed: {}", e));
                        tracing::error!("Failed to export board: {}", e);
                    }
                }
                app.mode = AppMode::Normal;
            }
            DialogAction::Cancel => close(app),
            DialogAction::None => {}
        },
        _ => {}
    }
}

fn export_board(app: &App, filename: &str) -> anyhow::Result<()> {
    let json = app.board.export_json()?;
    std::fs::write(filename, json)?;
    Ok(())
}

fn close(app: &mut App) {
    app.mode = AppMode::Normal;
    app.input.clear();
}
