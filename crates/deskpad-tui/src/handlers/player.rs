use crossterm::event::{KeyCode, KeyEvent};
use std::path::PathBuf;

use deskpad_domain::PlayerStatus;

use crate::app::{App, AppMode};
use crate::dialog::{handle_dialog_input, DialogAction};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('f') => {
            app.input.clear();
            app.mode = AppMode::PlayerFile;
        }
        KeyCode::Char('u') => {
            app.input.clear();
            app.mode = AppMode::PlayerUrl;
        }
        KeyCode::Char(' ') => match app.player.status() {
            PlayerStatus::Playing => app.player.pause(),
            PlayerStatus::Paused | PlayerStatus::Stopped => app.player.play(),
        },
        KeyCode::Char('s') => app.player.stop(),
        _ => {}
    }
}

pub fn handle_dialog(app: &mut App, key: KeyEvent) {
    match app.mode.clone() {
        AppMode::PlayerFile => match handle_dialog_input(&mut app.input, key.code, false) {
            DialogAction::Confirm => {
                let path = app.input.take_trimmed();
                app.player.load_file(PathBuf::from(path));
                app.mode = AppMode::Normal;
            }
            DialogAction::Cancel => close(app),
            DialogAction::None => {}
        },
        AppMode::PlayerUrl => match handle_dialog_input(&mut app.input, key.code, false) {
            DialogAction::Confirm => {
                let url = app.input.take_trimmed();
                if !app.player.load_video_url(&url) {
                    app.status = Some("No video id found in that link".to_string());
                }
                app.mode = AppMode::Normal;
            }
            DialogAction::Cancel => close(app),
            DialogAction::None => {}
        },
        _ => {}
    }
}

fn close(app: &mut App) {
    app.mode = AppMode::Normal;
    app.input.clear();
}
