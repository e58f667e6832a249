use crossterm::event::{KeyCode, KeyEvent};

use deskpad_domain::timer::{parse_hms, TimerMode};

use crate::app::{App, AppMode};
use crate::dialog::{handle_dialog_input, DialogAction};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Cycle timer -> countdown -> clock. Every switch stops the
        // machine; the countdown target is re-parsed from the input.
        KeyCode::Char('m') => match app.timer.mode() {
            TimerMode::Timer { .. } => {
                let target = parse_hms(&app.countdown_input.text());
                app.timer.switch_to_countdown(target);
            }
            TimerMode::Countdown { .. } => app.timer.switch_to_clock(),
            TimerMode::Clock => app.timer.switch_to_timer(),
        },
        KeyCode::Char('s') | KeyCode::Char(' ') => app.timer.toggle(),
        KeyCode::Char('r') => app.timer.reset(),
        KeyCode::Char('i') => {
            app.mode = AppMode::EditCountdown;
        }
        _ => {}
    }
}

pub fn handle_dialog(app: &mut App, key: KeyEvent) {
    // Confirm ("Set") and cancel (losing focus) are equivalent triggers:
    // both re-parse the input and load the countdown target.
    match handle_dialog_input(&mut app.countdown_input, key.code, true) {
        DialogAction::Confirm | DialogAction::Cancel => {
            let target = parse_hms(&app.countdown_input.text());
            app.timer.set_countdown(target);
            app.mode = AppMode::Normal;
        }
        DialogAction::None => {}
    }
}
