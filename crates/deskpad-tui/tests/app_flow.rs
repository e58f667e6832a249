use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use deskpad_core::AppConfig;
use deskpad_domain::{PlayerStatus, Source, TimerMode};
use deskpad_tui::events::Event;
use deskpad_tui::{App, AppMode, Section};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn press(app: &mut App, code: KeyCode, now: Instant) {
    app.handle_event(key(code), now);
}

fn type_text(app: &mut App, text: &str, now: Instant) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch), now);
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn new_app() -> App {
    App::new(&AppConfig::default())
}

#[test]
fn test_starts_in_configured_section() {
    assert_eq!(new_app().section, Section::Editor);

    let config = AppConfig {
        start_section: Some("timer".to_string()),
        ..Default::default()
    };
    assert_eq!(App::new(&config).section, Section::Timer);
}

#[test]
fn test_tab_cycles_through_all_sections() {
    let mut app = new_app();
    let now = Instant::now();
    let start = app.section;

    for _ in 0..Section::ALL.len() {
        press(&mut app, KeyCode::Tab, now);
    }
    assert_eq!(app.section, start);

    press(&mut app, KeyCode::BackTab, now);
    assert_eq!(app.section, Section::Projects);
}

#[test]
fn test_ctrl_q_quits_from_any_mode() {
    let mut app = new_app();
    let now = Instant::now();

    press(&mut app, KeyCode::BackTab, now);
    press(&mut app, KeyCode::Char('N'), now);
    assert_eq!(app.mode, AppMode::AddColumn);

    app.handle_event(
        Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
        now,
    );
    assert!(app.should_quit);
}

#[test]
fn test_q_types_into_editor_instead_of_quitting() {
    let mut app = new_app();
    let now = Instant::now();

    press(&mut app, KeyCode::Char('q'), now);
    assert!(!app.should_quit);
    assert!(app.workpad.code.ends_with('q'));

    press(&mut app, KeyCode::BackTab, now);
    press(&mut app, KeyCode::Char('q'), now);
    assert!(app.should_quit);
}

#[test]
fn test_add_card_dialog_flow() {
    let mut app = new_app();
    let now = Instant::now();
    press(&mut app, KeyCode::BackTab, now);

    let todo = app.board.columns[0].id;
    assert_eq!(app.board.cards_in(todo).count(), 1);

    press(&mut app, KeyCode::Char('n'), now);
    type_text(&mut app, "Ship it", now);
    press(&mut app, KeyCode::Enter, now);
    type_text(&mut app, "before friday", now);
    press(&mut app, KeyCode::Enter, now);

    assert_eq!(app.mode, AppMode::Normal);
    let titles: Vec<_> = app.board.cards_in(todo).map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Sample Task", "Ship it"]);
}

#[test]
fn test_blank_card_title_keeps_dialog_open() {
    let mut app = new_app();
    let now = Instant::now();
    press(&mut app, KeyCode::BackTab, now);

    press(&mut app, KeyCode::Char('n'), now);
    type_text(&mut app, "   ", now);
    press(&mut app, KeyCode::Enter, now);
    assert!(matches!(app.mode, AppMode::AddCardTitle { .. }));

    press(&mut app, KeyCode::Esc, now);
    assert_eq!(app.mode, AppMode::Normal);
}

#[test]
fn test_complete_card_animates_then_settles() {
    let mut app = new_app();
    let start = Instant::now();
    press(&mut app, KeyCode::BackTab, start);

    let card = app.board.cards[0].id;
    let done = app.board.done_column().unwrap();

    // The completion deadline comes from the event timestamp, so the
    // whole animation runs on synthetic instants.
    press(&mut app, KeyCode::Char('j'), start);
    press(&mut app, KeyCode::Char(' '), start);

    let moved = app.board.card(card).unwrap();
    assert_eq!(moved.column_id, done);
    assert!(moved.moving);
    assert!(app.board.celebrating());

    // 700ms in, the slide-out marker is gone but the celebration holds
    app.handle_event(Event::Tick, start + Duration::from_millis(700));
    assert!(!app.board.card(card).unwrap().moving);
    assert!(app.board.celebrating());

    app.handle_event(Event::Tick, start + Duration::from_secs(2));
    assert!(!app.board.celebrating());
}

#[test]
fn test_mouse_drag_moves_card_between_columns() {
    let mut app = new_app();
    let now = Instant::now();
    press(&mut app, KeyCode::BackTab, now);

    let card = app.board.cards[0].id;
    let target = app.board.columns[1].id;

    // Regions the last draw would have recorded.
    app.hits.cards.push((card, Rect::new(0, 0, 12, 3)));
    app.hits.columns.push((app.board.columns[0].id, Rect::new(0, 0, 14, 20)));
    app.hits.columns.push((target, Rect::new(14, 0, 14, 20)));

    app.handle_event(
        mouse(MouseEventKind::Down(MouseButton::Left), 2, 1),
        now,
    );
    assert_eq!(app.board.dragged(), Some(card));

    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 16, 5), now);
    assert_eq!(app.board.dragged(), None);
    assert_eq!(app.board.card(card).unwrap().column_id, target);
}

#[test]
fn test_timer_counts_whole_seconds_while_running() {
    let mut app = new_app();
    let start = Instant::now();

    press(&mut app, KeyCode::Tab, start);
    press(&mut app, KeyCode::Tab, start);
    assert_eq!(app.section, Section::Timer);

    press(&mut app, KeyCode::Char('s'), start);
    assert!(app.timer.is_running());

    app.handle_event(Event::Tick, start + Duration::from_secs(3));
    assert!(matches!(
        app.timer.mode(),
        TimerMode::Timer { elapsed_ms: 3000 }
    ));
}

#[test]
fn test_mode_cycle_loads_countdown_from_input() {
    let mut app = new_app();
    let now = Instant::now();
    press(&mut app, KeyCode::Tab, now);
    press(&mut app, KeyCode::Tab, now);

    press(&mut app, KeyCode::Char('m'), now);
    assert!(matches!(
        app.timer.mode(),
        TimerMode::Countdown {
            remaining_ms: 300_000,
            target_ms: 300_000
        }
    ));

    press(&mut app, KeyCode::Char('m'), now);
    assert!(matches!(app.timer.mode(), TimerMode::Clock));
}

#[test]
fn test_countdown_dialog_applies_on_confirm_and_cancel() {
    let mut app = new_app();
    let now = Instant::now();
    press(&mut app, KeyCode::Tab, now);
    press(&mut app, KeyCode::Tab, now);
    press(&mut app, KeyCode::Char('m'), now);

    press(&mut app, KeyCode::Char('i'), now);
    app.countdown_input.set("00:00:10");
    press(&mut app, KeyCode::Enter, now);
    assert!(matches!(
        app.timer.mode(),
        TimerMode::Countdown { target_ms: 10_000, .. }
    ));

    press(&mut app, KeyCode::Char('i'), now);
    app.countdown_input.set("00:01:00");
    press(&mut app, KeyCode::Esc, now);
    assert!(matches!(
        app.timer.mode(),
        TimerMode::Countdown { target_ms: 60_000, .. }
    ));
}

#[test]
fn test_note_add_edit_flow() {
    let mut app = new_app();
    let now = Instant::now();
    for _ in 0..3 {
        press(&mut app, KeyCode::BackTab, now);
    }
    assert_eq!(app.section, Section::Notes);

    press(&mut app, KeyCode::Char('a'), now);
    assert!(matches!(app.mode, AppMode::EditNote { .. }));
    assert_eq!(app.notes.notes.len(), 1);

    type_text(&mut app, "buy milk", now);
    press(&mut app, KeyCode::Enter, now);

    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.notes.notes[0].text, "buy milk");
    assert_eq!(app.notes.editing(), None);
}

#[test]
fn test_note_mouse_drag_uses_grab_offset() {
    let mut app = new_app();
    let now = Instant::now();
    for _ in 0..3 {
        press(&mut app, KeyCode::BackTab, now);
    }

    press(&mut app, KeyCode::Char('a'), now);
    press(&mut app, KeyCode::Esc, now);
    let note = app.notes.notes[0].id;
    let (x, y) = (app.notes.notes[0].x, app.notes.notes[0].y);

    let area = Rect::new(1, 1, 60, 20);
    app.hits.notes_area = Some(area);
    app.hits.notes.push((
        note,
        Rect::new(area.x + x as u16, area.y + y as u16, 18, 4),
    ));

    // Grab one cell inside the note, then drag; the note keeps the same
    // offset under the pointer instead of snapping its corner to it.
    let grab = (area.x + x as u16 + 1, area.y + y as u16 + 1);
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), grab.0, grab.1), now);
    app.handle_event(
        mouse(MouseEventKind::Drag(MouseButton::Left), grab.0 + 5, grab.1 + 3),
        now,
    );
    app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), grab.0 + 5, grab.1 + 3), now);

    assert_eq!(app.notes.notes[0].x, x + 5);
    assert_eq!(app.notes.notes[0].y, y + 3);
    assert_eq!(app.notes.dragged(), None);
}

#[test]
fn test_player_url_dialog_extracts_video_id() {
    let mut app = new_app();
    let now = Instant::now();
    press(&mut app, KeyCode::BackTab, now);
    press(&mut app, KeyCode::BackTab, now);
    assert_eq!(app.section, Section::Music);

    press(&mut app, KeyCode::Char('u'), now);
    type_text(&mut app, "https://www.youtube.com/watch?v=dQw4w9WgXcQ", now);
    press(&mut app, KeyCode::Enter, now);

    assert_eq!(
        app.player.source(),
        Some(&Source::Video("dQw4w9WgXcQ".to_string()))
    );
    assert_eq!(app.player.status(), PlayerStatus::Stopped);

    press(&mut app, KeyCode::Char(' '), now);
    assert_eq!(app.player.status(), PlayerStatus::Playing);
}

#[test]
fn test_player_rejects_link_without_video_id() {
    let mut app = new_app();
    let now = Instant::now();
    press(&mut app, KeyCode::BackTab, now);
    press(&mut app, KeyCode::BackTab, now);

    press(&mut app, KeyCode::Char('u'), now);
    type_text(&mut app, "https://example.com/watch", now);
    press(&mut app, KeyCode::Enter, now);

    assert_eq!(app.player.source(), None);
    assert!(app.status.is_some());
}
