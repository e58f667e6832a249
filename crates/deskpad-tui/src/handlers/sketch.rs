use crossterm::event::{KeyCode, KeyEvent};

use deskpad_domain::sketch::NodeId;
use deskpad_domain::NODE_PALETTE;

use crate::app::{App, AppMode};
use crate::dialog::{handle_dialog_input, DialogAction};

pub fn selected_node(app: &App) -> Option<NodeId> {
    let idx = app.node_cursor.get()?;
    app.sketch.nodes.get(idx).map(|n| n.id)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') => {
            app.sketch.add_node(&mut rand::thread_rng());
            app.node_cursor.set(Some(app.sketch.nodes.len() - 1));
        }
        KeyCode::Char('j') => app.node_cursor.next_wrapping(app.sketch.nodes.len()),
        KeyCode::Char('k') => app.node_cursor.prev_wrapping(app.sketch.nodes.len()),
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = selected_node(app) {
                let label = app
                    .sketch
                    .node(id)
                    .map(|n| n.label.clone())
                    .unwrap_or_default();
                app.input.set(&label);
                app.mode = AppMode::EditNodeLabel { node: id };
            }
        }
        KeyCode::Char('c') => {
            // Cycle the selected node through the fill palette.
            if let Some(id) = selected_node(app) {
                if let Some(node) = app.sketch.node(id) {
                    let current = NODE_PALETTE
                        .iter()
                        .position(|c| *c == node.color)
                        .unwrap_or(0);
                    let next = NODE_PALETTE[(current + 1) % NODE_PALETTE.len()];
                    let label = node.label.clone();
                    app.sketch.update_node(id, &label, next);
                }
            }
        }
        KeyCode::Char('C') => {
            // First press marks the edge source, second press connects.
            if let Some(id) = selected_node(app) {
                match app.pending_connect.take() {
                    Some(source) => app.sketch.connect(source, id),
                    None => app.pending_connect = Some(id),
                }
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = selected_node(app) {
                app.sketch.delete_node(id);
                if app.pending_connect == Some(id) {
                    app.pending_connect = None;
                }
                app.node_cursor.clamp(app.sketch.nodes.len());
            }
        }
        KeyCode::Char('x') => match app.sketch.export_json(std::path::Path::new("diagram.json")) {
            Ok(()) => app.status = Some("Exported diagram to diagram.json".to_string()),
            Err(e) => {
                app.status = Some(format!("Export failed: {}", e));
                tracing::error!("Failed to export diagram: {}", e);
            }
        },
        KeyCode::Left => nudge(app, -2, 0),
        KeyCode::Right => nudge(app, 2, 0),
        KeyCode::Up => nudge(app, 0, -1),
        KeyCode::Down => nudge(app, 0, 1),
        KeyCode::Esc => app.pending_connect = None,
        _ => {}
    }
}

fn nudge(app: &mut App, dx: i32, dy: i32) {
    if let Some(id) = selected_node(app) {
        if let Some(node) = app.sketch.node(id) {
            let (x, y) = (node.x + dx, node.y + dy);
            app.sketch.move_node(id, x, y);
        }
    }
}

pub fn handle_dialog(app: &mut App, key: KeyEvent) {
    let AppMode::EditNodeLabel { node } = app.mode.clone() else {
        return;
    };
    match handle_dialog_input(&mut app.input, key.code, true) {
        DialogAction::Confirm => {
            let label = app.input.take_trimmed();
            let color = app
                .sketch
                .node(node)
                .map(|n| n.color)
                .unwrap_or(NODE_PALETTE[0]);
            app.sketch.update_node(node, &label, color);
            app.mode = AppMode::Normal;
        }
        DialogAction::Cancel => {
            app.input.clear();
            app.mode = AppMode::Normal;
        }
        DialogAction::None => {}
    }
}
