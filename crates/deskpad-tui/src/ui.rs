use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use deskpad_domain::{format_hms, PadMode, PlayerStatus, Source, TimerMode};

use crate::app::{App, AppMode, Section};
use crate::components::render_input_popup;
use crate::theme::{
    active_tab, celebration_text, dragged_border, focused_border, highlight_text, label_text,
    moving_text, normal_text, note_color, selected_item, sketch_color, unfocused_border,
};

pub fn render(app: &mut App, frame: &mut Frame) {
    app.hits.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(app, frame, chunks[0]);

    match app.section {
        Section::Projects => render_board(app, frame, chunks[1]),
        Section::Editor => render_workpad(app, frame, chunks[1]),
        Section::Diagrams => render_sketch(app, frame, chunks[1]),
        Section::Timer => render_timer(app, frame, chunks[1]),
        Section::Notes => render_notes(app, frame, chunks[1]),
        Section::Music => render_player(app, frame, chunks[1]),
        Section::Todo => render_placeholder(frame, chunks[1], "Todo"),
        Section::Calendar => render_placeholder(frame, chunks[1], "Calendar"),
    }

    render_footer(app, frame, chunks[2]);
    render_popup(app, frame);
}

fn render_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = Section::ALL.iter().map(|s| Line::from(s.label())).collect();
    let tabs = Tabs::new(titles)
        .select(app.section.index())
        .highlight_style(active_tab())
        .block(Block::default().borders(Borders::ALL).title("deskpad"));
    frame.render_widget(tabs, area);
}

fn render_board(app: &mut App, frame: &mut Frame, area: Rect) {
    let columns: Vec<_> = app
        .board
        .columns
        .iter()
        .map(|c| (c.id, c.name.clone()))
        .collect();
    if columns.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = columns
        .iter()
        .map(|_| Constraint::Ratio(1, columns.len() as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let dragged = app.board.dragged();
    let done = app.board.done_column();
    let celebrating = app.board.celebrating();

    for (idx, (column_id, name)) in columns.iter().enumerate() {
        let slot = slots[idx];
        app.hits.columns.push((*column_id, slot));

        let focused = idx == app.column_cursor;
        let border = if focused {
            focused_border()
        } else {
            unfocused_border()
        };
        let count = app.board.cards_in(*column_id).count();
        let block = Block::default()
            .title(format!("{name} ({count})"))
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(slot);
        frame.render_widget(block, slot);

        let cards: Vec<_> = app
            .board
            .cards_in(*column_id)
            .map(|c| (c.id, c.title.clone(), c.description.clone(), c.moving))
            .collect();

        let mut y = inner.y;
        for (pos, (card_id, title, description, moving)) in cards.iter().enumerate() {
            if y + 3 > inner.y + inner.height {
                break;
            }
            let rect = Rect::new(inner.x, y, inner.width, 3);
            app.hits.cards.push((*card_id, rect));

            let selected = focused && app.card_cursor.get() == Some(pos);
            let card_border = if dragged == Some(*card_id) {
                dragged_border()
            } else if selected {
                focused_border()
            } else {
                unfocused_border()
            };
            let text_style = if *moving { moving_text() } else { normal_text() };

            let body = Line::from(Span::styled(description.clone(), label_text()));
            let card = Paragraph::new(body)
                .style(selected_item(selected))
                .block(
                    Block::default()
                        .title(Span::styled(title.clone(), text_style))
                        .borders(Borders::ALL)
                        .border_style(card_border),
                );
            frame.render_widget(card, rect);
            y += 3;
        }

        if celebrating && done == Some(*column_id) && inner.height > 0 {
            let banner = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
            frame.render_widget(Clear, banner);
            frame.render_widget(
                Paragraph::new("* task complete *")
                    .style(celebration_text())
                    .alignment(Alignment::Center),
                banner,
            );
        }
    }
}

fn render_timer(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title("Timer")
        .borders(Borders::ALL)
        .border_style(focused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mode_label = match app.timer.mode() {
        TimerMode::Timer { .. } => "Timer",
        TimerMode::Countdown { .. } => "Countdown",
        TimerMode::Clock => "Clock",
    };
    let running = if app.timer.is_running() {
        Span::styled("running", highlight_text())
    } else {
        Span::styled("paused", label_text())
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.timer.display(Local::now()),
            highlight_text(),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled("mode: ", label_text()),
            Span::raw(mode_label),
            Span::raw("  "),
            running,
        ])
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled("countdown: ", label_text()),
            Span::raw(app.countdown_input.text()),
        ])
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_notes(app: &mut App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!("Notes ({})", app.notes.notes.len()))
        .borders(Borders::ALL)
        .border_style(focused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.hits.notes_area = Some(inner);

    let selected = app
        .note_cursor
        .get()
        .and_then(|idx| app.notes.notes.get(idx))
        .map(|n| n.id);

    let notes: Vec<_> = app
        .notes
        .notes
        .iter()
        .map(|n| (n.id, n.text.clone(), n.x, n.y, n.color))
        .collect();

    for (id, text, x, y, color) in notes {
        let nx = inner.x as i32 + x;
        let ny = inner.y as i32 + y;
        if nx >= (inner.x + inner.width) as i32 || ny >= (inner.y + inner.height) as i32 {
            continue;
        }
        let rect = Rect::new(nx.max(inner.x as i32) as u16, ny.max(inner.y as i32) as u16, 18, 4)
            .intersection(inner);
        if rect.width < 3 || rect.height < 2 {
            continue;
        }
        app.hits.notes.push((id, rect));

        frame.render_widget(Clear, rect);
        let border = if selected == Some(id) {
            focused_border()
        } else {
            ratatui::style::Style::default().fg(note_color(color))
        };
        let note = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(note, rect);
    }
}

fn render_workpad(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let header = match app.workpad.mode {
        PadMode::Code => Line::from(vec![
            Span::styled("code ", highlight_text()),
            Span::styled("lang: ", label_text()),
            Span::raw(app.workpad.language().label()),
            Span::styled("  font: ", label_text()),
            Span::raw(app.workpad.font_size.label()),
        ]),
        PadMode::Text => Line::from(vec![
            Span::styled("text ", highlight_text()),
            Span::styled("page: ", label_text()),
            Span::raw(format!(
                "{}/{}",
                app.workpad.current_page() + 1,
                app.workpad.page_count()
            )),
            Span::styled("  font: ", label_text()),
            Span::raw(app.workpad.font_size.label()),
        ]),
    };
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let (title, body) = match app.workpad.mode {
        PadMode::Code => (
            format!("main.{}", app.workpad.language().extension()),
            app.workpad.code.clone(),
        ),
        PadMode::Text => (
            format!("page {}", app.workpad.current_page() + 1),
            app.workpad.page_text().to_string(),
        ),
    };
    let pad = Paragraph::new(body).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(focused_border()),
    );
    frame.render_widget(pad, chunks[1]);
}

fn render_sketch(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(area);

    let canvas_block = Block::default()
        .title("Diagram")
        .borders(Borders::ALL)
        .border_style(focused_border());
    let canvas = canvas_block.inner(chunks[0]);
    frame.render_widget(canvas_block, chunks[0]);

    let selected = app
        .node_cursor
        .get()
        .and_then(|idx| app.sketch.nodes.get(idx))
        .map(|n| n.id);

    for node in &app.sketch.nodes {
        let nx = canvas.x as i32 + node.x;
        let ny = canvas.y as i32 + node.y;
        if nx >= (canvas.x + canvas.width) as i32 || ny >= (canvas.y + canvas.height) as i32 {
            continue;
        }
        let width = (node.label.chars().count() as u16 + 4).max(8);
        let rect = Rect::new(
            nx.max(canvas.x as i32) as u16,
            ny.max(canvas.y as i32) as u16,
            width,
            3,
        )
        .intersection(canvas);
        if rect.width < 3 || rect.height < 2 {
            continue;
        }

        let border = if selected == Some(node.id) {
            focused_border()
        } else if app.pending_connect == Some(node.id) {
            dragged_border()
        } else {
            ratatui::style::Style::default().fg(sketch_color(node.color))
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(node.label.clone())
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(border)),
            rect,
        );
    }

    let label_of = |id| {
        app.sketch
            .node(id)
            .map(|n| n.label.clone())
            .unwrap_or_default()
    };
    let mut lines: Vec<Line> = app
        .sketch
        .edges
        .iter()
        .map(|e| Line::from(format!("{} -> {}", label_of(e.source), label_of(e.target))))
        .collect();
    if let Some(pending) = app.pending_connect {
        lines.push(Line::from(Span::styled(
            format!("connecting {}...", label_of(pending)),
            highlight_text(),
        )));
    }
    let edges = Paragraph::new(lines).block(
        Block::default()
            .title(format!("Edges ({})", app.sketch.edges.len()))
            .borders(Borders::ALL)
            .border_style(unfocused_border()),
    );
    frame.render_widget(edges, chunks[1]);
}

fn render_player(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title("Music")
        .borders(Borders::ALL)
        .border_style(focused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = match app.player.status() {
        PlayerStatus::Playing => Span::styled("playing", highlight_text()),
        PlayerStatus::Paused => Span::styled("paused", normal_text()),
        PlayerStatus::Stopped => Span::styled("stopped", label_text()),
    };
    let source = match app.player.source() {
        Some(Source::File(path)) => path.display().to_string(),
        Some(Source::Video(id)) => format!("video {id}"),
        None => "nothing loaded".to_string(),
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![Span::styled("source: ", label_text()), Span::raw(source)])
            .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            status,
            Span::raw("  "),
            Span::raw(format_hms(app.player.position_ms())),
        ])
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_placeholder(frame: &mut Frame, area: Rect, name: &str) {
    let block = Block::default()
        .title(name)
        .borders(Borders::ALL)
        .border_style(unfocused_border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("{name} is coming soon"), label_text()))
            .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let text = if let Some(status) = &app.status {
        Line::from(Span::styled(status.clone(), highlight_text()))
    } else {
        let hints = match app.section {
            Section::Projects => {
                "h/l column | j/k card | n new | N column | e edit | d delete | m/Enter move | Space complete | x export"
            }
            Section::Editor => {
                "type to edit | ^T mode | ^L language | ^N page | PgUp/PgDn | ^F font | ^E export"
            }
            Section::Diagrams => "a add | e edit | c color | C connect | d delete | arrows move | x export",
            Section::Timer => "m mode | s start/pause | r reset | i set countdown",
            Section::Notes => "a add | e edit | d delete | arrows move | drag with mouse",
            Section::Music => "f file | u url | Space play/pause | s stop",
            Section::Todo | Section::Calendar => "Tab next section",
        };
        Line::from(Span::styled(hints, label_text()))
    };
    frame.render_widget(Paragraph::new(text), area);
}

fn render_popup(app: &App, frame: &mut Frame) {
    match &app.mode {
        AppMode::Normal => {}
        AppMode::AddColumn => {
            render_input_popup(frame, "New Column", "Column name", &app.input);
        }
        AppMode::AddCardTitle { .. } => {
            render_input_popup(frame, "New Card", "Title", &app.input);
        }
        AppMode::AddCardDescription { .. } => {
            render_input_popup(frame, "New Card", "Description (optional)", &app.input);
        }
        AppMode::EditCardTitle { .. } => {
            render_input_popup(frame, "Edit Card", "Title", &app.input);
        }
        AppMode::EditCardDescription { .. } => {
            render_input_popup(frame, "Edit Card", "Description (optional)", &app.input);
        }
        AppMode::ExportBoard => {
            render_input_popup(frame, "Export Board", "File name", &app.input);
        }
        AppMode::EditNote { .. } => {
            render_input_popup(frame, "Edit Note", "Text", &app.input);
        }
        AppMode::EditCountdown => {
            render_input_popup(frame, "Countdown", "HH:MM:SS", &app.countdown_input);
        }
        AppMode::EditNodeLabel { .. } => {
            render_input_popup(frame, "Edit Node", "Label", &app.input);
        }
        AppMode::PlayerFile => {
            render_input_popup(frame, "Open File", "Path", &app.input);
        }
        AppMode::PlayerUrl => {
            render_input_popup(frame, "Open Link", "URL", &app.input);
        }
    }
}
