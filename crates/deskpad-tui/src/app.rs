use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use deskpad_core::{AppConfig, DeskResult, InputState, SelectionState};
use deskpad_domain::{
    board::BoardState,
    card::CardId,
    column::ColumnId,
    notes::{NoteBoard, NoteId},
    player::Player,
    sketch::{NodeId, SketchPad},
    timer::TimerMachine,
    workpad::Workpad,
};

use crate::events::{Event, EventHandler};
use crate::{handlers, ui};

/// Top-level navigation tabs. Exactly one section is mounted at a time
/// and each owns its state independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Projects,
    Editor,
    Diagrams,
    Timer,
    Todo,
    Calendar,
    Notes,
    Music,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Projects,
        Section::Editor,
        Section::Diagrams,
        Section::Timer,
        Section::Todo,
        Section::Calendar,
        Section::Notes,
        Section::Music,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Projects => "Projects",
            Section::Editor => "Editor",
            Section::Diagrams => "Diagrams",
            Section::Timer => "Timer",
            Section::Todo => "Todo",
            Section::Calendar => "Calendar",
            Section::Notes => "Notes",
            Section::Music => "Music",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn from_name(name: &str) -> Option<Section> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.label().eq_ignore_ascii_case(name))
    }
}

/// Input mode. `Normal` routes keys to the mounted section; the other
/// variants are text-input popups owned by one widget each.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    AddColumn,
    AddCardTitle { column: ColumnId },
    AddCardDescription { column: ColumnId, title: String },
    EditCardTitle { card: CardId },
    EditCardDescription { card: CardId, title: String },
    ExportBoard,
    EditNote { note: NoteId },
    EditCountdown,
    EditNodeLabel { node: NodeId },
    PlayerFile,
    PlayerUrl,
}

/// Screen regions recorded during the last draw, used to resolve mouse
/// positions back to entities.
#[derive(Debug, Default)]
pub struct HitMap {
    pub columns: Vec<(ColumnId, Rect)>,
    pub cards: Vec<(CardId, Rect)>,
    pub notes: Vec<(NoteId, Rect)>,
    pub notes_area: Option<Rect>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.columns.clear();
        self.cards.clear();
        self.notes.clear();
        self.notes_area = None;
    }

    pub fn column_at(&self, x: u16, y: u16) -> Option<ColumnId> {
        hit(&self.columns, x, y)
    }

    pub fn card_at(&self, x: u16, y: u16) -> Option<CardId> {
        hit(&self.cards, x, y)
    }

    pub fn note_at(&self, x: u16, y: u16) -> Option<NoteId> {
        // Later notes render on top, so scan back to front.
        self.notes
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains((x, y).into()))
            .map(|(id, _)| *id)
    }
}

fn hit<T: Copy>(zones: &[(T, Rect)], x: u16, y: u16) -> Option<T> {
    zones
        .iter()
        .find(|(_, rect)| rect.contains((x, y).into()))
        .map(|(id, _)| *id)
}

pub struct App {
    pub should_quit: bool,
    pub section: Section,
    pub mode: AppMode,
    pub input: InputState,
    pub status: Option<String>,

    pub board: BoardState,
    pub column_cursor: usize,
    pub card_cursor: SelectionState,

    pub timer: TimerMachine,
    pub countdown_input: InputState,

    pub notes: NoteBoard,
    pub note_cursor: SelectionState,

    pub workpad: Workpad,

    pub sketch: SketchPad,
    pub node_cursor: SelectionState,
    pub pending_connect: Option<NodeId>,

    pub player: Player,

    pub hits: HitMap,
    last_widget_tick: Instant,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut countdown_input = InputState::new();
        countdown_input.set(config.effective_default_countdown());
        let section =
            Section::from_name(config.effective_start_section()).unwrap_or(Section::Editor);
        Self {
            should_quit: false,
            section,
            mode: AppMode::Normal,
            input: InputState::new(),
            status: None,
            board: BoardState::new(),
            column_cursor: 0,
            card_cursor: SelectionState::new(),
            timer: TimerMachine::new(),
            countdown_input,
            notes: NoteBoard::new(),
            note_cursor: SelectionState::new(),
            workpad: Workpad::new(),
            sketch: SketchPad::new(),
            node_cursor: SelectionState::new(),
            pending_connect: None,
            player: Player::new(),
            hits: HitMap::default(),
            last_widget_tick: Instant::now(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply one event. All state mutation funnels through here, so an
    /// event is fully processed before the next one is looked at.
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        self.advance_time(now);
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => handlers::mouse::handle(self, mouse),
            Event::Tick => {}
        }
    }

    /// Run animation deadlines and the shared 1-second widget cadence up
    /// to `now`.
    fn advance_time(&mut self, now: Instant) {
        self.board.tick(now);
        while now.duration_since(self.last_widget_tick) >= Duration::from_secs(1) {
            self.last_widget_tick += Duration::from_secs(1);
            self.timer.tick();
            self.player.tick();
        }
    }

    fn handle_key(&mut self, key: crossterm::event::KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match self.mode.clone() {
            AppMode::Normal => self.handle_normal_key(key, now),
            AppMode::AddColumn
            | AppMode::AddCardTitle { .. }
            | AppMode::AddCardDescription { .. }
            | AppMode::EditCardTitle { .. }
            | AppMode::EditCardDescription { .. }
            | AppMode::ExportBoard => handlers::board::handle_dialog(self, key),
            AppMode::EditNote { .. } => handlers::notes::handle_dialog(self, key),
            AppMode::EditCountdown => handlers::timer::handle_dialog(self, key),
            AppMode::EditNodeLabel { .. } => handlers::sketch::handle_dialog(self, key),
            AppMode::PlayerFile | AppMode::PlayerUrl => handlers::player::handle_dialog(self, key),
        }
    }

    fn handle_normal_key(&mut self, key: crossterm::event::KeyEvent, now: Instant) {
        self.status = None;

        // Navigation shell: Tab cycles sections everywhere. The editor
        // section consumes plain characters, so 'q' only quits outside it.
        match key.code {
            KeyCode::Tab => {
                self.section = self.section.next();
                return;
            }
            KeyCode::BackTab => {
                self.section = self.section.prev();
                return;
            }
            KeyCode::Char('q') if self.section != Section::Editor => {
                self.quit();
                return;
            }
            _ => {}
        }

        match self.section {
            Section::Projects => handlers::board::handle_key(self, key, now),
            Section::Editor => handlers::workpad::handle_key(self, key),
            Section::Diagrams => handlers::sketch::handle_key(self, key),
            Section::Timer => handlers::timer::handle_key(self, key),
            Section::Notes => handlers::notes::handle_key(self, key),
            Section::Music => handlers::player::handle_key(self, key),
            Section::Todo | Section::Calendar => {}
        }
    }

    pub async fn run(&mut self) -> DeskResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                self.handle_event(event, Instant::now());
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}
