pub mod board;
pub mod card;
pub mod column;
pub mod notes;
pub mod player;
pub mod sketch;
pub mod timer;
pub mod workpad;

pub use board::{BoardState, CELEBRATION_WINDOW, MAX_COLUMNS, MOVE_ANIMATION};
pub use card::{Card, CardId};
pub use column::{Column, ColumnId};
pub use notes::{Note, NoteBoard, NoteColor, NoteId, NOTE_PALETTE};
pub use player::{Player, PlayerStatus, Source};
pub use sketch::{SketchColor, SketchEdge, SketchNode, SketchPad, NODE_PALETTE};
pub use timer::{format_hms, parse_hms, TimerMachine, TimerMode};
pub use workpad::{FontSize, Language, PadMode, Workpad};
