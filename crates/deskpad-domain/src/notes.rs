//! Sticky notes: freely positioned, colored text annotations.
//!
//! The store owns two global pointers, one for the note being edited and
//! one for the note being dragged. Both are reset on every terminal
//! edit/drag event so at most one note is ever in either state.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type NoteId = Uuid;

/// The fixed 7-color sticky note palette.
pub const NOTE_PALETTE: [NoteColor; 7] = [
    NoteColor::Yellow,
    NoteColor::Green,
    NoteColor::Blue,
    NoteColor::Red,
    NoteColor::Purple,
    NoteColor::Orange,
    NoteColor::Pink,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteColor {
    Yellow,
    Green,
    Blue,
    Red,
    Purple,
    Orange,
    Pink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: NoteColor,
}

/// Grab offset captured at drag start, so the note follows the pointer
/// without snapping its corner to it.
#[derive(Debug, Clone, Copy)]
struct NoteDrag {
    id: NoteId,
    grab_x: i32,
    grab_y: i32,
}

// Spawn window for new notes, in cells.
const SPAWN_X: i32 = 4;
const SPAWN_Y: i32 = 2;
const SPAWN_SPREAD_X: i32 = 24;
const SPAWN_SPREAD_Y: i32 = 10;

#[derive(Debug, Default)]
pub struct NoteBoard {
    pub notes: Vec<Note>,
    editing: Option<NoteId>,
    drag: Option<NoteDrag>,
}

impl NoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty note at a randomized position with a random
    /// palette color, and enter edit mode on it immediately.
    pub fn add_note(&mut self, rng: &mut impl Rng) -> NoteId {
        let note = Note {
            id: Uuid::new_v4(),
            text: String::new(),
            x: SPAWN_X + rng.gen_range(0..SPAWN_SPREAD_X),
            y: SPAWN_Y + rng.gen_range(0..SPAWN_SPREAD_Y),
            color: NOTE_PALETTE[rng.gen_range(0..NOTE_PALETTE.len())],
        };
        let id = note.id;
        self.notes.push(note);
        self.editing = Some(id);
        id
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn start_edit(&mut self, id: NoteId) {
        if self.note(id).is_some() {
            self.editing = Some(id);
        }
    }

    pub fn save_edit(&mut self, id: NoteId, text: &str) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.text = text.to_string();
        }
        self.editing = None;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<NoteId> {
        self.editing
    }

    /// Remove a note. Idempotent; clears the editing pointer and any drag
    /// state still referencing it.
    pub fn delete_note(&mut self, id: NoteId) {
        self.notes.retain(|n| n.id != id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        if self.drag.map(|d| d.id) == Some(id) {
            self.drag = None;
        }
    }

    /// Absolute repositioning, unconstrained.
    pub fn move_note(&mut self, id: NoteId, x: i32, y: i32) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.x = x;
            note.y = y;
        }
    }

    /// Begin dragging a note, capturing the pointer's offset from the
    /// note origin. A new drag replaces any stale one.
    pub fn begin_drag(&mut self, id: NoteId, pointer_x: i32, pointer_y: i32) {
        if let Some(note) = self.note(id) {
            self.drag = Some(NoteDrag {
                id,
                grab_x: pointer_x - note.x,
                grab_y: pointer_y - note.y,
            });
        }
    }

    /// Follow the pointer, applying the captured grab offset.
    pub fn drag_to(&mut self, pointer_x: i32, pointer_y: i32) {
        if let Some(drag) = self.drag {
            self.move_note(drag.id, pointer_x - drag.grab_x, pointer_y - drag.grab_y);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn dragged(&self) -> Option<NoteId> {
        self.drag.map(|d| d.id)
    }
}
