//! Project board: columns, cards, the drag pointer, and the completion
//! animator.
//!
//! Every operation is total. Unknown ids and blank required fields are
//! silent no-ops, so callers never need to distinguish failure cases.

use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::card::{Card, CardId};
use crate::column::{Column, ColumnId};

/// Hard cap on board columns. The UI hides the add-column control at the
/// cap, but the store guards it as well.
pub const MAX_COLUMNS: usize = 3;

/// How long a completed card keeps its sliding-out marker.
pub const MOVE_ANIMATION: Duration = Duration::from_millis(600);

/// How long the celebration effect stays up after a completion.
pub const CELEBRATION_WINDOW: Duration = Duration::from_millis(1800);

#[derive(Debug)]
pub struct BoardState {
    pub columns: Vec<Column>,
    pub cards: Vec<Card>,
    /// The card currently being dragged, if any. At most one system-wide.
    dragged: Option<CardId>,
    /// Column completed cards land in.
    done_column: Option<ColumnId>,
    /// Per-card deadlines for clearing the `moving` marker. Deleting a
    /// card cancels its entry before the deadline fires.
    move_clears: HashMap<CardId, Instant>,
    /// Single rescheduled deadline for the celebration effect.
    celebration_until: Option<Instant>,
}

impl BoardState {
    /// A board with the three standard columns and one sample card.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let todo = board.push_column("To Do");
        board.push_column("In Progress");
        let done = board.push_column("Done");
        board.done_column = Some(done);
        board.cards.push(Card::new(
            todo,
            "Sample Task".to_string(),
            "This is a sample card.".to_string(),
        ));
        board
    }

    /// A board with no columns at all.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            cards: Vec::new(),
            dragged: None,
            done_column: None,
            move_clears: HashMap::new(),
            celebration_until: None,
        }
    }

    fn push_column(&mut self, name: &str) -> ColumnId {
        let column = Column::new(name.to_string());
        let id = column.id;
        self.columns.push(column);
        id
    }

    pub fn done_column(&self) -> Option<ColumnId> {
        self.done_column
    }

    pub fn set_done_column(&mut self, id: ColumnId) {
        if self.columns.iter().any(|c| c.id == id) {
            self.done_column = Some(id);
        }
    }

    // --- Card/column store -------------------------------------------------

    /// Append a column. Rejected when the name is blank or the board is at
    /// the column cap.
    pub fn add_column(&mut self, name: &str) -> Option<ColumnId> {
        let name = name.trim();
        if name.is_empty() || self.columns.len() >= MAX_COLUMNS {
            return None;
        }
        Some(self.push_column(name))
    }

    /// Append a card to a column. A blank title or unknown column rejects
    /// the card; a blank description is fine.
    pub fn add_card(&mut self, column_id: ColumnId, title: &str, description: &str) -> Option<CardId> {
        let title = title.trim();
        if title.is_empty() || !self.has_column(column_id) {
            return None;
        }
        let card = Card::new(column_id, title.to_string(), description.trim().to_string());
        let id = card.id;
        self.cards.push(card);
        Some(id)
    }

    /// Replace a card's title and description. The id and column are left
    /// untouched; a blank title keeps the old fields.
    pub fn edit_card(&mut self, id: CardId, title: &str, description: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
            card.title = title.to_string();
            card.description = description.trim().to_string();
        }
    }

    /// Remove a card. Idempotent, and cancels any animation or drag state
    /// still referencing it.
    pub fn delete_card(&mut self, id: CardId) {
        self.cards.retain(|c| c.id != id);
        self.move_clears.remove(&id);
        if self.dragged == Some(id) {
            self.dragged = None;
        }
    }

    /// Reassign a card to a column. No-op when either side is unknown.
    pub fn move_card(&mut self, id: CardId, target: ColumnId) {
        if !self.has_column(target) {
            return;
        }
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
            card.column_id = target;
        }
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn cards_in(&self, column_id: ColumnId) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.column_id == column_id)
    }

    fn has_column(&self, id: ColumnId) -> bool {
        self.columns.iter().any(|c| c.id == id)
    }

    // --- Drag-and-drop controller ------------------------------------------

    /// Mark a card as dragged. Starting a new drag implicitly cancels a
    /// stale one, so at most one card is ever marked dragging.
    pub fn begin_drag(&mut self, id: CardId) {
        if self.card(id).is_some() {
            self.dragged = Some(id);
        }
    }

    /// Resolve a drop onto a column: move the dragged card there and
    /// return to idle. A drop with no drag in flight is a no-op.
    pub fn drop_on(&mut self, column_id: ColumnId) {
        if let Some(id) = self.dragged.take() {
            self.move_card(id, column_id);
        }
    }

    /// Drag ended without a drop target. No mutation.
    pub fn cancel_drag(&mut self) {
        self.dragged = None;
    }

    pub fn dragged(&self) -> Option<CardId> {
        self.dragged
    }

    // --- Completion animator -----------------------------------------------

    /// Complete a card: move it to Done immediately, flag it as sliding
    /// out for [`MOVE_ANIMATION`], and restart the celebration window.
    ///
    /// The card is logically in Done before the animation finishes; the
    /// flag clear is scheduled per card and a repeat completion merely
    /// reschedules it. The celebration deadline is single: completing a
    /// second card inside the window restarts it rather than stacking.
    pub fn complete_card(&mut self, id: CardId, now: Instant) {
        let Some(done) = self.done_column else {
            return;
        };
        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            return;
        };
        card.column_id = done;
        card.moving = true;
        self.move_clears.insert(id, now + MOVE_ANIMATION);
        self.celebration_until = Some(now + CELEBRATION_WINDOW);
    }

    /// Expire due animation deadlines. Safe to call at any cadence;
    /// clearing a deadline for a deleted card is impossible because
    /// deletion cancels the entry first.
    pub fn tick(&mut self, now: Instant) {
        let due: Vec<CardId> = self
            .move_clears
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in due {
            self.move_clears.remove(&id);
            if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
                card.moving = false;
            }
        }
        if let Some(deadline) = self.celebration_until {
            if deadline <= now {
                self.celebration_until = None;
            }
        }
    }

    pub fn celebrating(&self) -> bool {
        self.celebration_until.is_some()
    }

    #[cfg(test)]
    fn pending_move_clears(&self) -> usize {
        self.move_clears.len()
    }

    // --- Export ------------------------------------------------------------

    /// Snapshot the durable board state as pretty JSON. Transient drag and
    /// animation markers are not part of the snapshot.
    pub fn export_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct BoardExport<'a> {
            columns: &'a [Column],
            cards: &'a [Card],
        }
        serde_json::to_string_pretty(&BoardExport {
            columns: &self.columns,
            cards: &self.cards,
        })
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
