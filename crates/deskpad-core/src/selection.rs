//! Single-selection state for list-style widgets.

/// Tracks the selected index of a list, if any.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn get(&self) -> Option<usize> {
        self.selected
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Advance the selection, wrapping past the end of the list.
    pub fn next_wrapping(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1) % len,
            None => 0,
        });
    }

    /// Retreat the selection, wrapping past the start of the list.
    pub fn prev_wrapping(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(idx) => idx - 1,
        });
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Keep the selection inside a list that may have shrunk.
    pub fn clamp(&mut self, len: usize) {
        if let Some(idx) = self.selected {
            if len == 0 {
                self.selected = None;
            } else if idx >= len {
                self.selected = Some(len - 1);
            }
        }
    }
}
