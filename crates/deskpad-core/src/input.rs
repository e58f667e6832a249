/// Single-line text input buffer with a character-based cursor.
///
/// The cursor counts characters, not bytes, so arrow movement behaves
/// sensibly for multi-byte input.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    chars: Vec<char>,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }

    /// Drain the buffer, returning its contents with surrounding
    /// whitespace trimmed.
    pub fn take_trimmed(&mut self) -> String {
        let text: String = self.chars.drain(..).collect();
        self.cursor = 0;
        text.trim().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True when the buffer contains nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.chars.iter().all(|c| c.is_whitespace())
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let input = InputState::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_insert_and_cursor() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('c');
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = InputState::new();
        input.set("abc");
        input.backspace();
        assert_eq!(input.text(), "ab");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "b");
        // Delete at end is a no-op
        input.move_end();
        input.delete();
        assert_eq!(input.text(), "b");
    }

    #[test]
    fn test_multibyte_cursor() {
        let mut input = InputState::new();
        input.insert_char('é');
        input.insert_char('ü');
        input.move_left();
        input.backspace();
        assert_eq!(input.text(), "ü");
    }

    #[test]
    fn test_take_trimmed() {
        let mut input = InputState::new();
        input.set("  hello  ");
        assert!(!input.is_blank());
        assert_eq!(input.take_trimmed(), "hello");
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_is_blank() {
        let mut input = InputState::new();
        assert!(input.is_blank());
        input.set("   ");
        assert!(input.is_blank());
        input.insert_char('x');
        assert!(!input.is_blank());
    }
}
