/// Search input state for the TUI.
/// `cursor_pos` is a byte offset that always sits on a char boundary.
pub struct SearchState {
    pub query: String,
    pub cursor_pos: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            cursor_pos: 0,
        }
    }
}

impl SearchState {
    /// Replace the whole text and move the cursor to the end
    pub fn set_text(&mut self, text: &str) {
        self.query = text.to_string();
        self.cursor_pos = self.query.len();
    }

    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Remove the char before the cursor. Returns true if the text changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.query.remove(prev);
        self.cursor_pos = prev;
        true
    }

    /// Remove the char under the cursor. Returns true if the text changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor_pos >= self.query.len() {
            return false;
        }
        self.query.remove(self.cursor_pos);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        if self.cursor_pos < self.query.len() {
            self.cursor_pos = self.query[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.query.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.query.len();
    }

    /// Display width of the text before the cursor
    pub fn cursor_column(&self) -> usize {
        unicode_width::UnicodeWidthStr::width(&self.query[..self.cursor_pos])
    }

    fn prev_boundary(&self) -> usize {
        self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_respects_char_boundaries() {
        let mut search = SearchState::default();
        for c in "Só".chars() {
            search.insert(c);
        }
        assert_eq!(search.cursor_pos, "Só".len());

        search.move_left();
        assert_eq!(search.cursor_pos, 1);
        assert!(search.delete());
        assert_eq!(search.query, "S");

        search.move_end();
        search.insert('n');
        assert!(search.backspace());
        assert!(search.backspace());
        assert!(!search.backspace());
        assert_eq!(search.query, "");
    }

    #[test]
    fn set_text_moves_cursor_to_end() {
        let mut search = SearchState::default();
        search.set_text("Sony");
        assert_eq!(search.cursor_pos, 4);
        search.move_home();
        search.move_right();
        assert_eq!(search.cursor_pos, 1);
        assert_eq!(search.cursor_column(), 1);
    }
}
