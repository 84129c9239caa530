/// Selection and scroll state for a row or column of cards.
/// `visible` is how many cards fit, refreshed on every draw.
pub struct CardListState {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    pub visible: usize,
}

impl Default for CardListState {
    fn default() -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            visible: 5,
        }
    }
}

impl CardListState {
    /// Forget the selection after the underlying list was replaced
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
        self.scroll_offset = 0;
    }

    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_prev(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.visible.saturating_sub(1).max(1);
        let i = match self.selected {
            Some(i) => (i + jump).min(total - 1),
            None => jump.min(total - 1),
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_up(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.visible.saturating_sub(1).max(1);
        let i = match self.selected {
            Some(i) => i.saturating_sub(jump),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_first(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(0);
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(total - 1);
        self.ensure_visible(total - 1);
    }

    /// Set how many cards fit and keep the selection on screen
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        if let Some(i) = self.selected {
            self.ensure_visible(i);
        }
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible > 0 && index >= self.scroll_offset + self.visible {
            self.scroll_offset = index - self.visible + 1;
        }
    }
}
