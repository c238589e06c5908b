/// The two display fields a render writes to. Kept as a trait so the
/// selection logic can run against anything, not only the terminal UI.
pub trait Display {
    fn set_file_name(&mut self, name: &str);
    fn set_contents(&mut self, contents: &str);
}

/// In-memory display fields drawn by the content pane.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DisplayState {
    pub file_name: String,
    pub contents: String,
    /// `contents` split for drawing.
    pub lines: Vec<String>,
    pub scroll: usize,
    /// Rows the content pane shows; scrolling stops once the last line is visible.
    pub viewport: usize,
}

impl Display for DisplayState {
    fn set_file_name(&mut self, name: &str) {
        self.file_name = name.to_string();
    }

    fn set_contents(&mut self, contents: &str) {
        self.contents = contents.to_string();
        self.lines = contents.lines().map(|l| l.to_string()).collect();
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

impl DisplayState {
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport.max(1))
    }

    pub fn scroll_down(&mut self) {
        if self.scroll < self.max_scroll() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll = self.max_scroll();
    }
}
