use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Parent,
    Directory,
    File,
}

#[derive(Debug, Clone)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
}

/// State of the open file picker: the directory being listed, the cursor,
/// and every file marked so far (marks survive directory changes).
#[derive(Debug, Clone)]
pub struct PickerState {
    pub dir: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub index: usize,
    pub marked: Vec<PathBuf>,
    pub show_hidden: bool,
}

impl PickerState {
    pub fn new(dir: PathBuf, show_hidden: bool) -> Self {
        Self {
            dir,
            entries: Vec::new(),
            index: 0,
            marked: Vec::new(),
            show_hidden,
        }
    }

    pub fn selected(&self) -> Option<&PickerEntry> {
        self.entries.get(self.index)
    }

    pub fn is_marked(&self, path: &Path) -> bool {
        self.marked.iter().any(|p| p == path)
    }

    /// Mark or unmark a file. Marks keep the order they were made in.
    pub fn toggle_mark(&mut self, path: PathBuf) {
        if let Some(pos) = self.marked.iter().position(|p| *p == path) {
            self.marked.remove(pos);
        } else {
            self.marked.push(path);
        }
    }

    pub fn move_down(&mut self) {
        if !self.entries.is_empty() {
            self.index = (self.index + 1).min(self.entries.len() - 1);
        }
    }

    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_mark_keeps_order_and_unmarks() {
        let mut state = PickerState::new(PathBuf::from("."), false);
        state.toggle_mark(PathBuf::from("b.txt"));
        state.toggle_mark(PathBuf::from("a.txt"));
        assert_eq!(
            state.marked,
            vec![PathBuf::from("b.txt"), PathBuf::from("a.txt")]
        );

        state.toggle_mark(PathBuf::from("b.txt"));
        assert_eq!(state.marked, vec![PathBuf::from("a.txt")]);
        assert!(!state.is_marked(&PathBuf::from("b.txt")));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut state = PickerState::new(PathBuf::from("."), false);
        state.move_down();
        assert_eq!(state.index, 0);
        state.move_up();
        assert_eq!(state.index, 0);

        state.entries = vec![
            PickerEntry {
                name: "a".into(),
                path: PathBuf::from("a"),
                kind: EntryKind::File,
                size: 0,
            },
            PickerEntry {
                name: "b".into(),
                path: PathBuf::from("b"),
                kind: EntryKind::File,
                size: 0,
            },
        ];
        state.move_down();
        state.move_down();
        assert_eq!(state.index, 1);
        assert_eq!(state.selected().map(|e| e.name.as_str()), Some("b"));
    }
}
