use std::path::{Path, PathBuf};
use std::sync::mpsc;

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::config::ProjectConfig;
use crate::data::{picker, reader};
use crate::display::DisplayState;
use crate::event::AppEvent;
use crate::manager::{FileListManager, SortMode};
use crate::model::picker::{EntryKind, PickerState};
use crate::model::selection::{ReadCompletion, ReadRequest, ScrollTo, SelectedFile};
use crate::renderer::ReadApplied;
use crate::ui;
use crate::watcher::{self, FileWatcher};

#[derive(Debug, Clone, PartialEq)]
pub enum Pane {
    Files,
    Content,
}

pub struct App {
    pub should_quit: bool,
    pub show_help: bool,
    pub dirty: bool,

    pub project_cwd: PathBuf,
    pub config: ProjectConfig,

    pub manager: FileListManager,
    pub display: DisplayState,
    pub pane: Pane,

    /// Open file picker, if any.
    pub picker: Option<PickerState>,

    pub last_error: Option<String>,
    pub loaded_at: Option<DateTime<Local>>,

    /// Reads run in the background when set; otherwise inline.
    pub event_tx: Option<mpsc::Sender<AppEvent>>,
    pub watcher: Option<FileWatcher>,
}

impl App {
    pub fn new(project_cwd: PathBuf, config: ProjectConfig, sort_mode: SortMode) -> Self {
        Self {
            should_quit: false,
            show_help: false,
            dirty: true,
            project_cwd,
            config,
            manager: FileListManager::new(sort_mode),
            display: DisplayState::default(),
            pane: Pane::Files,
            picker: None,
            last_error: None,
            loaded_at: None,
            event_tx: None,
            watcher: None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Track the terminal height so content scrolling matches what is drawn.
    pub fn resize(&mut self, height: u16) {
        self.display.set_viewport(ui::layout::content_rows(height));
    }

    // --- Selection ---

    /// Handle a selection event: replace the file list and show its first file.
    pub fn load_selection(&mut self, files: Vec<SelectedFile>) {
        let req = self.manager.load_selection(files, &mut self.display);
        self.display.scroll = 0;
        if self.manager.is_empty() {
            self.loaded_at = None;
        }
        self.start_read(req);
    }

    /// Resolve paths against the project dir and load them as a selection.
    pub fn load_paths(&mut self, paths: &[PathBuf]) {
        let files = paths
            .iter()
            .map(|p| SelectedFile::from_path(self.project_cwd.join(p)))
            .collect();
        self.load_selection(files);
    }

    pub fn next_file(&mut self) {
        let req = self.manager.next(&mut self.display);
        self.start_read(req);
    }

    pub fn prev_file(&mut self) {
        let req = self.manager.prev(&mut self.display);
        self.start_read(req);
    }

    pub fn reload_current(&mut self) {
        let req = self.manager.reload_current(&mut self.display);
        self.start_read(req);
    }

    fn start_read(&mut self, req: Option<ReadRequest>) {
        if let Some(ref mut w) = self.watcher {
            w.follow(self.manager.current().map(|f| f.path.as_path()));
        }

        let req = match req {
            Some(req) => req,
            None => return,
        };

        match self.event_tx {
            Some(ref tx) => reader::spawn_read(req, tx.clone()),
            None => {
                let completion = reader::read_now(req);
                self.handle_read_complete(completion);
            }
        }
    }

    pub fn handle_read_complete(&mut self, completion: ReadCompletion) {
        let name = completion.file.name.clone();
        match self.manager.complete_read(completion, &mut self.display) {
            ReadApplied::Shown(scroll) => {
                match scroll {
                    ScrollTo::Top => self.display.scroll = 0,
                    ScrollTo::End => self.display.scroll_to_end(),
                    ScrollTo::Keep => {}
                }
                self.loaded_at = Some(Local::now());
                self.last_error = None;
                info!(name = %name, lines = self.display.lines.len(), "read complete");
            }
            ReadApplied::Stale => {}
            ReadApplied::Failed(e) => {
                warn!(name = %name, error = %e, "read failed");
                self.last_error = Some(format!("Read: {}", e));
            }
        }
    }

    pub fn handle_file_changed(&mut self, path: &Path) {
        if !self.config.watch_enabled() {
            return;
        }
        let is_current = self
            .manager
            .current()
            .map(|f| watcher::is_same_file(path, &f.path))
            .unwrap_or(false);
        if is_current {
            info!(path = %path.display(), "current file changed on disk");
            self.reload_current();
        }
    }

    // --- Navigation ---

    pub fn navigate_down(&mut self) {
        match self.pane {
            Pane::Files => self.next_file(),
            Pane::Content => self.display.scroll_down(),
        }
    }

    pub fn navigate_up(&mut self) {
        match self.pane {
            Pane::Files => self.prev_file(),
            Pane::Content => self.display.scroll_up(),
        }
    }

    pub fn navigate_left(&mut self) {
        self.pane = Pane::Files;
    }

    pub fn navigate_right(&mut self) {
        self.pane = Pane::Content;
    }

    pub fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Files => Pane::Content,
            Pane::Content => Pane::Files,
        };
    }

    pub fn jump_top(&mut self) {
        self.display.scroll = 0;
    }

    pub fn jump_bottom(&mut self) {
        self.display.scroll_to_end();
    }

    // --- File picker ---

    /// Open the picker in the current file's directory, or the project dir.
    pub fn open_picker(&mut self) {
        let dir = self
            .manager
            .current()
            .and_then(|f| f.path.parent())
            .filter(|d| !d.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.project_cwd.clone());
        self.picker = Some(PickerState::new(dir, self.config.show_hidden()));
        self.picker_reload();
    }

    pub fn close_picker(&mut self) {
        self.picker = None;
    }

    fn picker_reload(&mut self) {
        if let Some(ref mut state) = self.picker {
            match picker::list_dir(&state.dir, state.show_hidden) {
                Ok(entries) => {
                    state.entries = entries;
                    if state.index >= state.entries.len() {
                        state.index = 0;
                    }
                }
                Err(e) => {
                    state.entries.clear();
                    state.index = 0;
                    self.last_error = Some(format!("Picker: {}", e));
                }
            }
        }
    }

    pub fn picker_down(&mut self) {
        if let Some(ref mut state) = self.picker {
            state.move_down();
        }
    }

    pub fn picker_up(&mut self) {
        if let Some(ref mut state) = self.picker {
            state.move_up();
        }
    }

    /// Enter a directory, or pick a file. With files already marked, Enter on a
    /// file confirms the marked set instead.
    pub fn picker_enter(&mut self) {
        let entry = match self.picker.as_ref().and_then(|s| s.selected()) {
            Some(entry) => entry.clone(),
            None => return,
        };

        match entry.kind {
            EntryKind::Parent | EntryKind::Directory => {
                if let Some(ref mut state) = self.picker {
                    state.dir = entry.path;
                    state.index = 0;
                }
                self.picker_reload();
            }
            EntryKind::File => {
                let nothing_marked = self
                    .picker
                    .as_ref()
                    .map(|s| s.marked.is_empty())
                    .unwrap_or(true);
                if nothing_marked {
                    self.picker = None;
                    self.load_selection(vec![SelectedFile::from_path(entry.path)]);
                } else {
                    self.picker_confirm();
                }
            }
        }
    }

    pub fn picker_parent(&mut self) {
        if let Some(ref mut state) = self.picker {
            match state.dir.parent() {
                Some(parent) => {
                    state.dir = parent.to_path_buf();
                    state.index = 0;
                }
                None => return,
            }
        }
        self.picker_reload();
    }

    /// Mark or unmark the file under the cursor and move down.
    pub fn picker_toggle_mark(&mut self) {
        if let Some(ref mut state) = self.picker {
            if let Some(entry) = state.selected() {
                if entry.kind == EntryKind::File {
                    let path = entry.path.clone();
                    state.toggle_mark(path);
                    state.move_down();
                }
            }
        }
    }

    pub fn picker_toggle_hidden(&mut self) {
        if let Some(ref mut state) = self.picker {
            state.show_hidden = !state.show_hidden;
        }
        self.picker_reload();
    }

    /// Turn the marked files into a selection event and close the picker.
    pub fn picker_confirm(&mut self) {
        let marked = match self.picker {
            Some(ref state) if !state.marked.is_empty() => state.marked.clone(),
            _ => return,
        };
        self.picker = None;
        self.load_selection(marked.into_iter().map(SelectedFile::from_path).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_in(dir: &Path) -> App {
        App::new(dir.to_path_buf(), ProjectConfig::default(), SortMode::Lexical)
    }

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn cli_paths_resolve_against_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "file2.txt", "two");
        write(dir.path(), "file10.txt", "ten");

        let mut app = app_in(dir.path());
        app.load_paths(&[PathBuf::from("file2.txt"), PathBuf::from("file10.txt")]);

        assert_eq!(app.display.file_name, "file10.txt");
        assert_eq!(app.display.contents, "ten");
        assert!(app.loaded_at.is_some());
        assert!(app.last_error.is_none());
    }

    #[test]
    fn failed_read_reports_error_and_keeps_contents() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a1.txt", "first");

        let mut app = app_in(dir.path());
        app.load_paths(&[PathBuf::from("a1.txt"), PathBuf::from("a2.txt")]);
        assert_eq!(app.display.contents, "first");

        app.next_file();
        assert_eq!(app.display.file_name, "a2.txt");
        assert_eq!(app.display.contents, "first");
        let err = app.last_error.clone().unwrap();
        assert!(err.starts_with("Read:"));
        assert!(err.contains("a2.txt"));
    }

    #[test]
    fn prev_scrolls_to_end() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "s1.txt", "a\nb\nc\nd");
        write(dir.path(), "s2.txt", "x");

        let mut app = app_in(dir.path());
        app.load_paths(&[PathBuf::from("s1.txt"), PathBuf::from("s2.txt")]);
        assert_eq!(app.display.scroll, 0);

        app.next_file();
        app.prev_file();
        assert_eq!(app.display.file_name, "s1.txt");
        assert_eq!(app.display.scroll, 3);
    }

    #[test]
    fn change_to_current_file_reloads_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "w1.txt", "before");
        let other = write(dir.path(), "w2.txt", "other");

        let mut app = app_in(dir.path());
        app.load_paths(&[PathBuf::from("w1.txt")]);
        std::fs::write(&path, "after").unwrap();

        app.handle_file_changed(&other);
        assert_eq!(app.display.contents, "before");

        app.handle_file_changed(&path);
        assert_eq!(app.display.contents, "after");
    }

    #[test]
    fn empty_selection_clears_everything() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "e1.txt", "body");

        let mut app = app_in(dir.path());
        app.load_paths(&[PathBuf::from("e1.txt")]);
        app.load_selection(Vec::new());

        assert_eq!(app.display.file_name, "");
        assert_eq!(app.display.contents, "");
        assert!(app.loaded_at.is_none());
        assert_eq!(app.manager.current_index(), None);
    }

    #[test]
    fn picker_marks_become_a_sorted_selection() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "m2.txt", "two");
        write(dir.path(), "m10.txt", "ten");
        write(dir.path(), "m3.txt", "three");

        let mut app = app_in(dir.path());
        app.open_picker();
        {
            let state = app.picker.as_ref().unwrap();
            let names: Vec<&str> = state.entries.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(names, vec!["..", "m10.txt", "m2.txt", "m3.txt"]);
        }

        // Skip "..", mark m10 and m2.
        app.picker_down();
        app.picker_toggle_mark();
        app.picker_toggle_mark();
        app.picker_confirm();

        assert!(app.picker.is_none());
        let names: Vec<&str> = app.manager.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["m10.txt", "m2.txt"]);
        assert_eq!(app.display.contents, "ten");
    }

    #[test]
    fn picker_enter_on_file_selects_it_alone() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        write(&dir.path().join("sub"), "inner.txt", "inside");

        let mut app = app_in(dir.path());
        app.open_picker();
        app.picker_down();
        app.picker_enter();
        assert_eq!(app.picker.as_ref().unwrap().dir, dir.path().join("sub"));

        app.picker_down();
        app.picker_enter();
        assert!(app.picker.is_none());
        assert_eq!(app.display.file_name, "inner.txt");
        assert_eq!(app.display.contents, "inside");
    }

    #[test]
    fn confirm_without_marks_keeps_picker_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.open_picker();
        app.picker_confirm();
        assert!(app.picker.is_some());
    }
}
