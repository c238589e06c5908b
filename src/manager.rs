use std::cmp::Ordering;

use serde::Deserialize;
use tracing::info;

use crate::display::Display;
use crate::model::selection::{OrderEntry, ReadCompletion, ReadRequest, ScrollTo, SelectedFile};
use crate::renderer::{ContentRenderer, ReadApplied};

/// How extracted digit tokens are compared.
///
/// `Lexical` compares the digit strings as strings, so `file10` sorts before
/// `file2`. It is the default and matches the established ordering; `Numeric`
/// must be asked for explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Lexical,
    Numeric,
}

/// Digits of the part of `name` before its first `.`; everything else is
/// dropped. A name without digits yields the empty string.
pub fn sort_key(name: &str) -> String {
    let stem = name.split('.').next().unwrap_or_default();
    stem.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn compare_names(a: &str, b: &str, mode: SortMode) -> Ordering {
    let (ka, kb) = (sort_key(a), sort_key(b));
    match mode {
        SortMode::Lexical => ka.cmp(&kb),
        SortMode::Numeric => compare_numeric(&ka, &kb),
    }
}

// Digit strings of any length: empty first, then by magnitude, then by the
// raw string so "007" and "7" still have a fixed order.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }
    let at = a.trim_start_matches('0');
    let bt = b.trim_start_matches('0');
    at.len()
        .cmp(&bt.len())
        .then_with(|| at.cmp(bt))
        .then_with(|| a.cmp(b))
}

/// Sort a selection in place. The sort is stable, but files with equal keys
/// have no promised order.
pub fn sort_files(files: &mut [SelectedFile], mode: SortMode) {
    files.sort_by(|a, b| compare_names(&a.name, &b.name, mode));
}

/// Sorted order of a selection, for `seqview order`.
pub fn order_entries(mut files: Vec<SelectedFile>, mode: SortMode) -> Vec<OrderEntry> {
    sort_files(&mut files, mode);
    files
        .into_iter()
        .enumerate()
        .map(|(position, file)| OrderEntry {
            position,
            key: sort_key(&file.name),
            name: file.name,
            path: file.path,
        })
        .collect()
}

/// Owns the current selection and which file in it is shown.
///
/// Every operation that changes the current file returns the read the caller
/// must start, if any. The display name is updated before returning.
#[derive(Debug, Default)]
pub struct FileListManager {
    files: Vec<SelectedFile>,
    current: Option<usize>,
    sort_mode: SortMode,
    renderer: ContentRenderer,
}

impl FileListManager {
    pub fn new(sort_mode: SortMode) -> Self {
        Self {
            sort_mode,
            ..Self::default()
        }
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&SelectedFile> {
        self.current.and_then(|i| self.files.get(i))
    }

    /// Replace the selection, sort it, and show the first file. An empty
    /// selection clears both display fields and starts no read.
    pub fn load_selection<D: Display>(
        &mut self,
        files: impl IntoIterator<Item = SelectedFile>,
        display: &mut D,
    ) -> Option<ReadRequest> {
        let mut files: Vec<SelectedFile> = files.into_iter().collect();
        sort_files(&mut files, self.sort_mode);
        info!(count = files.len(), mode = ?self.sort_mode, "loaded selection");

        self.files = files;
        self.current = if self.files.is_empty() { None } else { Some(0) };

        let req = self.render_current(ScrollTo::Top, display);
        if self.files.is_empty() {
            display.set_contents("");
        }
        req
    }

    /// Show the next file. No-op on the last file or an empty selection.
    pub fn next<D: Display>(&mut self, display: &mut D) -> Option<ReadRequest> {
        match self.current {
            Some(i) if i + 1 < self.files.len() => {
                self.current = Some(i + 1);
                self.render_current(ScrollTo::Top, display)
            }
            _ => None,
        }
    }

    /// Show the previous file, scrolled to its end. No-op on the first file
    /// or an empty selection.
    pub fn prev<D: Display>(&mut self, display: &mut D) -> Option<ReadRequest> {
        match self.current {
            Some(i) if i > 0 => {
                self.current = Some(i - 1);
                self.render_current(ScrollTo::End, display)
            }
            _ => None,
        }
    }

    /// Re-read the current file in place, e.g. after it changed on disk.
    pub fn reload_current<D: Display>(&mut self, display: &mut D) -> Option<ReadRequest> {
        self.current?;
        self.render_current(ScrollTo::Keep, display)
    }

    pub fn complete_read<D: Display>(
        &mut self,
        completion: ReadCompletion,
        display: &mut D,
    ) -> ReadApplied {
        self.renderer.complete_read(completion, display)
    }

    fn render_current<D: Display>(&mut self, scroll: ScrollTo, display: &mut D) -> Option<ReadRequest> {
        let file = self.current.and_then(|i| self.files.get(i)).cloned();
        self.renderer.render_file(file.as_ref(), scroll, display)
    }
}
