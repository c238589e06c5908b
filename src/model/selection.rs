use std::path::PathBuf;

use serde::Serialize;

use crate::error::ReadError;

/// A file handle produced by a selection event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self { name, path }
    }
}

/// Where the content pane should scroll once a read lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTo {
    Top,
    End,
    /// Reload of the file already on screen.
    Keep,
}

/// One pending read, tagged with the render generation that started it.
#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub generation: u64,
    pub file: SelectedFile,
    pub scroll: ScrollTo,
}

/// Result of a background read, sent back through the event channel.
#[derive(Debug)]
pub struct ReadCompletion {
    pub generation: u64,
    pub file: SelectedFile,
    pub scroll: ScrollTo,
    pub result: Result<String, ReadError>,
}

/// One row of `seqview order` output.
#[derive(Debug, Clone, Serialize)]
pub struct OrderEntry {
    pub position: usize,
    pub name: String,
    pub key: String,
    pub path: PathBuf,
}
