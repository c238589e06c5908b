use std::path::PathBuf;

use crate::model::selection::ReadCompletion;

/// All events the app loop handles besides key presses.
#[derive(Debug)]
pub enum AppEvent {
    /// A background file read finished.
    ReadComplete(ReadCompletion),
    /// A file in a watched directory was created or modified.
    FileChanged(PathBuf),
}
