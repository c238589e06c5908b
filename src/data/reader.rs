use std::path::Path;
use std::sync::mpsc;
use std::thread;

use crate::error::ReadError;
use crate::event::AppEvent;
use crate::model::selection::{ReadCompletion, ReadRequest};

/// Read a whole file as text. Invalid UTF-8 is replaced rather than rejected,
/// and there is no size limit.
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = std::fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Run a read on the calling thread.
pub fn read_now(request: ReadRequest) -> ReadCompletion {
    let result = read_text(&request.file.path);
    ReadCompletion {
        generation: request.generation,
        file: request.file,
        scroll: request.scroll,
        result,
    }
}

/// Run a read on a background thread. The completion comes back through `tx`.
pub fn spawn_read(request: ReadRequest, tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let completion = read_now(request);
        let _ = tx.send(AppEvent::ReadComplete(completion));
    });
}
