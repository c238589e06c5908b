use std::path::PathBuf;

/// Failure of a single file read. The display is never touched by one of these;
/// the app surfaces it in the status bar instead.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
