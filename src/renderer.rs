use tracing::debug;

use crate::display::Display;
use crate::error::ReadError;
use crate::model::selection::{ReadCompletion, ReadRequest, ScrollTo, SelectedFile};

/// What happened to a read completion handed to [`ContentRenderer::complete_read`].
#[derive(Debug)]
pub enum ReadApplied {
    /// Contents were written to the display.
    Shown(ScrollTo),
    /// A newer render superseded this read; nothing was written.
    Stale,
    /// The read failed; contents were left as they were.
    Failed(ReadError),
}

/// Writes the current file to the display fields.
///
/// Every call to [`render_file`](Self::render_file) bumps a generation counter.
/// Reads carry the generation they were started under, and only a completion
/// for the latest generation may touch the display.
#[derive(Debug, Default)]
pub struct ContentRenderer {
    generation: u64,
}

impl ContentRenderer {
    /// Set the name field and hand back the read to start, or clear the name
    /// field and start nothing when there is no file.
    pub fn render_file<D: Display>(
        &mut self,
        file: Option<&SelectedFile>,
        scroll: ScrollTo,
        display: &mut D,
    ) -> Option<ReadRequest> {
        self.generation += 1;

        let file = match file {
            Some(file) => file,
            None => {
                display.set_file_name("");
                return None;
            }
        };

        display.set_file_name(&file.name);
        debug!(generation = self.generation, name = %file.name, "starting read");
        Some(ReadRequest {
            generation: self.generation,
            file: file.clone(),
            scroll,
        })
    }

    pub fn complete_read<D: Display>(
        &mut self,
        completion: ReadCompletion,
        display: &mut D,
    ) -> ReadApplied {
        if completion.generation != self.generation {
            debug!(
                generation = completion.generation,
                latest = self.generation,
                name = %completion.file.name,
                "discarding stale read"
            );
            return ReadApplied::Stale;
        }

        match completion.result {
            Ok(text) => {
                display.set_contents(&text);
                ReadApplied::Shown(completion.scroll)
            }
            Err(e) => ReadApplied::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::display::DisplayState;

    fn completion(req: &ReadRequest, result: Result<String, ReadError>) -> ReadCompletion {
        ReadCompletion {
            generation: req.generation,
            file: req.file.clone(),
            scroll: req.scroll,
            result,
        }
    }

    #[test]
    fn absent_file_clears_name_without_read() {
        let mut renderer = ContentRenderer::default();
        let mut display = DisplayState::default();
        display.set_file_name("old.txt");
        display.set_contents("old");

        let req = renderer.render_file(None, ScrollTo::Top, &mut display);
        assert!(req.is_none());
        assert_eq!(display.file_name, "");
        assert_eq!(display.contents, "old");
    }

    #[test]
    fn name_is_set_before_the_read_lands() {
        let mut renderer = ContentRenderer::default();
        let mut display = DisplayState::default();
        let file = SelectedFile::from_path("/tmp/a.txt");

        let req = renderer
            .render_file(Some(&file), ScrollTo::Top, &mut display)
            .expect("read request");
        assert_eq!(display.file_name, "a.txt");
        assert_eq!(display.contents, "");

        let applied = renderer.complete_read(completion(&req, Ok("hello".into())), &mut display);
        assert!(matches!(applied, ReadApplied::Shown(ScrollTo::Top)));
        assert_eq!(display.contents, "hello");
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut renderer = ContentRenderer::default();
        let mut display = DisplayState::default();
        let first = SelectedFile::from_path("first.txt");
        let second = SelectedFile::from_path("second.txt");

        let old = renderer
            .render_file(Some(&first), ScrollTo::Top, &mut display)
            .expect("first request");
        let new = renderer
            .render_file(Some(&second), ScrollTo::Top, &mut display)
            .expect("second request");

        let applied = renderer.complete_read(completion(&new, Ok("second".into())), &mut display);
        assert!(matches!(applied, ReadApplied::Shown(_)));

        let applied = renderer.complete_read(completion(&old, Ok("first".into())), &mut display);
        assert!(matches!(applied, ReadApplied::Stale));
        assert_eq!(display.file_name, "second.txt");
        assert_eq!(display.contents, "second");
    }

    #[test]
    fn failed_read_keeps_previous_contents() {
        let mut renderer = ContentRenderer::default();
        let mut display = DisplayState::default();
        display.set_contents("previous");
        let file = SelectedFile::from_path("gone.txt");

        let req = renderer
            .render_file(Some(&file), ScrollTo::Top, &mut display)
            .expect("read request");
        let err = ReadError::Io {
            path: PathBuf::from("gone.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let applied = renderer.complete_read(completion(&req, Err(err)), &mut display);

        assert!(matches!(applied, ReadApplied::Failed(_)));
        assert_eq!(display.file_name, "gone.txt");
        assert_eq!(display.contents, "previous");
    }
}
