use std::path::Path;

use anyhow::Result;

use crate::model::picker::{EntryKind, PickerEntry};

/// List `dir` for the picker: a `..` entry when there is a parent, then
/// directories, then files, each group sorted case-insensitively.
pub fn list_dir(dir: &Path, show_hidden: bool) -> Result<Vec<PickerEntry>> {
    let read_dir = std::fs::read_dir(dir)?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in read_dir {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !show_hidden && name.starts_with('.') {
            continue;
        }
        // Broken symlinks and racing deletes are skipped, not fatal.
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(_) => continue,
        };
        let path = entry.path();

        if metadata.is_dir() {
            dirs.push(PickerEntry {
                name,
                path,
                kind: EntryKind::Directory,
                size: 0,
            });
        } else {
            files.push(PickerEntry {
                name,
                path,
                kind: EntryKind::File,
                size: metadata.len(),
            });
        }
    }

    dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let mut result = Vec::with_capacity(dirs.len() + files.len() + 1);
    if let Some(parent) = dir.parent() {
        result.push(PickerEntry {
            name: "..".to_string(),
            path: parent.to_path_buf(),
            kind: EntryKind::Parent,
            size: 0,
        });
    }
    result.extend(dirs);
    result.extend(files);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[PickerEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn parent_then_dirs_then_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("zeta")).unwrap();
        std::fs::create_dir(dir.path().join("Alpha")).unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        std::fs::write(dir.path().join("A.txt"), "a").unwrap();

        let entries = list_dir(dir.path(), false).unwrap();
        assert_eq!(names(&entries), vec!["..", "Alpha", "zeta", "A.txt", "b.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Parent);
        assert_eq!(entries[3].size, 1);
    }

    #[test]
    fn hidden_entries_follow_flag() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".hidden"), "").unwrap();
        std::fs::write(dir.path().join("shown.txt"), "").unwrap();

        let entries = list_dir(dir.path(), false).unwrap();
        assert_eq!(names(&entries), vec!["..", "shown.txt"]);

        let entries = list_dir(dir.path(), true).unwrap();
        assert_eq!(names(&entries), vec!["..", ".hidden", "shown.txt"]);
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_dir(&dir.path().join("absent"), false).is_err());
    }
}
