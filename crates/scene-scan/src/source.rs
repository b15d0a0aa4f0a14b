use crate::error::{Result, ScanError};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Owned, forward-only line iterator over an open scene file.
#[derive(Debug)]
struct FileLines {
    owner: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl Iterator for FileLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.lines.next()? {
            Ok(line) => Some(line),
            Err(err) => {
                log::warn!("read error in scene {}: {err}", self.owner.display());
                None
            }
        }
    }
}

/// Open a scene file as an owned, forward-only line iterator.
///
/// A missing root scene is fatal. Existence is checked separately from the
/// open so callers can tell "never delivered" apart from "unreadable".
pub fn read_lines(path: impl AsRef<Path>) -> Result<impl Iterator<Item = String> + std::fmt::Debug> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ScanError::SceneNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    Ok(FileLines {
        owner: path.to_path_buf(),
        lines: BufReader::new(file).lines(),
    })
}

/// View in-memory scene text as a line iterator.
pub fn str_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_root_scene_is_fatal() {
        let err = read_lines("/nonexistent/root.ma").unwrap_err();
        assert!(matches!(err, ScanError::SceneNotFound { .. }));
    }

    #[test]
    fn reads_lines_without_terminators() {
        let temp = tempfile::tempdir().unwrap();
        let scene = temp.path().join("a.ma");
        std::fs::write(&scene, "first;\nsecond;").unwrap();

        let lines: Vec<String> = read_lines(&scene).unwrap().collect();
        assert_eq!(lines, vec!["first;".to_string(), "second;".to_string()]);
    }
}
