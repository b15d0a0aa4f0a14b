use crate::error::Result;
use crate::source::read_lines;
use crate::syntax::{self, FILE_INFO, FILE_REF};
use std::collections::HashSet;
use std::path::Path;

/// Lazy iterator over the distinct scene paths referenced by a scene.
///
/// Scans raw lines, not chunks, and stops hard at the `fileInfo` header
/// marker: by format convention every reference statement precedes it. With
/// recursion enabled, each yielded path that exists on storage is opened and
/// scanned depth-first before the current scene's next reference, against the
/// same visited set, so no path is yielded twice anywhere in the traversal
/// and reference cycles terminate. One handle is open per recursion depth.
pub struct References<I> {
    root: Option<I>,
    frames: Vec<Box<dyn Iterator<Item = String>>>,
    visited: HashSet<String>,
    recursive: bool,
}

/// Scan a line source for referenced scene paths.
pub fn references<I>(lines: I, recursive: bool) -> References<I::IntoIter>
where
    I: IntoIterator<Item = String>,
{
    References {
        root: Some(lines.into_iter()),
        frames: Vec::new(),
        visited: HashSet::new(),
        recursive,
    }
}

/// Open a scene file and scan it for referenced scene paths.
///
/// A missing root scene is fatal; a missing nested reference is still
/// yielded once but never recursed into.
pub fn references_in_file(
    path: impl AsRef<Path>,
    recursive: bool,
) -> Result<References<impl Iterator<Item = String>>> {
    Ok(references(read_lines(path)?, recursive))
}

impl<I> std::fmt::Debug for References<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("References")
            .field("visited", &self.visited)
            .field("recursive", &self.recursive)
            .finish_non_exhaustive()
    }
}

impl<I> References<I> {
    /// Push a child frame for a freshly yielded path, when recursion applies.
    fn descend(&mut self, path: &str) {
        if !self.recursive {
            return;
        }

        // Existence comes first: a reference that was never delivered stays
        // a plain yield, not an open failure.
        if !Path::new(path).is_file() {
            log::debug!("referenced scene {path} not on storage, skipping recursion");
            return;
        }

        match read_lines(path.to_owned()) {
            Ok(lines) => self.frames.push(Box::new(lines)),
            Err(err) => log::warn!("failed to open referenced scene {path}: {err}"),
        }
    }
}

impl<I> Iterator for References<I>
where
    I: Iterator<Item = String>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            // Deepest open child scene first (depth-first, pre-order).
            let from_child = !self.frames.is_empty();
            let found = if let Some(frame) = self.frames.last_mut() {
                next_reference(frame)
            } else if let Some(root) = self.root.as_mut() {
                next_reference(root)
            } else {
                return None;
            };

            match found {
                Some(path) => {
                    if self.visited.insert(path.clone()) {
                        self.descend(&path);
                        return Some(path);
                    }
                }
                None => {
                    if from_child {
                        self.frames.pop();
                    } else {
                        self.root = None;
                        return None;
                    }
                }
            }
        }
    }
}

/// Advance `lines` to the next reference statement and slice out its path.
///
/// Returns `None` at the `fileInfo` marker or at end of input; the caller
/// treats both as exhaustion of that scene.
fn next_reference(lines: &mut impl Iterator<Item = String>) -> Option<String> {
    for line in lines {
        let statement = line.trim_start();
        if statement.starts_with(FILE_INFO) {
            return None;
        }
        if !statement.starts_with(FILE_REF) {
            continue;
        }
        if let Some(path) = syntax::quoted_tail(statement) {
            return Some(path.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::str_lines;
    use pretty_assertions::assert_eq;

    #[test]
    fn yields_references_before_the_header_only() {
        let scene = "createNode transform -n \"A\";
\tfile -r -ns \"ns\" -dr 1 -rfn \"refA\" \"/scenes/b.ma\";
fileInfo \"application\" \"app\";
\tfile -r -ns \"ns2\" \"/scenes/c.ma\";
";
        let paths: Vec<String> = references(str_lines(scene), false).collect();
        assert_eq!(paths, vec!["/scenes/b.ma".to_string()]);
    }

    #[test]
    fn repeated_references_are_yielded_once() {
        let scene = "file -r \"/scenes/b.ma\";
file -r \"/scenes/c.ma\";
file -rdi 1 \"/scenes/b.ma\";
";
        let paths: Vec<String> = references(str_lines(scene), false).collect();
        assert_eq!(
            paths,
            vec!["/scenes/b.ma".to_string(), "/scenes/c.ma".to_string()]
        );
    }

    #[test]
    fn lines_without_two_quotes_are_skipped() {
        let scene = "file -r broken\nfile -r \"/scenes/ok.ma\";\n";
        let paths: Vec<String> = references(str_lines(scene), false).collect();
        assert_eq!(paths, vec!["/scenes/ok.ma".to_string()]);
    }

    #[test]
    fn missing_nested_reference_is_yielded_but_not_recursed() {
        let scene = "file -r \"/definitely/not/on/disk.ma\";\n";
        let paths: Vec<String> = references(str_lines(scene), true).collect();
        assert_eq!(paths, vec!["/definitely/not/on/disk.ma".to_string()]);
    }
}
