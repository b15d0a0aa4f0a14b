use crate::syntax::{self, CREATE_NODE};
use serde::{Deserialize, Serialize};

/// One node-creation statement and its continuation lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeChunk {
    /// The `createNode ...` line opening the statement.
    pub creation_line: String,

    /// Continuation and setup lines, up to but excluding the next line that
    /// neither continues a statement nor follows an unterminated one.
    pub body: Vec<String>,
}

impl NodeChunk {
    /// Node name declared by the `-n "<name>"` flag, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        syntax::declared_name(&self.creation_line)
    }

    /// Node type token following the creation marker.
    #[must_use]
    pub fn node_type(&self) -> Option<&str> {
        let rest = self.creation_line.strip_prefix(CREATE_NODE)?;
        rest.split_whitespace()
            .next()
            .filter(|token| !token.starts_with('-'))
            .map(|token| token.trim_end_matches(';'))
    }

    /// The chunk's original lines, creation line first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.creation_line.as_str()).chain(self.body.iter().map(String::as_str))
    }

    /// Number of lines spanned by the chunk.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.body.len() + 1
    }
}

/// Lazy iterator of node-creation chunks over a forward-only line source.
///
/// Consumes the underlying source; finite and not restartable. Holds exactly
/// one line of lookahead: the line that closes a chunk is re-examined as a
/// potential chunk start on the next call, never discarded.
pub struct NodeChunks<I> {
    lines: I,
    marker: String,
    lookahead: Option<String>,
}

/// Chunk a line source, optionally narrowed to one node type.
///
/// With `Some("transform")` only `createNode transform ...` statements open
/// chunks. Lines that neither open a chunk nor belong to one are skipped.
pub fn node_chunks<I>(lines: I, node_type: Option<&str>) -> NodeChunks<I::IntoIter>
where
    I: IntoIterator<Item = String>,
{
    let marker = match node_type {
        Some(ty) => format!("{CREATE_NODE}{ty} "),
        None => CREATE_NODE.to_string(),
    };
    NodeChunks {
        lines: lines.into_iter(),
        marker,
        lookahead: None,
    }
}

impl<I> NodeChunks<I>
where
    I: Iterator<Item = String>,
{
    fn take_line(&mut self) -> Option<String> {
        self.lookahead.take().or_else(|| self.lines.next())
    }
}

impl<I> Iterator for NodeChunks<I>
where
    I: Iterator<Item = String>,
{
    type Item = NodeChunk;

    fn next(&mut self) -> Option<NodeChunk> {
        loop {
            let line = self.take_line()?;
            if !line.starts_with(&self.marker) {
                continue;
            }

            let mut chunk = NodeChunk {
                creation_line: line,
                body: Vec::new(),
            };

            loop {
                // End of input closes the open chunk; a trailing
                // unterminated statement is not an error.
                let Some(line) = self.take_line() else {
                    return Some(chunk);
                };

                let prev = chunk.body.last().unwrap_or(&chunk.creation_line);
                if syntax::is_continuation(&line) || !syntax::ends_statement(prev) {
                    chunk.body.push(line);
                } else {
                    self.lookahead = Some(line);
                    return Some(chunk);
                }
            }
        }
    }
}
