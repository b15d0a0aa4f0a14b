use crate::chunk::{node_chunks, NodeChunks};
use crate::syntax::{self, FILE_TEXTURE_ATTR, FILE_TEXTURE_TYPE};
use std::collections::{HashSet, VecDeque};

/// Lazy iterator over the distinct texture paths of a scene's file nodes.
///
/// Drives the chunker filtered to `file` nodes; within a chunk only setup
/// lines carrying the exact file-texture attribute marker contribute a path.
pub struct ShaderFiles<I> {
    chunks: NodeChunks<I>,
    seen: HashSet<String>,
    ready: VecDeque<String>,
}

/// Scan a line source for file-texture paths.
pub fn shader_files<I>(lines: I) -> ShaderFiles<I::IntoIter>
where
    I: IntoIterator<Item = String>,
{
    ShaderFiles {
        chunks: node_chunks(lines, Some(FILE_TEXTURE_TYPE)),
        seen: HashSet::new(),
        ready: VecDeque::new(),
    }
}

impl<I> Iterator for ShaderFiles<I>
where
    I: Iterator<Item = String>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(path) = self.ready.pop_front() {
                return Some(path);
            }

            let chunk = self.chunks.next()?;
            for line in &chunk.body {
                if !line.contains(FILE_TEXTURE_ATTR) {
                    continue;
                }
                let Some(path) = syntax::quoted_tail(line) else {
                    continue;
                };
                if self.seen.insert(path.to_string()) {
                    self.ready.push_back(path.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::str_lines;
    use pretty_assertions::assert_eq;

    const SCENE: &str = "createNode file -n \"wood_tex\";
\tsetAttr \".ftn\" -type \"string\" \"/tex/wood.png\";
createNode file -n \"wood_tex_again\";
\tsetAttr \".cs\" -type \"string\" \"sRGB\";
\tsetAttr \".ftn\" -type \"string\" \"/tex/wood.png\";
createNode file -n \"skin_tex\";
\tsetAttr \".ftn\" -type \"string\" \"/tex/skin.png\";
createNode transform -n \"not_a_texture\";
\tsetAttr \".ftn\" -type \"string\" \"/tex/decoy.png\";
";

    #[test]
    fn yields_distinct_paths_from_file_nodes_only() {
        let paths: Vec<String> = shader_files(str_lines(SCENE)).collect();
        assert_eq!(
            paths,
            vec!["/tex/wood.png".to_string(), "/tex/skin.png".to_string()]
        );
    }

    #[test]
    fn lines_without_the_attribute_marker_contribute_nothing() {
        let scene = "createNode file -n \"tex\";
\tsetAttr \".cs\" -type \"string\" \"sRGB\";
";
        let paths: Vec<String> = shader_files(str_lines(scene)).collect();
        assert!(paths.is_empty());
    }
}
