//! # Scene Scan
//!
//! Forward-only scanners for the line-oriented ASCII scene dialect of a 3D
//! content-creation application, run without the host application.
//!
//! The dialect is statement-per-line: statements end with `;`, continuation
//! lines start with indentation, node creation opens with `createNode `, and
//! path values sit between the second-to-last and last double quote of their
//! line. The scanners lean on exactly those facts and nothing else — there is
//! no grammar and no node-type-aware parsing.
//!
//! ## Architecture
//!
//! ```text
//! Scene lines (one open handle, one pass)
//!     │
//!     ├──> node_chunks ── creation line + continuation body, optional
//!     │                   node-type filter, one line of lookahead
//!     │
//!     ├──> references ── distinct referenced scene paths, hard stop at the
//!     │                  fileInfo header, optional depth-first recursion
//!     │
//!     ├──> shader_files ── distinct file-texture paths of `file` nodes
//!     │
//!     └──> malformed_asset_ids ── transform nodes whose asset-id payload
//!                                 carries a sign character
//! ```
//!
//! Every scanner is lazy, finite, and not restartable: it consumes the line
//! source it was given and is discarded afterwards. No path is yielded twice
//! by a single traversal.
//!
//! ## Example
//!
//! ```rust
//! use scene_scan::{references, str_lines};
//!
//! let scene = "file -r \"/scenes/b.ma\";\nfileInfo \"application\" \"app\";\n";
//! let paths: Vec<String> = references(str_lines(scene), false).collect();
//! assert_eq!(paths, vec!["/scenes/b.ma".to_string()]);
//! ```

mod asset_ids;
mod chunk;
mod error;
mod references;
mod shaders;
mod source;
mod syntax;

pub use asset_ids::malformed_asset_ids;
pub use chunk::{node_chunks, NodeChunk, NodeChunks};
pub use error::{Result, ScanError};
pub use references::{references, references_in_file, References};
pub use shaders::{shader_files, ShaderFiles};
pub use source::{read_lines, str_lines};
pub use syntax::{
    ASSET_ID_ATTR, ASSET_ID_NODE_TYPE, CREATE_NODE, FILE_INFO, FILE_REF, FILE_TEXTURE_ATTR,
    FILE_TEXTURE_TYPE,
};
