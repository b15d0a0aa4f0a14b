//! Fixed markers of the scene dialect and the shared string-slicing helpers.
//!
//! Values are located by reverse quote search, not by a tokenizer. An escaped
//! quote or terminator inside a quoted value is not supported; malformed
//! input may slice garbage but never panics here.

/// Prefix of a node-creation statement.
pub const CREATE_NODE: &str = "createNode ";

/// Prefix of a scene-reference statement.
pub const FILE_REF: &str = "file ";

/// Marker opening the header section; every reference statement precedes it.
pub const FILE_INFO: &str = "fileInfo";

/// Node type of file-texture nodes.
pub const FILE_TEXTURE_TYPE: &str = "file";

/// Attribute marker on setup lines carrying a file-texture path.
pub const FILE_TEXTURE_ATTR: &str = "\".ftn\"";

/// Custom asset-id attribute audited on transform nodes.
pub const ASSET_ID_ATTR: &str = "\".assetId\"";

/// Node type carrying the asset-id attribute.
pub const ASSET_ID_NODE_TYPE: &str = "transform";

/// Name flag on creation lines: `-n "<name>"`.
const NAME_FLAG: &str = "-n \"";

/// True when `line` continues the previous statement (leading indentation).
pub(crate) fn is_continuation(line: &str) -> bool {
    line.starts_with('\t') || line.starts_with(' ')
}

/// True when `line` closes its statement: the terminator followed only by
/// trailing whitespace.
pub(crate) fn ends_statement(line: &str) -> bool {
    line.trim_end().ends_with(';')
}

/// The token between the second-to-last and last double quote of `line`.
///
/// `None` for lines without two quote characters.
pub(crate) fn quoted_tail(line: &str) -> Option<&str> {
    let mut fields = line.rsplit('"');
    fields.next()?;
    fields.next()
}

/// The node name declared by the `-n "<name>"` flag of a creation line.
pub(crate) fn declared_name(creation_line: &str) -> Option<&str> {
    let rest = creation_line.split_once(NAME_FLAG)?.1;
    rest.split('"').next()
}
