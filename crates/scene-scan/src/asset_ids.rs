use crate::chunk::node_chunks;
use crate::syntax::{ASSET_ID_ATTR, ASSET_ID_NODE_TYPE};

/// Names of transform nodes whose asset-id payload carries a sign character.
///
/// The payload of the asset-id attribute must be either a quote-decorated
/// token or bare digits once the terminator is stripped. Anything else means
/// the format assumption itself is broken, so the scan fails fast instead of
/// skipping. A sign inside the payload is valid input and makes the owning
/// node a finding, not an error.
///
/// # Panics
///
/// Panics on a structurally malformed asset-id payload.
#[must_use]
pub fn malformed_asset_ids<I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut offending = Vec::new();

    for chunk in node_chunks(lines, Some(ASSET_ID_NODE_TYPE)) {
        for line in &chunk.body {
            if !line.contains(ASSET_ID_ATTR) {
                continue;
            }

            let token = line.split_whitespace().last().unwrap_or("");
            let payload = token.trim_end_matches(';').trim_matches('"');
            let decorated = token.starts_with('"') && token.ends_with("\";");
            assert!(
                decorated || payload.chars().all(|ch| ch.is_ascii_digit()),
                "asset id payload {token:?} violates the setAttr format"
            );

            if payload.contains('-') {
                if let Some(name) = chunk.name() {
                    offending.push(name.to_string());
                }
            }
        }
    }

    offending
}
