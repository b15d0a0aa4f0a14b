use crate::error::Result;
use crate::report::AssetIdReport;
use scene_scan::{malformed_asset_ids, read_lines};
use std::path::Path;
use walkdir::WalkDir;

/// File extension of ASCII scene files.
const SCENE_EXTENSION: &str = "ma";

/// Scan one scene file for sign-bearing asset-id payloads.
///
/// A missing scene is fatal here; directory sweeps tolerate it instead.
pub fn audit_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(malformed_asset_ids(read_lines(path.as_ref())?))
}

/// Sweep a directory tree for scene files and aggregate per-file findings.
///
/// Non-scene files are skipped. A scene that disappears between the walk and
/// the scan is logged and skipped rather than failing the whole sweep.
pub fn audit_dir(root: impl AsRef<Path>) -> Result<AssetIdReport> {
    let mut report = AssetIdReport::default();
    let mut scanned = 0usize;

    for entry in WalkDir::new(root.as_ref()) {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_scene_file(entry.path()) {
            continue;
        }

        match audit_file(entry.path()) {
            Ok(nodes) => {
                scanned += 1;
                report.record(entry.path().to_path_buf(), nodes);
            }
            Err(err) => log::warn!("skipping {}: {err}", entry.path().display()),
        }
    }

    log::info!(
        "Audited {scanned} scene files, {} with findings",
        report.file_count()
    );
    Ok(report)
}

fn is_scene_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SCENE_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::is_scene_file;
    use std::path::Path;

    #[test]
    fn scene_extension_match_is_case_insensitive() {
        assert!(is_scene_file(Path::new("/scenes/a.ma")));
        assert!(is_scene_file(Path::new("/scenes/A.MA")));
        assert!(!is_scene_file(Path::new("/scenes/a.mb")));
        assert!(!is_scene_file(Path::new("/scenes/notes.txt")));
    }
}
