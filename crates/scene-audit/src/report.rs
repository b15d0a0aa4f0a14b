use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Asset-id findings per scene file: file path → offending node names.
///
/// Only files with at least one offending node are present. Keys are sorted
/// so repeated sweeps of the same tree serialize identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetIdReport {
    pub offending: BTreeMap<PathBuf, Vec<String>>,
}

impl AssetIdReport {
    /// Record one file's findings; files without findings are dropped.
    pub fn record(&mut self, file: PathBuf, nodes: Vec<String>) {
        if !nodes.is_empty() {
            self.offending.insert(file, nodes);
        }
    }

    /// True when no scanned file had an offending node.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.offending.is_empty()
    }

    /// Number of files with at least one offending node.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.offending.len()
    }

    /// Total offending nodes across all files.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.offending.values().map(Vec::len).sum()
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for AssetIdReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Files with findings: {} | Offending nodes: {}",
            self.file_count(),
            self.node_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_findings_are_dropped() {
        let mut report = AssetIdReport::default();
        report.record(PathBuf::from("/scenes/clean.ma"), Vec::new());
        report.record(PathBuf::from("/scenes/bad.ma"), vec!["B".to_string()]);

        assert!(!report.is_clean());
        assert_eq!(report.file_count(), 1);
        assert_eq!(report.node_count(), 1);
        assert!(!report.offending.contains_key(&PathBuf::from("/scenes/clean.ma")));
    }

    #[test]
    fn report_round_trips_through_json() {
        let mut report = AssetIdReport::default();
        report.record(
            PathBuf::from("/scenes/bad.ma"),
            vec!["B".to_string(), "C".to_string()],
        );

        let json = report.to_json().unwrap();
        let back: AssetIdReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn display_summarizes_counts() {
        let mut report = AssetIdReport::default();
        report.record(PathBuf::from("/scenes/bad.ma"), vec!["B".to_string()]);
        assert_eq!(
            report.to_string(),
            "Files with findings: 1 | Offending nodes: 1"
        );
    }
}
