// src/domain/summary.rs
// Accumulated outcome of a sweep

use std::path::{Path, PathBuf};

/// What a sweep looked at and what it changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Number of candidate files that were read and rewritten
    pub scanned: usize,
    /// Files whose text changed, in processing order
    pub modified: Vec<PathBuf>,
    /// Total declarations removed across all files
    pub declarations_removed: usize,
}

impl SweepSummary {
    pub fn record_scanned(&mut self) {
        self.scanned += 1;
    }

    pub fn record_modified(&mut self, path: &Path, declarations_removed: usize) {
        self.modified.push(path.to_path_buf());
        self.declarations_removed += declarations_removed;
    }

    pub fn modified_count(&self) -> usize {
        self.modified.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_accumulates() {
        let mut summary = SweepSummary::default();
        summary.record_scanned();
        summary.record_scanned();
        summary.record_modified(Path::new("/p/tests/ATest.php"), 2);

        assert_eq!(summary.scanned, 2);
        assert_eq!(summary.modified_count(), 1);
        assert_eq!(summary.declarations_removed, 2);
        assert_eq!(summary.modified, vec![PathBuf::from("/p/tests/ATest.php")]);
    }
}
