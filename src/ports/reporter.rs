// src/ports/reporter.rs
// Reporting port: how a sweep tells the user what it did

use std::path::Path;

use crate::domain::summary::SweepSummary;

/// Receives sweep progress. Implementations decide whether and how to display it.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    /// A file's text changed (and was written back unless this is a dry run)
    fn file_updated(&self, path: &Path);

    /// The sweep completed
    fn sweep_finished(&self, summary: &SweepSummary);
}

impl<T: Reporter + ?Sized> Reporter for &T {
    fn file_updated(&self, path: &Path) {
        (*self).file_updated(path)
    }

    fn sweep_finished(&self, summary: &SweepSummary) {
        (*self).sweep_finished(summary)
    }
}
