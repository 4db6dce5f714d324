// src/adapters/reporter.rs
// Reporter adapters: console output, silence, and an in-memory recorder

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use console::style;

use crate::{domain::summary::SweepSummary, ports::reporter::Reporter};

/// Prints `Updated: <path>` lines and the final `Total files modified: <n>` tally to stdout
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    /// Whether to use colors in output
    pub use_colors: bool,
    /// Whether files are only reported, not written
    pub dry_run: bool,
}

impl ConsoleReporter {
    pub fn new(use_colors: bool, dry_run: bool) -> Self {
        Self {
            use_colors,
            dry_run,
        }
    }

    /// Render the line announcing a modified file
    pub fn render_updated(&self, path: &Path) -> String {
        let label = if self.dry_run {
            "Would update:"
        } else {
            "Updated:"
        };

        if self.use_colors {
            format!("{} {}", style(label).green(), path.display())
        } else {
            format!("{} {}", label, path.display())
        }
    }

    /// Render the closing tally line
    pub fn render_summary(&self, summary: &SweepSummary) -> String {
        let count = summary.modified_count();
        if self.use_colors {
            format!("Total files modified: {}", style(count).bold())
        } else {
            format!("Total files modified: {}", count)
        }
    }
}

impl Reporter for ConsoleReporter {
    fn file_updated(&self, path: &Path) {
        println!("{}", self.render_updated(path));
    }

    fn sweep_finished(&self, summary: &SweepSummary) {
        println!("{}", self.render_summary(summary));
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn file_updated(&self, _path: &Path) {}

    fn sweep_finished(&self, _summary: &SweepSummary) {}
}

/// Keeps every event for later inspection
#[derive(Debug, Default)]
pub struct RecordingReporter {
    updated: RefCell<Vec<PathBuf>>,
    finished: RefCell<Option<SweepSummary>>,
}

impl RecordingReporter {
    pub fn updated(&self) -> Vec<PathBuf> {
        self.updated.borrow().clone()
    }

    pub fn finished(&self) -> Option<SweepSummary> {
        self.finished.borrow().clone()
    }
}

impl Reporter for RecordingReporter {
    fn file_updated(&self, path: &Path) {
        self.updated.borrow_mut().push(path.to_path_buf());
    }

    fn sweep_finished(&self, summary: &SweepSummary) {
        *self.finished.borrow_mut() = Some(summary.clone());
    }
}
