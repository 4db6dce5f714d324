// src/services/sweep.rs
// Drives traversal and the rewrite rule over a project, one file at a time.

use std::path::Path;

use tracing::{debug, info};

use crate::{
    config::{Config, Layout},
    domain::{errors::SweepError, rewrite::strip_fixtures, summary::SweepSummary},
    ports::{filesystem::FileSystem, reporter::Reporter},
    services::traversal::{candidate_roots, collect_candidates},
};

/// How a sweep treats the files it finds
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOptions {
    pub extension: String,
    pub layout: Layout,
    /// Report would-be changes without writing
    pub dry_run: bool,
    /// Write through a temporary file and rename instead of overwriting in place
    pub atomic: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            extension: crate::config::DEFAULT_EXTENSION.to_string(),
            layout: Layout::default(),
            dry_run: false,
            atomic: false,
        }
    }
}

impl From<&Config> for SweepOptions {
    fn from(config: &Config) -> Self {
        Self {
            extension: config.extension.clone(),
            layout: config.layout(),
            dry_run: config.dry_run,
            atomic: config.atomic,
        }
    }
}

pub struct Sweeper<F: FileSystem, R: Reporter> {
    fs: F,
    reporter: R,
    options: SweepOptions,
}

impl<F: FileSystem, R: Reporter> Sweeper<F, R> {
    pub fn new(fs: F, reporter: R, options: SweepOptions) -> Self {
        Self {
            fs,
            reporter,
            options,
        }
    }

    /// Strip fixture declarations from every candidate file under `project_root`.
    ///
    /// Stops at the first I/O error; files already written stay written.
    pub fn run(&self, project_root: &Path) -> Result<SweepSummary, SweepError> {
        let roots = candidate_roots(&self.fs, project_root, &self.options.layout);
        debug!(?roots, "traversal roots");

        let candidates = collect_candidates(&self.fs, &roots, &self.options.extension)?;
        info!(count = candidates.len(), "found candidate files");

        let mut summary = SweepSummary::default();
        for path in &candidates {
            self.process_file(path, &mut summary)?;
        }

        self.reporter.sweep_finished(&summary);
        Ok(summary)
    }

    /// Read, rewrite and (when changed) write back a single file
    pub fn process_file(&self, path: &Path, summary: &mut SweepSummary) -> Result<(), SweepError> {
        let source = self.fs.read_file(path).map_err(|source| SweepError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        summary.record_scanned();

        let rewrite = strip_fixtures(&source);
        if !rewrite.changed {
            debug!(path = %path.display(), "no fixtures declaration");
            return Ok(());
        }

        if !self.options.dry_run {
            let written = if self.options.atomic {
                self.fs.replace_file(path, &rewrite.text)
            } else {
                self.fs.write_file(path, &rewrite.text)
            };
            written.map_err(|source| SweepError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        info!(
            path = %path.display(),
            removed = rewrite.removed,
            dry_run = self.options.dry_run,
            "stripped fixtures"
        );
        summary.record_modified(path, rewrite.removed);
        self.reporter.file_updated(path);

        Ok(())
    }
}
