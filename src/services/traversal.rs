// src/services/traversal.rs
// Finds the candidate files a sweep should look at

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    config::Layout,
    domain::errors::SweepError,
    ports::filesystem::FileSystem,
};

/// The roots to walk: `<root>/<tests>` plus `<root>/<plugins>/<name>/<tests>` for
/// every plugin that has a test folder. Roots that don't exist are still returned
/// for the primary test folder; walking them yields nothing.
pub fn candidate_roots<F: FileSystem>(
    fs: &F,
    project_root: &Path,
    layout: &Layout,
) -> Vec<PathBuf> {
    let mut roots = vec![project_root.join(&layout.tests_dir)];

    let plugins = project_root.join(&layout.plugins_dir);
    if !fs.is_dir(&plugins) {
        debug!(path = %plugins.display(), "no plugins directory");
        return roots;
    }

    let children = match fs.list_directory(&plugins) {
        Ok(children) => children,
        Err(err) => {
            debug!(path = %plugins.display(), error = %err, "cannot list plugins directory");
            return roots;
        }
    };

    for plugin in children.into_iter().filter(|p| fs.is_dir(p)) {
        let tests = plugin.join(&layout.tests_dir);
        if fs.is_dir(&tests) {
            roots.push(tests);
        } else {
            debug!(plugin = %plugin.display(), "plugin has no tests directory");
        }
    }

    roots
}

/// Every file below `roots` whose extension is `extension`
pub fn collect_candidates<F: FileSystem>(
    fs: &F,
    roots: &[PathBuf],
    extension: &str,
) -> Result<Vec<PathBuf>, SweepError> {
    let mut candidates = Vec::new();

    for root in roots {
        let files = fs.walk_files(root).map_err(|source| SweepError::Traversal {
            path: root.clone(),
            source,
        })?;
        let before = candidates.len();

        candidates.extend(files.into_iter().filter(|p| has_extension(p, extension)));

        debug!(
            root = %root.display(),
            candidates = candidates.len() - before,
            "walked root"
        );
    }

    Ok(candidates)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}
