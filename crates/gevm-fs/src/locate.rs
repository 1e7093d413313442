use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::{FsError, Result};

/// First path under `root`, in walk order, whose file name satisfies
/// `matches` and whose kind (directory or not) equals `is_dir`.
pub fn locate(root: &Path, matches: impl Fn(&str) -> bool, is_dir: bool) -> Result<PathBuf> {
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|source| FsError::Walk {
            root: root.to_path_buf(),
            source,
        })?;

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };

        if entry.file_type().is_dir() == is_dir && matches(name) {
            trace!(path = %entry.path().display(), "located");
            return Ok(entry.into_path());
        }
    }

    Err(FsError::NotFound {
        root: root.to_path_buf(),
    })
}
