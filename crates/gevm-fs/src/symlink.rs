use std::{fs, path::Path};

use tracing::debug;

use crate::{FsError, Result};

/// Point `link` at `target`, replacing whatever link or file sits there.
///
/// Parent directories of `link` are created. A real directory at `link` is
/// left alone and reported as an error.
pub fn replace_symlink(target: &Path, link: &Path) -> Result<()> {
    let write = |source| FsError::Write {
        path: link.to_path_buf(),
        source,
    };

    if let Some(parent) = link.parent() {
        fs::create_dir_all(parent).map_err(write)?;
    }

    if let Ok(meta) = link.symlink_metadata() {
        if meta.is_dir() {
            return Err(write(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "a directory is in the way",
            )));
        }
        fs::remove_file(link).map_err(write)?;
    }

    debug!("linking {} -> {}", link.display(), target.display());

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link).map_err(write)
    }

    #[cfg(windows)]
    {
        if target.is_dir() {
            std::os::windows::fs::symlink_dir(target, link).map_err(write)
        } else {
            std::os::windows::fs::symlink_file(target, link).map_err(write)
        }
    }
}
