use std::path::{Component, Path, PathBuf};

use crate::{ArchiveError, Result};

/// Resolve a symlink entry's `target` relative to the link, rejecting
/// absolute targets and anything that climbs above `base`.
pub(crate) fn symlink_target(target: &Path, link: &Path, base: &Path) -> Result<PathBuf> {
    let escape = || ArchiveError::SymlinkEscape {
        link:   link.to_path_buf(),
        target: target.to_path_buf(),
    };

    if target.has_root() {
        return Err(escape());
    }

    let parent = link.parent().unwrap_or(base);
    let resolved = normalize(&parent.join(target)).ok_or_else(escape)?;
    if !resolved.starts_with(base) {
        return Err(escape());
    }

    Ok(resolved)
}

/// Lexically collapse `.` and `..`. `None` if `..` would pop past the root.
fn normalize(path: &Path) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    return None;
                }
            }
            other => out.push(other),
        }
    }
    Some(out)
}
