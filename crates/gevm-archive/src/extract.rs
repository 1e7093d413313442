use std::{
    fs::{self, File},
    io::{self, BufReader, Read, Seek},
    path::{Path, PathBuf},
};

use tracing::{debug, trace};
use zip::ZipArchive;

use crate::{ArchiveError, Result, sanitize};

const S_IFMT: u32 = 0o170000;
const S_IFLNK: u32 = 0o120000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub entry_count: usize,
    pub total_bytes: u64,
}

/// Unpack the zip at `archive` into `dest`, creating `dest` if needed.
pub fn extract(archive: &Path, dest: &Path) -> Result<ExtractReport> {
    let file = File::open(archive).map_err(|source| ArchiveError::Open {
        path: archive.to_path_buf(),
        source,
    })?;

    debug!("extracting {} into {}", archive.display(), dest.display());
    extract_from_reader(BufReader::new(file), dest)
}

pub fn extract_from_reader<R: Read + Seek>(reader: R, dest: &Path) -> Result<ExtractReport> {
    let mut archive = ZipArchive::new(reader)?;
    fs::create_dir_all(dest).map_err(failed(dest))?;

    let mut report = ExtractReport::default();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let Some(path) = entry.enclosed_name().map(|p| dest.join(p)) else {
            return Err(ArchiveError::ZipSlip {
                entry: entry.name().to_string(),
            });
        };
        let mode = entry.unix_mode();
        trace!(path = %path.display(), "entry");

        if entry.is_dir() {
            fs::create_dir_all(&path).map_err(failed(&path))?;
        } else if mode.is_some_and(|m| m & S_IFMT == S_IFLNK) {
            let mut target = String::new();
            entry.read_to_string(&mut target).map_err(failed(&path))?;
            let target = PathBuf::from(target);
            sanitize::symlink_target(&target, &path, dest)?;
            create_parent(&path)?;
            write_symlink(&target, &path)?;
        } else {
            create_parent(&path)?;
            let mut out = File::create(&path).map_err(failed(&path))?;
            report.total_bytes += io::copy(&mut entry, &mut out).map_err(failed(&path))?;
            if let Some(mode) = mode {
                set_mode(&path, mode)?;
            }
        }

        report.entry_count += 1;
    }

    debug!("extracted {} entries, {} bytes", report.entry_count, report.total_bytes);
    Ok(report)
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) => fs::create_dir_all(parent).map_err(failed(parent)),
        None => Ok(()),
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o7777)).map_err(failed(path))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> { Ok(()) }

#[cfg(unix)]
fn write_symlink(target: &Path, link: &Path) -> Result<()> {
    if link.symlink_metadata().is_ok() {
        fs::remove_file(link).map_err(failed(link))?;
    }
    std::os::unix::fs::symlink(target, link).map_err(failed(link))
}

// Only the macOS bundles carry symlinks and those are never unpacked on
// Windows.
#[cfg(not(unix))]
fn write_symlink(target: &Path, link: &Path) -> Result<()> {
    debug!("skipping symlink {} -> {}", link.display(), target.display());
    Ok(())
}

fn failed(path: &Path) -> impl Fn(io::Error) -> ArchiveError + '_ {
    move |source| ArchiveError::ExtractionFailed {
        path: path.to_path_buf(),
        source,
    }
}
