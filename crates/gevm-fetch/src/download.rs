//! Archive downloads into the cache directory.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{FetchError, HttpClient, Result};

/// Byte progress of a single transfer. Every hook defaults to a no-op.
pub trait Progress {
    /// Called once before the first chunk; `total` is the content length
    /// when the server announced one.
    fn start(&mut self, _total: Option<u64>) {}
    fn step(&mut self, _len: u64) {}
    fn finish(&mut self) {}
}

impl Progress for () {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The file was already present and nothing was fetched.
    Cached,
    Downloaded,
}

pub struct Downloader<C> {
    client: C,
}

impl<C: HttpClient> Downloader<C> {
    pub fn new(client: C) -> Self { Self { client } }

    /// Fetch `url` into `path` unless `path` already exists.
    ///
    /// The body lands in a `.part` sibling first and is renamed into place
    /// once complete, so an interrupted transfer never leaves a file that a
    /// later call would mistake for a finished download.
    pub fn download(&self, url: &str, path: &Path, progress: &mut dyn Progress) -> Result<DownloadOutcome> {
        if path.exists() {
            info!("{} already downloaded", path.display());
            return Ok(DownloadOutcome::Cached);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
        }

        let partial = partial_path(path);
        debug!(url, partial = %partial.display(), "downloading");

        let result = self.transfer(url, &partial, progress);
        if result.is_err() {
            let _ = fs::remove_file(&partial);
        }
        result?;

        fs::rename(&partial, path).map_err(|source| io_error(path, source))?;
        info!("Downloaded {}", path.display());

        Ok(DownloadOutcome::Downloaded)
    }

    fn transfer(&self, url: &str, partial: &Path, progress: &mut dyn Progress) -> Result<()> {
        let file = File::create(partial).map_err(|source| io_error(partial, source))?;
        let mut sink = BufWriter::new(file);

        let status = self
            .client
            .stream(url, &mut sink, progress)
            .map_err(|e| FetchError::transport(url, e))?;
        FetchError::check_status(url, status)?;

        sink.flush().map_err(|source| io_error(partial, source))
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}

fn io_error(path: &Path, source: std::io::Error) -> FetchError {
    FetchError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::partial_path;

    #[test]
    fn test_partial_path() {
        assert_eq!(
            partial_path(Path::new("/cache/godot/Godot_v4.2.1-stable_linux.x86_64.zip")),
            Path::new("/cache/godot/Godot_v4.2.1-stable_linux.x86_64.zip.part")
        );
    }
}
