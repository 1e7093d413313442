use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("cannot open archive {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("archive is corrupted: {0}")]
    Corrupted(#[from] zip::result::ZipError),

    #[error("entry '{entry}' escapes the destination directory")]
    ZipSlip { entry: String },

    #[error("symlink '{}' points outside the destination: '{}'", link.display(), target.display())]
    SymlinkEscape { link: PathBuf, target: PathBuf },

    #[error("failed to extract '{}': {source}", path.display())]
    ExtractionFailed { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
