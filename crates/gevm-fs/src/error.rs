use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FsError {
    #[error("nothing matching under {}", root.display())]
    NotFound { root: PathBuf },

    #[error("cannot walk {}: {source}", root.display())]
    Walk {
        root:   PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    pub fn is_not_found(&self) -> bool { matches!(self, FsError::NotFound { .. }) }
}

pub type Result<T> = std::result::Result<T, FsError>;
