use gevm_fetch::FetchError;
use gevm_platform::PlatformTarget;
use gevm_version::VersionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("release tag {tag:?} is not a version: {source}")]
    MalformedTag {
        tag:    String,
        #[source]
        source: VersionError,
    },

    #[error("no {target} asset available for Godot {version:?}")]
    NotFound { target: PlatformTarget, version: String },

    #[error("multiple {target} assets found for Godot {version:?}: {}", candidates.join(", "))]
    Ambiguous {
        target:     PlatformTarget,
        version:    String,
        candidates: Vec<String>,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl ResolveError {
    pub fn is_not_found(&self) -> bool {
        match self {
            ResolveError::NotFound { .. } => true,
            ResolveError::Fetch(e) => e.is_not_found(),
            _ => false,
        }
    }
}
