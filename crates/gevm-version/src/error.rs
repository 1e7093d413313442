use thiserror::Error;

pub type Result<T> = std::result::Result<T, VersionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("malformed version: {0:?}")]
    MalformedVersion(String),

    #[error("malformed release: {0:?}")]
    MalformedRelease(String),

    #[error("malformed semver: {0:?}")]
    MalformedSemver(String),
}
