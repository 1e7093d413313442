use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlatformError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("unsupported platform: {os} {arch}")]
    Unsupported { os: String, arch: String },

    #[error("unknown platform target: {0}")]
    UnknownTarget(String),
}
