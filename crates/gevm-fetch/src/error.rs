use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("not found: {url}")]
    NotFound { url: String },

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Transport {
        url:    String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("cannot decode response from {url}: {source}")]
    Decode {
        url:    String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub fn is_not_found(&self) -> bool { matches!(self, FetchError::NotFound { .. }) }

    /// Map a response status onto the error taxonomy. 2xx passes.
    pub(crate) fn check_status(url: &str, status: u16) -> Result<()> {
        match status {
            200..=299 => Ok(()),
            404 => Err(FetchError::NotFound { url: url.to_string() }),
            status => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
        }
    }

    pub(crate) fn transport<E>(url: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FetchError::Transport {
            url:    url.to_string(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FetchError;

    #[test]
    fn test_check_status() {
        assert!(FetchError::check_status("u", 200).is_ok());
        assert!(FetchError::check_status("u", 204).is_ok());
        assert!(FetchError::check_status("u", 404).unwrap_err().is_not_found());
        assert!(matches!(
            FetchError::check_status("u", 403),
            Err(FetchError::Status { status: 403, .. })
        ));
    }
}
