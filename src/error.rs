use std::path::PathBuf;
use thiserror::Error;

/// Main error type for patchup
#[derive(Error, Debug)]
pub enum PatchupError {
    #[error("Resource not found: {path}")]
    ResourceNotFound { path: PathBuf },

    #[error("Resource not writable: {path}: {source}")]
    ResourceUnwritable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Encoding error in {path}: {message}")]
    Encoding { path: PathBuf, message: String },

    #[error("Invalid patch plan: {message}")]
    InvalidPlan { message: String },

    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },
}

impl PatchupError {
    /// Create a new resource-not-found error
    pub fn resource_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ResourceNotFound { path: path.into() }
    }

    /// Create a new resource-unwritable error
    pub fn resource_unwritable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ResourceUnwritable {
            path: path.into(),
            source,
        }
    }

    /// Create a new encoding error
    pub fn encoding(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Encoding {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid plan error
    pub fn invalid_plan(message: impl Into<String>) -> Self {
        Self::InvalidPlan {
            message: message.into(),
        }
    }

    /// Create a new IO error with optional path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }
}

impl From<std::io::Error> for PatchupError {
    fn from(error: std::io::Error) -> Self {
        PatchupError::io_error(error, None::<PathBuf>)
    }
}

impl From<toml::de::Error> for PatchupError {
    fn from(error: toml::de::Error) -> Self {
        PatchupError::invalid_plan(error.to_string())
    }
}

/// Result type alias using PatchupError
pub type PatchupResult<T> = Result<T, PatchupError>;
