use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MenuError>;

#[derive(Debug, Error)]
pub enum MenuError {
    /// A required collection or alias was not supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("unknown sort mode: {0:?}")]
    UnknownSortMode(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MenuError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
