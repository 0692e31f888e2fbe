use std::path::PathBuf;

use gasdts_core::DescriptionError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Description(#[from] DescriptionError),

    #[error("invalid overrides file {}: {source}", path.display())]
    Overrides {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error(transparent)]
    Emit(#[from] gasdts_typegen::Error),

    #[error("failed to print overrides: {0}")]
    Print(#[source] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
