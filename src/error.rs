use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the file boundary. Nothing else in the editor can fail.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a readable image: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not encode {} as PNG: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl PaintError {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. } | Self::Decode { path, .. } | Self::Encode { path, .. } => path,
        }
    }
}

/// Result type for file operations
pub type PaintResult<T> = Result<T, PaintError>;
