//! Error types for the combine pipeline

use std::path::{Path, PathBuf};

/// Errors raised while scanning, parsing, or writing
#[derive(Debug, thiserror::Error)]
pub enum CombineError {
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CombineError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write_output(path: &Path, source: std::io::Error) -> Self {
        Self::WriteOutput {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for per-file failures the collector may skip over
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse { .. })
    }
}

/// Result type for combine operations
pub type CombineResult<T> = Result<T, CombineError>;
