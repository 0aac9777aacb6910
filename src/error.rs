//! Error type for the I/O and configuration layer.
//!
//! The analysis itself never fails; degraded inputs produce unresolved
//! segments and zeroed metrics instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwingError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame {position} has frame_index {found}; expected contiguous indices from 0")]
    FrameIndex { position: usize, found: usize },

    #[error("unknown {kind} '{value}'")]
    UnknownOption { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, SwingError>;
