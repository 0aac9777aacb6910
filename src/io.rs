//! I/O helpers for pose sequences and reports.
//!
//! - `load_pose_sequence`: read the upstream per-frame landmark JSON.
//! - `parse_pose_sequence`: same, from an in-memory string.
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - `write_text_file`: write a rendered prompt or summary to disk.
use crate::error::{Result, SwingError};
use crate::types::PoseSequence;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a pose sequence from a JSON array of frames.
pub fn load_pose_sequence(path: &Path) -> Result<PoseSequence> {
    let data = fs::read_to_string(path).map_err(|source| SwingError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let sequence: PoseSequence =
        serde_json::from_str(&data).map_err(|source| SwingError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    check_frame_indices(&sequence)?;
    Ok(sequence)
}

/// Parse a pose sequence from a JSON string.
pub fn parse_pose_sequence(json: &str) -> Result<PoseSequence> {
    let sequence: PoseSequence = serde_json::from_str(json)?;
    check_frame_indices(&sequence)?;
    Ok(sequence)
}

/// Frames must be numbered `0..N-1` in order with no gaps.
fn check_frame_indices(sequence: &PoseSequence) -> Result<()> {
    for (position, frame) in sequence.iter().enumerate() {
        if frame.frame_index != position {
            return Err(SwingError::FrameIndex {
                position,
                found: frame.frame_index,
            });
        }
    }
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_text_file(path, &json)
}

pub fn write_text_file(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, contents).map_err(|source| SwingError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| SwingError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
