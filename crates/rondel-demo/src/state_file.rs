//! On-disk view-state persistence for the demo host.
//!
//! The host owns the word buffer: one version word of its own, then the
//! widget's saved triple, stored as a JSON array of words.

use directories::ProjectDirs;
use rondel::{SAVED_STATE_WORDS, SavedState, StateError};
use std::path::PathBuf;
use thiserror::Error;

const STATE_VERSION: i32 = 1;

#[derive(Debug, Error)]
pub enum StateFileError {
    #[error("failed to determine state directory")]
    StateDirNotFound,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed state file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported state version {0}")]
    UnsupportedVersion(i32),
    #[error(transparent)]
    State(#[from] StateError),
}

pub fn state_path() -> Result<PathBuf, StateFileError> {
    let proj_dirs =
        ProjectDirs::from("org", "rondel", "rondel").ok_or(StateFileError::StateDirNotFound)?;
    let dir = proj_dirs.state_dir().unwrap_or_else(|| proj_dirs.data_dir());
    Ok(dir.join("view_state.json"))
}

fn encode(saved: &SavedState) -> Result<Vec<u8>, serde_json::Error> {
    let mut words = vec![STATE_VERSION];
    saved.write_to(&mut words);
    serde_json::to_vec(&words)
}

fn decode(bytes: &[u8]) -> Result<SavedState, StateFileError> {
    let words: Vec<i32> = serde_json::from_slice(bytes)?;
    let (version, rest) = words.split_first().ok_or(StateError::Truncated {
        expected: 1 + SAVED_STATE_WORDS,
        found: 0,
    })?;
    if *version != STATE_VERSION {
        return Err(StateFileError::UnsupportedVersion(*version));
    }

    let (saved, _) = SavedState::read_from(rest)?;
    Ok(saved)
}

pub fn store(saved: &SavedState) -> Result<(), StateFileError> {
    let path = state_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::write(&path, encode(saved)?)?;
    Ok(())
}

/// Read back the persisted state, if any. A missing file is a first run,
/// not an error.
pub fn load() -> Result<Option<SavedState>, StateFileError> {
    let path = state_path()?;
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(decode(&fs_err::read(&path)?)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trips() {
        let saved = SavedState {
            current_index: 2,
            looped: true,
            show_labels: false,
        };

        let bytes = encode(&saved).unwrap();
        assert_eq!(decode(&bytes).unwrap(), saved);
    }

    #[test]
    fn version_word_is_checked() {
        let bytes = serde_json::to_vec(&[99, 2, 1, 0]).unwrap();

        assert!(matches!(
            decode(&bytes).unwrap_err(),
            StateFileError::UnsupportedVersion(99)
        ));
    }

    #[test]
    fn truncated_words_are_rejected() {
        let bytes = serde_json::to_vec(&[STATE_VERSION, 2]).unwrap();

        assert!(matches!(
            decode(&bytes).unwrap_err(),
            StateFileError::State(StateError::Truncated { .. })
        ));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(matches!(
            decode(b"not json").unwrap_err(),
            StateFileError::Malformed(_)
        ));
    }
}
