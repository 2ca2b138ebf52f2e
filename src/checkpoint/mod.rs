//! Checkpoint and restore functionality for game engines.
//!
//! A checkpoint captures the full history, the cursor and the engine's
//! configuration as a plain value that can be encoded as JSON (readable) or
//! bincode (compact). The crate never touches the filesystem; where the
//! bytes go is up to the caller.

use crate::core::History;
use crate::engine::{GameEngine, JumpPolicy};
use crate::validation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a game engine.
///
/// # Example
///
/// ```rust
/// use rewind::builder::replay;
/// use rewind::checkpoint::Checkpoint;
///
/// let engine = replay([4, 0, 8]).unwrap();
/// let json = engine.checkpoint().to_json().unwrap();
///
/// let restored = Checkpoint::from_json(&json).unwrap().restore().unwrap();
/// assert_eq!(restored, engine);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Complete move history
    pub history: History,

    /// Active snapshot index
    pub cursor: usize,

    /// Out-of-range jump handling
    pub jump_policy: JumpPolicy,
}

impl GameEngine {
    /// Capture the engine's state.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            history: self.history().clone(),
            cursor: self.cursor(),
            jump_policy: self.jump_policy(),
        }
    }
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Rebuild an engine from this checkpoint.
    ///
    /// Fails on a version mismatch or when the history and cursor break any
    /// invariant; every violation is reported, not just the first.
    pub fn restore(self) -> Result<GameEngine, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        validation::check(&self.history, self.cursor)
            .map_err(CheckpointError::ValidationFailed)?;

        debug!(
            id = %self.id,
            moves = self.history.len() - 1,
            cursor = self.cursor,
            "checkpoint restored"
        );
        Ok(GameEngine::from_parts(
            self.history,
            self.cursor,
            self.jump_policy,
        ))
    }
}
