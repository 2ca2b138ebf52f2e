//! Build errors for the engine builder.

use crate::core::MoveError;
use thiserror::Error;

/// Errors that can occur when building a game engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Replayed move {step} is illegal: {source}")]
    IllegalMove {
        step: usize,
        #[source]
        source: MoveError,
    },

    #[error("Cursor {cursor} is past the replayed history ({len} entries)")]
    CursorOutOfRange { cursor: usize, len: usize },
}
