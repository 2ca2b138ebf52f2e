//! Violations of the history invariants.

use crate::core::Mark;
use thiserror::Error;

/// A single broken history invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("Snapshot 0 must be the empty board with X to move")]
    InvalidInitialSnapshot,

    #[error("Snapshot {step} changes {changed} cells (expected exactly 1)")]
    CellCountChanged { step: usize, changed: usize },

    #[error("Snapshot {step} overwrites occupied cell {index}")]
    OverwroteCell { step: usize, index: usize },

    #[error("Snapshot {step} places the wrong mark at cell {index} (expected {expected})")]
    WrongMark {
        step: usize,
        index: usize,
        expected: Mark,
    },

    #[error("Snapshot {step} does not alternate the side to move")]
    TurnNotAlternated { step: usize },

    #[error("Snapshot {step} follows a won position")]
    MoveAfterWin { step: usize },

    #[error("Cursor {cursor} is out of range (history has {len} entries)")]
    CursorOutOfRange { cursor: usize, len: usize },
}
