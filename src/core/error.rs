//! Reasons a move can be refused.

use thiserror::Error;

/// Why a move was not applied.
///
/// The engine treats every variant as a silent no-op in `play_at`; the
/// classification is only surfaced by `try_play` and in log events.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Cell {index} is outside the board (0-8)")]
    CellOutOfRange { index: usize },

    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("Game is already won")]
    GameOver,
}

/// A history must always hold at least the initial snapshot.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("History must contain at least the initial snapshot")]
pub struct EmptyHistory;
