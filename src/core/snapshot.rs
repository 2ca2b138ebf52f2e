//! Game state after some number of moves.

use super::board::{Board, CELL_COUNT};
use super::error::MoveError;
use super::mark::Mark;
use serde::{Deserialize, Serialize};

/// Immutable pair of a board and the mark that moves next.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub next_to_move: Mark,
}

impl Snapshot {
    /// The fixed starting state: empty board, X to move.
    pub fn initial() -> Self {
        Self {
            board: Board::empty(),
            next_to_move: Mark::X,
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        self.board.winner()
    }

    /// A snapshot is final once somebody has won.
    pub fn is_final(&self) -> bool {
        self.winner().is_some()
    }

    /// Successor state after the side to move marks `index`.
    ///
    /// Pure: `self` is unchanged. Refused when the game is already won or the
    /// cell is off the board or taken.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::{Mark, MoveError, Snapshot};
    ///
    /// let start = Snapshot::initial();
    /// let next = start.advance(4).unwrap();
    /// assert_eq!(next.next_to_move, Mark::O);
    /// assert_eq!(next.advance(4), Err(MoveError::CellOccupied { index: 4 }));
    /// ```
    pub fn advance(&self, index: usize) -> Result<Snapshot, MoveError> {
        if self.is_final() {
            return Err(MoveError::GameOver);
        }
        if index >= CELL_COUNT {
            return Err(MoveError::CellOutOfRange { index });
        }
        if !self.board.cells()[index].is_empty() {
            return Err(MoveError::CellOccupied { index });
        }

        let mover = self.next_to_move;
        Ok(Snapshot {
            board: self.board.with_mark(index, mover),
            next_to_move: mover.opponent(),
        })
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
