//! The 3x3 board and win detection.
//!
//! Boards are plain values. Every operation that "changes" a board returns a
//! new one, so a board stored in history can never be altered afterwards.

use super::mark::{Cell, Mark};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side length of the square grid.
pub const SIDE: usize = 3;

/// The eight lines that win the game: rows, then columns, then diagonals.
///
/// Win detection scans these in order and reports the first full line, so
/// the order is part of the observable behavior.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A row-major 3x3 grid; row `r`, column `c` lives at index `r * 3 + c`.
///
/// # Example
///
/// ```rust
/// use rewind::core::{Board, Mark};
///
/// let board = Board::empty().with_mark(4, Mark::X);
/// assert_eq!(board.get(4).and_then(|c| c.mark()), Some(Mark::X));
/// assert_eq!(board.occupied_count(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// A board with every cell empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Copy of this board with `mark` written at `index`.
    ///
    /// The receiver is left untouched. Callers check bounds and occupancy
    /// first; an out-of-range index returns the board unchanged.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut cells = self.cells;
        if let Some(cell) = cells.get_mut(index) {
            *cell = Cell::Occupied(mark);
        }
        Self { cells }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// True once every cell holds a mark. This is not draw detection: a full
    /// board can still carry a winner.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == CELL_COUNT
    }

    /// The three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(SIDE)
    }

    /// Shorthand for [`calculate_winner`].
    pub fn winner(&self) -> Option<Mark> {
        calculate_winner(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// First winning line on `board`, in [`WINNING_LINES`] order.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.iter().copied().find(|&[a, b, c]| {
        let cells = board.cells();
        !cells[a].is_empty() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Determine the winner of a board, if any.
///
/// Pure: depends only on the board passed in. Returns the mark on the first
/// line in [`WINNING_LINES`] whose three cells are equal and non-empty.
///
/// # Example
///
/// ```rust
/// use rewind::board;
/// use rewind::core::{calculate_winner, Mark};
///
/// let won = board![X, X, X, O, O, _, _, _, _];
/// assert_eq!(calculate_winner(&won), Some(Mark::X));
/// assert_eq!(calculate_winner(&board![_, _, _, _, _, _, _, _, _]), None);
/// ```
pub fn calculate_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.cells()[a].mark())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(calculate_winner(&Board::empty()), None);
        assert_eq!(winning_line(&Board::empty()), None);
    }

    #[test]
    fn top_row_wins() {
        let b = board![X, X, X, O, O, _, _, _, _];
        assert_eq!(calculate_winner(&b), Some(Mark::X));
        assert_eq!(winning_line(&b), Some([0, 1, 2]));
    }

    #[test]
    fn every_line_is_detected() {
        for line in WINNING_LINES {
            let mut b = Board::empty();
            for index in line {
                b = b.with_mark(index, Mark::O);
            }
            assert_eq!(calculate_winner(&b), Some(Mark::O), "line {line:?}");
            assert_eq!(winning_line(&b), Some(line));
        }
    }

    #[test]
    fn mixed_line_does_not_win() {
        let b = board![X, O, X, _, _, _, _, _, _];
        assert_eq!(calculate_winner(&b), None);
    }

    #[test]
    fn first_line_in_order_is_reported() {
        // Row 0 and column 0 are both complete; rows come first.
        let b = board![X, X, X, X, O, O, X, O, O];
        assert_eq!(winning_line(&b), Some([0, 1, 2]));
    }

    #[test]
    fn full_board_without_line_has_no_winner() {
        let b = board![X, O, X, X, O, O, O, X, X];
        assert!(b.is_full());
        assert_eq!(calculate_winner(&b), None);
    }

    #[test]
    fn with_mark_leaves_original_untouched() {
        let original = Board::empty();
        let marked = original.with_mark(8, Mark::X);

        assert_eq!(original.occupied_count(), 0);
        assert_eq!(marked.occupied_count(), 1);
        assert_eq!(marked.get(8), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn out_of_range_access_is_none() {
        assert_eq!(Board::empty().get(9), None);
        assert_eq!(Board::empty().with_mark(42, Mark::X), Board::empty());
    }

    #[test]
    fn display_renders_three_rows() {
        let b = board![X, _, O, _, X, _, _, _, O];
        assert_eq!(b.to_string(), "X . O\n. X .\n. . O");
    }
}
