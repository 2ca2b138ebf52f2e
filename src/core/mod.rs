//! Core game types and logic.
//!
//! This module contains the pure functional core of the game:
//! - Marks, cells and the 3x3 board
//! - Win detection over the eight fixed lines
//! - Snapshots and the immutable history of them
//!
//! All logic in this module is pure (no side effects). The stateful shell
//! lives in [`crate::engine`].

mod board;
mod descriptor;
mod error;
mod history;
mod mark;
mod snapshot;

pub use board::{calculate_winner, winning_line, Board, CELL_COUNT, SIDE, WINNING_LINES};
pub use descriptor::{move_label, MoveDescriptor, MoveDescriptors};
pub use error::{EmptyHistory, MoveError};
pub use history::History;
pub use mark::{Cell, Mark};
pub use snapshot::Snapshot;
