//! Macros for ergonomic board construction.

/// Build a [`Board`](crate::core::Board) from nine cells in row-major order.
///
/// Each cell is `X`, `O` or `_` for empty. A wrong cell count fails to
/// compile.
///
/// # Example
///
/// ```
/// use rewind::board;
/// use rewind::core::{calculate_winner, Mark};
///
/// let board = board![
///     X, O, _,
///     _, X, O,
///     _, _, X,
/// ];
/// assert_eq!(calculate_winner(&board), Some(Mark::X));
/// ```
#[macro_export]
macro_rules! board {
    (@cell X) => {
        $crate::core::Cell::Occupied($crate::core::Mark::X)
    };
    (@cell O) => {
        $crate::core::Cell::Occupied($crate::core::Mark::O)
    };
    (@cell _) => {
        $crate::core::Cell::Empty
    };
    ($($cell:tt),* $(,)?) => {
        $crate::core::Board::from_cells([$($crate::board!(@cell $cell)),*])
    };
}
