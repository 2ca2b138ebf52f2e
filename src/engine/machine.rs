//! Game engine that applies move and navigation intents.

use crate::core::{Board, History, Mark, MoveDescriptors, MoveError, Snapshot};
use crate::engine::error::EngineError;
use crate::engine::intent::Intent;
use crate::engine::policy::JumpPolicy;
use crate::view::Status;
use tracing::{debug, instrument, trace};

/// Owns the move history and the cursor that selects the active snapshot.
///
/// Mutations replace the history with a new value and move the cursor; the
/// presentation layer observes changes by re-reading the queries.
///
/// # Example
///
/// ```rust
/// use rewind::core::Mark;
/// use rewind::engine::GameEngine;
///
/// let mut engine = GameEngine::new();
/// for cell in [0, 3, 1, 4, 2] {
///     engine.play_at(cell);
/// }
/// assert_eq!(engine.winner(), Some(Mark::X));
///
/// engine.jump_to(0).unwrap();
/// assert_eq!(engine.current_mover(), Mark::X);
/// assert_eq!(engine.history().len(), 6);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GameEngine {
    history: History,
    cursor: usize,
    jump_policy: JumpPolicy,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create an engine at the start of a fresh game.
    pub fn new() -> Self {
        Self::with_policy(JumpPolicy::default())
    }

    /// Create a fresh engine with a non-default jump policy.
    pub fn with_policy(jump_policy: JumpPolicy) -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            jump_policy,
        }
    }

    /// Assemble an engine from parts that the caller has already checked.
    pub(crate) fn from_parts(history: History, cursor: usize, jump_policy: JumpPolicy) -> Self {
        debug_assert!(cursor < history.len());
        Self {
            history,
            cursor,
            jump_policy,
        }
    }

    /// Play the side to move at `cell`.
    ///
    /// Ignored when the active snapshot already has a winner or the cell is
    /// taken (or off the board). Otherwise every snapshot after the cursor is
    /// discarded, the new one is appended and the cursor moves to it.
    pub fn play_at(&mut self, cell: usize) {
        if let Err(reason) = self.try_play(cell) {
            debug!(cell, cursor = self.cursor, %reason, "move ignored");
        }
    }

    /// Same as [`play_at`](Self::play_at) but reports why a move was refused.
    pub fn try_play(&mut self, cell: usize) -> Result<(), MoveError> {
        let current = self.current_snapshot();
        let mover = current.next_to_move;
        let next = current.advance(cell)?;

        let discarded = self.history.len() - 1 - self.cursor;
        self.history = self.history.branch(self.cursor, next);
        self.cursor = self.history.len() - 1;

        trace!(cell, %mover, step = self.cursor, discarded, "move applied");
        Ok(())
    }

    /// Make the snapshot at `step` the active one. History is untouched.
    ///
    /// Steps past the end are handled by the engine's [`JumpPolicy`].
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        let len = self.history.len();
        if step < len {
            self.cursor = step;
            return Ok(());
        }

        match self.jump_policy {
            JumpPolicy::Reject => {
                debug!(step, len, "jump rejected");
                Err(EngineError::OutOfRange { step, len })
            }
            JumpPolicy::Clamp => {
                debug!(step, len, "jump clamped to latest move");
                self.cursor = len - 1;
                Ok(())
            }
            JumpPolicy::Ignore => {
                debug!(step, len, "jump ignored");
                Ok(())
            }
        }
    }

    /// Apply an intent from the presentation layer.
    #[instrument(level = "debug", skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), EngineError> {
        match intent {
            Intent::PlayAt(cell) => {
                self.play_at(cell);
                Ok(())
            }
            Intent::JumpTo(step) => self.jump_to(step),
        }
    }

    pub fn current_snapshot(&self) -> &Snapshot {
        // The cursor never leaves [0, len - 1]; fall back to the latest
        // snapshot rather than panic if that were ever broken.
        self.history.get(self.cursor).unwrap_or(self.history.last())
    }

    pub fn current_board(&self) -> &Board {
        &self.current_snapshot().board
    }

    /// Mark that moves next at the cursor. Meaningless once there is a winner.
    pub fn current_mover(&self) -> Mark {
        self.current_snapshot().next_to_move
    }

    pub fn winner(&self) -> Option<Mark> {
        self.current_snapshot().winner()
    }

    /// Status line for the active snapshot.
    pub fn status(&self) -> Status {
        Status::of(self.current_snapshot())
    }

    /// One navigation entry per history snapshot.
    pub fn move_descriptors(&self) -> MoveDescriptors {
        self.history.descriptors()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn jump_policy(&self) -> JumpPolicy {
        self.jump_policy
    }

    /// True when the cursor sits on the most recent move.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;
    use crate::core::Cell;

    fn engine_after(cells: &[usize]) -> GameEngine {
        let mut engine = GameEngine::new();
        for &cell in cells {
            engine.try_play(cell).unwrap();
        }
        engine
    }

    #[test]
    fn new_engine_starts_at_initial_snapshot() {
        let engine = GameEngine::new();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.current_board(), &Board::empty());
        assert_eq!(engine.current_mover(), Mark::X);
        assert_eq!(engine.winner(), None);
        assert!(engine.is_at_latest());
    }

    #[test]
    fn play_appends_and_advances_cursor() {
        let mut engine = GameEngine::new();
        engine.play_at(4);

        assert_eq!(engine.history().len(), 2);
        assert_eq!(engine.cursor(), 1);
        assert_eq!(engine.current_board().get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(engine.current_mover(), Mark::O);
    }

    #[test]
    fn occupied_cell_is_ignored() {
        let mut engine = engine_after(&[4]);
        let before = engine.clone();

        engine.play_at(4);
        assert_eq!(engine, before);
        engine.play_at(4);
        assert_eq!(engine, before);
    }

    #[test]
    fn off_board_cell_is_ignored() {
        let mut engine = engine_after(&[4]);
        let before = engine.clone();

        engine.play_at(9);
        assert_eq!(engine, before);
        engine.play_at(usize::MAX);
        assert_eq!(engine, before);
    }

    #[test]
    fn try_play_reports_reason() {
        let mut engine = engine_after(&[4]);
        assert_eq!(engine.try_play(4), Err(MoveError::CellOccupied { index: 4 }));
        assert_eq!(engine.try_play(9), Err(MoveError::CellOutOfRange { index: 9 }));
    }

    #[test]
    fn moves_after_win_are_ignored() {
        let mut engine = engine_after(&[0, 3, 1, 4, 2]);
        assert_eq!(engine.current_board(), &board![X, X, X, O, O, _, _, _, _]);
        assert_eq!(engine.winner(), Some(Mark::X));

        let before = engine.clone();
        engine.play_at(5);
        assert_eq!(engine, before);
        assert_eq!(engine.try_play(5), Err(MoveError::GameOver));
    }

    #[test]
    fn jump_moves_cursor_only() {
        let mut engine = engine_after(&[0, 1, 2]);
        engine.jump_to(1).unwrap();

        assert_eq!(engine.cursor(), 1);
        assert_eq!(engine.history().len(), 4);
        assert_eq!(engine.current_mover(), Mark::O);
        assert!(!engine.is_at_latest());
    }

    #[test]
    fn jump_to_start_resets_view() {
        let mut engine = engine_after(&[0, 1, 2]);
        engine.jump_to(0).unwrap();

        assert_eq!(engine.current_board(), &Board::empty());
        assert_eq!(engine.current_mover(), Mark::X);
        assert_eq!(engine.history().len(), 4);
    }

    #[test]
    fn jump_to_cursor_is_idempotent() {
        let mut engine = engine_after(&[0, 1]);
        let before = engine.clone();
        engine.jump_to(2).unwrap();
        assert_eq!(engine, before);
    }

    #[test]
    fn play_after_jump_truncates_future() {
        let mut engine = engine_after(&[0, 1, 2, 3]);
        engine.jump_to(1).unwrap();
        engine.play_at(8);

        assert_eq!(engine.history().len(), 3);
        assert_eq!(engine.cursor(), 2);
        assert_eq!(engine.current_board(), &board![X, _, _, _, _, _, _, _, O]);
    }

    #[test]
    fn play_at_rewound_win_resumes_game() {
        let mut engine = engine_after(&[0, 3, 1, 4, 2]);
        engine.jump_to(4).unwrap();
        assert_eq!(engine.winner(), None);

        engine.play_at(6);
        assert_eq!(engine.history().len(), 6);
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.current_mover(), Mark::O);
    }

    #[test]
    fn out_of_range_jump_is_rejected_by_default() {
        let mut engine = engine_after(&[0]);
        let before = engine.clone();

        assert_eq!(
            engine.jump_to(5),
            Err(EngineError::OutOfRange { step: 5, len: 2 })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn clamp_policy_moves_to_latest() {
        let mut engine = GameEngine::with_policy(JumpPolicy::Clamp);
        engine.play_at(0);
        engine.play_at(1);
        engine.jump_to(0).unwrap();

        engine.jump_to(99).unwrap();
        assert_eq!(engine.cursor(), 2);
    }

    #[test]
    fn ignore_policy_leaves_state() {
        let mut engine = GameEngine::with_policy(JumpPolicy::Ignore);
        engine.play_at(0);
        engine.jump_to(0).unwrap();
        let before = engine.clone();

        engine.jump_to(7).unwrap();
        assert_eq!(engine, before);
    }

    #[test]
    fn dispatch_routes_intents() {
        let mut engine = GameEngine::new();
        engine.dispatch(Intent::PlayAt(0)).unwrap();
        engine.dispatch(Intent::PlayAt(0)).unwrap();
        engine.dispatch(Intent::PlayAt(8)).unwrap();
        assert_eq!(engine.history().len(), 3);

        engine.dispatch(Intent::JumpTo(1)).unwrap();
        assert_eq!(engine.cursor(), 1);
        assert!(engine.dispatch(Intent::JumpTo(3)).is_err());
    }

    #[test]
    fn descriptors_follow_history() {
        let mut engine = engine_after(&[0, 1, 2]);
        assert_eq!(engine.move_descriptors().len(), 4);

        engine.jump_to(0).unwrap();
        engine.play_at(4);
        let labels: Vec<String> = engine.move_descriptors().map(|d| d.label).collect();
        assert_eq!(labels, vec!["Go to game start", "Go to move #1"]);
    }

    #[test]
    fn status_follows_cursor() {
        let mut engine = engine_after(&[0, 3, 1, 4, 2]);
        assert_eq!(engine.status().to_string(), "Winner: X");

        engine.jump_to(3).unwrap();
        assert_eq!(engine.status().to_string(), "Next player: O");
    }
}
