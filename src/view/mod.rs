//! Read-only view model for the presentation layer.
//!
//! Nothing here holds game state. A [`ViewModel`] is computed from the
//! engine's queries and rendered declaratively; the presentation layer sends
//! [`Intent`](crate::engine::Intent)s back and rebuilds the model afterwards.

use crate::core::{winning_line, Board, Mark, MoveDescriptor, Snapshot};
use crate::engine::GameEngine;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status line derived from the active snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Status {
    Winner(Mark),
    NextPlayer(Mark),
}

impl Status {
    pub fn of(snapshot: &Snapshot) -> Self {
        match snapshot.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(snapshot.next_to_move),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {mark}"),
            Status::NextPlayer(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ViewModel {
    pub board: Board,
    pub status: Status,
    pub moves: Vec<MoveDescriptor>,
    pub cursor: usize,
    pub winning_line: Option<[usize; 3]>,
}

impl ViewModel {
    pub fn from_engine(engine: &GameEngine) -> Self {
        let board = *engine.current_board();
        Self {
            board,
            status: engine.status(),
            moves: engine.move_descriptors().collect(),
            cursor: engine.cursor(),
            winning_line: winning_line(&board),
        }
    }
}

/// Render a view model as plain text.
///
/// The board comes first, then the status line, then the numbered move list
/// with `>` against the active entry. Cells on the winning line are wrapped
/// in brackets.
///
/// # Example
///
/// ```rust
/// use rewind::engine::GameEngine;
/// use rewind::view::{render, ViewModel};
///
/// let mut engine = GameEngine::new();
/// engine.play_at(4);
///
/// let text = render(&ViewModel::from_engine(&engine));
/// assert!(text.contains("Next player: O"));
/// assert!(text.contains("> 1. Go to move #1"));
/// ```
pub fn render(view: &ViewModel) -> String {
    let mut out = String::new();

    for (r, row) in view.board.rows().enumerate() {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                let index = r * row.len() + c;
                let on_line = view
                    .winning_line
                    .is_some_and(|line| line.contains(&index));
                if on_line {
                    format!("[{cell}]")
                } else {
                    format!(" {cell} ")
                }
            })
            .collect();
        out.push_str(line.join("|").trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&view.status.to_string());
    out.push('\n');

    for descriptor in &view.moves {
        let marker = if descriptor.step == view.cursor { '>' } else { ' ' };
        out.push_str(&format!(
            "{marker} {}. {}\n",
            descriptor.step, descriptor.label
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;

    #[test]
    fn status_text_matches_display_strings() {
        assert_eq!(Status::Winner(Mark::O).to_string(), "Winner: O");
        assert_eq!(Status::NextPlayer(Mark::X).to_string(), "Next player: X");
    }

    #[test]
    fn status_prefers_winner() {
        let snapshot = Snapshot {
            board: board![O, O, O, X, X, _, X, _, _],
            next_to_move: Mark::X,
        };
        assert_eq!(Status::of(&snapshot), Status::Winner(Mark::O));
        assert_eq!(
            Status::of(&Snapshot::initial()),
            Status::NextPlayer(Mark::X)
        );
    }

    #[test]
    fn view_model_reflects_engine() {
        let mut engine = GameEngine::new();
        for cell in [0, 3, 1, 4, 2] {
            engine.play_at(cell);
        }

        let view = ViewModel::from_engine(&engine);
        assert_eq!(view.status, Status::Winner(Mark::X));
        assert_eq!(view.moves.len(), 6);
        assert_eq!(view.cursor, 5);
        assert_eq!(view.winning_line, Some([0, 1, 2]));
        assert_eq!(view.moves[0].label, "Go to game start");
    }

    #[test]
    fn render_marks_cursor_and_winning_line() {
        let mut engine = GameEngine::new();
        for cell in [0, 3, 1, 4, 2] {
            engine.play_at(cell);
        }
        engine.jump_to(5).unwrap();

        let text = render(&ViewModel::from_engine(&engine));
        assert!(text.starts_with("[X]|[X]|[X]\n O | O | .\n"));
        assert!(text.contains("Winner: X"));
        assert!(text.contains("  0. Go to game start\n"));
        assert!(text.contains("> 5. Go to move #5\n"));
    }

    #[test]
    fn render_fresh_game() {
        let text = render(&ViewModel::from_engine(&GameEngine::new()));
        assert_eq!(
            text,
            " . | . | .\n . | . | .\n . | . | .\n\nNext player: X\n> 0. Go to game start\n"
        );
    }
}
