//! Rewind: a pure functional tic-tac-toe engine with time travel
//!
//! Rewind follows a "pure core, imperative shell" design. Boards, snapshots
//! and the move history are immutable values manipulated by pure functions;
//! a single [`GameEngine`] owns the history plus a cursor into it and is the
//! only thing that changes over time.
//!
//! # Core Concepts
//!
//! - **Board**: 3x3 row-major grid with pure win detection
//! - **Snapshot**: a board plus the mark that moves next
//! - **History**: never-empty log of snapshots, entry `n` after `n` moves
//! - **Cursor**: which snapshot is active; jumping back and playing again
//!   discards the moves that followed
//!
//! # Example
//!
//! ```rust
//! use rewind::core::Mark;
//! use rewind::engine::GameEngine;
//! use rewind::view::Status;
//!
//! let mut engine = GameEngine::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.play_at(cell);
//! }
//! assert_eq!(engine.status(), Status::Winner(Mark::X));
//!
//! // Moves after a win are ignored.
//! engine.play_at(5);
//! assert_eq!(engine.history().len(), 6);
//!
//! // Jump back and branch: the old future is dropped.
//! engine.jump_to(2).unwrap();
//! engine.play_at(8);
//! assert_eq!(engine.history().len(), 4);
//! assert_eq!(engine.cursor(), 3);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod validation;
pub mod view;

// Re-export commonly used types
pub use crate::core::{calculate_winner, Board, Cell, History, Mark, Snapshot};
pub use builder::{BuildError, GameEngineBuilder};
pub use engine::{EngineError, GameEngine, Intent, JumpPolicy};
pub use view::{Status, ViewModel};
