//! Builder for constructing game engines.

use crate::builder::error::BuildError;
use crate::core::History;
use crate::engine::{GameEngine, JumpPolicy};

/// Builder for configuring a [`GameEngine`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use rewind::builder::GameEngineBuilder;
/// use rewind::core::Mark;
/// use rewind::engine::JumpPolicy;
///
/// let engine = GameEngineBuilder::new()
///     .jump_policy(JumpPolicy::Clamp)
///     .moves([0, 3, 1])
///     .cursor(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.history().len(), 4);
/// assert_eq!(engine.cursor(), 2);
/// assert_eq!(engine.current_mover(), Mark::X);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameEngineBuilder {
    jump_policy: JumpPolicy,
    moves: Vec<usize>,
    cursor: Option<usize>,
}

impl GameEngineBuilder {
    /// Create a new builder for a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the out-of-range jump policy.
    pub fn jump_policy(mut self, policy: JumpPolicy) -> Self {
        self.jump_policy = policy;
        self
    }

    /// Append cells to replay from the initial state, X first.
    pub fn moves<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.moves.extend(cells);
        self
    }

    /// Place the cursor (defaults to the latest move).
    pub fn cursor(mut self, step: usize) -> Self {
        self.cursor = Some(step);
        self
    }

    /// Build the engine.
    /// Returns an error if a replayed move is illegal or the cursor is out of range.
    pub fn build(self) -> Result<GameEngine, BuildError> {
        let mut history = History::new();
        for (i, &cell) in self.moves.iter().enumerate() {
            let next = history
                .last()
                .advance(cell)
                .map_err(|source| BuildError::IllegalMove { step: i + 1, source })?;
            history = history.record(next);
        }

        let len = history.len();
        let cursor = self.cursor.unwrap_or(len - 1);
        if cursor >= len {
            return Err(BuildError::CursorOutOfRange { cursor, len });
        }

        Ok(GameEngine::from_parts(history, cursor, self.jump_policy))
    }
}
