//! Builder API for configuring game engines.
//!
//! This module provides a fluent builder and a board literal macro for
//! creating engines and positions with minimal boilerplate.

pub mod engine;
pub mod error;
pub mod macros;

pub use crate::engine::JumpPolicy;
pub use engine::GameEngineBuilder;
pub use error::BuildError;

use crate::engine::GameEngine;

/// Create an engine that has already played `cells` in order.
///
/// # Example
///
/// ```
/// use rewind::builder::replay;
///
/// let engine = replay([4, 0, 8]).unwrap();
/// assert_eq!(engine.history().len(), 4);
/// ```
pub fn replay<I>(cells: I) -> Result<GameEngine, BuildError>
where
    I: IntoIterator<Item = usize>,
{
    GameEngineBuilder::new().moves(cells).build()
}
