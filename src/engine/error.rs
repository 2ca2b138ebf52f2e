//! Engine error types.

use thiserror::Error;

/// Errors surfaced by [`GameEngine`](super::GameEngine) intents.
///
/// Illegal moves are not errors at this level: `play_at` ignores them.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Jump target outside `[0, len - 1]`
    #[error("Step {step} is out of range (history has {len} entries)")]
    OutOfRange { step: usize, len: usize },
}
