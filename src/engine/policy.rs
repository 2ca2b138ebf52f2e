//! How out-of-range history jumps are handled.

use serde::{Deserialize, Serialize};

/// Policy for `jump_to` with a step past the end of history.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum JumpPolicy {
    /// Fail with `EngineError::OutOfRange`, leaving state untouched
    #[default]
    Reject,

    /// Move the cursor to the latest snapshot
    Clamp,

    /// Leave state untouched and report success
    Ignore,
}
