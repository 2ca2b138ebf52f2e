//! Intents forwarded by the presentation layer.

use serde::{Deserialize, Serialize};

/// Something the player asked for.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Intent {
    /// Clicked a board cell
    PlayAt(usize),

    /// Clicked a history button
    JumpTo(usize),
}
