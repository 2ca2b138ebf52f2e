//! The stateful shell around the pure core.
//!
//! [`GameEngine`] owns the move history and the cursor into it. It is the
//! only thing that mutates either, and it does so by replacing them with new
//! values computed by the pure functions in [`crate::core`].

mod error;
mod intent;
mod machine;
mod policy;

pub use error::EngineError;
pub use intent::Intent;
pub use machine::GameEngine;
pub use policy::JumpPolicy;
