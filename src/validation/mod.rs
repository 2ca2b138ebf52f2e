//! Validation of history invariants.
//!
//! Histories built through the engine are correct by construction. Those
//! that arrive from elsewhere, such as a decoded checkpoint, are checked
//! here before they are trusted.
//!
//! Checks use Stillwater's `Validation` type so that every broken invariant
//! is reported in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use rewind::core::{History, Snapshot};
//! use rewind::validation::{check, Violation};
//!
//! let history = History::new().record(Snapshot::initial().advance(4).unwrap());
//! assert!(check(&history, 1).is_ok());
//!
//! let errors = check(&history, 7).unwrap_err();
//! assert_eq!(errors, vec![Violation::CursorOutOfRange { cursor: 7, len: 2 }]);
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check, validate};
pub use violations::Violation;
