//! Move history tracking.
//!
//! Provides an immutable log of game snapshots, following functional
//! programming principles: every operation returns a new history.

use super::descriptor::MoveDescriptors;
use super::error::EmptyHistory;
use super::snapshot::Snapshot;
use serde::{Deserialize, Serialize};

/// Ordered log of snapshots; entry `n` is the state after `n` moves.
///
/// A history is never empty: entry 0 always exists. Recording is pure and
/// returns a new history with the snapshot added.
///
/// # Example
///
/// ```rust
/// use rewind::core::{History, Snapshot};
///
/// let history = History::new();
/// let after_one = Snapshot::initial().advance(4).unwrap();
///
/// let longer = history.record(after_one);
/// assert_eq!(longer.len(), 2);
/// assert_eq!(history.len(), 1); // Original unchanged
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Snapshot>", into = "Vec<Snapshot>")]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// A history holding only the initial snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Wrap an existing sequence of snapshots.
    ///
    /// Only non-emptiness is checked here; use
    /// [`validate`](crate::validation::validate) for the full set of
    /// history invariants.
    pub fn from_snapshots(snapshots: Vec<Snapshot>) -> Result<Self, EmptyHistory> {
        if snapshots.is_empty() {
            return Err(EmptyHistory);
        }
        Ok(Self { snapshots })
    }

    /// Record a snapshot at the end, returning a new history.
    pub fn record(&self, snapshot: Snapshot) -> Self {
        let mut snapshots = self.snapshots.clone();
        snapshots.push(snapshot);
        Self { snapshots }
    }

    /// Keep entries `0..=cursor`, discarding everything after.
    ///
    /// A cursor past the end keeps the whole history.
    pub fn truncate(&self, cursor: usize) -> Self {
        let keep = cursor.saturating_add(1).min(self.snapshots.len());
        Self {
            snapshots: self.snapshots[..keep].to_vec(),
        }
    }

    /// Drop the future after `cursor` and append `snapshot`.
    ///
    /// This is how a move made after jumping back overwrites the moves that
    /// followed it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::{History, Snapshot};
    ///
    /// let s1 = Snapshot::initial().advance(0).unwrap();
    /// let s2 = s1.advance(1).unwrap();
    /// let history = History::new().record(s1).record(s2);
    ///
    /// let alternative = Snapshot::initial().advance(8).unwrap();
    /// let branched = history.branch(0, alternative);
    ///
    /// assert_eq!(branched.len(), 2);
    /// assert_eq!(branched.last(), &alternative);
    /// ```
    pub fn branch(&self, cursor: usize, snapshot: Snapshot) -> Self {
        let keep = cursor.saturating_add(1).min(self.snapshots.len());
        let mut snapshots = Vec::with_capacity(keep + 1);
        snapshots.extend_from_slice(&self.snapshots[..keep]);
        snapshots.push(snapshot);
        Self { snapshots }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; present for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// The initial snapshot.
    pub fn first(&self) -> &Snapshot {
        &self.snapshots[0]
    }

    /// The most recent snapshot.
    pub fn last(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Navigation labels, one per entry.
    pub fn descriptors(&self) -> MoveDescriptors {
        MoveDescriptors::new(self.snapshots.len())
    }
}

impl TryFrom<Vec<Snapshot>> for History {
    type Error = EmptyHistory;

    fn try_from(snapshots: Vec<Snapshot>) -> Result<Self, Self::Error> {
        Self::from_snapshots(snapshots)
    }
}

impl From<History> for Vec<Snapshot> {
    fn from(history: History) -> Self {
        history.snapshots
    }
}
