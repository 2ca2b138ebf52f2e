//! Labels for history navigation.

use serde::{Deserialize, Serialize};

/// One entry of the move list offered to the player.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveDescriptor {
    pub step: usize,
    pub label: String,
}

/// Label for the button that jumps to `step`.
pub fn move_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{step}")
    }
}

/// Lazy sequence of descriptors, one per history entry.
///
/// Only the history length is captured, so the iterator carries no access
/// to the engine. Clone it to walk the sequence again.
#[derive(Clone, Debug)]
pub struct MoveDescriptors {
    next: usize,
    len: usize,
}

impl MoveDescriptors {
    pub(crate) fn new(len: usize) -> Self {
        Self { next: 0, len }
    }
}

impl Iterator for MoveDescriptors {
    type Item = MoveDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let step = self.next;
        self.next += 1;
        Some(MoveDescriptor {
            step,
            label: move_label(step),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveDescriptors {}

impl std::iter::FusedIterator for MoveDescriptors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_button_text() {
        assert_eq!(move_label(0), "Go to game start");
        assert_eq!(move_label(1), "Go to move #1");
        assert_eq!(move_label(9), "Go to move #9");
    }

    #[test]
    fn yields_one_descriptor_per_entry() {
        let steps: Vec<usize> = MoveDescriptors::new(4).map(|d| d.step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3]);
    }

    #[test]
    fn reports_exact_length() {
        let mut descriptors = MoveDescriptors::new(3);
        assert_eq!(descriptors.len(), 3);
        descriptors.next();
        assert_eq!(descriptors.len(), 2);
    }

    #[test]
    fn clone_restarts_from_same_position() {
        let descriptors = MoveDescriptors::new(2);
        let first: Vec<_> = descriptors.clone().collect();
        let second: Vec<_> = descriptors.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn stays_exhausted() {
        let mut descriptors = MoveDescriptors::new(1);
        assert!(descriptors.next().is_some());
        assert!(descriptors.next().is_none());
        assert!(descriptors.next().is_none());
    }
}
