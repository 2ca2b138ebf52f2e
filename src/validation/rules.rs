//! History invariant rules using Validation.

use crate::core::{Cell, History, Snapshot};
use crate::validation::violations::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<Violation>>;

/// Check every invariant of `history` and `cursor`, accumulating ALL
/// violations.
/// Returns Validation::Success(()) if the pair is consistent.
pub fn validate(history: &History, cursor: usize) -> Check {
    let snapshots = history.snapshots();
    let mut checks: Vec<Check> = Vec::new();

    checks.push(initial_snapshot(history.first()));

    for (step, pair) in snapshots.windows(2).enumerate() {
        let step = step + 1;
        let (prev, next) = (&pair[0], &pair[1]);
        checks.push(no_move_after_win(step, prev));
        checks.push(single_cell_placed(step, prev, next));
        checks.push(turn_alternates(step, prev, next));
    }

    checks.push(cursor_in_range(cursor, history.len()));

    Validation::all_vec(checks).map(|_| ())
}

/// [`validate`] flattened into a `Result` with the violations in order.
pub fn check(history: &History, cursor: usize) -> Result<(), Vec<Violation>> {
    match validate(history, cursor) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

fn initial_snapshot(first: &Snapshot) -> Check {
    if *first == Snapshot::initial() {
        Validation::success(())
    } else {
        Validation::fail(Violation::InvalidInitialSnapshot)
    }
}

fn no_move_after_win(step: usize, prev: &Snapshot) -> Check {
    if prev.is_final() {
        Validation::fail(Violation::MoveAfterWin { step })
    } else {
        Validation::success(())
    }
}

fn single_cell_placed(step: usize, prev: &Snapshot, next: &Snapshot) -> Check {
    let changed: Vec<usize> = prev
        .board
        .cells()
        .iter()
        .zip(next.board.cells())
        .enumerate()
        .filter(|(_, (before, after))| before != after)
        .map(|(index, _)| index)
        .collect();

    let &[index] = changed.as_slice() else {
        return Validation::fail(Violation::CellCountChanged {
            step,
            changed: changed.len(),
        });
    };

    let before = prev.board.cells()[index];
    let after = next.board.cells()[index];
    let expected = prev.next_to_move;

    if !before.is_empty() {
        Validation::fail(Violation::OverwroteCell { step, index })
    } else if after != Cell::Occupied(expected) {
        Validation::fail(Violation::WrongMark {
            step,
            index,
            expected,
        })
    } else {
        Validation::success(())
    }
}

fn turn_alternates(step: usize, prev: &Snapshot, next: &Snapshot) -> Check {
    if next.next_to_move == prev.next_to_move.opponent() {
        Validation::success(())
    } else {
        Validation::fail(Violation::TurnNotAlternated { step })
    }
}

fn cursor_in_range(cursor: usize, len: usize) -> Check {
    if cursor < len {
        Validation::success(())
    } else {
        Validation::fail(Violation::CursorOutOfRange { cursor, len })
    }
}
