use rand::{seq::SliceRandom, Rng};

use crate::board::{Board, EMPTY};
use crate::rules;

/// Completes `board` in place by randomized backtracking, trying digits in
/// a freshly shuffled order at every empty cell so repeated runs from an
/// empty grid yield varied solutions.
///
/// Returns `true` with the board fully filled and rule-consistent, or
/// `false` with the board exactly as it was passed in: every tentative
/// placement on a failing branch is undone before the next candidate, so
/// an overall failure leaves no trace.
///
/// Pre-filled cells are skipped untouched, which makes the same routine
/// serve three callers: filling an empty grid, completing a partial one
/// on a throwaway copy ("reveal"), and confirming a finished board
/// ("check" trivially succeeds with zero mutation when nothing is EMPTY).
pub fn solve<R: Rng>(board: &mut Board, rng: &mut R) -> bool {
    solve_from(board, 0, rng)
}

/// Recursion over the flat cell index 0..81, mapped to
/// (idx / 9, idx % 9); at most 81 frames deep.
fn solve_from<R: Rng>(board: &mut Board, idx: usize, rng: &mut R) -> bool {
    if idx == 81 {
        return true;
    }
    let (row, col) = (idx / 9, idx % 9);
    if board.cells[row][col].value != EMPTY {
        return solve_from(board, idx + 1, rng);
    }

    let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(rng);
    for num in digits {
        if rules::is_valid_move(board, row, col, num) {
            board.cells[row][col].value = num;
            if solve_from(board, idx + 1, rng) {
                return true;
            }
            board.cells[row][col].value = EMPTY;
        }
    }
    false
}
