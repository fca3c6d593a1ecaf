//! Row/column/box occupancy queries and the single-move legality check.
//! Everything here is a pure O(9) scan over a board snapshot; nothing
//! searches or mutates, so these are safe on every interactive entry.

use itertools::Itertools;

use crate::board::{Board, EMPTY};

pub fn used_in_row(board: &Board, row: usize, num: u8) -> bool {
    (0..9).any(|c| board.cells[row][c].value == num)
}

pub fn used_in_col(board: &Board, col: usize, num: u8) -> bool {
    (0..9).any(|r| board.cells[r][col].value == num)
}

/// `top_row`/`top_col` address the box by its top-left cell
/// (`row - row % 3`, `col - col % 3`).
pub fn used_in_box(board: &Board, top_row: usize, top_col: usize, num: u8) -> bool {
    (top_row..top_row + 3)
        .cartesian_product(top_col..top_col + 3)
        .any(|(r, c)| board.cells[r][c].value == num)
}

/// Local legality only: `num` does not already occur in the row, column,
/// or box of (row, col). Does not consider whether the placement leaves
/// the puzzle completable.
pub fn is_valid_move(board: &Board, row: usize, col: usize, num: u8) -> bool {
    !used_in_row(board, row, num)
        && !used_in_col(board, col, num)
        && !used_in_box(board, row - row % 3, col - col % 3, num)
}

/// True if no filled cell conflicts with another filled cell in its row,
/// column, or box. EMPTY cells are ignored.
pub fn is_consistent(board: &Board) -> bool {
    for r in 0..9 {
        if has_dupes(board.row_values(r)) {
            return false;
        }
    }
    for c in 0..9 {
        if has_dupes(board.col_values(c)) {
            return false;
        }
    }
    for (br, bc) in (0..3).cartesian_product(0..3) {
        if has_dupes(board.box_values(br * 3, bc * 3)) {
            return false;
        }
    }
    true
}

fn has_dupes(vals: [u8; 9]) -> bool {
    let mut seen = [false; 10];
    for v in vals {
        if v != EMPTY {
            if seen[v as usize] {
                return true;
            }
            seen[v as usize] = true;
        }
    }
    false
}
