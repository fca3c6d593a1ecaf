use rand::{rngs::StdRng, Rng, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, EMPTY};
use crate::{rules, solver};

/// Difficulty selects only how many clues survive removal; the solving
/// pass is identical for all levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of filled cells left in a generated puzzle.
    pub fn clue_target(self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 24,
            Difficulty::Hard => 18,
        }
    }

    /// Maps the numeric levels 1/2/3 (Easy/Medium/Hard); any other value
    /// falls back to Medium rather than erroring.
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Difficulty::Easy,
            3 => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

/// Owns the current grid and the random source. Generation, the validated
/// move path, and the check/reveal inquiries all go through here; the
/// inquiries run on clones so the live grid is never touched by them.
pub struct PuzzleGenerator {
    grid: Board,
    rng: StdRng,
}

impl PuzzleGenerator {
    /// A fixed seed replays the exact same puzzles; `None` seeds from
    /// entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { grid: Board::empty(), rng }
    }

    pub fn grid(&self) -> &Board {
        &self.grid
    }

    /// Builds a fresh puzzle: clears the grid, fills it completely with a
    /// random solve (an empty grid is always completable), then removes
    /// cells down to the difficulty's clue target. Surviving cells become
    /// clues. Puzzles are not checked for solution uniqueness.
    pub fn create_puzzle(&mut self, difficulty: Difficulty) {
        self.grid = Board::empty();
        let filled = solver::solve(&mut self.grid, &mut self.rng);
        debug_assert!(filled, "an empty grid always has a completion");
        self.remove_cells(difficulty.clue_target());
        for row in self.grid.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.fixed = cell.value != EMPTY;
            }
        }
    }

    /// Rejection sampling: pick uniformly random cells, clearing filled
    /// hits, until exactly `target_clues` remain. Already-empty picks are
    /// simply retried; wasteful on paper, harmless at 81 cells.
    fn remove_cells(&mut self, target_clues: usize) {
        let mut remaining = 81usize;
        while remaining > target_clues {
            let idx = self.rng.gen_range(0..81);
            let cell = &mut self.grid.cells[idx / 9][idx % 9];
            if cell.value != EMPTY {
                cell.value = EMPTY;
                cell.fixed = false;
                remaining -= 1;
            }
        }
    }

    /// Single-cell legality against the live grid; pure query, the grid
    /// is only written if the caller follows up with [`enter`].
    ///
    /// [`enter`]: PuzzleGenerator::enter
    pub fn is_valid_move(&self, row: usize, col: usize, num: u8) -> bool {
        rules::is_valid_move(&self.grid, row, col, num)
    }

    /// The validated move path: clue cells are read-only, and the value
    /// is committed only when it passes the legality check. Returns
    /// whether the move was applied.
    pub fn enter(&mut self, row: usize, col: usize, num: u8) -> bool {
        if self.grid.cells[row][col].fixed {
            return false;
        }
        if !rules::is_valid_move(&self.grid, row, col, num) {
            return false;
        }
        self.grid.cells[row][col].value = num;
        true
    }

    /// Discards the board wholesale; there is no incremental undo.
    pub fn reset(&mut self) {
        self.grid = Board::empty();
    }

    /// Solver-as-oracle check on a clone of `board`. Only meaningful once
    /// the caller has confirmed no cell is EMPTY; a partial board that
    /// still admits a completion also reports `true` here.
    pub fn is_valid_solution(&mut self, board: &Board) -> bool {
        let mut copy = board.clone();
        solver::solve(&mut copy, &mut self.rng)
    }

    /// The "reveal" path: completes a caller-supplied disposable copy in
    /// place. `false` means no completion exists and the copy is
    /// untouched.
    pub fn solve_into(&mut self, board: &mut Board) -> bool {
        solver::solve(board, &mut self.rng)
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}
