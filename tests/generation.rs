use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, SeedableRng};
use sudogen::{rules, solver, Board, Difficulty, PuzzleGenerator, EMPTY};

fn is_permutation(mut vals: [u8; 9]) -> bool {
    vals.sort_unstable();
    vals == [1, 2, 3, 4, 5, 6, 7, 8, 9]
}

fn assert_units_are_permutations(b: &Board) {
    for i in 0..9 {
        assert!(is_permutation(b.row_values(i)), "row {i} is not a permutation");
        assert!(is_permutation(b.col_values(i)), "col {i} is not a permutation");
    }
    for br in [0, 3, 6] {
        for bc in [0, 3, 6] {
            assert!(
                is_permutation(b.box_values(br, bc)),
                "box at ({br},{bc}) is not a permutation"
            );
        }
    }
}

/// A consistent partial board with no completion: row 0 needs 1 and 2 in
/// its first two cells, but column 0 already holds a 1 and column 1
/// another, leaving cell (0,1) without a candidate after 2 goes to (0,0).
fn unsolvable_board() -> Board {
    let mut rows = [[0u8; 9]; 9];
    rows[0] = [0, 0, 3, 4, 5, 6, 7, 8, 9];
    rows[4][0] = 1;
    rows[8][1] = 1;
    Board::from_rows(rows)
}

#[test]
fn solve_fills_an_empty_grid_completely() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = Board::empty();
    assert!(solver::solve(&mut board, &mut rng));
    assert!(board.is_complete());
    assert_units_are_permutations(&board);
}

#[test]
fn repeated_solves_from_empty_vary() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut first = Board::empty();
    let mut second = Board::empty();
    assert!(solver::solve(&mut first, &mut rng));
    assert!(solver::solve(&mut second, &mut rng));
    assert_ne!(first.to_compact(), second.to_compact());
}

#[test]
fn solve_on_a_complete_board_succeeds_without_mutation() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut board = Board::empty();
    assert!(solver::solve(&mut board, &mut rng));

    let before = board.clone();
    assert!(solver::solve(&mut board, &mut rng));
    assert_eq!(board, before);
}

#[test]
fn failed_solve_restores_the_board_exactly() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut board = unsolvable_board();
    assert!(rules::is_consistent(&board), "givens must not conflict");

    let before = board.clone();
    assert!(!solver::solve(&mut board, &mut rng));
    assert_eq!(board, before);
}

#[test]
fn clue_counts_match_the_difficulty_table() {
    for (difficulty, expected) in [
        (Difficulty::Easy, 30),
        (Difficulty::Medium, 24),
        (Difficulty::Hard, 18),
    ] {
        let mut engine = PuzzleGenerator::new(Some(99));
        engine.create_puzzle(difficulty);
        assert_eq!(engine.grid().filled_count(), expected, "{difficulty:?}");
    }
}

#[test]
fn generated_puzzles_are_consistent_and_clue_marked() {
    let mut engine = PuzzleGenerator::new(Some(13));
    engine.create_puzzle(Difficulty::Medium);
    let grid = engine.grid();

    assert!(rules::is_consistent(grid));
    for row in &grid.cells {
        for cell in row {
            assert_eq!(cell.fixed, cell.value != EMPTY);
        }
    }
}

#[test]
fn same_seed_reproduces_the_same_puzzle() {
    let mut a = PuzzleGenerator::new(Some(42));
    let mut b = PuzzleGenerator::new(Some(42));
    a.create_puzzle(Difficulty::Medium);
    b.create_puzzle(Difficulty::Medium);
    assert_eq!(a.grid(), b.grid());
}

#[test]
fn different_seeds_produce_different_puzzles() {
    let mut a = PuzzleGenerator::new(Some(1));
    let mut b = PuzzleGenerator::new(Some(2));
    a.create_puzzle(Difficulty::Medium);
    b.create_puzzle(Difficulty::Medium);
    assert_ne!(a.grid().to_compact(), b.grid().to_compact());
}

#[test]
fn solution_oracle_accepts_completable_and_rejects_dead_ends() {
    let mut engine = PuzzleGenerator::new(Some(8));

    let mut full = Board::empty();
    let mut rng = StdRng::seed_from_u64(8);
    assert!(solver::solve(&mut full, &mut rng));
    assert!(engine.is_valid_solution(&full));

    assert!(!engine.is_valid_solution(&unsolvable_board()));
}

#[test]
fn reveal_completes_a_generated_puzzle_on_a_copy() {
    let mut engine = PuzzleGenerator::new(Some(77));
    engine.create_puzzle(Difficulty::Hard);

    let puzzle = engine.grid().clone();
    let mut copy = puzzle.clone();
    assert!(engine.solve_into(&mut copy));
    assert!(copy.is_complete());
    assert_units_are_permutations(&copy);

    // The live grid is untouched and every clue survives into the reveal.
    assert_eq!(*engine.grid(), puzzle);
    for r in 0..9 {
        for c in 0..9 {
            if puzzle.cells[r][c].value != EMPTY {
                assert_eq!(copy.cells[r][c].value, puzzle.cells[r][c].value);
            }
        }
    }
}

#[test]
fn end_to_end_generate_then_thin() {
    let mut rng = StdRng::seed_from_u64(123);
    let mut board = Board::empty();
    assert!(solver::solve(&mut board, &mut rng));
    assert_units_are_permutations(&board);

    let mut engine = PuzzleGenerator::new(Some(123));
    engine.create_puzzle(Difficulty::Medium);
    let grid = engine.grid();
    assert_eq!(grid.filled_count(), 24);

    // No remaining clue conflicts with another in its row, column, or box.
    for r in 0..9 {
        for c in 0..9 {
            let v = grid.get(r, c);
            if v != EMPTY {
                let mut probe = grid.clone();
                probe.cells[r][c].value = EMPTY;
                assert!(
                    rules::is_valid_move(&probe, r, c, v),
                    "clue {v} at ({r},{c}) conflicts with another clue"
                );
            }
        }
    }
}
