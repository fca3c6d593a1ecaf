pub mod board;
pub mod generator;
pub mod logger;
pub mod rules;
pub mod solver;

pub use board::{Board, Cell, EMPTY};
pub use generator::{Difficulty, PuzzleGenerator};
pub use rules::is_valid_move;
pub use solver::solve;
