#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Value of an unfilled cell.
pub const EMPTY: u8 = 0;

/// One cell of the grid. `fixed` marks a clue: a cell the generator left
/// filled, read-only to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub value: u8, // EMPTY or 1..=9
    pub fixed: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self { value: EMPTY, fixed: false }
    }
}

/// A 9x9 Sudoku grid. May be partial (EMPTY cells) during generation or
/// play; a complete grid holds 1..=9 in every cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub cells: [[Cell; 9]; 9],
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [[Cell::default(); 9]; 9] }
    }

    pub fn from_rows(rows: [[u8; 9]; 9]) -> Self {
        let mut b = Self::empty();
        for r in 0..9 {
            for c in 0..9 {
                let v = rows[r][c];
                b.cells[r][c] = Cell { value: v, fixed: v != EMPTY };
            }
        }
        b
    }

    /// Accepts 81 digits with 0/./_ for blanks; whitespace and any other
    /// characters are ignored. Filled cells are marked as clues.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let mut digits = Vec::with_capacity(81);
        for ch in text.chars() {
            match ch {
                '1'..='9' => digits.push(ch as u8 - b'0'),
                '0' | '.' | '_' => digits.push(EMPTY),
                _ => {}
            }
        }
        if digits.len() != 81 {
            anyhow::bail!("expected 81 digits/dots, got {}", digits.len());
        }
        let mut b = Self::empty();
        for r in 0..9 {
            for c in 0..9 {
                let v = digits[r * 9 + c];
                b.cells[r][c] = Cell { value: v, fixed: v != EMPTY };
            }
        }
        Ok(b)
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col].value
    }

    /// True if no cell is EMPTY. Says nothing about rule consistency.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|c| c.value != EMPTY))
    }

    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| c.value != EMPTY)
            .count()
    }

    pub fn row_values(&self, r: usize) -> [u8; 9] {
        let mut a = [EMPTY; 9];
        for c in 0..9 {
            a[c] = self.cells[r][c].value;
        }
        a
    }

    pub fn col_values(&self, c: usize) -> [u8; 9] {
        let mut a = [EMPTY; 9];
        for r in 0..9 {
            a[r] = self.cells[r][c].value;
        }
        a
    }

    /// Values of the box whose top-left cell is (top_row, top_col).
    pub fn box_values(&self, top_row: usize, top_col: usize) -> [u8; 9] {
        let mut a = [EMPTY; 9];
        let mut i = 0;
        for r in top_row..top_row + 3 {
            for c in top_col..top_col + 3 {
                a[i] = self.cells[r][c].value;
                i += 1;
            }
        }
        a
    }

    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .map(|c| if c.value == EMPTY { '.' } else { (b'0' + c.value) as char })
            .collect()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..9 {
            if r % 3 == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for c in 0..9 {
                if c % 3 == 0 {
                    write!(f, "| ")?;
                }
                let v = self.cells[r][c].value;
                write!(f, "{} ", if v == EMPTY { '·' } else { (b'0' + v) as char })?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+-------+-------+-------+")
    }
}
