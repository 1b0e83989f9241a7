//! "X" shaped crosses of a 3-letter word.
//!
//! A pivot cell matches when it holds the middle letter and both diagonals
//! through it read the word forwards or backwards:
//!
//! ```text
//! M . S      TL . TR
//! . A .      .  C  .      TL-C-BR and TR-C-BL
//! M . S      BL . BR
//! ```
//!
//! For `MAS` that leaves exactly four corner arrangements
//! `(TL, TR, BL, BR)`: `MSMS`, `SMSM`, `SSMM` and `MMSS`.
//!
//! Border cells are never pivots since they lack a diagonal neighbour, so
//! grids smaller than 3x3 have no matches at all.

use super::Grid;
use crate::{Error, Result};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossPattern {
    first: char,
    center: char,
    last: char,
}

impl CrossPattern {
    /// Pattern for a word of exactly three characters.
    pub fn new(word: &str) -> Result<Self> {
        let mut chars = word.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(center), Some(last), None) => Ok(CrossPattern { first, center, last }),
            _ => Err(Error::CrossWord { len: word.chars().count() }),
        }
    }

    /// One diagonal arm, read from one end to the other through the pivot.
    fn arm_matches(&self, a: char, b: char) -> bool {
        (a == self.first && b == self.last) || (a == self.last && b == self.first)
    }

    /// `(row, col)` must be an interior cell.
    fn matches_at(&self, grid: &Grid, row: usize, col: usize) -> bool {
        if grid.at(row, col) != self.center {
            return false;
        }
        let top_left = grid.at(row - 1, col - 1);
        let top_right = grid.at(row - 1, col + 1);
        let bottom_left = grid.at(row + 1, col - 1);
        let bottom_right = grid.at(row + 1, col + 1);

        self.arm_matches(top_left, bottom_right) && self.arm_matches(top_right, bottom_left)
    }
}

pub fn count_crosses(grid: &Grid, pattern: &CrossPattern) -> usize {
    if grid.rows() < 3 || grid.cols() < 3 {
        return 0;
    }

    let mut total = 0;
    for row in 1..grid.rows() - 1 {
        for col in 1..grid.cols() - 1 {
            if pattern.matches_at(grid, row, col) {
                trace!(row, col, "cross match");
                total += 1;
            }
        }
    }

    debug!(rows = grid.rows(), cols = grid.cols(), total, "cross search finished");
    total
}
