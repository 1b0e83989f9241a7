//! Rectangular character grid.
//!
//! ## Invariants
//!
//! - At least one row and one column.
//! - Every row has exactly `cols` characters.
//! - `cells` is row-major, so `cells[row * cols + col]` is the cell at
//!   `(row, col)` with the origin at the top-left.
//!
//! Construction is the only place these are checked. Scanners rely on them for
//! their offset arithmetic.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from its rows.
    ///
    /// Fails with [`Error::EmptyGrid`] when there are no rows or the rows are
    /// empty, and with [`Error::RaggedGrid`] when a row's length differs from
    /// the first row's.
    pub fn new<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for (row, line) in lines.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(line.as_ref().chars());
            let found = cells.len() - before;

            if row == 0 {
                cols = found;
            } else if found != cols {
                return Err(Error::RaggedGrid { row, expected: cols, found });
            }
            rows += 1;
        }

        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid);
        }

        Ok(Grid { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Character at `(row, col)`, or `None` outside the grid.
    ///
    /// Signed coordinates let callers step along a direction without checking
    /// for underflow first.
    pub fn get(&self, row: isize, col: isize) -> Option<char> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Character at an in-bounds `(row, col)`.
    pub(crate) fn at(&self, row: usize, col: usize) -> char {
        self.cells[row * self.cols + col]
    }

    /// All coordinates in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
    }
}

/// Parses one row per line. Trailing blank lines are ignored, blank lines
/// inside the grid are not.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Grid::new(s.trim_end_matches(['\n', '\r']).lines())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.cells.chunks(self.cols).enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_row_major_cells() {
        let grid = Grid::new(["abc", "def"]).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.get(0, 0), Some('a'));
        assert_eq!(grid.get(1, 2), Some('f'));
        assert_eq!(grid.at(1, 0), 'd');
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let grid = Grid::new(["ab", "cd"]).unwrap();
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn rejects_empty_grids() {
        assert!(matches!(Grid::new(Vec::<String>::new()), Err(Error::EmptyGrid)));
        assert!(matches!(Grid::new(["", ""]), Err(Error::EmptyGrid)));
        assert!(matches!("".parse::<Grid>(), Err(Error::EmptyGrid)));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Grid::new(["abc", "de", "fgh"]).unwrap_err();
        assert!(matches!(err, Error::RaggedGrid { row: 1, expected: 3, found: 2 }));
    }

    #[test]
    fn rows_are_measured_in_chars_not_bytes() {
        let grid = Grid::new(["é1", "ab"]).unwrap();
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(0, 0), Some('é'));
    }

    #[test]
    fn from_str_ignores_trailing_newlines_only() {
        let grid: Grid = "ab\r\ncd\n\n".parse().unwrap();
        assert_eq!(grid.rows(), 2);
        assert!(matches!("ab\n\ncd".parse::<Grid>(), Err(Error::RaggedGrid { row: 1, .. })));
    }

    #[test]
    fn display_round_trips_rows() {
        let grid: Grid = "ab\ncd".parse().unwrap();
        assert_eq!(grid.to_string(), "ab\ncd");
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Grid::new(["ab", "cd"]).unwrap();
        let got: Vec<_> = grid.positions().collect();
        assert_eq!(got, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
