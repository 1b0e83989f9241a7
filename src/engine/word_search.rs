//! Straight-line word search.
//!
//! For every cell and every allowed direction, the word is compared against the
//! cells along the ray starting at that cell:
//!
//! ```text
//! (r, c) ──▶ (r+dr, c+dc) ──▶ (r+2dr, c+2dc) ──▶ ...   len(word) cells
//! ```
//!
//! A placement counts when all cells are in bounds and match. Placements are
//! counted independently, so overlapping and reversed occurrences each add one.
//! Cost is `rows * cols * |directions| * len(word)` in the worst case; cells
//! that do not hold the first letter are skipped up front.

use super::{Direction, Directions, Grid};
use tracing::{debug, trace};

/// Count placements of `word` in `grid`. `word` must not be empty.
pub fn count_word(grid: &Grid, word: &[char], directions: Directions) -> usize {
    let Some(&first) = word.first() else {
        return 0;
    };

    let mut total = 0;
    for (row, col) in grid.positions() {
        if grid.at(row, col) != first {
            continue;
        }
        for direction in directions.directions() {
            if reads_along(grid, (row, col), direction, word) {
                trace!(row, col, %direction, "word match");
                total += 1;
            }
        }
    }

    debug!(rows = grid.rows(), cols = grid.cols(), word_len = word.len(), total, "word search finished");
    total
}

fn reads_along(grid: &Grid, (row, col): (usize, usize), direction: Direction, word: &[char]) -> bool {
    let (dr, dc) = direction.offset();
    let (row, col) = (row as isize, col as isize);
    word.iter().zip(0isize..).all(|(&ch, step)| grid.get(row + dr * step, col + dc * step) == Some(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn finds_words_in_every_direction() {
        // XMAS radiates from the centre in all 8 directions.
        let grid = Grid::new([
            "S..S..S", //
            ".A.A.A.",
            "..MMM..",
            "SAMXMAS",
            "..MMM..",
            ".A.A.A.",
            "S..S..S",
        ])
        .unwrap();
        assert_eq!(count_word(&grid, &chars("XMAS"), Directions::all()), 8);
        assert_eq!(count_word(&grid, &chars("XMAS"), Directions::ORTHOGONAL), 4);
        assert_eq!(count_word(&grid, &chars("XMAS"), Directions::DIAGONAL), 4);
        assert_eq!(count_word(&grid, &chars("XMAS"), Directions::EAST), 1);
    }

    #[test]
    fn rays_stop_at_the_border() {
        let grid = Grid::new(["XMA"]).unwrap();
        assert_eq!(count_word(&grid, &chars("XMAS"), Directions::all()), 0);
    }

    #[test]
    fn palindromes_count_once_per_direction() {
        let grid = Grid::new(["ABA"]).unwrap();
        // Read east from the left A and west from the right A.
        assert_eq!(count_word(&grid, &chars("ABA"), Directions::all()), 2);
    }

    #[test]
    fn single_letter_words_match_once_per_direction() {
        let grid = Grid::new(["X"]).unwrap();
        assert_eq!(count_word(&grid, &chars("X"), Directions::all()), 8);
    }

    #[test]
    fn empty_word_never_matches() {
        let grid = Grid::new(["X"]).unwrap();
        assert_eq!(count_word(&grid, &[], Directions::all()), 0);
    }
}
