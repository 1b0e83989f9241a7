//! Published puzzle samples and a self-check over them.
//!
//! Each [`Check`] runs one scanner on a sample and compares the answer with
//! the value from the puzzle text. The CLI `check` subcommand prints these.

use crate::{Grid, Result, ScanOptions, count_crosses, count_word, sum_products_with};
use tracing::debug;

/// Day 3, part 1 sample.
pub const SAMPLE_UNCONDITIONAL: &str = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";

/// Day 3, part 2 sample.
pub const SAMPLE_GATED: &str = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

/// Day 4 sample word search.
pub const SAMPLE_GRID: [&str; 10] = [
    "MMMSXXMASM",
    "MSAMXMSMSA",
    "AMXSXMAAMM",
    "MSAMASMSMX",
    "XMASAMXAMM",
    "XXAMMXXAMA",
    "SMSMSASXSS",
    "SAXAMASAAA",
    "MAMMMXMMMM",
    "MXMXAXMASX",
];

/// Word searched for in day 4, part 1.
pub const WORD: &str = "XMAS";

/// Word forming the cross in day 4, part 2.
pub const CROSS_WORD: &str = "MAS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: &'static str,
    pub expected: u64,
    pub actual: u64,
}

impl Check {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Run every sample check.
pub fn run_checks() -> Result<Vec<Check>> {
    let grid = Grid::new(SAMPLE_GRID)?;

    let checks = vec![
        Check {
            name: "day 3 part 1 (unconditional mul)",
            expected: 161,
            actual: sum_products_with(SAMPLE_UNCONDITIONAL, &ScanOptions::unconditional()).total,
        },
        Check {
            name: "day 3 part 2 (gated mul)",
            expected: 48,
            actual: sum_products_with(SAMPLE_GATED, &ScanOptions::default()).total,
        },
        Check { name: "day 4 part 1 (XMAS word search)", expected: 18, actual: count_word(&grid, WORD)? as u64 },
        Check { name: "day 4 part 2 (X-MAS crosses)", expected: 9, actual: count_crosses(&grid, CROSS_WORD)? as u64 },
    ];

    for check in &checks {
        debug!(name = check.name, expected = check.expected, actual = check.actual, "sample check");
    }
    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_check_passes() {
        let checks = run_checks().unwrap();
        assert_eq!(checks.len(), 4);
        for check in checks {
            assert!(check.passed(), "{} expected {} got {}", check.name, check.expected, check.actual);
        }
    }

    #[test]
    fn failed_check_is_reported() {
        let check = Check { name: "x", expected: 1, actual: 2 };
        assert!(!check.passed());
    }
}
