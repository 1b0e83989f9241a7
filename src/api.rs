use crate::engine::{self, CrossPattern, Directions, Grid, Lexer, ScanMetrics, ScanMode, TracedStep};
use crate::{Error, Instruction, Node, Result};
use std::time::{Duration, Instant};

/// Options for scanning corrupted memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Whether `do()`/`don't()` gate multiplications.
    pub mode: ScanMode,
}

impl ScanOptions {
    pub fn unconditional() -> Self {
        ScanOptions { mode: ScanMode::Unconditional }
    }
}

/// Options for the straight-line word search.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridOptions {
    /// Directions a word may be read in. Defaults to all eight.
    pub directions: Directions,
}

/// Result from [`sum_products_with`].
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Sum of the counted products.
    pub total: u64,
    /// Total elapsed time spent lexing and folding.
    pub elapsed: Duration,
}

/// One instruction as it was applied, for verbose reports.
///
/// `start`/`end` are byte offsets into the scanned text.
#[derive(Debug, Clone)]
pub struct Step {
    pub instruction: Instruction,
    pub start: usize,
    pub end: usize,
    /// Whether this step added to the sum.
    pub counted: bool,
    /// Flag state after the step.
    pub enabled: bool,
}

/// Additional details returned by [`sum_products_verbose_with`].
#[derive(Debug, Clone)]
pub struct ScanDetails {
    pub total: Duration,
    pub lex: Duration,
    pub fold: Duration,
    pub multiplies: usize,
    pub enables: usize,
    pub disables: usize,
    /// Multiplications seen while disabled.
    pub skipped: usize,
    pub steps: Vec<Step>,
}

/// Result from [`sum_products_verbose_with`].
#[derive(Debug, Clone)]
pub struct ScanResultVerbose {
    pub total: u64,
    pub elapsed: Duration,
    pub details: ScanDetails,
}

/// Result from [`count_word_with`] and [`count_crosses_with`].
#[derive(Debug, Clone)]
pub struct GridResult {
    pub count: usize,
    /// Number of cells in the searched grid.
    pub cells: usize,
    pub elapsed: Duration,
}

/// Sum the enabled products in `text`, honoring `do()`/`don't()`.
///
/// # Example
/// ```
/// use mullover::sum_products;
///
/// assert_eq!(sum_products("mul(2,4)don't()mul(5,5)do()mul(8,5)"), 48);
/// ```
pub fn sum_products(text: &str) -> u64 {
    sum_products_with(text, &ScanOptions::default()).total
}

/// Sum the products in `text` under the given `options`.
pub fn sum_products_with(text: &str, options: &ScanOptions) -> ScanResult {
    let start = Instant::now();
    let total = engine::evaluate(Lexer::new(text), options.mode);
    ScanResult { total, elapsed: start.elapsed() }
}

/// Sum the products in `text` and return the instruction trace.
///
/// The default [`sum_products_with`] path does not allocate the trace.
pub fn sum_products_verbose_with(text: &str, options: &ScanOptions) -> ScanResultVerbose {
    let start = Instant::now();
    let nodes: Vec<Node> = Lexer::new(text).collect();
    let lex = start.elapsed();

    let fold_start = Instant::now();
    let (total, traced) = engine::evaluate_traced(nodes, options.mode);
    let mut metrics = ScanMetrics { lex, fold: fold_start.elapsed(), ..ScanMetrics::default() };
    metrics.count_steps(&traced);
    metrics.total = start.elapsed();

    let details = ScanDetails {
        total: metrics.total,
        lex: metrics.lex,
        fold: metrics.fold,
        multiplies: metrics.multiplies,
        enables: metrics.enables,
        disables: metrics.disables,
        skipped: metrics.skipped,
        steps: traced.iter().map(traced_to_step).collect(),
    };

    ScanResultVerbose { total, elapsed: metrics.total, details }
}

/// Every instruction in `text`, in order of appearance.
pub fn instructions(text: &str) -> Vec<Instruction> {
    Lexer::new(text).map(|node| node.instruction).collect()
}

/// Count placements of `word` along straight lines in all eight directions.
///
/// # Example
/// ```
/// use mullover::{Grid, count_word};
///
/// let grid: Grid = "XMAS\nSAMX".parse().unwrap();
/// assert_eq!(count_word(&grid, "XMAS").unwrap(), 2);
/// ```
pub fn count_word(grid: &Grid, word: &str) -> Result<usize> {
    count_word_with(grid, word, &GridOptions::default()).map(|res| res.count)
}

pub fn count_word_with(grid: &Grid, word: &str, options: &GridOptions) -> Result<GridResult> {
    let word: Vec<char> = word.chars().collect();
    if word.is_empty() {
        return Err(Error::EmptyWord);
    }

    let start = Instant::now();
    let count = engine::count_word(grid, &word, options.directions);
    Ok(grid_result(grid, count, start))
}

/// Count "X" crosses of a 3-letter `word` (e.g. `"MAS"`).
pub fn count_crosses(grid: &Grid, word: &str) -> Result<usize> {
    let pattern = CrossPattern::new(word)?;
    Ok(count_crosses_with(grid, &pattern).count)
}

pub fn count_crosses_with(grid: &Grid, pattern: &CrossPattern) -> GridResult {
    let start = Instant::now();
    let count = engine::count_crosses(grid, pattern);
    grid_result(grid, count, start)
}

fn grid_result(grid: &Grid, count: usize, start: Instant) -> GridResult {
    GridResult { count, cells: grid.rows() * grid.cols(), elapsed: start.elapsed() }
}

fn traced_to_step(step: &TracedStep) -> Step {
    Step {
        instruction: step.node.instruction,
        start: step.node.range.start,
        end: step.node.range.end,
        counted: step.counted,
        enabled: step.enabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::{SAMPLE_GATED, SAMPLE_GRID, SAMPLE_UNCONDITIONAL};

    #[test]
    fn sum_products_with_reports_total() {
        let res = sum_products_with(SAMPLE_UNCONDITIONAL, &ScanOptions::unconditional());
        assert_eq!(res.total, 161);
        assert!(res.elapsed >= Duration::ZERO);
    }

    #[test]
    fn sum_products_defaults_to_gated() {
        assert_eq!(sum_products(SAMPLE_GATED), 48);
    }

    #[test]
    fn verbose_scan_includes_trace_and_counts() {
        let res = sum_products_verbose_with(SAMPLE_GATED, &ScanOptions::default());

        assert_eq!(res.total, 48);
        assert_eq!(res.elapsed, res.details.total);
        assert_eq!(res.details.multiplies, 4);
        assert_eq!(res.details.enables, 1);
        assert_eq!(res.details.disables, 1);
        assert_eq!(res.details.skipped, 2);
        assert_eq!(res.details.steps.len(), 6);

        let first = &res.details.steps[0];
        assert_eq!(&SAMPLE_GATED[first.start..first.end], "mul(2,4)");
        assert!(first.counted);
    }

    #[test]
    fn instructions_lists_the_stream() {
        assert_eq!(
            instructions("do()?mul(3,4)"),
            vec![Instruction::Enable, Instruction::Multiply { x: 3, y: 4 }]
        );
    }

    #[test]
    fn count_word_with_reports_cells() {
        let grid = Grid::new(SAMPLE_GRID).unwrap();
        let res = count_word_with(&grid, "XMAS", &GridOptions::default()).unwrap();
        assert_eq!(res.count, 18);
        assert_eq!(res.cells, 100);
    }

    #[test]
    fn count_word_rejects_empty_word() {
        let grid = Grid::new(SAMPLE_GRID).unwrap();
        assert!(matches!(count_word(&grid, ""), Err(Error::EmptyWord)));
    }

    #[test]
    fn count_crosses_validates_word() {
        let grid = Grid::new(SAMPLE_GRID).unwrap();
        assert_eq!(count_crosses(&grid, "MAS").unwrap(), 9);
        assert!(matches!(count_crosses(&grid, "XMAS"), Err(Error::CrossWord { len: 4 })));
    }
}
