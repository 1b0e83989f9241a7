//! Scanning engine.
//!
//! This module is the internal entry point for both puzzles. The public API in
//! `src/api.rs` wraps it with options, timing and result structs.
//!
//! ## How the parts work together
//!
//! Corrupted memory (day 3) is a two-stage pipeline:
//!
//! ```text
//! input ── Lexer (lexer.rs) ──▶ Node stream ──▶ fold (evaluate.rs) ──▶ u64
//!          three probes,          ordered by      (enabled, sum)
//!          earliest start wins    start offset     accumulator
//! ```
//!
//! The word grid (day 4) is a single pass over every cell:
//!
//! ```text
//! lines ── Grid::new (grid.rs) ──┬─ word_search.rs  8 rays per cell
//!          rectangular, non-empty │   (Directions set, direction.rs)
//!                                 └─ cross.rs        interior pivots only
//! ```
//!
//! ## Responsibilities by module
//!
//! - `lexer.rs`: finds the earliest of `mul(x,y)`, `do()` and `don't()` from a
//!   cursor and yields them as `Node`s.
//! - `evaluate.rs`: folds a node stream into a sum, honoring `ScanMode`.
//! - `grid.rs`: validated rectangular character grid.
//! - `direction.rs`: the 8 compass directions and a bitflags set of them.
//! - `word_search.rs`: counts a word along straight rays.
//! - `cross.rs`: counts "X" shaped crosses of a 3-letter word.
//! - `metrics.rs`: timing and counters for verbose runs.
//!
//! ## Debugging
//!
//! Everything logs through `tracing`. Run the CLI with
//! `RUST_LOG=mullover=trace` to see each lexed instruction and grid match.

#[path = "engine/cross.rs"]
mod cross;
#[path = "engine/direction.rs"]
mod direction;
#[path = "engine/evaluate.rs"]
mod evaluate;
#[path = "engine/grid.rs"]
mod grid;
#[path = "engine/lexer.rs"]
mod lexer;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/word_search.rs"]
mod word_search;


pub use cross::{CrossPattern, count_crosses};
pub use direction::{Direction, Directions};
pub use evaluate::{ScanMode, TracedStep, evaluate, evaluate_traced};
pub use grid::Grid;
pub use lexer::Lexer;
pub use metrics::ScanMetrics;
pub use word_search::count_word;
