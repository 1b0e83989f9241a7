use regex::Regex;
use std::fmt;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
pub mod input;
pub mod samples;

pub use api::{
    GridOptions, GridResult, ScanDetails, ScanOptions, ScanResult, ScanResultVerbose, Step, count_crosses,
    count_crosses_with, count_word, count_word_with, instructions, sum_products, sum_products_verbose_with,
    sum_products_with,
};
pub use engine::{CrossPattern, Direction, Directions, Grid, ScanMode};
pub use error::{Error, Result};

// --- Instructions -----------------------------------------------------------

/// An instruction recovered from corrupted memory.
///
/// Instructions are produced by the lexer in order of their start offset and
/// never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `mul(x,y)` with 1-3 digit operands.
    Multiply { x: u64, y: u64 },
    /// `do()`
    Enable,
    /// `don't()`
    Disable,
}

impl Instruction {
    /// The product for a `Multiply`, `None` for the flag instructions.
    pub fn product(&self) -> Option<u64> {
        match *self {
            Instruction::Multiply { x, y } => Some(x * y),
            Instruction::Enable | Instruction::Disable => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Multiply { x, y } => write!(f, "mul({x},{y})"),
            Instruction::Enable => f.write_str("do()"),
            Instruction::Disable => f.write_str("don't()"),
        }
    }
}

// --- Internal types ---------------------------------------------------------

/// Which instruction a probe recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProbeKind {
    Multiply,
    Enable,
    Disable,
}

/// A literal probe: a regular expression searched independently from the
/// lexer cursor. The `Regex` is a static reference created by the `regex!`
/// helper in `src/macros.rs`.
#[derive(Debug)]
pub(crate) struct Probe {
    pub kind: ProbeKind,
    pub regex: &'static Regex,
}

// --- Spans ------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

/// A lexed instruction paired with the byte span it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub range: Range,
    pub instruction: Instruction,
}
