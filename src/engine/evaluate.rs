//! Folding an instruction stream into a sum.
//!
//! ```text
//! Node ──▶ ScanState::apply ──┬─ Multiply: sum += x*y   (if enabled)
//!                             ├─ Enable:   enabled = true
//!                             └─ Disable:  enabled = false
//! ```
//!
//! `ScanMode::Unconditional` keeps `enabled` pinned to `true`, which is the
//! same as running the gated fold over a stream with every `do()`/`don't()`
//! removed.

use crate::{Instruction, Node};
use tracing::debug;

/// How `do()`/`don't()` affect the fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// `don't()` disables later multiplications until the next `do()`.
    #[default]
    Gated,
    /// Every multiplication counts; flag instructions are ignored.
    Unconditional,
}

/// Accumulator for a single fold. Lives only for the duration of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    pub enabled: bool,
    pub sum: u64,
}

impl Default for ScanState {
    fn default() -> Self {
        ScanState { enabled: true, sum: 0 }
    }
}

impl ScanState {
    /// Apply one instruction. Returns `true` when it added to the sum.
    pub fn apply(&mut self, instruction: Instruction, mode: ScanMode) -> bool {
        match (instruction, mode) {
            (Instruction::Multiply { x, y }, _) => {
                if self.enabled {
                    self.sum += x * y;
                }
                self.enabled
            }
            (Instruction::Enable | Instruction::Disable, ScanMode::Unconditional) => false,
            (Instruction::Enable, ScanMode::Gated) => {
                self.enabled = true;
                false
            }
            (Instruction::Disable, ScanMode::Gated) => {
                self.enabled = false;
                false
            }
        }
    }
}

/// One applied node and what it did, for verbose reports.
#[derive(Debug, Clone, Copy)]
pub struct TracedStep {
    pub node: Node,
    pub counted: bool,
    /// Flag state after the node was applied.
    pub enabled: bool,
}

pub fn evaluate(nodes: impl IntoIterator<Item = Node>, mode: ScanMode) -> u64 {
    let state = nodes.into_iter().fold(ScanState::default(), |mut state, node| {
        state.apply(node.instruction, mode);
        state
    });
    debug!(?mode, sum = state.sum, "evaluated instruction stream");
    state.sum
}

/// Like [`evaluate`], but also records every step.
pub fn evaluate_traced(nodes: impl IntoIterator<Item = Node>, mode: ScanMode) -> (u64, Vec<TracedStep>) {
    let mut state = ScanState::default();
    let steps: Vec<TracedStep> = nodes
        .into_iter()
        .map(|node| {
            let counted = state.apply(node.instruction, mode);
            TracedStep { node, counted, enabled: state.enabled }
        })
        .collect();
    debug!(?mode, sum = state.sum, steps = steps.len(), "evaluated instruction stream (traced)");
    (state.sum, steps)
}
