//! Scan metrics.
//!
//! Small structs used to observe a run for verbose reports. They are only
//! filled by `sum_products_verbose_with` in `api.rs`; the plain entry points
//! skip them entirely.

use super::TracedStep;
use crate::Instruction;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct ScanMetrics {
    /// Total elapsed time for the scan.
    pub total: Duration,
    /// Time spent lexing the input into instructions.
    pub lex: Duration,
    /// Time spent folding instructions into the sum.
    pub fold: Duration,
    pub multiplies: usize,
    pub enables: usize,
    pub disables: usize,
    /// Multiplications that were skipped while disabled.
    pub skipped: usize,
}

impl ScanMetrics {
    pub fn count_steps(&mut self, steps: &[TracedStep]) {
        for step in steps {
            match step.node.instruction {
                Instruction::Multiply { .. } => {
                    self.multiplies += 1;
                    if !step.counted {
                        self.skipped += 1;
                    }
                }
                Instruction::Enable => self.enables += 1,
                Instruction::Disable => self.disables += 1,
            }
        }
    }
}
