//! Instruction lexer for corrupted memory.
//!
//! The lexer runs three independent probes over the input, one per
//! instruction kind:
//!
//! ```text
//! Multiply  mul\(([0-9]{1,3}),([0-9]{1,3})\)
//! Enable    do\(\)
//! Disable   don't\(\)
//! ```
//!
//! At each step the probe whose next match starts earliest wins, its match is
//! consumed and the cursor moves past it. Anything between matches is inert,
//! including near-misses such as `mul ( 2 , 4 )`, `mul[3,7]` or `mul(1234,5)`.
//!
//! The three literal prefixes (`mul(`, `do(`, `don't(`) never match at the same
//! offset, so there is no tie to break. Ties would still resolve by probe
//! order, which keeps output deterministic.
//!
//! ## Cached probe results
//!
//! Each probe remembers its last match. A cached match that still starts at or
//! after the cursor is exactly what a fresh search would return (no probe
//! looks behind the cursor), so only stale probes are searched again. This
//! keeps a full scan linear in the input length.

use crate::{Instruction, Node, Probe, ProbeKind, Range};
use regex::Match;
use tracing::trace;

const PROBE_COUNT: usize = 3;

fn probes() -> [Probe; PROBE_COUNT] {
    [
        probe!(Multiply, r"mul\(([0-9]{1,3}),([0-9]{1,3})\)"),
        probe!(Enable, r"do\(\)"),
        probe!(Disable, r"don't\(\)"),
    ]
}

/// Cached result of one probe.
#[derive(Debug, Clone, Copy)]
enum Slot<'a> {
    /// Not searched yet.
    Unknown,
    Found(Match<'a>),
    /// No match left anywhere after the cursor.
    Exhausted,
}

/// Iterator over the instructions hidden in `input`, in start order.
///
/// ```text
/// "xmul(2,4)&don't()_mul(5,5)"
///   ^^^^^^^^ ^^^^^^^ ^^^^^^^^
///   Multiply Disable Multiply
/// ```
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    cursor: usize,
    probes: [Probe; PROBE_COUNT],
    slots: [Slot<'a>; PROBE_COUNT],
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, cursor: 0, probes: probes(), slots: [Slot::Unknown; PROBE_COUNT] }
    }

    /// Bring every stale slot up to date with the cursor.
    fn refresh(&mut self) {
        for (slot, probe) in self.slots.iter_mut().zip(&self.probes) {
            let stale = match slot {
                Slot::Unknown => true,
                Slot::Found(m) => m.start() < self.cursor,
                Slot::Exhausted => false,
            };
            if stale {
                *slot = match probe.regex.find_at(self.input, self.cursor) {
                    Some(m) => Slot::Found(m),
                    None => Slot::Exhausted,
                };
            }
        }
    }

    /// Index of the probe with the earliest pending match.
    fn earliest(&self) -> Option<(usize, Match<'a>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Slot::Found(m) => Some((idx, *m)),
                _ => None,
            })
            .min_by_key(|(idx, m)| (m.start(), *idx))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        loop {
            self.refresh();
            let (idx, m) = self.earliest()?;
            self.cursor = m.end();

            // A match that fails to decode is skipped like any other noise.
            let Some(instruction) = decode(self.probes[idx].kind, m.as_str()) else {
                continue;
            };

            let node = Node { range: Range { start: m.start(), end: m.end() }, instruction };
            trace!(start = node.range.start, end = node.range.end, %instruction, "lexed instruction");
            return Some(node);
        }
    }
}

fn decode(kind: ProbeKind, text: &str) -> Option<Instruction> {
    match kind {
        ProbeKind::Multiply => {
            let (x, y) = text.strip_prefix("mul(")?.strip_suffix(')')?.split_once(',')?;
            Some(Instruction::Multiply { x: x.parse().ok()?, y: y.parse().ok()? })
        }
        ProbeKind::Enable => Some(Instruction::Enable),
        ProbeKind::Disable => Some(Instruction::Disable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Instruction> {
        Lexer::new(input).map(|n| n.instruction).collect()
    }

    #[test]
    fn yields_instructions_in_start_order() {
        let got = lex("xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))");
        assert_eq!(
            got,
            vec![
                Instruction::Multiply { x: 2, y: 4 },
                Instruction::Disable,
                Instruction::Multiply { x: 5, y: 5 },
                Instruction::Multiply { x: 11, y: 8 },
                Instruction::Enable,
                Instruction::Multiply { x: 8, y: 5 },
            ]
        );
    }

    #[test]
    fn spans_cover_the_consumed_text() {
        let input = "..do()mul(123,4)";
        let nodes: Vec<Node> = Lexer::new(input).collect();
        assert_eq!(nodes.len(), 2);
        assert_eq!(&input[nodes[0].range.start..nodes[0].range.end], "do()");
        assert_eq!(&input[nodes[1].range.start..nodes[1].range.end], "mul(123,4)");
    }

    #[test]
    fn near_misses_are_inert() {
        for input in ["mul ( 2 , 4 )", "mul[3,7]", "mul(4*", "mul(6,9!", "?(12,34)", "mul(1234,5)", "mul(,5)", "do ()"] {
            assert!(lex(input).is_empty(), "expected no instructions in {input:?}");
        }
    }

    #[test]
    fn operands_longer_than_three_digits_do_not_match_a_suffix() {
        // "mul(1234,5)" must not be read as "mul(234,5)": the prefix is "mul(1".
        assert!(lex("mul(1234,5)").is_empty());
        assert_eq!(lex("mul(123,4567)mul(1,1)"), vec![Instruction::Multiply { x: 1, y: 1 }]);
    }

    #[test]
    fn unicode_digits_are_not_operands() {
        assert!(lex("mul(٣,4)").is_empty());
    }

    #[test]
    fn adjacent_instructions_are_all_found() {
        assert_eq!(
            lex("don't()do()mul(1,2)don't()"),
            vec![
                Instruction::Disable,
                Instruction::Enable,
                Instruction::Multiply { x: 1, y: 2 },
                Instruction::Disable,
            ]
        );
    }

    #[test]
    fn restarting_inside_a_broken_match_finds_the_next_one() {
        // The first "mul(" never closes; the real instruction starts inside it.
        assert_eq!(lex("mul(3,mul(2,2)"), vec![Instruction::Multiply { x: 2, y: 2 }]);
    }
}
