use mullover::samples::Check;
use mullover::{GridResult, ScanResultVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print an instruction trace for a token scan. Goes to stderr so stdout
/// keeps only the answer.
pub fn print_scan(label: &str, res: &ScanResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  {label}"), ansi::CYAN)));

    eprintln!("\n{}", palette.paint("━━━ Instructions ━━━", ansi::GRAY));
    if details.steps.is_empty() {
        eprintln!("{}", palette.dim("  No instructions found"));
    }
    for (idx, step) in details.steps.iter().enumerate() {
        let mark = if step.counted {
            palette.paint("✓", ansi::GREEN)
        } else if step.instruction.product().is_some() {
            palette.paint("✗", ansi::RED)
        } else {
            palette.paint("•", ansi::BLUE)
        };
        let value = match step.instruction.product() {
            Some(p) => palette.paint(format!("= {p}"), if step.counted { ansi::GREEN } else { ansi::GRAY }),
            None => palette.dim(if step.enabled { "enabled" } else { "disabled" }),
        };
        eprintln!(
            "  {} {} {} {} {}",
            palette.paint(format!("[{idx}]"), ansi::GRAY),
            mark,
            palette.bold(step.instruction.to_string()),
            value,
            palette.paint(format!("span {}..{}", step.start, step.end), ansi::YELLOW),
        );
    }

    eprintln!("\n{}", palette.paint("━━━ Summary ━━━", ansi::GRAY));
    eprintln!(
        "  mul: {}  │  do(): {}  │  don't(): {}  │  skipped: {}",
        palette.paint(details.multiplies.to_string(), ansi::BLUE),
        palette.paint(details.enables.to_string(), ansi::BLUE),
        palette.paint(details.disables.to_string(), ansi::BLUE),
        palette.paint(details.skipped.to_string(), ansi::YELLOW),
    );
    eprintln!("  Total: {}", palette.bold(palette.paint(res.total.to_string(), ansi::GREEN)));

    eprintln!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    eprintln!(
        "  Total: {}  │  Lex: {}  │  Fold: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.lex), ansi::CYAN),
        palette.dim(format!("{:?}", details.fold)),
    );
    eprintln!();
}

pub fn print_grid(label: &str, res: &GridResult, color: bool) {
    let palette = ansi::Palette::new(color);
    eprintln!(
        "{} {} {} {}",
        palette.bold(palette.paint(format!("⚙  {label}:"), ansi::CYAN)),
        palette.bold(palette.paint(res.count.to_string(), ansi::GREEN)),
        palette.dim(format!("│ {} cells │", res.cells)),
        palette.dim(format!("{:?}", res.elapsed)),
    );
}

pub fn print_checks(checks: &[Check], color: bool) {
    let palette = ansi::Palette::new(color);
    for check in checks {
        if check.passed() {
            println!("{} {}: {}", palette.paint("✅ pass", ansi::GREEN), check.name, check.actual);
        } else {
            println!(
                "{} {}: expected {}, got {}",
                palette.paint("❌ fail", ansi::RED),
                check.name,
                check.expected,
                check.actual
            );
        }
    }
}
