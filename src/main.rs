mod logging;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mullover::samples::{CROSS_WORD, WORD};
use mullover::{
    CrossPattern, Directions, Grid, GridOptions, ScanMode, ScanOptions, count_crosses_with, count_word_with, input,
    sum_products_verbose_with, sum_products_with,
};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Advent of Code 2024 scanners: corrupted memory (day 3) and word search (day 4).
///
/// Answers are printed to stdout, one per line. Reports and logs go to stderr.
///
/// Exit codes: 0 success, 1 input unavailable or invalid, 2 invalid arguments.
#[derive(Debug, Parser)]
#[command(name = "mullover", version)]
struct Cli {
    /// Print a trace of each scan to stderr and log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Force ANSI color in reports.
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color in reports.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sum the mul(x,y) instructions in a corrupted memory dump.
    Mul {
        file: PathBuf,
        /// Ignore do()/don't() and count every multiplication.
        #[arg(long)]
        unconditional: bool,
    },
    /// Count a word along straight lines in a word search.
    Word {
        file: PathBuf,
        #[arg(long, default_value = WORD)]
        word: String,
        #[arg(long, value_enum, default_value_t = DirectionSet::All)]
        directions: DirectionSet,
    },
    /// Count "X" crosses of a 3-letter word in a word search.
    Cross {
        file: PathBuf,
        #[arg(long, default_value = CROSS_WORD)]
        word: String,
    },
    /// Both parts of day 3.
    Day3 { file: PathBuf },
    /// Both parts of day 4.
    Day4 { file: PathBuf },
    /// Run every scanner on the published samples.
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DirectionSet {
    All,
    Orthogonal,
    Diagonal,
}

impl From<DirectionSet> for Directions {
    fn from(set: DirectionSet) -> Self {
        match set {
            DirectionSet::All => Directions::all(),
            DirectionSet::Orthogonal => Directions::ORTHOGONAL,
            DirectionSet::Diagonal => Directions::DIAGONAL,
        }
    }
}

struct Reporter {
    verbose: bool,
    color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let color = if cli.color {
        true
    } else if cli.no_color {
        false
    } else {
        io::stderr().is_terminal()
    };
    let reporter = Reporter { verbose: cli.verbose, color };

    match run(&cli.command, &reporter) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(command: &Command, reporter: &Reporter) -> Result<ExitCode> {
    match command {
        Command::Mul { file, unconditional } => {
            let text = load_text(file)?;
            let mode = if *unconditional { ScanMode::Unconditional } else { ScanMode::Gated };
            println!("{}", scan_memory(&text, mode, reporter));
        }
        Command::Word { file, word, directions } => {
            let grid = load_grid(file)?;
            println!("{}", search_word(&grid, word, (*directions).into(), reporter)?);
        }
        Command::Cross { file, word } => {
            let grid = load_grid(file)?;
            println!("{}", search_crosses(&grid, word, reporter)?);
        }
        Command::Day3 { file } => {
            let text = load_text(file)?;
            println!("{}", scan_memory(&text, ScanMode::Unconditional, reporter));
            println!("{}", scan_memory(&text, ScanMode::Gated, reporter));
        }
        Command::Day4 { file } => {
            let grid = load_grid(file)?;
            println!("{}", search_word(&grid, WORD, Directions::all(), reporter)?);
            println!("{}", search_crosses(&grid, CROSS_WORD, reporter)?);
        }
        Command::Check => {
            let checks = mullover::samples::run_checks().context("sample check could not run")?;
            report::print_checks(&checks, reporter.color);
            if !checks.iter().all(|c| c.passed()) {
                return Ok(ExitCode::from(1));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn load_text(file: &Path) -> Result<String> {
    input::read_text(file).with_context(|| format!("corrupted memory unavailable ({})", file.display()))
}

fn load_grid(file: &Path) -> Result<Grid> {
    input::read_grid(file).with_context(|| format!("word search unavailable ({})", file.display()))
}

fn scan_memory(text: &str, mode: ScanMode, reporter: &Reporter) -> u64 {
    let options = ScanOptions { mode };
    if !reporter.verbose {
        return sum_products_with(text, &options).total;
    }

    let res = sum_products_verbose_with(text, &options);
    let label = match mode {
        ScanMode::Gated => "mul (gated by do/don't)",
        ScanMode::Unconditional => "mul (unconditional)",
    };
    report::print_scan(label, &res, reporter.color);
    res.total
}

fn search_word(grid: &Grid, word: &str, directions: Directions, reporter: &Reporter) -> Result<usize> {
    let res = count_word_with(grid, word, &GridOptions { directions })
        .with_context(|| format!("cannot search for {word:?}"))?;
    if reporter.verbose {
        report::print_grid(&format!("word {word}"), &res, reporter.color);
    }
    Ok(res.count)
}

fn search_crosses(grid: &Grid, word: &str, reporter: &Reporter) -> Result<usize> {
    let pattern = CrossPattern::new(word).with_context(|| format!("cannot search for crosses of {word:?}"))?;
    let res = count_crosses_with(grid, &pattern);
    if reporter.verbose {
        report::print_grid(&format!("cross {word}"), &res, reporter.color);
    }
    Ok(res.count)
}
