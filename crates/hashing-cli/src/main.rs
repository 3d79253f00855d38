//! Arrays-and-hashing CLI
//!
//! Usage: hashing [OPTIONS] <COMMAND>
//!
//! Example:
//!   hashing contains-duplicate 1 2 3 1
//!   hashing two-sum --target 9 2 7 11 15
//!   hashing anagram anagram nagaram
//!   hashing samples --problem 242
//!
//! Results go to stdout; diagnostics go through `tracing` (set `RUST_LOG` or
//! pass `--verbose` for per-case timings).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hashing_core::app::cases::{sample_cases, sample_cases_for};
use hashing_core::app::runner::{RunOptions, first_failure, run_cases, summarize};
use hashing_core::{Input, ProblemKind, SUPPORTED_PROBLEMS, Strategy};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hashing", version, about = "Solve arrays-and-hashing exercises")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Algorithm family to use
    #[arg(short, long, global = true, value_enum, default_value_t = StrategyArg::Scan)]
    strategy: StrategyArg,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored log output (also honors `NO_COLOR`)
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether any value appears more than once (217)
    ContainsDuplicate {
        /// Values to scan
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Find two positions whose values sum to the target (1)
    TwoSum {
        /// Required sum
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,

        /// Values to scan
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Check whether the second word is a rearrangement of the first (242)
    Anagram {
        /// First word
        a: String,
        /// Second word
        b: String,
    },

    /// Run the built-in sample cases
    Samples {
        /// Only run cases for this problem (name or number)
        #[arg(short, long)]
        problem: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Single pass with a hashed lookup structure
    Scan,
    /// Counting array for lowercase anagrams
    Alphabet,
    /// Full-pass and pairwise reference routines
    Reference,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scan => Strategy::Scan,
            StrategyArg::Alphabet => Strategy::FixedAlphabet,
            StrategyArg::Reference => Strategy::Reference,
        }
    }
}

/// Install the tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise `info`, or `debug` with `--verbose`.
/// Logs go to stderr so stdout carries only results.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "info" })
    });

    let use_ansi = !no_color && std::env::var_os("NO_COLOR").is_none();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn solve_one(input: Input, strategy: Strategy) {
    debug!(problem = %input.kind(), ?strategy, "solving");

    let start = Instant::now();
    let outcome = input.solve_with(strategy);
    let elapsed = start.elapsed();

    println!("{}", outcome);
    debug!(?elapsed, "solved");
}

fn run_samples(problem: Option<&str>, strategy: Strategy) -> Result<()> {
    let cases = match problem {
        Some(name) => {
            let kind: ProblemKind = name.parse().with_context(|| {
                format!("Supported problems: {:?}", SUPPORTED_PROBLEMS)
            })?;
            sample_cases_for(kind)
        }
        None => sample_cases(),
    };

    info!("Running {} sample case(s)...", cases.len());
    let start = Instant::now();
    let reports = run_cases(&cases, RunOptions::default().with_strategy(strategy));
    let elapsed = start.elapsed();

    let mut current: Option<ProblemKind> = None;
    for report in &reports {
        if current != Some(report.kind) {
            println!("{}. {}", report.kind.number(), report.kind);
            current = Some(report.kind);
        }
        let status = if report.passed() { "ok" } else { "FAILED" };
        println!(
            "  {:<12} {:<8} {} ({:.3} ms)",
            report.name,
            status,
            report.actual(),
            report.elapsed.as_secs_f64() * 1000.0
        );
    }

    let summary = summarize(&reports);
    println!(
        "{} passed, {} failed in {:.3} ms",
        summary.passed,
        summary.failed(),
        elapsed.as_secs_f64() * 1000.0
    );

    first_failure(&reports)
        .with_context(|| format!("{} sample case(s) failed", summary.failed()))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    let strategy = Strategy::from(cli.strategy);

    match cli.command {
        Command::ContainsDuplicate { values } => {
            solve_one(Input::ContainsDuplicate { values }, strategy);
        }
        Command::TwoSum { target, values } => {
            solve_one(Input::TwoSum { values, target }, strategy);
        }
        Command::Anagram { a, b } => {
            solve_one(Input::ValidAnagram { a, b }, strategy);
        }
        Command::Samples { problem } => run_samples(problem.as_deref(), strategy)?,
    }

    Ok(())
}
