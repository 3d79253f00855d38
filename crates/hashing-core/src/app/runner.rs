//! Batch evaluation of cases
//!
//! This module solves many cases at once. Each call owns its lookup structure,
//! so cases are evaluated in parallel with rayon; reports keep input order.

use crate::app::cases::SampleCase;
use crate::app::problem::{Outcome, ProblemError, ProblemKind, Strategy, solve_checked};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result of evaluating one case
#[derive(Debug, Clone)]
pub struct CaseReport {
    /// Case name
    pub name: String,
    /// Problem the case belongs to
    pub kind: ProblemKind,
    /// Outcome the case declares
    pub expected: Outcome,
    /// Outcome produced, or the mismatch error
    pub result: Result<Outcome, ProblemError>,
    /// Time spent solving
    pub elapsed: Duration,
}

impl CaseReport {
    /// True if the produced outcome matched the expected one
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }

    /// Outcome actually produced, whether or not it matched
    pub fn actual(&self) -> Outcome {
        match &self.result {
            Ok(outcome) => *outcome,
            Err(ProblemError::Mismatch { actual, .. }) => *actual,
            Err(ProblemError::UnknownProblem(_)) => self.expected,
        }
    }
}

/// Aggregate counts for a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Number of cases evaluated
    pub total: usize,
    /// Number of cases matching their expected outcome
    pub passed: usize,
}

impl RunSummary {
    /// Number of mismatching cases
    pub fn failed(&self) -> usize {
        self.total - self.passed
    }
}

/// Options for batch evaluation
#[derive(Clone)]
pub struct RunOptions<F = fn(usize, usize)> {
    /// Strategy used for every case (default: `Scan`)
    pub strategy: Strategy,
    /// Progress callback (completed, total)
    pub on_progress: Option<F>,
}

impl Default for RunOptions<fn(usize, usize)> {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            on_progress: None,
        }
    }
}

impl<F> RunOptions<F> {
    /// Set the strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the progress callback
    pub fn with_progress<G>(self, callback: G) -> RunOptions<G> {
        RunOptions {
            strategy: self.strategy,
            on_progress: Some(callback),
        }
    }
}

/// Evaluate a single case
pub fn run_case(case: &SampleCase, strategy: Strategy) -> CaseReport {
    let start = Instant::now();
    let result = solve_checked(&case.name, &case.input, case.expected, strategy);
    let elapsed = start.elapsed();

    match &result {
        Ok(outcome) => debug!(case = %case.name, %outcome, ?elapsed, "case passed"),
        Err(err) => warn!(case = %case.name, ?elapsed, "{}", err),
    }

    CaseReport {
        name: case.name.clone(),
        kind: case.kind(),
        expected: case.expected,
        result,
        elapsed,
    }
}

/// Evaluate all cases in parallel
///
/// Reports are returned in the same order as `cases`.
pub fn run_cases<F>(cases: &[SampleCase], options: RunOptions<F>) -> Vec<CaseReport>
where
    F: Fn(usize, usize) + Sync,
{
    let RunOptions {
        strategy,
        on_progress,
    } = options;

    let total = cases.len();
    let completed = AtomicUsize::new(0);

    let reports: Vec<CaseReport> = cases
        .par_iter()
        .map(|case| {
            let report = run_case(case, strategy);
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(ref callback) = on_progress {
                callback(done, total);
            }
            report
        })
        .collect();

    let summary = summarize(&reports);
    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed(),
        ?strategy,
        "finished running cases"
    );

    reports
}

/// Count passed and failed cases
pub fn summarize(reports: &[CaseReport]) -> RunSummary {
    RunSummary {
        total: reports.len(),
        passed: reports.iter().filter(|r| r.passed()).count(),
    }
}

/// Return the first mismatch in `reports`, if any
pub fn first_failure(reports: &[CaseReport]) -> Result<(), ProblemError> {
    match reports.iter().find_map(|r| r.result.as_ref().err()) {
        Some(err) => Err(err.clone()),
        None => Ok(()),
    }
}
