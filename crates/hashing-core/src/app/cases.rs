//! Built-in sample cases
//!
//! The worked examples for each exercise, with their expected outcomes.

use crate::app::problem::{Input, Outcome, ProblemKind};

/// One named input with its expected outcome
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleCase {
    /// Case name, `<problem number>/test-<n>`
    pub name: String,
    /// Problem input
    pub input: Input,
    /// Expected outcome
    pub expected: Outcome,
}

impl SampleCase {
    /// Create a case named after its problem number and position
    pub fn new(index: usize, input: Input, expected: Outcome) -> Self {
        Self {
            name: format!("{}/test-{}", input.kind().number(), index),
            input,
            expected,
        }
    }

    /// The exercise this case belongs to
    pub fn kind(&self) -> ProblemKind {
        self.input.kind()
    }
}

/// All sample cases, grouped by problem in problem-number order
pub fn sample_cases() -> Vec<SampleCase> {
    ProblemKind::ALL
        .into_iter()
        .flat_map(sample_cases_for)
        .collect()
}

/// Sample cases for a single problem
pub fn sample_cases_for(kind: ProblemKind) -> Vec<SampleCase> {
    let cases: Vec<(Input, Outcome)> = match kind {
        ProblemKind::ContainsDuplicate => vec![
            (duplicate(&[1, 2, 3, 1]), Outcome::Flag(true)),
            (duplicate(&[1, 2, 3, 4]), Outcome::Flag(false)),
            (duplicate(&[1, 1, 1, 3, 3, 4, 3, 2, 4, 2]), Outcome::Flag(true)),
        ],
        ProblemKind::TwoSum => vec![
            (pair(&[2, 7, 11, 15], 9), Outcome::Pair(Some((0, 1)))),
            (pair(&[3, 2, 4], 6), Outcome::Pair(Some((1, 2)))),
            (pair(&[3, 3], 6), Outcome::Pair(Some((0, 1)))),
        ],
        ProblemKind::ValidAnagram => vec![
            (anagram("anagram", "nagaram"), Outcome::Flag(true)),
            (anagram("rat", "car"), Outcome::Flag(false)),
        ],
    };

    cases
        .into_iter()
        .enumerate()
        .map(|(i, (input, expected))| SampleCase::new(i + 1, input, expected))
        .collect()
}

fn duplicate(values: &[i64]) -> Input {
    Input::ContainsDuplicate {
        values: values.to_vec(),
    }
}

fn pair(values: &[i64], target: i64) -> Input {
    Input::TwoSum {
        values: values.to_vec(),
        target,
    }
}

fn anagram(a: &str, b: &str) -> Input {
    Input::ValidAnagram {
        a: a.to_string(),
        b: b.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_case_count() {
        assert_eq!(sample_cases().len(), 8);
        assert_eq!(sample_cases_for(ProblemKind::ValidAnagram).len(), 2);
    }

    #[test]
    fn test_sample_case_names() {
        let names: Vec<String> = sample_cases_for(ProblemKind::ContainsDuplicate)
            .into_iter()
            .map(|case| case.name)
            .collect();
        assert_eq!(names, ["217/test-1", "217/test-2", "217/test-3"]);
    }

    #[test]
    fn test_sample_cases_grouped_by_problem() {
        let kinds: Vec<ProblemKind> = sample_cases().iter().map(SampleCase::kind).collect();
        assert_eq!(kinds[0], ProblemKind::TwoSum);
        assert_eq!(kinds[7], ProblemKind::ValidAnagram);
    }

    #[test]
    fn test_sample_cases_pass() {
        for case in sample_cases() {
            assert_eq!(case.input.solve(), case.expected, "case {}", case.name);
        }
    }
}
