//! Problem inputs, outcomes and dispatch
//!
//! This module ties each exercise to its domain routine so callers can hold
//! inputs of any problem in one collection and solve them uniformly.

use crate::constants::{CONTAINS_DUPLICATE, TWO_SUM, VALID_ANAGRAM};
use crate::domain::anagram::{is_anagram, is_anagram_by_profiles, is_anagram_lowercase};
use crate::domain::duplicate::{has_duplicate, has_duplicate_by_len};
use crate::domain::pair_sum::{two_sum, two_sum_pairwise};
use std::fmt;
use std::str::FromStr;

/// Supported exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProblemKind {
    /// 217. Contains Duplicate
    ContainsDuplicate,
    /// 1. Two Sum
    TwoSum,
    /// 242. Valid Anagram
    ValidAnagram,
}

impl ProblemKind {
    /// All problems, in problem-number order
    pub const ALL: [ProblemKind; 3] = [
        Self::TwoSum,
        Self::ContainsDuplicate,
        Self::ValidAnagram,
    ];

    /// Problem number on the judge
    pub fn number(self) -> u32 {
        match self {
            Self::ContainsDuplicate => 217,
            Self::TwoSum => 1,
            Self::ValidAnagram => 242,
        }
    }

    /// Stable identifier used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::ContainsDuplicate => CONTAINS_DUPLICATE,
            Self::TwoSum => TWO_SUM,
            Self::ValidAnagram => VALID_ANAGRAM,
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProblemKind {
    type Err = ProblemError;

    /// Accepts the identifier, the problem number, or `anagram`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ProblemKind::ALL
            .into_iter()
            .find(|kind| s.eq_ignore_ascii_case(kind.name()) || s == kind.number().to_string())
            .or_else(|| s.eq_ignore_ascii_case("anagram").then_some(Self::ValidAnagram))
            .ok_or_else(|| ProblemError::UnknownProblem(s.to_string()))
    }
}

/// Algorithm family used to solve an input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Single pass over a hashed lookup structure with early exit
    #[default]
    Scan,
    /// Like `Scan`, but anagrams use a fixed `a`-`z` counting array
    FixedAlphabet,
    /// Full-pass or pairwise reference routines
    Reference,
}

/// Input for one exercise
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Does any value repeat?
    ContainsDuplicate { values: Vec<i64> },
    /// Which two positions sum to `target`?
    TwoSum { values: Vec<i64>, target: i64 },
    /// Is `b` a rearrangement of `a`?
    ValidAnagram { a: String, b: String },
}

impl Input {
    /// The exercise this input belongs to
    pub fn kind(&self) -> ProblemKind {
        match self {
            Self::ContainsDuplicate { .. } => ProblemKind::ContainsDuplicate,
            Self::TwoSum { .. } => ProblemKind::TwoSum,
            Self::ValidAnagram { .. } => ProblemKind::ValidAnagram,
        }
    }

    /// Solve with the default single-pass strategy
    pub fn solve(&self) -> Outcome {
        self.solve_with(Strategy::Scan)
    }

    /// Solve with the given strategy
    pub fn solve_with(&self, strategy: Strategy) -> Outcome {
        match (self, strategy) {
            (Self::ContainsDuplicate { values }, Strategy::Reference) => {
                Outcome::Flag(has_duplicate_by_len(values))
            }
            (Self::ContainsDuplicate { values }, _) => Outcome::Flag(has_duplicate(values)),
            (Self::TwoSum { values, target }, Strategy::Reference) => {
                Outcome::Pair(two_sum_pairwise(values, *target))
            }
            (Self::TwoSum { values, target }, _) => Outcome::Pair(two_sum(values, *target)),
            (Self::ValidAnagram { a, b }, Strategy::Scan) => Outcome::Flag(is_anagram(a, b)),
            (Self::ValidAnagram { a, b }, Strategy::FixedAlphabet) => {
                Outcome::Flag(is_anagram_lowercase(a, b))
            }
            (Self::ValidAnagram { a, b }, Strategy::Reference) => {
                Outcome::Flag(is_anagram_by_profiles(a, b))
            }
        }
    }
}

/// Result of solving one input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Boolean answer (duplicate found, anagram match)
    Flag(bool),
    /// Index pair, `None` when no pair exists
    Pair(Option<(usize, usize)>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(flag) => write!(f, "{}", flag),
            Self::Pair(Some((i, j))) => write!(f, "[{}, {}]", i, j),
            Self::Pair(None) => f.write_str("[]"),
        }
    }
}

/// Errors raised while selecting or checking problems
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProblemError {
    /// The name does not match any supported problem
    #[error("unknown problem '{0}'")]
    UnknownProblem(String),

    /// A case produced something other than its expected outcome
    #[error("case '{case}' failed: expected {expected}, got {actual}")]
    Mismatch {
        /// Case name
        case: String,
        /// Outcome the case declares
        expected: Outcome,
        /// Outcome actually produced
        actual: Outcome,
    },
}

/// Solve `input` and compare the result with `expected`
pub fn solve_checked(
    case: &str,
    input: &Input,
    expected: Outcome,
    strategy: Strategy,
) -> Result<Outcome, ProblemError> {
    let actual = input.solve_with(strategy);
    if actual != expected {
        return Err(ProblemError::Mismatch {
            case: case.to_string(),
            expected,
            actual,
        });
    }
    Ok(actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SUPPORTED_PROBLEMS;

    #[test]
    fn test_problem_kind_from_name() {
        assert_eq!("two-sum".parse::<ProblemKind>(), Ok(ProblemKind::TwoSum));
        assert_eq!(
            "Contains-Duplicate".parse::<ProblemKind>(),
            Ok(ProblemKind::ContainsDuplicate)
        );
        assert_eq!("anagram".parse::<ProblemKind>(), Ok(ProblemKind::ValidAnagram));
    }

    #[test]
    fn test_problem_kind_from_number() {
        assert_eq!("1".parse::<ProblemKind>(), Ok(ProblemKind::TwoSum));
        assert_eq!("217".parse::<ProblemKind>(), Ok(ProblemKind::ContainsDuplicate));
        assert_eq!(" 242 ".parse::<ProblemKind>(), Ok(ProblemKind::ValidAnagram));
    }

    #[test]
    fn test_problem_kind_unknown() {
        let result: Result<ProblemKind, _> = "three-sum".parse();
        assert_eq!(result, Err(ProblemError::UnknownProblem("three-sum".to_string())));
    }

    #[test]
    fn test_problem_kind_display_roundtrip() {
        for kind in ProblemKind::ALL {
            assert_eq!(kind.to_string().parse::<ProblemKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_names_match_supported_list() {
        let names: Vec<&str> = ProblemKind::ALL.iter().map(|kind| kind.name()).collect();
        for name in SUPPORTED_PROBLEMS {
            assert!(names.contains(&name), "{} missing", name);
        }
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Flag(true).to_string(), "true");
        assert_eq!(Outcome::Pair(Some((0, 1))).to_string(), "[0, 1]");
        assert_eq!(Outcome::Pair(None).to_string(), "[]");
    }

    #[test]
    fn test_solve_dispatch() {
        let input = Input::TwoSum {
            values: vec![3, 2, 4],
            target: 6,
        };
        assert_eq!(input.kind(), ProblemKind::TwoSum);
        assert_eq!(input.solve(), Outcome::Pair(Some((1, 2))));
    }

    #[test]
    fn test_strategies_agree() {
        let inputs = [
            Input::ContainsDuplicate {
                values: vec![1, 2, 3, 1],
            },
            Input::TwoSum {
                values: vec![2, 7, 11, 15],
                target: 9,
            },
            Input::ValidAnagram {
                a: "anagram".to_string(),
                b: "nagaram".to_string(),
            },
        ];
        for input in &inputs {
            let scan = input.solve_with(Strategy::Scan);
            assert_eq!(scan, input.solve_with(Strategy::FixedAlphabet));
            assert_eq!(scan, input.solve_with(Strategy::Reference));
        }
    }

    #[test]
    fn test_solve_checked_mismatch() {
        let input = Input::ValidAnagram {
            a: "rat".to_string(),
            b: "car".to_string(),
        };
        let result = solve_checked("rat-car", &input, Outcome::Flag(true), Strategy::Scan);
        assert!(matches!(
            result,
            Err(ProblemError::Mismatch {
                expected: Outcome::Flag(true),
                actual: Outcome::Flag(false),
                ..
            })
        ));
    }

    #[test]
    fn test_mismatch_message() {
        let err = ProblemError::Mismatch {
            case: "1/test-1".to_string(),
            expected: Outcome::Pair(Some((0, 1))),
            actual: Outcome::Pair(None),
        };
        assert_eq!(err.to_string(), "case '1/test-1' failed: expected [0, 1], got []");
    }
}
