//! hashing-core - Membership and frequency checks for arrays-and-hashing exercises
//!
//! This crate provides:
//! - Duplicate detection over a set of seen values (problem 217)
//! - Pair-sum lookup through a value-to-index map (problem 1)
//! - Anagram checks through a frequency profile or a fixed `a`-`z` counting array (problem 242)
//! - Sample cases and a parallel runner for them

pub mod app;
pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use app::problem::{Input, Outcome, ProblemError, ProblemKind, Strategy};
pub use constants::*;
pub use domain::anagram::{is_anagram, is_anagram_lowercase, is_permutation};
pub use domain::duplicate::{first_duplicate, has_duplicate};
pub use domain::frequency::FrequencyProfile;
pub use domain::pair_sum::two_sum;
