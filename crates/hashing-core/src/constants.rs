//! Shared constants for the hashing routines
//!
//! Note: sample inputs for each problem live in app/cases.rs.

// =============================================================================
// Fixed alphabet (counting-array anagram check)
// =============================================================================

/// First letter of the fixed alphabet
pub const ALPHABET_START: u8 = b'a';

/// Last letter of the fixed alphabet
pub const ALPHABET_END: u8 = b'z';

/// Number of letters in the fixed alphabet (a-z)
pub const ALPHABET_SIZE: usize = (ALPHABET_END - ALPHABET_START) as usize + 1; // 26

// =============================================================================
// Problem identifiers
// =============================================================================

/// Problem 217: Contains Duplicate
pub const CONTAINS_DUPLICATE: &str = "contains-duplicate";

/// Problem 1: Two Sum
pub const TWO_SUM: &str = "two-sum";

/// Problem 242: Valid Anagram
pub const VALID_ANAGRAM: &str = "valid-anagram";

/// List of supported problem identifiers
pub const SUPPORTED_PROBLEMS: [&str; 3] = [CONTAINS_DUPLICATE, TWO_SUM, VALID_ANAGRAM];
