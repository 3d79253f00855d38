//! Anagram checks (problem 242)
//!
//! Both inputs are compared through a frequency profile of the first one:
//! every element of the second input consumes one occurrence, and the check
//! fails as soon as an element is missing or already used up.

use crate::constants::{ALPHABET_SIZE, ALPHABET_START};
use crate::domain::frequency::FrequencyProfile;
use std::hash::Hash;

/// Check whether `b` is a permutation of `a` for any element type
pub fn is_permutation<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    consume_all(a.iter().collect(), b.iter())
}

/// Check whether `b` is an anagram of `a`
///
/// Works over arbitrary Unicode scalar values. Empty strings are anagrams of
/// each other.
pub fn is_anagram(a: &str, b: &str) -> bool {
    // Equal character multisets always encode to the same number of bytes
    if a.len() != b.len() {
        return false;
    }

    consume_all(a.chars().collect(), b.chars())
}

/// Check whether `b` is an anagram of `a` by comparing two full profiles
///
/// No early exit: both inputs are counted completely before comparing.
/// Kept as a reference for tests and benchmarks.
pub fn is_anagram_by_profiles(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let left: FrequencyProfile<char> = a.chars().collect();
    let right: FrequencyProfile<char> = b.chars().collect();
    left == right
}

/// Check whether `b` is an anagram of `a` using a fixed `a`-`z` counting array
///
/// Each letter maps to `byte - b'a'`. If either input contains anything
/// outside `a..=z`, the check falls back to [`is_anagram`].
pub fn is_anagram_lowercase(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let (a_bytes, b_bytes) = (a.as_bytes(), b.as_bytes());
    if !a_bytes.iter().chain(b_bytes).all(u8::is_ascii_lowercase) {
        return is_anagram(a, b);
    }

    let mut counts = [0u32; ALPHABET_SIZE];
    for &byte in a_bytes {
        counts[letter_index(byte)] += 1;
    }

    for &byte in b_bytes {
        let slot = &mut counts[letter_index(byte)];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
    }

    counts.iter().all(|&count| count == 0)
}

/// Consume `rest` from `profile`, failing on the first missing element
fn consume_all<T: Eq + Hash>(
    mut profile: FrequencyProfile<T>,
    rest: impl Iterator<Item = T>,
) -> bool {
    for element in rest {
        if !profile.take(&element) {
            return false;
        }
    }

    profile.is_exhausted()
}

#[inline]
fn letter_index(byte: u8) -> usize {
    (byte - ALPHABET_START) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_anagram_sample_cases() {
        assert!(is_anagram("anagram", "nagaram"));
        assert!(!is_anagram("rat", "car"));
    }

    #[test]
    fn test_is_anagram_length_mismatch() {
        assert!(!is_anagram("a", "aa"));
        assert!(!is_anagram("abc", ""));
    }

    #[test]
    fn test_is_anagram_empty_strings() {
        assert!(is_anagram("", ""));
        assert!(is_anagram_lowercase("", ""));
    }

    #[test]
    fn test_is_anagram_same_letters_different_counts() {
        assert!(!is_anagram("aab", "abb"));
        assert!(!is_anagram_lowercase("aab", "abb"));
    }

    #[test]
    fn test_is_anagram_unicode() {
        assert!(is_anagram("日本語", "語日本"));
        assert!(!is_anagram("日本語", "日本本"));
    }

    #[test]
    fn test_is_anagram_case_sensitive() {
        assert!(!is_anagram("Listen", "Silent"));
        assert!(!is_anagram("Ab", "ab"));
        assert!(is_anagram("Ab", "bA"));
    }

    #[test]
    fn test_lowercase_sample_cases() {
        assert!(is_anagram_lowercase("anagram", "nagaram"));
        assert!(!is_anagram_lowercase("rat", "car"));
    }

    #[test]
    fn test_lowercase_falls_back_outside_alphabet() {
        assert!(is_anagram_lowercase("a-b", "b-a"));
        assert!(!is_anagram_lowercase("a-b", "b_a"));
        assert!(is_anagram_lowercase("café", "éfac"));
    }

    #[test]
    fn test_lowercase_full_alphabet() {
        let forward: String = ('a'..='z').collect();
        let backward: String = ('a'..='z').rev().collect();
        assert!(is_anagram_lowercase(&forward, &backward));
    }

    #[test]
    fn test_by_profiles_agrees() {
        let pairs = [
            ("anagram", "nagaram"),
            ("rat", "car"),
            ("", ""),
            ("aab", "abb"),
            ("日本語", "語日本"),
        ];
        for (a, b) in pairs {
            let expected = is_anagram_by_profiles(a, b);
            assert_eq!(is_anagram(a, b), expected, "{} / {}", a, b);
        }
    }

    #[test]
    fn test_is_permutation_integers() {
        assert!(is_permutation(&[1, 2, 2, 3], &[2, 3, 2, 1]));
        assert!(!is_permutation(&[1, 2, 2, 3], &[2, 3, 3, 1]));
        assert!(!is_permutation(&[1], &[1, 1]));
        let empty: [u8; 0] = [];
        assert!(is_permutation(&empty, &empty));
    }
}
