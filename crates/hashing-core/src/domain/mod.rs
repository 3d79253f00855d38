//! Domain layer - Pure computational logic
//!
//! This module contains the membership and frequency routines. Nothing here
//! logs, allocates beyond its own lookup structure, or keeps state between calls.

pub mod anagram;
pub mod duplicate;
pub mod frequency;
pub mod lookup;
pub mod pair_sum;
