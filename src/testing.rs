//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so every test builds indexes the same way.

#![doc(hidden)]

use crate::index::NameIndex;
use crate::types::VowelClass;

/// The names from the usage example: `-n Bill,Jane,Lincoln,Tim`.
pub const SAMPLE_NAMES: [&str; 4] = ["Bill", "Jane", "Lincoln", "Tim"];

/// Names that pile up in a handful of buckets, duplicates included.
pub const CROWDED_NAMES: [&str; 9] = [
    "Ann", "Anne", "Annabel", "Ann", "Annette", "Bob", "Boa", "Boz", "Bobby",
];

/// Build an index from fixture names.
///
/// # Panics
/// Panics if any name is rejected; fixtures are expected to be valid.
pub fn index_of(names: &[&str]) -> NameIndex {
    NameIndex::from_names(names).unwrap_or_else(|err| panic!("fixture rejected: {err}"))
}

/// The sample index: BILL, JANE, LINCOLN, TIM.
pub fn sample_index() -> NameIndex {
    index_of(&SAMPLE_NAMES)
}

/// Names stored under one (first letter, vowel class) group, in walk order.
pub fn group_names(index: &NameIndex, first: char, vowel: VowelClass) -> Vec<String> {
    index
        .enumerate()
        .filter(|entry| entry.first == first && entry.vowel == vowel)
        .map(|entry| entry.name.to_string())
        .collect()
}

/// Every stored name in walk order.
pub fn walk_names(index: &NameIndex) -> Vec<String> {
    index.records().map(|record| record.name().to_string()).collect()
}
