//! Shared test utilities and fixtures.

#![allow(dead_code)]

use hashblocks::{NameIndex, NameRecord};

// Re-export canonical test utilities from hashblocks::testing
pub use hashblocks::testing::{
    group_names, index_of, sample_index, walk_names, CROWDED_NAMES, SAMPLE_NAMES,
};

/// Inputs that fail the length check.
pub const TOO_SHORT: &[&str] = &["", "A", "Xx", "1", "Jo"];

/// Inputs long enough but with a non-letter somewhere.
pub const BAD_CHARACTERS: &[&str] = &["R2D2", "Jo-Ann", "Ann Marie", "Bob!", "Zoë", "O'Neil"];

/// Panic with the broken invariant if the index is malformed.
pub fn assert_well_formed(index: &NameIndex) {
    if let Err(err) = index.verify() {
        panic!("index invariant violated: {err}\n{index:?}");
    }
}

/// Names in the chain `name` maps to.
pub fn bucket_names(index: &NameIndex, name: &str) -> Vec<String> {
    index
        .bucket(name)
        .expect("valid probe name")
        .iter()
        .map(|record| record.name().to_string())
        .collect()
}

/// Found key, or None.
pub fn found_name(index: &NameIndex, name: &str) -> Option<String> {
    index
        .find(name)
        .expect("valid probe name")
        .map(NameRecord::name)
        .map(str::to_string)
}
