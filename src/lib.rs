//! Three-level hierarchical hash index for short alphabetic names.
//!
//! Names of three or more letters are uppercased and filed by their first three
//! characters: the first letter picks one of 26 groups, the second character's
//! vowel class picks one of 7 blocks, and the third letter picks one of 26
//! sorted chains. Lookups touch exactly one chain.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────────┐
//! │  utils.rs   │────▶│  types.rs    │────▶│  index/             │
//! │ (normalize) │     │ (BucketKey,  │     │  mod.rs  insert/find│
//! │             │     │  NameRecord) │     │  levels  groups     │
//! └─────────────┘     └──────────────┘     │  chain   sorted vec │
//!                                          │  walk    enumerate  │
//!                                          └─────────────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    verify/                          │
//! │  (contracts on insert, NameIndex::verify sweep)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! | Step      | Call                      | Notes                                 |
//! |-----------|---------------------------|---------------------------------------|
//! | populate  | `NameIndex::insert`       | lazily creates the group and block    |
//! | query     | `NameIndex::find`         | `Err` = invalid name, `Ok(None)` = absent |
//! | enumerate | `NameIndex::enumerate`    | structural order, restartable         |
//! | release   | `NameIndex::release`      | back to empty, safe to reuse          |
//!
//! # Usage
//!
//! ```
//! use hashblocks::{NameError, NameIndex};
//!
//! let mut index = NameIndex::new();
//! for name in ["Bill", "Jane", "Lincoln", "Tim"] {
//!     index.insert(name).unwrap();
//! }
//!
//! assert_eq!(index.find("Jane").unwrap().unwrap().name(), "JANE");
//! assert!(index.find("Zephyr").unwrap().is_none());
//! assert!(matches!(index.find("Xx"), Err(NameError::InvalidLength { .. })));
//!
//! index.release();
//! assert!(index.is_empty());
//! ```

// Module declarations
mod error;
mod index;
#[cfg(feature = "shared")]
mod shared;
mod types;
mod utils;
pub mod verify;

pub mod testing;

// Re-exports for public API
pub use error::{NameError, Result};
pub use index::NameIndex;
#[cfg(feature = "shared")]
pub use shared::SharedNameIndex;
pub use types::{
    is_valid_key, letter_at, BucketEntry, BucketKey, IndexStats, NameRecord, NormalizedName,
    VowelClass, FIRST_LEVEL_SIZE, MIN_NAME_LEN, SECOND_LEVEL_SIZE, THIRD_LEVEL_SIZE,
};
pub use utils::{normalize, normalize_opt};
pub use verify::InvariantError;

#[cfg(test)]
mod tests {
    //! Property tests over the public API.

    use super::*;
    use proptest::prelude::*;

    fn name_strategy() -> impl Strategy<Value = String> {
        prop::string::string_regex("[A-Za-z]{3,8}").unwrap()
    }

    proptest! {
        /// Property: a walk visits names in non-decreasing (bucket, name) order.
        #[test]
        fn prop_walk_is_ordered(names in prop::collection::vec(name_strategy(), 0..40)) {
            let index = NameIndex::from_names(&names).unwrap();
            let keys: Vec<(BucketKey, String)> = index
                .buckets()
                .flat_map(|(key, records)| records.iter().map(move |r| (key, r.name().to_string())))
                .collect();
            for pair in keys.windows(2) {
                prop_assert!(pair[0] <= pair[1], "{:?} after {:?}", pair[1], pair[0]);
            }
            prop_assert_eq!(keys.len(), names.len());
        }

        /// Property: normalization is idempotent.
        #[test]
        fn prop_normalize_idempotent(name in name_strategy()) {
            let once = normalize(&name).unwrap();
            let twice = normalize(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
