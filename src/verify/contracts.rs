// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debug-mode assertions run on the insert path.
//!
//! These are `debug_assert!`s, so release builds compile them away. They only
//! look at the chain that was just touched; `NameIndex::verify` does the
//! whole-index sweep.
//!
//! | Contract                   | Invariant                                   |
//! |----------------------------|---------------------------------------------|
//! | `check_chain_sorted`       | chain is non-decreasing                     |
//! | `check_record_addressed`   | record's first three chars map to its bucket |

use crate::types::{BucketKey, NameRecord};

/// Check that a chain is non-decreasing.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair that is out of order.
#[inline]
pub fn check_chain_sorted(bucket: BucketKey, records: &[NameRecord]) {
    if cfg!(debug_assertions) {
        for (i, pair) in records.windows(2).enumerate() {
            debug_assert!(
                pair[0] <= pair[1],
                "Contract violation: chain {} not sorted at {}: {} > {}",
                bucket,
                i + 1,
                pair[0],
                pair[1]
            );
        }
    }
}

/// Check that a record sits in the bucket its key addresses.
///
/// # Panics (debug builds only)
/// Panics if the record's key is invalid or maps to a different bucket.
#[inline]
pub fn check_record_addressed(bucket: BucketKey, record: &NameRecord) {
    debug_assert_eq!(
        record.bucket_key(),
        Some(bucket),
        "Contract violation: {} filed under {}",
        record,
        bucket
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::normalize;

    fn record(name: &str) -> NameRecord {
        NameRecord::from(normalize(name).unwrap())
    }

    #[test]
    fn sorted_chain_passes() {
        let bucket = BucketKey::for_key("ANN").unwrap();
        check_chain_sorted(bucket, &[record("ann"), record("ann"), record("anne")]);
        check_record_addressed(bucket, &record("annabel"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Contract violation")]
    fn unsorted_chain_panics() {
        let bucket = BucketKey::for_key("ANN").unwrap();
        check_chain_sorted(bucket, &[record("anne"), record("ann")]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Contract violation")]
    fn misfiled_record_panics() {
        let bucket = BucketKey::for_key("BOB").unwrap();
        check_record_addressed(bucket, &record("bill"));
    }
}
