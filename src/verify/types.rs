// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-index invariant checking.
//!
//! `NameIndex::verify` walks every group, block and chain and returns the first
//! violation it finds. A healthy index returns `Ok(())` no matter what mix of
//! inserts, rejected inputs and releases produced it.
//!
//! # Example
//!
//! ```
//! use hashblocks::NameIndex;
//!
//! let mut index = NameIndex::new();
//! index.insert_all(["Bill", "Jane", "x", "Jane"]);
//! index.verify().unwrap();
//! ```

use thiserror::Error;

use crate::index::NameIndex;
use crate::types::{is_valid_key, letter_at, BucketKey, VowelClass};

/// Error type for invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A stored key could not have come out of `normalize`.
    #[error("stored key {key:?} is not a valid name")]
    InvalidKey { key: String },

    /// A record is filed under a bucket its key does not address.
    #[error("{key} belongs in {expected} but is stored in {found}")]
    MisplacedRecord {
        key: String,
        expected: BucketKey,
        found: BucketKey,
    },

    /// Chain order broken.
    #[error("chain {bucket} not sorted at position {position}")]
    UnsortedChain { bucket: BucketKey, position: usize },

    /// A level-1 group exists with no blocks beneath it.
    #[error("level-1 group [{first}] is materialized but empty")]
    EmptyGroup { first: char },

    /// A level-2 block exists with every chain empty.
    #[error("level-2 block [{first}][{vowel}] is materialized but empty")]
    EmptyBlock { first: char, vowel: VowelClass },

    /// Cached length disagrees with the records actually stored.
    #[error("index claims {claimed} records but holds {actual}")]
    LengthMismatch { claimed: usize, actual: usize },
}

impl NameIndex {
    /// Check every structural invariant of the index.
    pub fn verify(&self) -> Result<(), InvariantError> {
        let mut actual = 0;

        for (first, group) in self.groups() {
            let mut blocks = 0;
            for (vowel, block) in group.blocks() {
                blocks += 1;
                let mut chains = 0;
                for (third, chain) in block.chains() {
                    chains += 1;
                    let bucket = BucketKey::new(first, vowel, third);
                    let records = chain.as_slice();

                    for record in records {
                        if !is_valid_key(record.as_str()) {
                            return Err(InvariantError::InvalidKey {
                                key: record.to_string(),
                            });
                        }
                        match record.bucket_key() {
                            Some(expected) if expected == bucket => {}
                            Some(expected) => {
                                return Err(InvariantError::MisplacedRecord {
                                    key: record.to_string(),
                                    expected,
                                    found: bucket,
                                });
                            }
                            None => {
                                return Err(InvariantError::InvalidKey {
                                    key: record.to_string(),
                                });
                            }
                        }
                    }

                    if let Some(i) = records.windows(2).position(|pair| pair[0] > pair[1]) {
                        return Err(InvariantError::UnsortedChain {
                            bucket,
                            position: i + 1,
                        });
                    }

                    actual += records.len();
                }
                if chains == 0 {
                    return Err(InvariantError::EmptyBlock {
                        first: letter_at(first),
                        vowel,
                    });
                }
            }
            if blocks == 0 {
                return Err(InvariantError::EmptyGroup {
                    first: letter_at(first),
                });
            }
        }

        if actual != self.len() {
            return Err(InvariantError::LengthMismatch {
                claimed: self.len(),
                actual,
            });
        }
        Ok(())
    }
}
