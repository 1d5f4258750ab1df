// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for name normalization.
//!
//! Every add and every lookup goes through `normalize`. It must reject
//! garbage with an error, never a panic, and what it accepts must be a key
//! the index can address.

#![no_main]

use hashblocks::{normalize, BucketKey, NameError, MIN_NAME_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    match normalize(&input) {
        Ok(key) => {
            // Accepted keys are uppercase ASCII letters of the same length
            assert_eq!(key.chars().count(), input.chars().count());
            assert!(key.len() >= MIN_NAME_LEN);
            assert!(key.bytes().all(|b| b.is_ascii_uppercase()));
            assert_eq!(key.as_str(), input.to_ascii_uppercase());

            // Idempotent
            let again = normalize(key.as_str()).expect("normalized key must re-normalize");
            assert_eq!(again, key);

            // Addressable
            assert_eq!(BucketKey::for_key(key.as_str()), Some(key.bucket_key()));
        }
        Err(NameError::InvalidLength { len, .. }) => {
            assert!(len < MIN_NAME_LEN);
            assert_eq!(len, input.chars().count());
        }
        Err(NameError::InvalidCharacter { ch, position, .. }) => {
            assert!(input.chars().count() >= MIN_NAME_LEN);
            assert!(!ch.is_ascii_alphabetic());
            assert_eq!(input.chars().nth(position), Some(ch));
        }
    }
});
