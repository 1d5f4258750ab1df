// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for sequences of index operations.
//!
//! Drives a `NameIndex` and a sorted `Vec` model with the same inserts,
//! lookups and releases. After every step the two must agree and the
//! index must pass `verify()`.

#![no_main]

use arbitrary::Arbitrary;
use hashblocks::{normalize, NameIndex};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(String),
    Find(String),
    Release,
}

fuzz_target!(|ops: Vec<Op>| {
    // Cap op count to avoid timeouts
    let ops = &ops[..ops.len().min(256)];

    let mut index = NameIndex::new();
    let mut model: Vec<String> = Vec::new();

    for op in ops {
        match op {
            Op::Insert(name) => match (index.insert(name), normalize(name)) {
                (Ok(()), Ok(key)) => {
                    let chain = index.chain(key.bucket_key());
                    assert!(chain.iter().any(|r| r.name() == key.as_str()));
                    model.push(key.into_string());
                }
                (Err(got), Err(expected)) => assert_eq!(got, expected),
                (got, expected) => panic!("insert {name:?}: {got:?} vs {expected:?}"),
            },
            Op::Find(name) => match index.find(name) {
                Ok(found) => {
                    let key = name.to_ascii_uppercase();
                    let in_model = model.iter().any(|n| *n == key);
                    assert_eq!(found.map(|r| r.name()), in_model.then_some(key.as_str()));
                }
                Err(err) => assert_eq!(Err(err), normalize(name).map(|_| ())),
            },
            Op::Release => {
                index.release();
                model.clear();
            }
        }

        assert_eq!(index.len(), model.len());
        if let Err(err) = index.verify() {
            panic!("invariant violated after {op:?}: {err}");
        }
    }

    // Full walk visits exactly the model
    let mut walked: Vec<String> = index.records().map(|r| r.name().to_string()).collect();
    walked.sort();
    model.sort();
    assert_eq!(walked, model);
});
