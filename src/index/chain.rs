// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Level-3 collision chains.
//!
//! A chain holds every record whose first three characters map to the same
//! bucket. It stays sorted at all times: insertion is a binary search for the
//! slot after the last record `<=` the new one, then a shift. Equal keys keep
//! arrival order.

use crate::types::NameRecord;

#[derive(Debug, Default, Clone)]
pub(crate) struct Chain {
    records: Vec<NameRecord>,
}

impl Chain {
    /// Insert keeping the chain sorted. Returns the position the record landed at.
    ///
    /// `partition_point(|r| r <= new)` skips past every equal key, so
    /// duplicates queue up behind each other.
    pub fn insert(&mut self, record: NameRecord) -> usize {
        let at = self.records.partition_point(|existing| *existing <= record);
        self.records.insert(at, record);
        at
    }

    /// First record with exactly this key. Linear scan from the head.
    pub fn find(&self, key: &str) -> Option<&NameRecord> {
        self.records.iter().find(|record| record.as_str() == key)
    }

    pub fn as_slice(&self) -> &[NameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
