// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A cloneable, lock-guarded handle to one index.
//!
//! The index itself has no internal synchronization: materializing a block and
//! shifting a chain are not safe to race. This handle puts a single `RwLock`
//! around the whole root. Writers (insert, release) are exclusive; readers
//! (find, walks) share.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{NameError, Result};
use crate::index::NameIndex;
use crate::types::{IndexStats, NameRecord};

#[derive(Debug, Clone, Default)]
pub struct SharedNameIndex {
    inner: Arc<RwLock<NameIndex>>,
}

impl SharedNameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, name: &str) -> Result<()> {
        self.inner.write().insert(name)
    }

    /// Insert a batch under one write lock, carrying on past rejects.
    pub fn insert_all<I, S>(&self, names: I) -> Vec<NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().insert_all(names)
    }

    /// Look up a name. The record is cloned out so the lock is not held.
    pub fn find(&self, name: &str) -> Result<Option<NameRecord>> {
        Ok(self.inner.read().find(name)?.cloned())
    }

    pub fn contains(&self, name: &str) -> Result<bool> {
        self.inner.read().contains(name)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }

    pub fn release(&self) {
        self.inner.write().release();
    }

    /// Run `f` with shared access, e.g. to walk the index.
    pub fn with_read<R>(&self, f: impl FnOnce(&NameIndex) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut NameIndex) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl From<NameIndex> for SharedNameIndex {
    fn from(index: NameIndex) -> Self {
        Self {
            inner: Arc::new(RwLock::new(index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_one_index() {
        let shared = SharedNameIndex::new();
        let other = shared.clone();
        shared.insert("Jane").unwrap();
        assert_eq!(other.find("jane").unwrap().unwrap().name(), "JANE");
    }

    #[test]
    fn concurrent_writers_all_land() {
        let shared = SharedNameIndex::new();
        let handles: Vec<_> = ["Bill", "Jane", "Lincoln", "Tim"]
            .into_iter()
            .map(|name| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        shared.insert(name).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.len(), 100);
        shared.with_read(|index| index.verify()).unwrap();
        assert_eq!(shared.with_read(|index| index.bucket("tim").unwrap().len()), 25);
    }

    #[test]
    fn release_through_handle() {
        let shared = SharedNameIndex::from(NameIndex::from_names(["Bill"]).unwrap());
        shared.release();
        assert!(shared.is_empty());
        assert!(!shared.contains("Bill").unwrap());
    }
}
