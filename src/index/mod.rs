// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three-level name index.
//!
//! ```text
//!  groups[26]          blocks[7]              chains[26]
//!  ┌───┐   ┌──────────────────────┐   ┌─────────────────────────┐
//!  │ A │   │ A E I O U Y Default  │   │ A B C ... Z             │
//!  │ B │──▶│       ▲              │──▶│     ▲                   │
//!  │...│   └───────┼──────────────┘   └─────┼───────────────────┘
//!  │ Z │           │                        │
//!  └───┘    second char class         third char ──▶ [BIA, BIA, BIANCA]
//! ```
//!
//! Level-1 groups and level-2 blocks are boxed and created lazily, so an index
//! holding a handful of names stays small. Nothing is ever removed except by
//! [`NameIndex::release`], which drops everything at once.
//!
//! # INVARIANTS
//!
//! 1. Every stored key is a valid normalized name
//! 2. Every record sits in the bucket its first three characters address
//! 3. Every chain is non-decreasing; equal keys keep insertion order
//! 4. No group or block exists without at least one record beneath it
//! 5. `len` equals the number of stored records
//!
//! `NameIndex::verify` checks all five. Debug builds also check 2 and 3 on
//! every insert via `verify::contracts`.

mod chain;
mod levels;
mod walk;

use levels::VowelGroup;

use std::fmt;

use crate::error::{NameError, Result};
use crate::types::{BucketKey, NameRecord, NormalizedName, FIRST_LEVEL_SIZE};
use crate::utils::normalize;
use crate::verify::contracts;

/// A three-level hash index of short alphabetic names.
///
/// Owned by the caller; any number of independent indices can coexist. Not
/// synchronized; see [`crate::SharedNameIndex`] for a locked handle.
///
/// ```
/// use hashblocks::NameIndex;
///
/// let mut index = NameIndex::new();
/// index.insert("Jane").unwrap();
///
/// let found = index.find("jane").unwrap().unwrap();
/// assert_eq!(found.name(), "JANE");
/// assert!(index.find("Zephyr").unwrap().is_none());
/// ```
#[derive(Default)]
pub struct NameIndex {
    groups: [Option<Box<VowelGroup>>; FIRST_LEVEL_SIZE],
    len: usize,
}

impl NameIndex {
    /// An empty index. Nothing is allocated until the first insert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from names that must all be valid.
    ///
    /// Stops at the first rejected name.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        for name in names {
            index.insert(name.as_ref())?;
        }
        Ok(index)
    }

    /// Normalize `name` and add it to its bucket.
    ///
    /// A rejected name leaves the index untouched. Duplicates are stored
    /// again, after the existing copies.
    pub fn insert(&mut self, name: &str) -> Result<()> {
        let name = normalize(name)?;
        self.insert_normalized(name);
        Ok(())
    }

    /// Add an already-validated name. Returns the bucket it went into.
    pub fn insert_normalized(&mut self, name: NormalizedName) -> BucketKey {
        let key = name.bucket_key();

        let group = self.groups[key.first_index()].get_or_insert_with(|| {
            tracing::debug!(first = %key.first_letter(), "materialized level-1 group");
            Box::default()
        });
        let chain = group
            .block_or_insert(key.vowel())
            .chain_mut(key.third_index());

        let position = chain.insert(NameRecord::from(name));
        contracts::check_chain_sorted(key, chain.as_slice());
        contracts::check_record_addressed(key, &chain.as_slice()[position]);
        tracing::trace!(bucket = %key, position, "inserted {}", chain.as_slice()[position]);

        self.len += 1;
        key
    }

    /// Insert every name, carrying on past rejects.
    ///
    /// Returns the errors for the names that were refused, in input order.
    pub fn insert_all<I, S>(&mut self, names: I) -> Vec<NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| self.insert(name.as_ref()).err())
            .collect()
    }

    /// Look up a name.
    ///
    /// `Ok(None)` means the name is valid but absent; `Err` means it could
    /// never have been stored. With duplicates, the first copy is returned.
    pub fn find(&self, name: &str) -> Result<Option<&NameRecord>> {
        let name = normalize(name)?;
        Ok(self.find_normalized(&name))
    }

    pub fn find_normalized(&self, name: &NormalizedName) -> Option<&NameRecord> {
        let key = name.bucket_key();
        self.group(key.first_index())?
            .block(key.vowel())?
            .chain(key.third_index())
            .find(name.as_str())
    }

    pub fn contains(&self, name: &str) -> Result<bool> {
        self.find(name).map(|found| found.is_some())
    }

    /// The whole chain `name` would be stored in, sorted. Empty if none exists.
    pub fn bucket(&self, name: &str) -> Result<&[NameRecord]> {
        let name = normalize(name)?;
        Ok(self.chain(name.bucket_key()))
    }

    /// The chain at `key`, or an empty slice if its group or block is absent.
    pub fn chain(&self, key: BucketKey) -> &[NameRecord] {
        self.group(key.first_index())
            .and_then(|group| group.block(key.vowel()))
            .map(|block| block.chain(key.third_index()).as_slice())
            .unwrap_or_default()
    }

    /// Number of stored records, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every record, block and group.
    ///
    /// The index is left exactly as `new()` made it and can be reused.
    /// Releasing an empty index does nothing.
    pub fn release(&mut self) {
        let released = self.len;
        let groups = self.groups.iter_mut().filter_map(Option::take).count();
        self.len = 0;
        if released > 0 {
            tracing::debug!(records = released, groups, "released name index");
        }
    }

    fn group(&self, first: usize) -> Option<&VowelGroup> {
        self.groups[first].as_deref()
    }

    /// Materialized level-1 groups with their slot.
    pub(crate) fn groups(&self) -> impl Iterator<Item = (usize, &VowelGroup)> + '_ {
        self.groups
            .iter()
            .enumerate()
            .filter_map(|(first, slot)| slot.as_deref().map(|group| (first, group)))
    }
}

impl fmt::Debug for NameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameIndex")
            .field("len", &self.len)
            .field("stats", &self.stats())
            .finish()
    }
}
