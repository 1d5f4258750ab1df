// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only walks over a populated index.
//!
//! Walk order is structural: level-1 letter, then vowel class in slot order,
//! then third letter, then chain order. Two walks over an unchanged index
//! produce identical sequences.

use super::NameIndex;
use crate::types::{BucketEntry, BucketKey, IndexStats, NameRecord};

impl NameIndex {
    /// Every non-empty bucket with its sorted chain.
    pub fn buckets(&self) -> impl Iterator<Item = (BucketKey, &[NameRecord])> + '_ {
        self.groups().flat_map(|(first, group)| {
            group.blocks().flat_map(move |(vowel, block)| {
                block.chains().map(move |(third, chain)| {
                    (BucketKey::new(first, vowel, third), chain.as_slice())
                })
            })
        })
    }

    /// Every stored name as `(letter1, vowel class, letter3, name)`.
    ///
    /// Lazy and restartable: call it again for a fresh pass.
    pub fn enumerate(&self) -> impl Iterator<Item = BucketEntry<'_>> + '_ {
        self.buckets().flat_map(|(key, records)| {
            records
                .iter()
                .map(move |record| BucketEntry::new(key, record))
        })
    }

    /// Every stored record in walk order.
    pub fn records(&self) -> impl Iterator<Item = &NameRecord> + '_ {
        self.buckets().flat_map(|(_, records)| records.iter())
    }

    /// Count what is materialized at each level.
    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            records: self.len(),
            ..IndexStats::default()
        };
        for (_, group) in self.groups() {
            stats.groups += 1;
            for (_, block) in group.blocks() {
                stats.blocks += 1;
                for (_, chain) in block.chains() {
                    stats.buckets += 1;
                    stats.longest_chain = stats.longest_chain.max(chain.len());
                }
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{IndexStats, VowelClass};
    use crate::NameIndex;

    #[test]
    fn walk_is_structural_not_insertion_order() {
        let index = NameIndex::from_names(["Tim", "Lincoln", "Jane", "Bill"]).unwrap();
        let names: Vec<&str> = index.enumerate().map(|entry| entry.name).collect();
        assert_eq!(names, ["BILL", "JANE", "LINCOLN", "TIM"]);
    }

    #[test]
    fn entries_carry_coordinates() {
        let index = NameIndex::from_names(["Bryn"]).unwrap();
        let entry = index.enumerate().next().unwrap();
        assert_eq!(entry.first, 'B');
        assert_eq!(entry.vowel, VowelClass::Other);
        assert_eq!(entry.third, 'Y');
        assert_eq!(entry.name, "BRYN");
    }

    #[test]
    fn vowel_slots_walk_before_default() {
        let index = NameIndex::from_names(["Bryn", "Byron", "Bob", "Bea"]).unwrap();
        let vowels: Vec<VowelClass> = index.buckets().map(|(key, _)| key.vowel()).collect();
        assert_eq!(
            vowels,
            [VowelClass::E, VowelClass::O, VowelClass::Y, VowelClass::Other]
        );
    }

    #[test]
    fn stats_count_each_level() {
        let index =
            NameIndex::from_names(["Ann", "Ann", "Anna", "Amy", "Bill", "Bob"]).unwrap();
        let stats = index.stats();
        assert_eq!(stats.records, 6);
        // A, B
        assert_eq!(stats.groups, 2);
        // A/Default, B/I, B/O
        assert_eq!(stats.blocks, 3);
        // ANN*, AMY, BIL*, BOB
        assert_eq!(stats.buckets, 4);
        assert_eq!(stats.longest_chain, 3);
    }

    #[test]
    fn empty_index_walks_nothing() {
        let index = NameIndex::new();
        assert_eq!(index.enumerate().count(), 0);
        assert_eq!(index.stats(), IndexStats::default());
    }
}
