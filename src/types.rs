// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a name index.
//!
//! A name is addressed by its first three characters. The first and third pick
//! one of 26 letter slots; the second is folded into one of seven vowel classes.
//! Everything here is about naming those coordinates and the records that live
//! at them.
//!
//! | Rust Type        | Purpose                                        |
//! |------------------|------------------------------------------------|
//! | `NormalizedName` | Validated, uppercased key (only `normalize` makes one) |
//! | `NameRecord`     | A stored name inside a chain                   |
//! | `VowelClass`     | Level-2 slot: A, E, I, O, U, Y or Default      |
//! | `BucketKey`      | (level-1, level-2, level-3) coordinates        |
//! | `BucketEntry`    | One row of an index walk                       |
//! | `IndexStats`     | Shape summary of a populated index             |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **NormalizedName**: at least `MIN_NAME_LEN` bytes, every byte in `b'A'..=b'Z'`.
//!   `BucketKey::of` indexes the first three bytes without checking.
//!
//! - **BucketKey**: `first < 26 ∧ third < 26`. The vowel class is total by construction.

use serde::Serialize;
use std::fmt;
use std::ops::Deref;

// =============================================================================
// LEVEL GEOMETRY
// =============================================================================

/// Level-1 slots: one per leading letter A-Z.
pub const FIRST_LEVEL_SIZE: usize = 26;

/// Level-2 slots: the six vowels (Y included) plus a default bucket.
pub const SECOND_LEVEL_SIZE: usize = 7;

/// Level-3 slots: one per third letter A-Z.
pub const THIRD_LEVEL_SIZE: usize = 26;

/// Shortest name the index accepts.
pub const MIN_NAME_LEN: usize = 3;

/// Map an uppercase ASCII letter to its slot (A → 0, Z → 25).
#[inline]
pub(crate) fn letter_index(byte: u8) -> usize {
    debug_assert!(byte.is_ascii_uppercase(), "letter_index on {:?}", byte as char);
    (byte - b'A') as usize
}

/// Map a slot back to its letter (0 → 'A').
#[inline]
pub fn letter_at(index: usize) -> char {
    debug_assert!(index < FIRST_LEVEL_SIZE);
    (b'A' + index as u8) as char
}

// =============================================================================
// VOWEL CLASSIFICATION
// =============================================================================

/// Level-2 classification of a name's second character.
///
/// Declaration order is slot order, so the derived `Ord` walks the level
/// the same way the index does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum VowelClass {
    A,
    E,
    I,
    O,
    U,
    Y,
    /// Any consonant other than Y.
    #[serde(rename = "Default")]
    Other,
}

impl VowelClass {
    /// All classes in slot order.
    pub const ALL: [VowelClass; SECOND_LEVEL_SIZE] = [
        VowelClass::A,
        VowelClass::E,
        VowelClass::I,
        VowelClass::O,
        VowelClass::U,
        VowelClass::Y,
        VowelClass::Other,
    ];

    /// Classify an uppercase character.
    pub fn classify(c: char) -> Self {
        match c {
            'A' => VowelClass::A,
            'E' => VowelClass::E,
            'I' => VowelClass::I,
            'O' => VowelClass::O,
            'U' => VowelClass::U,
            'Y' => VowelClass::Y,
            _ => VowelClass::Other,
        }
    }

    /// Slot index within a level-2 group (0-6).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display label: the vowel itself, or `Default` for everything else.
    pub fn label(self) -> &'static str {
        match self {
            VowelClass::A => "A",
            VowelClass::E => "E",
            VowelClass::I => "I",
            VowelClass::O => "O",
            VowelClass::U => "U",
            VowelClass::Y => "Y",
            VowelClass::Other => "Default",
        }
    }
}

impl fmt::Display for VowelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// KEYS AND RECORDS
// =============================================================================

/// A name that passed validation: ASCII letters only, uppercased, at least
/// `MIN_NAME_LEN` long.
///
/// Produced by [`crate::normalize`]. Holding one is proof that the bucket
/// coordinates can be computed without further checks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Wrap a string already known to satisfy the key invariant.
    pub(crate) fn from_validated(key: String) -> Self {
        debug_assert!(is_valid_key(&key), "not a normalized key: {:?}", key);
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Coordinates of the bucket this name belongs to.
    pub fn bucket_key(&self) -> BucketKey {
        BucketKey::of(self)
    }
}

impl Deref for NormalizedName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True if `key` could have come out of `normalize`.
pub fn is_valid_key(key: &str) -> bool {
    key.len() >= MIN_NAME_LEN && key.bytes().all(|b| b.is_ascii_uppercase())
}

/// A name stored in a level-3 chain.
///
/// Records are immutable once inserted. Ordering is plain string ordering of
/// the uppercase key, which is the order chains keep.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NameRecord {
    name: String,
}

impl NameRecord {
    /// The normalized (uppercase) key.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn bucket_key(&self) -> Option<BucketKey> {
        BucketKey::for_key(&self.name)
    }
}

impl From<NormalizedName> for NameRecord {
    fn from(name: NormalizedName) -> Self {
        Self {
            name: name.into_string(),
        }
    }
}

impl AsRef<str> for NameRecord {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// =============================================================================
// BUCKET COORDINATES
// =============================================================================

/// Where a name lives: level-1 letter, level-2 vowel class, level-3 letter.
///
/// Field order matches walk order, so sorting keys sorts buckets the way
/// `NameIndex::buckets` visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey {
    first: u8,
    vowel: VowelClass,
    third: u8,
}

impl BucketKey {
    pub(crate) fn new(first: usize, vowel: VowelClass, third: usize) -> Self {
        debug_assert!(first < FIRST_LEVEL_SIZE && third < THIRD_LEVEL_SIZE);
        Self {
            first: first as u8,
            vowel,
            third: third as u8,
        }
    }

    /// Coordinates of a validated name.
    pub fn of(name: &NormalizedName) -> Self {
        let bytes = name.as_str().as_bytes();
        Self::new(
            letter_index(bytes[0]),
            VowelClass::classify(bytes[1] as char),
            letter_index(bytes[2]),
        )
    }

    /// Coordinates of an arbitrary string, if it is a valid key.
    pub fn for_key(key: &str) -> Option<Self> {
        if !is_valid_key(key) {
            return None;
        }
        Some(Self::of(&NormalizedName::from_validated(key.to_string())))
    }

    #[inline]
    pub fn first_index(self) -> usize {
        self.first as usize
    }

    #[inline]
    pub fn vowel(self) -> VowelClass {
        self.vowel
    }

    #[inline]
    pub fn third_index(self) -> usize {
        self.third as usize
    }

    pub fn first_letter(self) -> char {
        letter_at(self.first_index())
    }

    pub fn third_letter(self) -> char {
        letter_at(self.third_index())
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}][{}]",
            self.first_letter(),
            self.vowel,
            self.third_letter()
        )
    }
}

// =============================================================================
// WALK OUTPUT
// =============================================================================

/// One name as seen by a full walk: (letter1, vowel class, letter3, name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketEntry<'a> {
    pub first: char,
    pub vowel: VowelClass,
    pub third: char,
    pub name: &'a str,
}

impl<'a> BucketEntry<'a> {
    pub(crate) fn new(key: BucketKey, record: &'a NameRecord) -> Self {
        Self {
            first: key.first_letter(),
            vowel: key.vowel(),
            third: key.third_letter(),
            name: record.as_str(),
        }
    }
}

/// Shape of a populated index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Stored names, duplicates included.
    pub records: usize,
    /// Materialized level-1 groups.
    pub groups: usize,
    /// Materialized level-2 blocks.
    pub blocks: usize,
    /// Non-empty level-3 chains.
    pub buckets: usize,
    pub longest_chain: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_classes_follow_slot_order() {
        for (i, class) in VowelClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
            assert_eq!(VowelClass::from_index(i), Some(*class));
        }
        assert_eq!(VowelClass::from_index(SECOND_LEVEL_SIZE), None);
    }

    #[test]
    fn y_is_a_vowel_and_consonants_share_default() {
        assert_eq!(VowelClass::classify('Y'), VowelClass::Y);
        assert_eq!(VowelClass::classify('B'), VowelClass::Other);
        assert_eq!(VowelClass::classify('Z'), VowelClass::Other);
        assert_eq!(VowelClass::Other.label(), "Default");
    }

    #[test]
    fn bucket_key_of_lincoln() {
        let key = BucketKey::for_key("LINCOLN").unwrap();
        assert_eq!(key.first_index(), 11);
        assert_eq!(key.vowel(), VowelClass::I);
        assert_eq!(key.third_index(), 13);
        assert_eq!(key.to_string(), "[L][I][N]");
    }

    #[test]
    fn bucket_key_rejects_non_keys() {
        assert_eq!(BucketKey::for_key("AB"), None);
        assert_eq!(BucketKey::for_key("abc"), None);
        assert_eq!(BucketKey::for_key("AB1"), None);
    }

    #[test]
    fn bucket_keys_sort_in_walk_order() {
        let mut keys: Vec<BucketKey> = ["BOZ", "ANN", "BOA", "BRA", "BAA"]
            .iter()
            .filter_map(|k| BucketKey::for_key(k))
            .collect();
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["[A][Default][N]", "[B][A][A]", "[B][O][A]", "[B][O][Z]", "[B][Default][A]"]
        );
    }

    #[test]
    fn vowel_class_serializes_as_label() {
        assert_eq!(serde_json::to_string(&VowelClass::Other).unwrap(), "\"Default\"");
        assert_eq!(serde_json::to_string(&VowelClass::E).unwrap(), "\"E\"");
    }
}
