// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Level-2 groups and level-3 blocks.
//!
//! Both are fixed-size arrays. Groups hold optional boxed blocks that appear
//! the first time a name lands in them; blocks hold one chain per third letter.

use super::chain::Chain;
use crate::types::{VowelClass, SECOND_LEVEL_SIZE, THIRD_LEVEL_SIZE};

/// Everything under one leading letter, split by vowel class.
#[derive(Debug, Default)]
pub(crate) struct VowelGroup {
    blocks: [Option<Box<LetterBlock>>; SECOND_LEVEL_SIZE],
}

impl VowelGroup {
    pub fn block(&self, vowel: VowelClass) -> Option<&LetterBlock> {
        self.blocks[vowel.index()].as_deref()
    }

    /// The block for `vowel`, created empty if this is its first name.
    pub fn block_or_insert(&mut self, vowel: VowelClass) -> &mut LetterBlock {
        self.blocks[vowel.index()].get_or_insert_with(|| {
            tracing::debug!(vowel = %vowel, "materialized level-2 block");
            Box::default()
        })
    }

    /// Materialized blocks in slot order.
    pub fn blocks(&self) -> impl Iterator<Item = (VowelClass, &LetterBlock)> + '_ {
        self.blocks
            .iter()
            .zip(VowelClass::ALL)
            .filter_map(|(slot, vowel)| slot.as_deref().map(|block| (vowel, block)))
    }
}

/// One chain per third letter.
#[derive(Debug, Default)]
pub(crate) struct LetterBlock {
    chains: [Chain; THIRD_LEVEL_SIZE],
}

impl LetterBlock {
    pub fn chain(&self, third: usize) -> &Chain {
        &self.chains[third]
    }

    pub fn chain_mut(&mut self, third: usize) -> &mut Chain {
        &mut self.chains[third]
    }

    /// Non-empty chains with their third-letter slot.
    pub fn chains(&self) -> impl Iterator<Item = (usize, &Chain)> + '_ {
        self.chains
            .iter()
            .enumerate()
            .filter(|(_, chain)| !chain.is_empty())
    }
}
