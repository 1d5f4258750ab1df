// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structure dumps: what the index looks like after the names went in.
//!
//! All three formats are driven by the same walk, so they always agree on order.

use std::io::Write;

use anyhow::Context;
use hashblocks::{BucketEntry, BucketKey, IndexStats, NameIndex, NameRecord, VowelClass};
use serde::Serialize;

use super::display::{
    row, section_bot, section_mid, section_top, themed, BLUE, BOLD, CYAN, GRAY, GREEN, MAGENTA,
};

/// The classic layout, one header line per level:
///
/// ```text
/// First Level [B]:
///   Second Level [I]:
///     Third Level [L]:
///       Name: BILL
/// ```
pub fn plain(index: &NameIndex) {
    println!();
    let mut last: Option<BucketKey> = None;
    for (key, records) in index.buckets() {
        let same_group = last.is_some_and(|prev| prev.first_index() == key.first_index());
        if !same_group {
            println!("First Level [{}]:", key.first_letter());
        }
        if !(same_group && last.is_some_and(|prev| prev.vowel() == key.vowel())) {
            println!("  Second Level [{}]:", key.vowel());
        }
        println!("    Third Level [{}]:", key.third_letter());
        for record in records {
            println!("      Name: {}", record);
        }
        last = Some(key);
    }
}

type Chains<'a> = Vec<(char, &'a [NameRecord])>;
type Blocks<'a> = Vec<(VowelClass, Chains<'a>)>;

/// Regroup the flat bucket walk into first letter → vowel class → chains.
fn nest(index: &NameIndex) -> Vec<(char, Blocks<'_>)> {
    let mut tree: Vec<(char, Blocks<'_>)> = Vec::new();
    for (key, records) in index.buckets() {
        let first = key.first_letter();
        if tree.last().map(|(letter, _)| *letter) != Some(first) {
            tree.push((first, Vec::new()));
        }
        if let Some((_, blocks)) = tree.last_mut() {
            if blocks.last().map(|(vowel, _)| *vowel) != Some(key.vowel()) {
                blocks.push((key.vowel(), Vec::new()));
            }
            if let Some((_, chains)) = blocks.last_mut() {
                chains.push((key.third_letter(), records));
            }
        }
    }
    tree
}

fn branch(is_last: bool) -> &'static str {
    if is_last {
        "└─ "
    } else {
        "├─ "
    }
}

fn stem(is_last: bool) -> &'static str {
    if is_last {
        "   "
    } else {
        "│  "
    }
}

/// Box-drawn tree of the hierarchy with a stats footer.
pub fn tree(index: &NameIndex) {
    section_top("HASH BLOCKS");

    let tree = nest(index);
    if tree.is_empty() {
        row(&format!(" {}", themed(GRAY, &[], "(empty)")));
    }
    for (first, blocks) in &tree {
        row(&format!(" {}", themed(BLUE, &[BOLD], &first.to_string())));
        for (b, (vowel, chains)) in blocks.iter().enumerate() {
            let last_block = b + 1 == blocks.len();
            row(&format!(
                " {}{}",
                branch(last_block),
                themed(MAGENTA, &[], vowel.label())
            ));
            for (c, (third, records)) in chains.iter().enumerate() {
                let names = records
                    .iter()
                    .map(NameRecord::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                row(&format!(
                    " {}{}{}  {}",
                    stem(last_block),
                    branch(c + 1 == chains.len()),
                    themed(CYAN, &[], &third.to_string()),
                    themed(GREEN, &[], &names)
                ));
            }
        }
    }

    section_mid();
    row(&format!(" {}", summary(&index.stats())));
    section_bot();
}

fn summary(stats: &IndexStats) -> String {
    format!(
        "{} names · {} groups · {} blocks · {} buckets · longest chain {}",
        stats.records, stats.groups, stats.blocks, stats.buckets, stats.longest_chain
    )
}

#[derive(Serialize)]
struct Dump<'a> {
    stats: IndexStats,
    entries: Vec<BucketEntry<'a>>,
}

/// `{"stats": {...}, "entries": [{"first": "B", "vowel": "I", "third": "L", "name": "BILL"}, ...]}`
pub fn json(index: &NameIndex) -> anyhow::Result<()> {
    let dump = Dump {
        stats: index.stats(),
        entries: index.enumerate().collect(),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &dump).context("writing JSON dump")?;
    writeln!(out).context("writing JSON dump")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashblocks::testing::index_of;

    #[test]
    fn nest_groups_by_level() {
        let index = index_of(&["Bill", "Bob", "Boa", "Bryn", "Tim"]);
        let tree = nest(&index);

        let firsts: Vec<char> = tree.iter().map(|(first, _)| *first).collect();
        assert_eq!(firsts, ['B', 'T']);

        let (_, b_blocks) = &tree[0];
        let vowels: Vec<VowelClass> = b_blocks.iter().map(|(vowel, _)| *vowel).collect();
        assert_eq!(vowels, [VowelClass::I, VowelClass::O, VowelClass::Other]);

        let (_, o_chains) = &b_blocks[1];
        let thirds: Vec<char> = o_chains.iter().map(|(third, _)| *third).collect();
        assert_eq!(thirds, ['A', 'B']);
    }

    #[test]
    fn summary_line() {
        let index = index_of(&["Ann", "Ann"]);
        assert_eq!(
            summary(&index.stats()),
            "2 names · 1 groups · 1 blocks · 1 buckets · longest chain 2"
        );
    }
}
