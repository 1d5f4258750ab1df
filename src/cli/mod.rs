// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the hashblocks command-line interface.
//!
//! One invocation runs the whole lifecycle: add the `-n` names, look up the
//! `-o` names, dump the structure, release. Names are comma-separated, as in
//! `hashblocks -n Bill,Jane,Lincoln,Tim -o Jane,Tim`.

pub mod display;
pub mod dump;

use clap::{ArgGroup, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "hashblocks",
    about = "Three-level hash index for short alphabetic names",
    version,
    arg_required_else_help = true,
    group(ArgGroup::new("input").required(true).multiple(true).args(["names", "find"]))
)]
pub struct Cli {
    /// Comma-separated names to add to the index
    #[arg(short = 'n', long = "names", value_name = "NAME,...", value_delimiter = ',')]
    pub names: Vec<String>,

    /// Comma-separated names to look up after adding
    #[arg(short = 'o', long = "find", value_name = "NAME,...", value_delimiter = ',')]
    pub find: Vec<String>,

    /// How to render the structure dump
    #[arg(long, value_enum, env = "HASHBLOCKS_FORMAT", default_value_t = DumpFormat::Tree)]
    pub format: DumpFormat,

    /// Skip the structure dump
    #[arg(long)]
    pub no_dump: bool,

    /// Debug logging on stderr (overrides HASHBLOCKS_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// Box-drawn tree with a stats line
    Tree,
    /// One line per level: `First Level [B]:` ... `Name: BILL`
    Plain,
    /// Entries and stats as JSON
    Json,
}

/// Non-empty tokens from a comma-separated argument.
///
/// `a,,b` and trailing commas yield no empty names.
pub fn tokens(values: &[String]) -> impl Iterator<Item = &str> {
    values.iter().map(String::as_str).filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn splits_comma_lists() {
        let cli = Cli::try_parse_from(["hashblocks", "-n", "Bill,Jane,,Tim", "-o", "Jane"]).unwrap();
        assert_eq!(tokens(&cli.names).collect::<Vec<_>>(), ["Bill", "Jane", "Tim"]);
        assert_eq!(cli.find, ["Jane"]);
        assert_eq!(cli.format, DumpFormat::Tree);
    }

    #[test]
    fn requires_names_or_find() {
        assert!(Cli::try_parse_from(["hashblocks", "--no-dump"]).is_err());
        assert!(Cli::try_parse_from(["hashblocks", "-o", "Jane"]).is_ok());
    }

    #[test]
    fn format_flag() {
        let cli = Cli::try_parse_from(["hashblocks", "-n", "Bill", "--format", "json"]).unwrap();
        assert_eq!(cli.format, DumpFormat::Json);
    }
}
