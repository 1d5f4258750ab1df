// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Name normalization: the gate every key passes through.
//!
//! Insert and find both run input through [`normalize`] first, which is what
//! makes the index case-insensitive. Validation happens before any level is
//! touched, so a rejected name never leaves a trace in the structure.

use crate::error::{NameError, Result};
use crate::types::{NormalizedName, MIN_NAME_LEN};

/// Validate a name and uppercase it.
///
/// Length is checked first, in characters: `"Xx"` is too short even though it
/// is alphabetic, and `"1"` reports a length error rather than a bad character.
/// Then every character must be an ASCII letter.
///
/// ```
/// use hashblocks::normalize;
///
/// assert_eq!(normalize("Lincoln").unwrap().as_str(), "LINCOLN");
/// assert!(normalize("Xx").unwrap_err().is_invalid_length());
/// assert!(normalize("Jo3").unwrap_err().is_invalid_character());
/// ```
pub fn normalize(input: &str) -> Result<NormalizedName> {
    let len = input.chars().count();
    if len < MIN_NAME_LEN {
        return Err(NameError::InvalidLength {
            input: input.to_string(),
            len,
        });
    }

    let mut key = String::with_capacity(input.len());
    for (position, ch) in input.chars().enumerate() {
        if !ch.is_ascii_alphabetic() {
            return Err(NameError::InvalidCharacter {
                input: input.to_string(),
                ch,
                position,
            });
        }
        key.push(ch.to_ascii_uppercase());
    }

    Ok(NormalizedName::from_validated(key))
}

/// [`normalize`] for input that may be missing. Absent input is a length error.
pub fn normalize_opt(input: Option<&str>) -> Result<NormalizedName> {
    match input {
        Some(input) => normalize(input),
        None => Err(NameError::InvalidLength {
            input: String::new(),
            len: 0,
        }),
    }
}
