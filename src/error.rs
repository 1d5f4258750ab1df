// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validation errors for names entering the index.
//!
//! Both kinds come out of normalization, so insert and find fail the same way
//! on the same input. Neither leaves the index modified.

use thiserror::Error;

use crate::types::MIN_NAME_LEN;

/// Result type for index operations.
pub type Result<T> = std::result::Result<T, NameError>;

/// Why a name was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Missing input, or fewer than `MIN_NAME_LEN` characters.
    #[error("name must have at least {} characters", MIN_NAME_LEN)]
    InvalidLength {
        /// The rejected input (empty when absent).
        input: String,
        /// Characters counted.
        len: usize,
    },

    /// A character outside A-Z / a-z.
    #[error("invalid character {ch:?} at position {position}")]
    InvalidCharacter {
        input: String,
        ch: char,
        /// Character (not byte) position of `ch`.
        position: usize,
    },
}

impl NameError {
    /// The input that was rejected, exactly as given.
    pub fn input(&self) -> &str {
        match self {
            NameError::InvalidLength { input, .. } | NameError::InvalidCharacter { input, .. } => {
                input
            }
        }
    }

    pub fn is_invalid_length(&self) -> bool {
        matches!(self, NameError::InvalidLength { .. })
    }

    pub fn is_invalid_character(&self) -> bool {
        matches!(self, NameError::InvalidCharacter { .. })
    }
}
