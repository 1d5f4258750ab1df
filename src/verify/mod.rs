// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: structural checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Full checks** (`NameIndex::verify`) walk the whole structure and report
//!    the first broken invariant as an `InvariantError`. Tests and fuzz targets
//!    call this after every batch of operations.
//!
//! 2. **Runtime contracts** that panic in debug builds when an insert leaves
//!    its chain out of order or files a record in the wrong bucket. Zero-cost
//!    in release, but they catch bugs at the moment they happen.

mod types;
pub mod contracts;

pub use types::*;
