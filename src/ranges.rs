// ttf2bdf/src/ranges.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Selects codepoints via a comma-separated map expression.
//!
//! Each token is either `*` (the fixed 32–255 block), a single value, or an
//! inclusive `low-high` pair. Values are decimal, or hexadecimal when
//! prefixed with `$`.

use std::collections::BTreeSet;
use std::mem;

use crate::error::RangeParseError;

/// The range a lone `*` token selects.
///
/// The bound is a fixed default that consumers of the generated fonts rely
/// on; it is not derived from the input font.
pub const WILDCARD_RANGE: (u32, u32) = (32, 255);

/// Parses a map expression into normalized inclusive ranges.
///
/// Ranges come back in input order, each satisfying `low <= high`; reversed
/// pairs are swapped rather than rejected. Empty tokens between commas are
/// skipped, so trailing commas are tolerated.
pub fn parse_ranges(expression: &str) -> Result<Vec<(u32, u32)>, RangeParseError> {
    let expression = expression.trim();
    if expression.is_empty() {
        return Err(RangeParseError::Empty);
    }

    let mut ranges = vec![];
    for part in expression.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if part == "*" {
            ranges.push(WILDCARD_RANGE);
            continue;
        }
        if part.contains('>') || part.contains('~') || part.contains('x') {
            return Err(RangeParseError::UnsupportedOperator(part.to_owned()));
        }
        // Only the first `-` separates endpoints; no escaping is supported.
        let (low, high) = match part.split_once('-') {
            Some((low, high)) => (low.trim(), high.trim()),
            None => (part, part),
        };
        let mut low = parse_endpoint(low)?;
        let mut high = parse_endpoint(high)?;
        if high < low {
            mem::swap(&mut low, &mut high);
        }
        ranges.push((low, high));
    }
    Ok(ranges)
}

fn parse_endpoint(text: &str) -> Result<u32, RangeParseError> {
    let result = match text.strip_prefix('$') {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    result.map_err(|_| RangeParseError::InvalidNumber(text.to_owned()))
}

/// Expands ranges into a sorted, deduplicated codepoint sequence.
///
/// Order is canonical (ascending) regardless of the order ranges were
/// written in; the output format does not depend on user-specified
/// ordering. No cap is enforced on range sizes here.
pub fn expand_ranges(ranges: &[(u32, u32)]) -> Vec<u32> {
    let mut codepoints = BTreeSet::new();
    for &(low, high) in ranges {
        codepoints.extend(low..=high);
    }
    codepoints.into_iter().collect()
}
