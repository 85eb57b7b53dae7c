// ttf2bdf/src/error.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various types of errors that `ttf2bdf` can return.

use std::io;
use thiserror::Error;

/// Reasons why a map expression might fail to parse.
///
/// All of these are fatal: a run aborts before any rendering or output.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum RangeParseError {
    /// The expression was empty after trimming.
    #[error("empty map expression")]
    Empty,

    /// The token used a mapping operator the BDF pipeline does not support.
    ///
    /// Only simple contiguous ranges are accepted, so that the output
    /// ordering stays trivial and predictable.
    #[error("unsupported map operator in {0:?}; use simple ranges only")]
    UnsupportedOperator(String),

    /// A range endpoint wasn't valid decimal or `$`-prefixed hexadecimal.
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
}

/// Reasons why a loader might fail to load a font.
#[derive(Debug, Error)]
pub enum FontLoadingError {
    /// Attempted to load a malformed or corrupted font.
    #[error("parse error")]
    Parse,

    /// A disk or similar I/O error occurred while attempting to load the font.
    #[error("I/O error")]
    Io(#[from] io::Error),
}

/// Reasons why a sized face might fail to produce a glyph bitmap.
///
/// These are per-glyph errors; the affected codepoint is dropped from the
/// output set and the run continues.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum GlyphLoadingError {
    /// The font didn't map the codepoint to a glyph.
    #[error("no such glyph")]
    NoSuchGlyph,

    /// FreeType failed to load or render the glyph.
    #[error("rasterization failed")]
    RenderFailed,
}
