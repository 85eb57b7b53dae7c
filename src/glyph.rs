// ttf2bdf/src/glyph.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-glyph BDF records and the metric translation that produces them.

use crate::bitmap;
use crate::font::{Metrics, RasterGlyph};

/// One glyph of the output font, ready for serialization.
///
/// Built from a rendered raster, immutable thereafter, and consumed once
/// when its record is emitted.
#[derive(Clone, Debug)]
pub struct Glyph {
    /// The Unicode codepoint this glyph encodes.
    pub codepoint: u32,
    /// Horizontal advance in whole device pixels. Never zero.
    pub device_width: i32,
    /// Bounding-box width in pixels.
    pub width: u32,
    /// Bounding-box height in pixels.
    pub height: u32,
    /// Horizontal offset of the bounding box from the glyph origin.
    pub x_offset: i32,
    /// Vertical offset of the bounding box's lower-left corner relative to
    /// the baseline.
    pub y_offset: i32,
    /// Packed bitmap rows, one per scanline, MSB first,
    /// `bitmap::row_bytes(width)` bytes each.
    pub rows: Vec<Vec<u8>>,
}

impl Glyph {
    /// Builds a BDF glyph record from a rendered raster.
    ///
    /// The advance is floored from 26.6 fixed point to whole pixels; a zero
    /// result falls back to the face's maximum advance and then to a single
    /// pixel. A zero `DWIDTH` breaks text layout in BDF consumers, so it is
    /// never emitted.
    ///
    /// The rasterizer reports the vertical bearing from the baseline up to
    /// the bitmap's top scanline; BDF wants the offset of the lower-left
    /// corner instead, hence `top - height`.
    pub fn from_raster(raster: &RasterGlyph, metrics: &Metrics) -> Glyph {
        let mut device_width = (raster.advance >> 6) as i32;
        if device_width == 0 {
            device_width = metrics.max_advance;
        }
        if device_width == 0 {
            device_width = 1;
        }

        Glyph {
            codepoint: raster.codepoint,
            device_width,
            width: raster.width,
            height: raster.height,
            x_offset: raster.left,
            y_offset: raster.top - raster.height as i32,
            rows: bitmap::pack_rows(&raster.buffer, raster.stride, raster.width, raster.height),
        }
    }
}
