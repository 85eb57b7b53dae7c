// ttf2bdf/src/bdf.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Serializes glyphs and aggregate metrics as a BDF 2.1 font.
//!
//! The format is positional and line-oriented; field order and spelling are
//! the compatibility surface and must not change.

use log::warn;

use crate::font::Metrics;
use crate::glyph::Glyph;

/// Serializes a complete BDF font.
///
/// The header's bounding box is the maximum glyph bounding box; `CHARS`
/// counts only the glyphs actually present. Glyphs are emitted in the order
/// given, which the caller keeps ascending by codepoint. The returned text
/// ends with a trailing newline.
pub fn encode(
    font_name: &str,
    pixel_size: u32,
    resolution: u32,
    metrics: &Metrics,
    glyphs: &[Glyph],
) -> String {
    if glyphs.is_empty() {
        warn!("no glyphs rendered; emitting an empty font");
    }
    let max_width = glyphs.iter().map(|glyph| glyph.width).max().unwrap_or(0);
    let max_height = glyphs.iter().map(|glyph| glyph.height).max().unwrap_or(0);

    let mut lines = vec![];
    lines.push("STARTFONT 2.1".to_owned());
    lines.push(format!(
        "FONT -FreeType-{}-Regular-R-Normal--{}-{}-{}-{}-C-0-ISO10646-1",
        font_name,
        pixel_size,
        pixel_size * 10,
        resolution,
        resolution
    ));
    lines.push(format!("SIZE {} {} {}", pixel_size, resolution, resolution));
    lines.push(format!(
        "FONTBOUNDINGBOX {} {} 0 {}",
        max_width, max_height, -metrics.descent
    ));
    lines.push("STARTPROPERTIES 2".to_owned());
    lines.push(format!("FONT_ASCENT {}", metrics.ascent));
    lines.push(format!("FONT_DESCENT {}", metrics.descent));
    lines.push("ENDPROPERTIES".to_owned());
    lines.push(format!("CHARS {}", glyphs.len()));

    for glyph in glyphs {
        push_glyph(&mut lines, glyph);
    }

    lines.push("ENDFONT".to_owned());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn push_glyph(lines: &mut Vec<String>, glyph: &Glyph) {
    lines.push(format!("STARTCHAR uni{:04X}", glyph.codepoint));
    lines.push(format!("ENCODING {}", glyph.codepoint));
    lines.push("SWIDTH 0 0".to_owned());
    lines.push(format!("DWIDTH {} 0", glyph.device_width));
    lines.push(format!(
        "BBX {} {} {} {}",
        glyph.width, glyph.height, glyph.x_offset, glyph.y_offset
    ));
    lines.push("BITMAP".to_owned());
    if glyph.height == 0 {
        lines.push("00".to_owned());
    } else {
        for row in &glyph.rows {
            lines.push(hex_row(row));
        }
    }
    lines.push("ENDCHAR".to_owned());
}

/// Renders one packed row as uppercase hex, two digits per byte.
///
/// An empty row (a zero-width glyph's scanline) still yields `00`; the
/// BITMAP section of a record is never blank.
pub fn hex_row(row: &[u8]) -> String {
    if row.is_empty() {
        return "00".to_owned();
    }
    row.iter().map(|byte| format!("{:02X}", byte)).collect()
}
