// ttf2bdf/tests/tests.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// General tests.

use std::path::Path;
use std::sync::Arc;

use ttf2bdf::bdf;
use ttf2bdf::bitmap;
use ttf2bdf::error::RangeParseError;
use ttf2bdf::font::{Font, Metrics, RasterGlyph};
use ttf2bdf::glyph::Glyph;
use ttf2bdf::ranges::{expand_ranges, parse_ranges};

static KNOWN_SYSTEM_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

#[test]
pub fn expansion_is_strictly_ascending_and_unique() {
    let ranges = parse_ranges("*, 200-100, $41-$43, 500, 40-60,").unwrap();
    let codepoints = expand_ranges(&ranges);
    assert!(codepoints.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(codepoints.contains(&65));
    assert!(codepoints.contains(&150));
    assert!(codepoints.contains(&500));
}

#[test]
pub fn unsupported_operator_parses_to_an_error() {
    assert!(matches!(
        parse_ranges("32-64, 65>90"),
        Err(RangeParseError::UnsupportedOperator(_))
    ));
}

#[test]
pub fn emitted_records_match_their_bounding_boxes() {
    let metrics = Metrics {
        ascent: 10,
        descent: 2,
        max_advance: 11,
    };
    let rasters = vec![
        // 10x3 bitmap padded to a 4-byte stride.
        RasterGlyph {
            codepoint: 65,
            advance: 640,
            left: 1,
            top: 3,
            width: 10,
            height: 3,
            stride: 4,
            buffer: vec![0; 12],
        },
        // A space: no bitmap at all.
        RasterGlyph {
            codepoint: 32,
            advance: 320,
            left: 0,
            top: 0,
            width: 0,
            height: 0,
            stride: 0,
            buffer: vec![],
        },
        // Zero advance exercises the fallback chain.
        RasterGlyph {
            codepoint: 66,
            advance: 0,
            left: 0,
            top: 5,
            width: 5,
            height: 5,
            stride: 1,
            buffer: vec![0xF8; 5],
        },
    ];
    let glyphs: Vec<Glyph> = rasters
        .iter()
        .map(|raster| Glyph::from_raster(raster, &metrics))
        .collect();
    let text = bdf::encode("TestFont", 24, 72, &metrics, &glyphs);

    assert_eq!(text.matches("STARTCHAR").count(), 3);
    assert!(text.contains("CHARS 3\n"));
    assert!(!text.contains("DWIDTH 0 0"));
    check_record_shapes(&text);
}

// Walks every emitted record and checks that the BBX dimensions agree with
// the bitmap section: `h` rows of `2 * ceil(w / 8)` hex digits, or a single
// `00` placeholder when `h == 0`.
fn check_record_shapes(text: &str) {
    let mut lines = text.lines().peekable();
    let mut records = 0;
    while let Some(line) = lines.next() {
        if !line.starts_with("BBX ") {
            continue;
        }
        records += 1;
        let fields: Vec<i64> = line["BBX ".len()..]
            .split(' ')
            .map(|field| field.parse().unwrap())
            .collect();
        let (width, height) = (fields[0], fields[1]);
        assert_eq!(lines.next(), Some("BITMAP"));
        let mut rows = vec![];
        while let Some(&row) = lines.peek() {
            if row == "ENDCHAR" {
                break;
            }
            rows.push(lines.next().unwrap());
        }
        if height == 0 {
            assert_eq!(rows, vec!["00"]);
        } else {
            assert_eq!(rows.len(), height as usize);
            for row in rows {
                assert_eq!(row.len(), 2 * bitmap::row_bytes(width as u32).max(1));
            }
        }
    }
    assert!(records > 0);
}

#[test]
pub fn load_font_from_garbage_fails() {
    assert!(Font::from_bytes(Arc::new(vec![1, 2, 3, 4])).is_err());
}

#[test]
pub fn subset_a_real_face() {
    if !Path::new(KNOWN_SYSTEM_FONT_PATH).exists() {
        return;
    }

    let mut font = Font::from_path(KNOWN_SYSTEM_FONT_PATH).unwrap();
    font.set_pixel_size(24, 72);
    let metrics = font.metrics();
    assert!(metrics.ascent > 0);
    assert!(metrics.descent >= 0);

    let codepoints = expand_ranges(&parse_ranges("65-67").unwrap());
    let glyphs: Vec<Glyph> = codepoints
        .iter()
        .filter_map(|&codepoint| font.rasterize_glyph(codepoint).ok())
        .map(|raster| Glyph::from_raster(&raster, &metrics))
        .collect();
    assert_eq!(glyphs.len(), 3);

    let text = bdf::encode("DejaVuSans", 24, 72, &metrics, &glyphs);
    assert_eq!(text.matches("STARTCHAR").count(), 3);
    assert!(text.contains("CHARS 3\n"));

    let encodings: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with("ENCODING "))
        .collect();
    assert_eq!(encodings, vec!["ENCODING 65", "ENCODING 66", "ENCODING 67"]);

    let max_width = glyphs.iter().map(|glyph| glyph.width).max().unwrap();
    let max_height = glyphs.iter().map(|glyph| glyph.height).max().unwrap();
    assert!(text.contains(&format!("FONTBOUNDINGBOX {} {} 0 ", max_width, max_height)));

    for glyph in &glyphs {
        assert!(glyph.device_width > 0);
    }
    check_record_shapes(&text);
}

#[test]
pub fn unmapped_codepoint_is_dropped() {
    if !Path::new(KNOWN_SYSTEM_FONT_PATH).exists() {
        return;
    }

    let mut font = Font::from_path(KNOWN_SYSTEM_FONT_PATH).unwrap();
    font.set_pixel_size(24, 72);

    // U+0378 is unassigned, so no face maps it.
    assert!(font.rasterize_glyph(0x0378).is_err());
    assert!(font.rasterize_glyph(65).is_ok());
}
