// ttf2bdf/src/main.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Command-line front end: argument parsing and file I/O glue around the
//! library pipeline.

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use log::warn;
use std::fs;

use ttf2bdf::bdf;
use ttf2bdf::font::Font;
use ttf2bdf::glyph::Glyph;
use ttf2bdf::ranges;

static DEFAULT_FONT_NAME: &str = "x14y24pxHeadUpDaisy";

fn get_args() -> ArgMatches {
    let ttf_arg = Arg::new("ttf")
        .help("Path of the source `.ttf`/`.otf` font")
        .long("ttf")
        .value_name("PATH")
        .required(true);
    let map_arg = Arg::new("map")
        .help("Path of a file holding the codepoint map expression")
        .long("map")
        .value_name("PATH")
        .required(true);
    let out_arg = Arg::new("out")
        .help("Path of the BDF font to write")
        .long("out")
        .value_name("PATH")
        .required(true);
    let px_arg = Arg::new("px")
        .help("Target pixel size")
        .long("px")
        .value_name("N")
        .value_parser(clap::value_parser!(u32).range(1..))
        .default_value("24");
    let dpi_arg = Arg::new("dpi")
        .help("Device resolution in dots per inch")
        .long("dpi")
        .value_name("N")
        .value_parser(clap::value_parser!(u32).range(1..))
        .default_value("72");
    let fontname_arg = Arg::new("fontname")
        .help("Family name to embed in the XLFD font name")
        .long("fontname")
        .value_name("NAME")
        .default_value(DEFAULT_FONT_NAME);
    Command::new("ttf2bdf")
        .version("0.1")
        .about("Generates a BDF bitmap font subset from a scalable font")
        .arg(ttf_arg)
        .arg(map_arg)
        .arg(out_arg)
        .arg(px_arg)
        .arg(dpi_arg)
        .arg(fontname_arg)
        .get_matches()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = get_args();
    let ttf_path = matches.get_one::<String>("ttf").unwrap();
    let map_path = matches.get_one::<String>("map").unwrap();
    let out_path = matches.get_one::<String>("out").unwrap();
    let pixel_size = *matches.get_one::<u32>("px").unwrap();
    let resolution = *matches.get_one::<u32>("dpi").unwrap();
    let font_name = matches.get_one::<String>("fontname").unwrap();

    let expression = fs::read_to_string(map_path)
        .with_context(|| format!("failed to read map expression from {}", map_path))?;
    let parsed = ranges::parse_ranges(&expression)?;
    let codepoints = ranges::expand_ranges(&parsed);

    let mut font =
        Font::from_path(ttf_path).with_context(|| format!("failed to load font {}", ttf_path))?;
    font.set_pixel_size(pixel_size, resolution);
    let metrics = font.metrics();

    let mut glyphs = vec![];
    for codepoint in codepoints {
        match font.rasterize_glyph(codepoint) {
            Ok(raster) => glyphs.push(Glyph::from_raster(&raster, &metrics)),
            Err(error) => warn!("skipping U+{:04X}: {}", codepoint, error),
        }
    }

    let output = bdf::encode(font_name, pixel_size, resolution, &metrics, &glyphs);
    fs::write(out_path, output).with_context(|| format!("failed to write {}", out_path))?;
    Ok(())
}
