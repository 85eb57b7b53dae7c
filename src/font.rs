// ttf2bdf/src/font.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A render session over a FreeType face, sized once for a target pixel
//! size and queried one codepoint at a time.

use freetype::freetype::{FT_Done_Face, FT_Face, FT_Get_Char_Index, FT_Init_FreeType};
use freetype::freetype::{FT_LOAD_DEFAULT, FT_Library, FT_Load_Glyph, FT_Long, FT_New_Memory_Face};
use freetype::freetype::{FT_Render_Glyph, FT_Render_Mode, FT_Set_Char_Size, FT_UInt, FT_ULong};
use std::fs;
use std::path::Path;
use std::ptr;
use std::slice;
use std::sync::Arc;

use crate::error::{FontLoadingError, GlyphLoadingError};

const FT_RENDER_MODE_MONO: u32 = 2;

const FT_LOAD_TARGET_MONO: u32 = (FT_RENDER_MODE_MONO & 15) << 16;

const FT_PIXEL_MODE_MONO: u8 = 1;

thread_local! {
    static FREETYPE_LIBRARY: FT_Library = {
        unsafe {
            let mut library = ptr::null_mut();
            assert_eq!(FT_Init_FreeType(&mut library), 0);
            library
        }
    };
}

/// A font face loaded into FreeType, exclusively owned by its caller.
///
/// The face is stateful: `set_pixel_size` configures it once for the target
/// pixel size and resolution, and every subsequent `rasterize_glyph` call
/// renders against that sizing.
pub struct Font {
    freetype_face: FT_Face,
    font_data: Arc<Vec<u8>>,
}

/// A single codepoint rendered to a monochrome bitmap, together with the
/// metrics needed to place it.
///
/// `buffer` is a copy of FreeType's glyph slot bitmap: `height` scanlines of
/// `stride` bytes each, one bit per pixel, MSB first. The stride is a
/// rasterizer implementation detail and may be wider than the logical row;
/// see `bitmap::pack_rows`.
#[derive(Clone, Debug)]
pub struct RasterGlyph {
    /// The codepoint that was rendered.
    pub codepoint: u32,
    /// Horizontal advance in 26.6 fixed point.
    pub advance: i64,
    /// Left side bearing in whole pixels.
    pub left: i32,
    /// Distance from the baseline up to the bitmap's top scanline, in whole
    /// pixels.
    pub top: i32,
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
    /// Number of bytes between successive scanlines in `buffer`.
    pub stride: usize,
    /// The raw 1bpp bitmap, `height * stride` bytes.
    pub buffer: Vec<u8>,
}

/// Vertical metrics of a face sized for a particular pixel size.
///
/// All values are whole device pixels, floored from FreeType's 26.6 size
/// metrics. BDF wants ascent and descent as positive counts, so `descent`
/// is the negated FreeType descender.
#[derive(Clone, Copy, Debug)]
pub struct Metrics {
    /// The amount the font rises above the baseline.
    pub ascent: i32,
    /// The amount the font descends below the baseline, as a positive count.
    pub descent: i32,
    /// The widest advance of any glyph in the face.
    pub max_advance: i32,
}

impl Font {
    /// Loads the first face from raw font data (the contents of a
    /// `.ttf`/`.otf`/etc. file).
    pub fn from_bytes(font_data: Arc<Vec<u8>>) -> Result<Font, FontLoadingError> {
        FREETYPE_LIBRARY.with(|freetype_library| unsafe {
            let mut freetype_face = ptr::null_mut();
            if FT_New_Memory_Face(
                *freetype_library,
                (*font_data).as_ptr(),
                font_data.len() as i64,
                0 as FT_Long,
                &mut freetype_face,
            ) != 0
            {
                return Err(FontLoadingError::Parse);
            }

            Ok(Font {
                freetype_face,
                font_data,
            })
        })
    }

    /// Loads the first face from the path to a `.ttf`/`.otf`/etc. file.
    pub fn from_path<P>(path: P) -> Result<Font, FontLoadingError>
    where
        P: AsRef<Path>,
    {
        Font::from_bytes(Arc::new(fs::read(path)?))
    }

    /// Sizes the face for `pixel_size` pixels per em at the given device
    /// resolution in dots per inch.
    ///
    /// Must be called before the first `rasterize_glyph` or `metrics` call.
    /// `pixel_size` and `resolution` must be nonzero.
    pub fn set_pixel_size(&mut self, pixel_size: u32, resolution: u32) {
        unsafe {
            assert_eq!(
                FT_Set_Char_Size(
                    self.freetype_face,
                    0,
                    (pixel_size as i64) << 6,
                    resolution as FT_UInt,
                    resolution as FT_UInt,
                ),
                0
            );
        }
    }

    /// Retrieves the vertical metrics of the sized face.
    pub fn metrics(&self) -> Metrics {
        unsafe {
            let size_metrics = &(*(*self.freetype_face).size).metrics;
            Metrics {
                ascent: (size_metrics.ascender >> 6) as i32,
                descent: ((-size_metrics.descender) >> 6) as i32,
                max_advance: (size_metrics.max_advance >> 6) as i32,
            }
        }
    }

    /// Renders one codepoint in monochrome at the configured size.
    ///
    /// A codepoint the face doesn't map returns `NoSuchGlyph`; both error
    /// cases are per-glyph and leave the session usable for the next
    /// codepoint.
    pub fn rasterize_glyph(&self, codepoint: u32) -> Result<RasterGlyph, GlyphLoadingError> {
        unsafe {
            let glyph_index = FT_Get_Char_Index(self.freetype_face, codepoint as FT_ULong);
            if glyph_index == 0 {
                return Err(GlyphLoadingError::NoSuchGlyph);
            }

            let load_flags = FT_LOAD_DEFAULT | FT_LOAD_TARGET_MONO;
            if FT_Load_Glyph(self.freetype_face, glyph_index, load_flags as i32) != 0 {
                return Err(GlyphLoadingError::RenderFailed);
            }

            let slot = (*self.freetype_face).glyph;
            if FT_Render_Glyph(slot, FT_Render_Mode::FT_RENDER_MODE_MONO) != 0 {
                return Err(GlyphLoadingError::RenderFailed);
            }

            let bitmap = &(*slot).bitmap;
            if (*bitmap).pixel_mode != FT_PIXEL_MODE_MONO {
                return Err(GlyphLoadingError::RenderFailed);
            }

            let bitmap_stride = (*bitmap).pitch as usize;
            let bitmap_width = (*bitmap).width as u32;
            let bitmap_height = (*bitmap).rows as u32;
            let bitmap_length = bitmap_stride * bitmap_height as usize;
            let buffer = if bitmap_length == 0 || (*bitmap).buffer.is_null() {
                vec![]
            } else {
                let bitmap_buffer = (*bitmap).buffer as *const i8 as *const u8;
                slice::from_raw_parts(bitmap_buffer, bitmap_length).to_vec()
            };

            Ok(RasterGlyph {
                codepoint,
                advance: (*slot).advance.x as i64,
                left: (*slot).bitmap_left as i32,
                top: (*slot).bitmap_top as i32,
                width: bitmap_width,
                height: bitmap_height,
                stride: bitmap_stride,
                buffer,
            })
        }
    }

    /// Returns the raw font data this face was loaded from.
    pub fn copy_font_data(&self) -> Arc<Vec<u8>> {
        self.font_data.clone()
    }
}

impl Drop for Font {
    fn drop(&mut self) {
        unsafe {
            if !self.freetype_face.is_null() {
                assert_eq!(FT_Done_Face(self.freetype_face), 0);
            }
        }
    }
}
