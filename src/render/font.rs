//=========================================================================
// Bitmap Font
//=========================================================================
//
// Renders text into RGBA bitmaps using the 8×8 glyph tables from
// `font8x8`. Glyphs are scaled by an integer factor derived from the
// requested font size; characters outside Basic Latin and Latin-1 render
// as blank cells.
//
//=========================================================================

//=== External Dependencies ===============================================

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::Rgba;

//=== Internal Dependencies ===============================================

use super::{Bitmap, Color};

//=== Font ================================================================

/// Handle to a fixed-cell bitmap font at a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Font {
    size: u32,
}

impl Font {
    /// Side length of a source glyph cell in pixels.
    pub const GLYPH_CELL: u32 = 8;

    /// Font size units per glyph scale step.
    const SIZE_PER_SCALE: u32 = 12;

    pub const fn new(size: u32) -> Self {
        Self { size }
    }

    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Integer scale applied to each glyph pixel (at least 1).
    pub fn scale(&self) -> u32 {
        (self.size / Self::SIZE_PER_SCALE).max(1)
    }

    /// Pixel dimensions of `text` rendered with this font.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let cell = Self::GLYPH_CELL * self.scale();
        (text.chars().count() as u32 * cell, cell)
    }

    /// Renders `text` into a transparent bitmap with `color` glyphs.
    ///
    /// Empty text yields a 1×cell transparent bitmap so callers can still
    /// center it.
    pub fn render(&self, text: &str, color: Color) -> Bitmap {
        let scale = self.scale();
        let cell = Self::GLYPH_CELL * scale;
        let (width, height) = self.measure(text);
        let mut bitmap = Bitmap::new(width.max(1), height);
        let pixel = Rgba([color.r, color.g, color.b, 255]);

        for (index, ch) in text.chars().enumerate() {
            let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch)) else {
                continue;
            };
            let origin_x = index as u32 * cell;

            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..Self::GLYPH_CELL {
                    if (bits >> col) & 1 == 0 {
                        continue;
                    }
                    for dy in 0..scale {
                        for dx in 0..scale {
                            bitmap.put_pixel(
                                origin_x + col * scale + dx,
                                row as u32 * scale + dy,
                                pixel,
                            );
                        }
                    }
                }
            }
        }

        bitmap
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(24)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
