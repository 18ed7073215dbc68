use crate::character::{BitmapOffset, Character};
use crate::coverage::CoverageBitmap;
use crate::error::GlyphResult;
use crate::fixed::Fixed26Dot6;
use crate::font::FontSource;

/// Seam around the font engine.
///
/// A render makes up to two passes through this trait, fill then outline,
/// each one `load_outline`, optionally `stroke`, then `rasterize`.
pub trait GlyphRasterizer {
    /// Vector outline handed between the three steps
    type Outline;

    /// Size `face` to `height` pixels and load the vector outline for `ch`,
    /// ignoring embedded bitmaps.
    fn load_outline(&mut self, face: &FontSource, ch: char, height: u32)
        -> GlyphResult<Self::Outline>;

    /// Grow the contour by `radius` on each side with round caps and joins.
    fn stroke(&mut self, outline: Self::Outline, radius: Fixed26Dot6) -> GlyphResult<Self::Outline>;

    /// Render to 8-bit coverage with zero sub-pixel phase.
    fn rasterize(&mut self, outline: &Self::Outline) -> GlyphResult<CoverageBitmap>;
}

impl<R: GlyphRasterizer + ?Sized> GlyphRasterizer for &mut R {
    type Outline = R::Outline;

    fn load_outline(&mut self, face: &FontSource, ch: char, height: u32)
        -> GlyphResult<Self::Outline> {
        (**self).load_outline(face, ch, height)
    }

    fn stroke(&mut self, outline: Self::Outline, radius: Fixed26Dot6) -> GlyphResult<Self::Outline> {
        (**self).stroke(outline, radius)
    }

    fn rasterize(&mut self, outline: &Self::Outline) -> GlyphResult<CoverageBitmap> {
        (**self).rasterize(outline)
    }
}

/// Computes the top-left paste coordinate for a composited glyph.
///
/// `offset` is the bitmap origin selected by compositing and `size` the
/// composited image size.
pub trait PositionMapper {
    fn map(
        &self,
        glyph_size: u32,
        character: &Character,
        offset: BitmapOffset,
        size: (i32, i32),
    ) -> (i32, i32);
}

impl<F> PositionMapper for F
where
    F: Fn(u32, &Character, BitmapOffset, (i32, i32)) -> (i32, i32),
{
    fn map(
        &self,
        glyph_size: u32,
        character: &Character,
        offset: BitmapOffset,
        size: (i32, i32),
    ) -> (i32, i32) {
        self(glyph_size, character, offset, size)
    }
}
