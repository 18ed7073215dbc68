//! Synthetic rasterizer for testing the pipeline without font files

use std::collections::HashSet;

use crate::character::BitmapOffset;
use crate::coverage::CoverageBitmap;
use crate::error::{GlyphError, GlyphResult};
use crate::fixed::Fixed26Dot6;
use crate::font::FontSource;
use crate::traits::GlyphRasterizer;

/// Shape of the fill pass produced by [`SyntheticRasterizer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticGlyph {
    pub width: u32,
    pub rows: u32,
    pub offset: BitmapOffset,
    /// Row-major coverage; `None` means fully covered
    pub pattern: Option<Vec<u8>>,
}

impl SyntheticGlyph {
    pub fn solid(width: u32, rows: u32, offset: BitmapOffset) -> Self {
        Self {
            width,
            rows,
            offset,
            pattern: None,
        }
    }

    /// `pattern` must hold `width * rows` bytes.
    pub fn with_pattern(mut self, pattern: Vec<u8>) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

/// Outline handle returned by [`SyntheticRasterizer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticOutline {
    pub ch: char,
    pub height: u32,
    pub radius: Option<Fixed26Dot6>,
}

/// Calls observed by [`SyntheticRasterizer`], in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterCall {
    LoadOutline { ch: char, height: u32 },
    Stroke { radius: Fixed26Dot6 },
    Rasterize { stroked: bool },
}

/// Deterministic rasterizer that needs no font.
///
/// The fill pass yields the configured glyph. A stroked pass yields a fully
/// covered box grown by the whole-pixel radius on every side, with its
/// origin moved up and left by the same amount, the way a round stroke grows
/// a real outline's bounding box. A zero radius yields the glyph box with no
/// coverage.
#[derive(Debug, Clone)]
pub struct SyntheticRasterizer {
    glyph: SyntheticGlyph,
    missing: HashSet<char>,
    calls: Vec<RasterCall>,
}

impl Default for SyntheticRasterizer {
    fn default() -> Self {
        Self::new(SyntheticGlyph::solid(8, 12, BitmapOffset::new(1, -10)))
    }
}

impl SyntheticRasterizer {
    pub fn new(glyph: SyntheticGlyph) -> Self {
        Self {
            glyph,
            missing: HashSet::new(),
            calls: Vec::new(),
        }
    }

    /// Report `ch` as absent from every face
    pub fn with_missing(mut self, ch: char) -> Self {
        self.missing.insert(ch);
        self
    }

    pub fn calls(&self) -> &[RasterCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl GlyphRasterizer for SyntheticRasterizer {
    type Outline = SyntheticOutline;

    fn load_outline(&mut self, face: &FontSource, ch: char, height: u32)
        -> GlyphResult<SyntheticOutline> {
        self.calls.push(RasterCall::LoadOutline { ch, height });
        if self.missing.contains(&ch) {
            return Err(GlyphError::MissingGlyph {
                ch,
                source_name: face.name(),
            });
        }
        Ok(SyntheticOutline {
            ch,
            height,
            radius: None,
        })
    }

    fn stroke(&mut self, outline: SyntheticOutline, radius: Fixed26Dot6)
        -> GlyphResult<SyntheticOutline> {
        self.calls.push(RasterCall::Stroke { radius });
        Ok(SyntheticOutline {
            radius: Some(radius),
            ..outline
        })
    }

    fn rasterize(&mut self, outline: &SyntheticOutline) -> GlyphResult<CoverageBitmap> {
        self.calls.push(RasterCall::Rasterize {
            stroked: outline.radius.is_some(),
        });

        let glyph = &self.glyph;
        let bitmap = match outline.radius {
            None => match &glyph.pattern {
                Some(pattern) => {
                    CoverageBitmap::new(glyph.width, glyph.rows, pattern.clone(), glyph.offset)
                }
                None => CoverageBitmap::solid(glyph.width, glyph.rows, 0xff, glyph.offset),
            },
            Some(radius) => {
                let grow = radius.trunc().max(0);
                let offset = BitmapOffset::new(glyph.offset.left - grow, glyph.offset.top - grow);
                // A zero radius outlines nothing
                let coverage = if radius.raw() > 0 { 0xff } else { 0 };
                CoverageBitmap::solid(
                    glyph.width + 2 * grow as u32,
                    glyph.rows + 2 * grow as u32,
                    coverage,
                    offset,
                )
            }
        };
        Ok(bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face() -> FontSource {
        FontSource::path("/fonts/synthetic.ttf")
    }

    #[test]
    fn test_fill_pass_uses_glyph() {
        let mut r = SyntheticRasterizer::new(SyntheticGlyph::solid(4, 6, BitmapOffset::new(2, -5)));
        let outline = r.load_outline(&face(), 'x', 20).unwrap();
        let bitmap = r.rasterize(&outline).unwrap();
        assert_eq!(bitmap.size(), (4, 6));
        assert_eq!(bitmap.offset, BitmapOffset::new(2, -5));
    }

    #[test]
    fn test_stroke_pass_grows_box() {
        let mut r = SyntheticRasterizer::new(SyntheticGlyph::solid(4, 6, BitmapOffset::new(2, -5)));
        let outline = r.load_outline(&face(), 'x', 20).unwrap();
        let stroked = r.stroke(outline, Fixed26Dot6::from_pixels(3.0)).unwrap();
        let bitmap = r.rasterize(&stroked).unwrap();
        assert_eq!(bitmap.size(), (10, 12));
        assert_eq!(bitmap.offset, BitmapOffset::new(-1, -8));
        assert_eq!(
            r.calls(),
            &[
                RasterCall::LoadOutline { ch: 'x', height: 20 },
                RasterCall::Stroke { radius: Fixed26Dot6::from_raw(192) },
                RasterCall::Rasterize { stroked: true },
            ]
        );
    }

    #[test]
    fn test_zero_radius_stroke_is_blank() {
        let mut r = SyntheticRasterizer::new(SyntheticGlyph::solid(4, 6, BitmapOffset::new(2, -5)));
        let outline = r.load_outline(&face(), 'x', 20).unwrap();
        let stroked = r.stroke(outline, Fixed26Dot6::from_pixels(0.01)).unwrap();
        let bitmap = r.rasterize(&stroked).unwrap();
        assert_eq!(bitmap.size(), (4, 6));
        assert_eq!(bitmap.offset, BitmapOffset::new(2, -5));
        assert!(bitmap.buffer.iter().all(|c| *c == 0));
    }

    #[test]
    fn test_missing_glyph() {
        let mut r = SyntheticRasterizer::default().with_missing('?');
        match r.load_outline(&face(), '?', 20) {
            Err(GlyphError::MissingGlyph { ch, source_name }) => {
                assert_eq!(ch, '?');
                assert!(source_name.ends_with("synthetic.ttf"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
