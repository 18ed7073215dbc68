//! Glyph rasterization using swash
//!
//! Outlines come from a swash scaler; stroking and coverage rendering go
//! through zeno, which swash re-exports.

use swash::scale::outline::Outline;
use swash::scale::ScaleContext;
use swash::zeno::{Cap, Fill, Format, Join, Mask, Origin, PathData, Stroke, Style};

use crate::character::BitmapOffset;
use crate::config::RenderConfig;
use crate::coverage::CoverageBitmap;
use crate::error::{GlyphError, GlyphResult};
use crate::fixed::Fixed26Dot6;
use crate::font::{FaceCache, FontSource};
use crate::traits::GlyphRasterizer;

/// Scaled vector outline for one glyph, optionally marked for stroking.
pub struct VectorGlyph {
    ch: char,
    glyph_id: u16,
    outline: Outline,
    stroke: Option<Fixed26Dot6>,
}

impl VectorGlyph {
    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn glyph_id(&self) -> u16 {
        self.glyph_id
    }

    /// Stroke radius, if this outline has been stroked
    pub fn stroke_radius(&self) -> Option<Fixed26Dot6> {
        self.stroke
    }
}

impl std::fmt::Debug for VectorGlyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorGlyph")
            .field("ch", &self.ch)
            .field("glyph_id", &self.glyph_id)
            .field("stroke", &self.stroke)
            .finish()
    }
}

/// Production rasterizer backed by swash.
pub struct SwashRasterizer {
    /// Swash scale context (caches per-face scaling state)
    context: ScaleContext,
    faces: FaceCache,
    hinting: bool,
}

impl Default for SwashRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SwashRasterizer {
    pub fn new() -> Self {
        Self::with_config(&RenderConfig::default())
    }

    pub fn with_config(config: &RenderConfig) -> Self {
        Self {
            context: ScaleContext::new(),
            faces: FaceCache::new(config.cache_faces),
            hinting: config.hinting,
        }
    }

    pub fn faces(&self) -> &FaceCache {
        &self.faces
    }

    pub fn faces_mut(&mut self) -> &mut FaceCache {
        &mut self.faces
    }
}

impl GlyphRasterizer for SwashRasterizer {
    type Outline = VectorGlyph;

    fn load_outline(&mut self, face: &FontSource, ch: char, height: u32)
        -> GlyphResult<VectorGlyph> {
        let font_face = self.faces.get_or_load(face)?;

        let missing = || GlyphError::MissingGlyph {
            ch,
            source_name: font_face.name().to_string(),
        };
        let glyph_id = font_face.glyph_id(ch).ok_or_else(missing)?;

        let mut scaler = self
            .context
            .builder(font_face.as_ref())
            .size(height as f32)
            .hint(self.hinting)
            .build();

        // Bitmap-only faces have no outline to scale.
        if !scaler.has_outlines() {
            return Err(missing());
        }
        let outline = scaler.scale_outline(glyph_id).ok_or_else(missing)?;

        tracing::debug!(
            "Loaded outline for {:?} (glyph {}) at {}px from {}",
            ch,
            glyph_id,
            height,
            font_face.name()
        );

        Ok(VectorGlyph {
            ch,
            glyph_id,
            outline,
            stroke: None,
        })
    }

    fn stroke(&mut self, outline: VectorGlyph, radius: Fixed26Dot6) -> GlyphResult<VectorGlyph> {
        if radius.raw() < 0 {
            return Err(GlyphError::InvalidStyle {
                field: "outline_width",
                value: radius.to_string(),
            });
        }
        Ok(VectorGlyph {
            stroke: Some(radius),
            ..outline
        })
    }

    fn rasterize(&mut self, outline: &VectorGlyph) -> GlyphResult<CoverageBitmap> {
        let bitmap = render_coverage(outline.outline.path(), outline.stroke);

        tracing::debug!(
            "Rasterized {:?} stroke={:?}: {}x{} at ({}, {})",
            outline.ch,
            outline.stroke,
            bitmap.width,
            bitmap.rows,
            bitmap.offset.left,
            bitmap.offset.top
        );

        Ok(bitmap)
    }
}

/// Fill, or a round-capped, round-joined stroke of `radius` on each side.
fn coverage_style(stroke: Option<Fixed26Dot6>) -> Style<'static> {
    match stroke {
        Some(radius) if radius.raw() > 0 => {
            // zeno strokes a line of `width` centered on the contour,
            // so the border grows by half of it on each side.
            let mut stroke = Stroke::new(radius.to_pixels() * 2.0);
            stroke.cap(Cap::Round).join(Join::Round);
            Style::Stroke(stroke)
        }
        _ => Style::Fill(Fill::NonZero),
    }
}

/// Rasterize `path` (y-up, glyph origin at 0,0) to packed alpha coverage.
///
/// A zero stroke radius is a degenerate stroke: the contour's box with no
/// coverage.
fn render_coverage<D: PathData>(path: D, stroke: Option<Fixed26Dot6>) -> CoverageBitmap {
    let (mut buffer, placement) = Mask::new(path)
        .format(Format::Alpha)
        .origin(Origin::BottomLeft)
        .style(coverage_style(stroke))
        // Size the mask before rendering: with a bottom-left origin zeno
        // measures `placement.top` up from the mask height, which is zero
        // until the bounds are computed.
        .inspect(|_, _, _| {})
        .render();

    if stroke == Some(Fixed26Dot6::ZERO) {
        buffer.fill(0);
    }

    // Alpha format is one byte per pixel, rows packed.
    CoverageBitmap::new(
        placement.width,
        placement.height,
        buffer,
        BitmapOffset::new(placement.left, -placement.top),
    )
}
