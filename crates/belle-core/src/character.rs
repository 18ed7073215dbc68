//! One glyph's render request

use crate::color::Color;
use crate::constants::MAX_GLYPH_HEIGHT;
use crate::error::{GlyphError, GlyphResult};
use crate::fixed::Fixed26Dot6;
use crate::font::FontSource;

/// Fill paint for a glyph
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FillStyle {
    #[default]
    None,
    Solid(Color),
}

/// Outline stroke for a glyph. A `Stroke` always has a positive width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutlineStyle {
    #[default]
    None,
    Stroke { color: Color, width: f32 },
}

impl OutlineStyle {
    /// A stroke of `width` pixels, or `None` when the width is not positive.
    pub fn stroke(color: Color, width: f32) -> Self {
        if width > 0.0 {
            OutlineStyle::Stroke { color, width }
        } else {
            OutlineStyle::None
        }
    }

    /// Build from the optional pair used by callers that carry nullable
    /// fields. Both must be present and the width positive.
    pub fn from_parts(color: Option<Color>, width: Option<f32>) -> Self {
        match (color, width) {
            (Some(color), Some(width)) => Self::stroke(color, width),
            _ => OutlineStyle::None,
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            OutlineStyle::Stroke { color, .. } => Some(*color),
            OutlineStyle::None => None,
        }
    }

    pub fn width(&self) -> Option<f32> {
        match self {
            OutlineStyle::Stroke { width, .. } => Some(*width),
            OutlineStyle::None => None,
        }
    }

    /// Stroke radius in engine units
    pub fn fixed_width(&self) -> Option<Fixed26Dot6> {
        self.width().map(Fixed26Dot6::from_pixels)
    }
}

/// Origin of a rasterized bitmap relative to the glyph origin.
///
/// `top` is negated: the raster grows downward while ascent grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct BitmapOffset {
    pub left: i32,
    pub top: i32,
}

impl BitmapOffset {
    pub const fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }
}

impl From<(i32, i32)> for BitmapOffset {
    fn from((left, top): (i32, i32)) -> Self {
        Self { left, top }
    }
}

/// Style and position for one glyph.
///
/// Built through [`CharacterBuilder`]; only `bitmap_offset` changes after
/// construction, and only once, during the render call.
#[derive(Debug, Clone)]
pub struct Character {
    ch: char,
    x: i32,
    y: i32,
    height: u32,
    rotation: f64,
    face: FontSource,
    fill: FillStyle,
    outline: OutlineStyle,
    tate: bool,
    bitmap_offset: BitmapOffset,
}

impl Character {
    pub fn builder(ch: char, face: FontSource) -> CharacterBuilder {
        CharacterBuilder::new(ch, face)
    }

    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn face(&self) -> &FontSource {
        &self.face
    }

    pub fn fill(&self) -> FillStyle {
        self.fill
    }

    pub fn outline(&self) -> OutlineStyle {
        self.outline
    }

    pub fn tate(&self) -> bool {
        self.tate
    }

    pub fn is_filled(&self) -> bool {
        matches!(self.fill, FillStyle::Solid(_))
    }

    pub fn is_outlined(&self) -> bool {
        matches!(self.outline, OutlineStyle::Stroke { .. })
    }

    pub fn bitmap_offset(&self) -> BitmapOffset {
        self.bitmap_offset
    }

    pub fn set_bitmap_offset(&mut self, offset: BitmapOffset) {
        self.bitmap_offset = offset;
    }
}

/// Builder for [`Character`]
#[derive(Debug, Clone)]
pub struct CharacterBuilder {
    ch: char,
    face: FontSource,
    x: i32,
    y: i32,
    height: i64,
    rotation: f64,
    fill: FillStyle,
    outline: OutlineStyle,
    tate: bool,
}

impl CharacterBuilder {
    pub fn new(ch: char, face: FontSource) -> Self {
        Self {
            ch,
            face,
            x: 0,
            y: 0,
            height: i64::from(crate::constants::DEFAULT_GLYPH_HEIGHT),
            rotation: 0.0,
            fill: FillStyle::None,
            outline: OutlineStyle::None,
            tate: false,
        }
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Nominal pixel size, `1..=MAX_GLYPH_HEIGHT`. Signed so that bad input
    /// surfaces as an error at build time.
    pub fn with_height(mut self, height: i64) -> Self {
        self.height = height;
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = FillStyle::Solid(color);
        self
    }

    pub fn with_fill_style(mut self, fill: FillStyle) -> Self {
        self.fill = fill;
        self
    }

    /// A width of zero or less disables the outline whatever the color.
    pub fn with_outline(mut self, color: Color, width: f32) -> Self {
        self.outline = OutlineStyle::stroke(color, width);
        self
    }

    pub fn with_outline_style(mut self, outline: OutlineStyle) -> Self {
        self.outline = match outline {
            OutlineStyle::Stroke { color, width } => OutlineStyle::stroke(color, width),
            OutlineStyle::None => OutlineStyle::None,
        };
        self
    }

    pub fn with_tate(mut self, tate: bool) -> Self {
        self.tate = tate;
        self
    }

    pub fn build(self) -> GlyphResult<Character> {
        let height = u32::try_from(self.height)
            .ok()
            .filter(|h| (1..=MAX_GLYPH_HEIGHT).contains(h))
            .ok_or_else(|| GlyphError::InvalidStyle {
                field: "height",
                value: self.height.to_string(),
            })?;

        if !self.rotation.is_finite() {
            return Err(GlyphError::InvalidStyle {
                field: "rotation",
                value: self.rotation.to_string(),
            });
        }

        Ok(Character {
            ch: self.ch,
            x: self.x,
            y: self.y,
            height,
            rotation: self.rotation,
            face: self.face,
            fill: self.fill,
            outline: self.outline,
            tate: self.tate,
            bitmap_offset: BitmapOffset::default(),
        })
    }
}
