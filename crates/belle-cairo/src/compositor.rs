//! Fill and outline compositing

use belle_core::constants::MIN_COMPOSITE_SIZE;
use belle_core::{
    BitmapOffset, Character, Color, Fixed26Dot6, FillStyle, GlyphRasterizer, OutlineStyle,
};
use cairo::{Context, Format, ImageSurface};

use crate::error::RenderResult;
use crate::mask::to_mask;
use crate::rotate::rotate_expand;

/// Composited glyph image plus the bitmap origin used to position it.
pub struct Composite {
    pub image: ImageSurface,
    /// Offset forwarded to positioning: the outline pass's when it ran,
    /// otherwise the fill pass's, otherwise the origin.
    pub offset: BitmapOffset,
    pub fill_offset: Option<BitmapOffset>,
    pub outline_offset: Option<BitmapOffset>,
}

impl Composite {
    pub fn size(&self) -> (i32, i32) {
        (self.image.width(), self.image.height())
    }
}

/// One rasterized, converted pass
struct Pass {
    mask: ImageSurface,
    color: Color,
    offset: BitmapOffset,
}

impl Pass {
    fn size(&self) -> (i32, i32) {
        (self.mask.width(), self.mask.height())
    }
}

/// Rasterize the fill and outline passes of `character` and merge them.
///
/// The outline is drawn first at the canvas origin; the fill goes on top,
/// inset by the whole-pixel stroke width so it sits centered inside the
/// outline's grown bounding box.
pub fn compose<R: GlyphRasterizer>(rasterizer: &mut R, character: &Character) -> RenderResult<Composite> {
    let mut size = MIN_COMPOSITE_SIZE;

    let fill = match character.fill() {
        FillStyle::Solid(color) => {
            let outline =
                rasterizer.load_outline(character.face(), character.ch(), character.height())?;
            let bitmap = rasterizer.rasterize(&outline)?;
            let pass = Pass {
                mask: to_mask(&bitmap)?,
                color,
                offset: bitmap.offset,
            };
            size = grow(size, pass.size());
            Some(pass)
        }
        FillStyle::None => None,
    };

    let stroke = match character.outline() {
        OutlineStyle::Stroke { color, width } => {
            let radius = Fixed26Dot6::from_pixels(width);
            let outline =
                rasterizer.load_outline(character.face(), character.ch(), character.height())?;
            let stroked = rasterizer.stroke(outline, radius)?;
            let bitmap = rasterizer.rasterize(&stroked)?;
            let pass = Pass {
                mask: to_mask(&bitmap)?,
                color,
                offset: bitmap.offset,
            };
            size = grow(size, pass.size());
            Some((pass, radius))
        }
        OutlineStyle::None => None,
    };

    let image = ImageSurface::create(Format::ARgb32, size.0, size.1)?;
    {
        let ctx = Context::new(&image)?;
        if let Some((pass, _)) = &stroke {
            stamp(&ctx, pass, 0.0)?;
        }
        if let Some(pass) = &fill {
            let inset = stroke.as_ref().map_or(0, |(_, radius)| radius.trunc());
            stamp(&ctx, pass, f64::from(inset))?;
        }
    }

    let image = if character.rotation() != 0.0 {
        rotate_expand(image, character.rotation())?
    } else {
        image
    };

    let fill_offset = fill.as_ref().map(|pass| pass.offset);
    let outline_offset = stroke.as_ref().map(|(pass, _)| pass.offset);
    let offset = outline_offset.or(fill_offset).unwrap_or_default();

    tracing::debug!(
        "Composited {:?}: {}x{} offset=({}, {}) fill={} outline={}",
        character.ch(),
        image.width(),
        image.height(),
        offset.left,
        offset.top,
        fill.is_some(),
        stroke.is_some()
    );

    Ok(Composite {
        image,
        offset,
        fill_offset,
        outline_offset,
    })
}

fn grow(size: (i32, i32), other: (i32, i32)) -> (i32, i32) {
    (size.0.max(other.0), size.1.max(other.1))
}

/// Paint `pass.color` through the pass mask at `(at, at)`.
fn stamp(ctx: &Context, pass: &Pass, at: f64) -> RenderResult<()> {
    if pass.mask.width() == 0 || pass.mask.height() == 0 {
        return Ok(());
    }
    let c = pass.color;
    ctx.set_source_rgba(c.r, c.g, c.b, c.a);
    ctx.mask_surface(&pass.mask, at, at)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::surface_pixels;
    use crate::error::RenderError;
    use belle_core::{FontSource, GlyphError, RasterCall, SyntheticGlyph, SyntheticRasterizer};

    const RED: u32 = 0xffff_0000;
    const BLUE: u32 = 0xff00_00ff;

    fn rasterizer() -> SyntheticRasterizer {
        SyntheticRasterizer::new(SyntheticGlyph::solid(4, 6, BitmapOffset::new(2, -5)))
    }

    fn builder() -> belle_core::CharacterBuilder {
        Character::builder('x', FontSource::path("/fonts/synthetic.ttf")).with_height(20)
    }

    #[test]
    fn test_unstyled_glyph_is_single_transparent_pixel() {
        let mut r = rasterizer();
        let composite = compose(&mut r, &builder().build().unwrap()).unwrap();
        assert_eq!(composite.size(), (1, 1));
        assert_eq!(surface_pixels(&composite.image).unwrap(), vec![0]);
        assert_eq!(composite.offset, BitmapOffset::default());
        assert!(r.calls().is_empty());
    }

    #[test]
    fn test_fill_only_is_tinted_mask() {
        let mut r = rasterizer();
        let c = builder().with_fill(Color::rgb(1.0, 0.0, 0.0)).build().unwrap();
        let composite = compose(&mut r, &c).unwrap();

        assert_eq!(composite.size(), (4, 6));
        assert!(surface_pixels(&composite.image).unwrap().iter().all(|p| *p == RED));
        assert_eq!(composite.offset, BitmapOffset::new(2, -5));
        assert_eq!(composite.fill_offset, Some(BitmapOffset::new(2, -5)));
        assert_eq!(composite.outline_offset, None);
    }

    #[test]
    fn test_partial_coverage_tints_proportionally() {
        let glyph = SyntheticGlyph::solid(2, 1, BitmapOffset::default()).with_pattern(vec![255, 0]);
        let mut r = SyntheticRasterizer::new(glyph);
        let c = builder().with_fill(Color::rgb(0.0, 0.0, 1.0)).build().unwrap();
        let composite = compose(&mut r, &c).unwrap();
        assert_eq!(surface_pixels(&composite.image).unwrap(), vec![BLUE, 0]);
    }

    #[test]
    fn test_outline_offset_wins_over_fill() {
        let mut r = rasterizer();
        let c = builder()
            .with_fill(Color::rgb(0.0, 0.0, 1.0))
            .with_outline(Color::rgb(1.0, 0.0, 0.0), 2.0)
            .build()
            .unwrap();
        let composite = compose(&mut r, &c).unwrap();

        assert_eq!(composite.fill_offset, Some(BitmapOffset::new(2, -5)));
        assert_eq!(composite.outline_offset, Some(BitmapOffset::new(0, -7)));
        assert_eq!(composite.offset, BitmapOffset::new(0, -7));
        // Fill pass runs first, then the stroked pass
        assert_eq!(
            r.calls(),
            &[
                RasterCall::LoadOutline { ch: 'x', height: 20 },
                RasterCall::Rasterize { stroked: false },
                RasterCall::LoadOutline { ch: 'x', height: 20 },
                RasterCall::Stroke { radius: Fixed26Dot6::from_pixels(2.0) },
                RasterCall::Rasterize { stroked: true },
            ]
        );
    }

    #[test]
    fn test_size_is_max_of_masks_and_fill_is_inset() {
        let mut r = rasterizer();
        let c = builder()
            .with_fill(Color::rgb(0.0, 0.0, 1.0))
            .with_outline(Color::rgb(1.0, 0.0, 0.0), 2.0)
            .build()
            .unwrap();
        let composite = compose(&mut r, &c).unwrap();

        // Outline mask is 4+4 by 6+4
        assert_eq!(composite.size(), (8, 10));
        let pixels = surface_pixels(&composite.image).unwrap();
        let at = |x: usize, y: usize| pixels[y * 8 + x];
        assert_eq!(at(0, 0), RED);
        assert_eq!(at(1, 1), RED);
        assert_eq!(at(2, 2), BLUE);
        assert_eq!(at(5, 7), BLUE);
        assert_eq!(at(6, 8), RED);
        assert_eq!(at(7, 9), RED);
    }

    #[test]
    fn test_outline_only() {
        let mut r = rasterizer();
        let c = builder()
            .with_outline(Color::rgb(1.0, 0.0, 0.0), 1.0)
            .build()
            .unwrap();
        let composite = compose(&mut r, &c).unwrap();
        assert_eq!(composite.size(), (6, 8));
        assert_eq!(composite.offset, BitmapOffset::new(1, -6));
        assert_eq!(composite.fill_offset, None);
        assert!(surface_pixels(&composite.image).unwrap().iter().all(|p| *p == RED));
    }

    #[test]
    fn test_zero_width_outline_is_fill_only() {
        let mut r = rasterizer();
        let c = builder()
            .with_fill(Color::rgb(0.0, 0.0, 1.0))
            .with_outline(Color::rgb(1.0, 0.0, 0.0), 0.0)
            .build()
            .unwrap();
        let composite = compose(&mut r, &c).unwrap();
        assert_eq!(composite.size(), (4, 6));
        assert_eq!(composite.outline_offset, None);
        assert!(!r.calls().iter().any(|call| matches!(call, RasterCall::Stroke { .. })));
    }

    #[test]
    fn test_hairline_outline_strokes_nothing() {
        let mut r = rasterizer();
        let c = builder()
            .with_fill(Color::rgb(0.0, 0.0, 1.0))
            .with_outline(Color::rgb(1.0, 0.0, 0.0), 0.01)
            .build()
            .unwrap();
        assert!(c.is_outlined());
        let composite = compose(&mut r, &c).unwrap();

        assert_eq!(composite.size(), (4, 6));
        assert_eq!(composite.outline_offset, Some(BitmapOffset::new(2, -5)));
        assert_eq!(composite.offset, composite.fill_offset.unwrap());
        assert!(surface_pixels(&composite.image).unwrap().iter().all(|p| *p == BLUE));
        assert!(r.calls().contains(&RasterCall::Stroke { radius: Fixed26Dot6::ZERO }));
    }

    #[test]
    fn test_missing_glyph_propagates() {
        let mut r = rasterizer().with_missing('x');
        let c = builder().with_fill(Color::default()).build().unwrap();
        match compose(&mut r, &c) {
            Err(RenderError::Glyph(GlyphError::MissingGlyph { ch, .. })) => assert_eq!(ch, 'x'),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("missing glyph should fail"),
        }
    }

    #[test]
    fn test_quarter_rotation_swaps_extent() {
        let mut r = rasterizer();
        let c = builder()
            .with_fill(Color::rgb(1.0, 0.0, 0.0))
            .with_rotation(90.0)
            .build()
            .unwrap();
        let composite = compose(&mut r, &c).unwrap();
        assert_eq!(composite.size(), (6, 4));
        // Rotation does not move the bitmap origin used for positioning
        assert_eq!(composite.offset, BitmapOffset::new(2, -5));
    }

    #[test]
    fn test_half_rotation_reverses_pixels() {
        let pattern = vec![255, 0, 0, 0, 0, 255, 255, 0, 255, 0, 0, 0];
        let glyph = SyntheticGlyph::solid(4, 3, BitmapOffset::default()).with_pattern(pattern);
        let fill = Color::rgb(1.0, 0.0, 0.0);

        let upright = compose(
            &mut SyntheticRasterizer::new(glyph.clone()),
            &builder().with_fill(fill).build().unwrap(),
        )
        .unwrap();
        let turned = compose(
            &mut SyntheticRasterizer::new(glyph),
            &builder().with_fill(fill).with_rotation(180.0).build().unwrap(),
        )
        .unwrap();

        assert_eq!(turned.size(), upright.size());
        let mut expected = surface_pixels(&upright.image).unwrap();
        expected.reverse();
        assert_eq!(surface_pixels(&turned.image).unwrap(), expected);
    }
}
