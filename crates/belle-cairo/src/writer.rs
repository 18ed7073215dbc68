//! High-level glyph writer: composite, position, paste

use belle_core::{
    Character, GlyphRasterizer, PositionMapper, RenderConfig, SwashRasterizer, TateMapping,
};
use cairo::ImageSurface;

use crate::compositor::{compose, Composite};
use crate::error::RenderResult;
use crate::canvas::paste;

/// A composited glyph together with where it lands on the destination.
pub struct PlacedGlyph {
    pub composite: Composite,
    pub position: (i32, i32),
}

/// Renders styled characters onto cairo image surfaces.
///
/// Owns the rasterizer (and through it the face cache) and the mapper that
/// turns a bitmap origin into a paste coordinate.
pub struct GlyphWriter<R, M = TateMapping> {
    rasterizer: R,
    mapper: M,
}

impl GlyphWriter<SwashRasterizer> {
    /// Swash-backed writer using `config` for hinting, caching and the
    /// vertical-form set.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::with_config(SwashRasterizer::with_config(config), config)
    }
}

impl<R: GlyphRasterizer> GlyphWriter<R> {
    pub fn new(rasterizer: R) -> Self {
        Self {
            rasterizer,
            mapper: TateMapping::default(),
        }
    }

    pub fn with_config(rasterizer: R, config: &RenderConfig) -> Self {
        Self {
            rasterizer,
            mapper: TateMapping::new(config.vertical_forms.clone()),
        }
    }
}

impl<R: GlyphRasterizer, M: PositionMapper> GlyphWriter<R, M> {
    /// Replace the position mapper.
    pub fn with_mapper<N: PositionMapper>(self, mapper: N) -> GlyphWriter<R, N> {
        GlyphWriter {
            rasterizer: self.rasterizer,
            mapper,
        }
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    pub fn rasterizer_mut(&mut self) -> &mut R {
        &mut self.rasterizer
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    pub fn compose(&mut self, character: &Character) -> RenderResult<Composite> {
        compose(&mut self.rasterizer, character)
    }

    /// Composite `character` and compute its paste position without
    /// touching any surface.
    pub fn place(&mut self, character: &Character) -> RenderResult<PlacedGlyph> {
        place_with(&mut self.rasterizer, &self.mapper, character)
    }

    /// Render `character` onto `destination`.
    ///
    /// On success the character's bitmap offset is updated to the one used
    /// for positioning. On failure neither the destination nor the
    /// character is modified.
    pub fn write(&mut self, destination: &ImageSurface, character: &mut Character) -> RenderResult<()> {
        write_placed(destination, character, self.place(character)?)
    }

    /// Same as [`write`](Self::write) but positioned by `mapper` instead of
    /// the writer's own.
    pub fn write_with(
        &mut self,
        destination: &ImageSurface,
        character: &mut Character,
        mapper: &dyn PositionMapper,
    ) -> RenderResult<()> {
        let placed = place_with(&mut self.rasterizer, mapper, character)?;
        write_placed(destination, character, placed)
    }
}

/// One-shot render with the default mapper and its bundled vertical forms.
pub fn render<R: GlyphRasterizer>(
    destination: &ImageSurface,
    character: &mut Character,
    rasterizer: R,
) -> RenderResult<()> {
    GlyphWriter::new(rasterizer).write(destination, character)
}

/// One-shot render positioned by `mapper`.
pub fn render_with<R: GlyphRasterizer>(
    destination: &ImageSurface,
    character: &mut Character,
    rasterizer: R,
    mapper: &dyn PositionMapper,
) -> RenderResult<()> {
    GlyphWriter::new(rasterizer).write_with(destination, character, mapper)
}

fn place_with<R, M>(rasterizer: &mut R, mapper: &M, character: &Character) -> RenderResult<PlacedGlyph>
where
    R: GlyphRasterizer,
    M: PositionMapper + ?Sized,
{
    let composite = compose(rasterizer, character)?;
    let position = mapper.map(
        character.height(),
        character,
        composite.offset,
        composite.size(),
    );
    Ok(PlacedGlyph {
        composite,
        position,
    })
}

fn write_placed(destination: &ImageSurface, character: &mut Character, placed: PlacedGlyph) -> RenderResult<()> {
    paste(destination, &placed.composite.image, placed.position)?;
    character.set_bitmap_offset(placed.composite.offset);
    tracing::debug!(
        "Wrote {:?} at ({}, {})",
        character.ch(),
        placed.position.0,
        placed.position.1
    );
    Ok(())
}
