//! Belle - styled glyph rendering onto cairo surfaces
//!
//! This crate bundles the workspace into one library:
//! - `belle-core`: the character model, swash rasterizer and tate positioning
//! - `belle-cairo`: compositing, rotation and pasting onto an `ImageSurface`
//!
//! and the `belle` command-line renderer built on [`cli`].

pub mod cli;

// Re-export main types for convenience
pub use belle_cairo::{
    compose, new_canvas, paste, render, render_with, rotate_expand, write_png, Composite,
    GlyphWriter, ImageSurface, PlacedGlyph, RenderError, RenderResult,
};
pub use belle_core::{
    BitmapOffset, Character, CharacterBuilder, Color, FillStyle, Fixed26Dot6, FontSource,
    GlyphError, GlyphRasterizer, GlyphResult, OutlineStyle, PositionMapper, RenderConfig,
    SwashRasterizer, SyntheticRasterizer, TateMapping, VerticalForms,
};

pub use belle_core::constants;
