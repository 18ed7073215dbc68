//! Belle Cairo - cairo compositor for belle-core glyphs
//!
//! Turns the coverage bitmaps produced by a [`GlyphRasterizer`] into tinted
//! ARGB32 images, rotates them, and pastes them onto an [`ImageSurface`]
//! at the position chosen by a [`PositionMapper`].

pub mod canvas;
pub mod compositor;
pub mod error;
pub mod mask;
pub mod rotate;
pub mod writer;

pub use cairo::ImageSurface;

pub use canvas::{new_canvas, paste, surface_pixels, unpack_argb, write_png};
pub use compositor::{compose, Composite};
pub use error::{RenderError, RenderResult};
pub use rotate::rotate_expand;
pub use writer::{render, render_with, GlyphWriter, PlacedGlyph};

// Re-export belle-core types for convenience
pub use belle_core::*;
