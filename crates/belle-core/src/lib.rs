//! Belle Core - backend-agnostic glyph rendering core
//!
//! This crate holds everything about rendering one styled character that
//! does not depend on a drawing library:
//! - the [`Character`] request and its fill/outline styles
//! - the [`GlyphRasterizer`] seam and its swash implementation
//! - the positioning mapper with vertical-writing (tate) support
//! - configuration, constants and errors

pub mod character;
pub mod color;
pub mod config;
pub mod constants;
pub mod coverage;
pub mod error;
pub mod fixed;
pub mod font;
pub mod mapping;
pub mod synthetic;
pub mod traits;
pub mod vertical;

// Re-export main types
pub use character::{BitmapOffset, Character, CharacterBuilder, FillStyle, OutlineStyle};
pub use color::Color;
pub use config::RenderConfig;
pub use coverage::CoverageBitmap;
pub use error::{GlyphError, GlyphResult};
pub use fixed::Fixed26Dot6;
pub use font::{FaceCache, FontFace, FontSource, SwashRasterizer, VectorGlyph};
pub use mapping::TateMapping;
pub use synthetic::{RasterCall, SyntheticGlyph, SyntheticOutline, SyntheticRasterizer};
pub use vertical::VerticalForms;

// Re-export traits
pub use traits::*;
