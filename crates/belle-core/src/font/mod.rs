//! Font faces and the swash-backed rasterization adapter
//!
//! Faces are loaded from a file or from memory, validated once, and
//! optionally cached. Sizing to a pixel height happens per scaler, so a
//! cached face serves every size.

pub mod cache;
pub mod rasterizer;
pub mod source;

pub use cache::FaceCache;
pub use rasterizer::{SwashRasterizer, VectorGlyph};
pub use source::{FaceKey, FontFace, FontSource};
