// src/constants.rs
use crate::color::Color;

// Rasterizer unit contract: 26.6 fixed point
pub const FIXED_POINT_SCALE: i32 = 64;

// Glyph defaults
pub const DEFAULT_GLYPH_HEIGHT: u32 = 32;
// Largest image side cairo can allocate
pub const MAX_GLYPH_HEIGHT: u32 = 32_767;
pub const DEFAULT_HINTING: bool = true;
pub const DEFAULT_CACHE_FACES: bool = true;

// Canvas defaults used by the CLI
pub const DEFAULT_CANVAS_WIDTH: i32 = 128;
pub const DEFAULT_CANVAS_HEIGHT: i32 = 128;

// Compositing starts from a 1x1 canvas so an unstyled glyph still yields an image
pub const MIN_COMPOSITE_SIZE: (i32, i32) = (1, 1);

// Color constants
pub const DEFAULT_FILL: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

/// Bundled vertical-form code points, one `U+XXXX` entry per line.
pub const VERTICAL_FORMS_DATA: &str = include_str!("../data/vertical_forms.txt");
