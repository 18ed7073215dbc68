//! 26.6 fixed-point values for the font engine.
//!
//! Font engines express sub-pixel quantities as integers scaled by 64. The
//! stroke width is the only value that crosses that boundary, and it does so
//! through [`Fixed26Dot6::from_pixels`], which truncates toward zero.

use crate::constants::FIXED_POINT_SCALE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed26Dot6(i32);

impl Fixed26Dot6 {
    pub const ZERO: Fixed26Dot6 = Fixed26Dot6(0);

    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Convert a pixel quantity, truncating the fractional 64ths.
    pub fn from_pixels(pixels: f32) -> Self {
        Self((pixels * FIXED_POINT_SCALE as f32) as i32)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub fn to_pixels(self) -> f32 {
        self.0 as f32 / FIXED_POINT_SCALE as f32
    }

    /// Whole pixels, truncated toward zero.
    pub const fn trunc(self) -> i32 {
        self.0 / FIXED_POINT_SCALE
    }
}

impl std::fmt::Display for Fixed26Dot6 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/64px", self.0)
    }
}
