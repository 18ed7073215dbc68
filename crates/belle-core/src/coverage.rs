// src/coverage.rs
use crate::character::BitmapOffset;

/// 8-bit antialiased coverage produced by one rasterization pass.
///
/// `buffer` is tightly packed, `width` bytes per row with no padding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CoverageBitmap {
    pub width: u32,
    pub rows: u32,
    pub buffer: Vec<u8>,
    pub offset: BitmapOffset,
}

impl CoverageBitmap {
    pub fn new(width: u32, rows: u32, buffer: Vec<u8>, offset: BitmapOffset) -> Self {
        Self {
            width,
            rows,
            buffer,
            offset,
        }
    }

    /// Bitmap filled with a single coverage value
    pub fn solid(width: u32, rows: u32, coverage: u8, offset: BitmapOffset) -> Self {
        Self::new(width, rows, vec![coverage; width as usize * rows as usize], offset)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.rows == 0
    }

    /// True when the buffer holds exactly `width * rows` bytes
    pub fn is_packed(&self) -> bool {
        self.buffer.len() == self.width as usize * self.rows as usize
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.rows)
    }

    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.buffer[start..start + self.width as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_is_packed() {
        let bitmap = CoverageBitmap::solid(3, 2, 200, BitmapOffset::new(1, -2));
        assert!(bitmap.is_packed());
        assert!(!bitmap.is_empty());
        assert_eq!(bitmap.row(1), &[200, 200, 200]);
    }

    #[test]
    fn test_empty_bitmap() {
        let bitmap = CoverageBitmap::default();
        assert!(bitmap.is_empty());
        assert!(bitmap.is_packed());
    }
}
