//! Coverage bitmap to cairo A8 mask conversion

use belle_core::CoverageBitmap;
use cairo::{Format, ImageSurface};

use crate::error::{RenderError, RenderResult};

/// Copy a packed coverage bitmap into an A8 surface of the same size.
///
/// Rows are re-laid to cairo's stride; values are copied untouched.
pub fn to_mask(bitmap: &CoverageBitmap) -> RenderResult<ImageSurface> {
    let invalid = || RenderError::InvalidBitmap {
        width: bitmap.width,
        rows: bitmap.rows,
        len: bitmap.buffer.len(),
    };
    if !bitmap.is_packed() {
        return Err(invalid());
    }
    let width = i32::try_from(bitmap.width).map_err(|_| invalid())?;
    let rows = i32::try_from(bitmap.rows).map_err(|_| invalid())?;

    if bitmap.is_empty() {
        return Ok(ImageSurface::create(Format::A8, width, rows)?);
    }

    let stride = Format::A8.stride_for_width(bitmap.width)?;
    let row_len = bitmap.width as usize;
    let mut data = vec![0u8; stride as usize * bitmap.rows as usize];
    for (dst, src) in data
        .chunks_exact_mut(stride as usize)
        .zip(bitmap.buffer.chunks_exact(row_len))
    {
        dst[..row_len].copy_from_slice(src);
    }

    Ok(ImageSurface::create_for_data(data, Format::A8, width, rows, stride)?)
}

/// Read an A8 surface back as packed coverage, one byte per pixel.
pub fn mask_coverage(mask: &ImageSurface) -> RenderResult<Vec<u8>> {
    if mask.format() != Format::A8 {
        return Err(RenderError::UnsupportedFormat {
            format: mask.format(),
        });
    }
    let (width, rows, stride) = (
        mask.width() as usize,
        mask.height() as usize,
        mask.stride() as usize,
    );
    if width == 0 || rows == 0 {
        return Ok(Vec::new());
    }

    let mut coverage = Vec::with_capacity(width * rows);
    mask.with_data(|data| {
        for row in data.chunks(stride).take(rows) {
            coverage.extend_from_slice(&row[..width]);
        }
    })?;
    Ok(coverage)
}
