//! Destination canvases, pixel access and PNG output

use std::fs::File;
use std::path::Path;

use belle_core::Color;
use cairo::{Context, Format, ImageSurface, Operator};

use crate::error::{RenderError, RenderResult};

/// Allocate an ARGB32 canvas cleared to `background`.
pub fn new_canvas(width: i32, height: i32, background: Color) -> RenderResult<ImageSurface> {
    let surface = ImageSurface::create(Format::ARgb32, width, height)?;
    if !background.is_transparent() {
        let ctx = Context::new(&surface)?;
        ctx.set_operator(Operator::Source);
        ctx.set_source_rgba(background.r, background.g, background.b, background.a);
        ctx.paint()?;
    }
    Ok(surface)
}

/// Paste `image` onto `destination` with its top-left corner at `(x, y)`,
/// using the image's own alpha as the mask.
pub fn paste(destination: &ImageSurface, image: &ImageSurface, (x, y): (i32, i32)) -> RenderResult<()> {
    let ctx = Context::new(destination)?;
    ctx.set_source_surface(image, f64::from(x), f64::from(y))?;
    ctx.paint()?;
    Ok(())
}

pub fn write_png(surface: &ImageSurface, path: impl AsRef<Path>) -> RenderResult<()> {
    let mut file = File::create(path)?;
    surface.write_to_png(&mut file)?;
    Ok(())
}

/// Premultiplied ARGB32 pixels, row-major, one `u32` per pixel.
pub fn surface_pixels(surface: &ImageSurface) -> RenderResult<Vec<u32>> {
    if surface.format() != Format::ARgb32 {
        return Err(RenderError::UnsupportedFormat {
            format: surface.format(),
        });
    }
    let (width, height, stride) = (
        surface.width() as usize,
        surface.height() as usize,
        surface.stride() as usize,
    );
    if width == 0 || height == 0 {
        return Ok(Vec::new());
    }

    let mut pixels = Vec::with_capacity(width * height);
    surface.with_data(|data| {
        for row in data.chunks(stride).take(height) {
            pixels.extend(
                row[..width * 4]
                    .chunks_exact(4)
                    .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]])),
            );
        }
    })?;
    Ok(pixels)
}

/// Build an ARGB32 surface from row-major premultiplied pixels.
pub fn surface_from_pixels(pixels: &[u32], width: usize, height: usize) -> RenderResult<ImageSurface> {
    let (w, h) = (width as i32, height as i32);
    if width == 0 || height == 0 {
        return Ok(ImageSurface::create(Format::ARgb32, w, h)?);
    }

    let stride = Format::ARgb32.stride_for_width(width as u32)?;
    let mut data = vec![0u8; stride as usize * height];
    for (dst, src) in data.chunks_exact_mut(stride as usize).zip(pixels.chunks(width)) {
        for (out, px) in dst.chunks_exact_mut(4).zip(src) {
            out.copy_from_slice(&px.to_ne_bytes());
        }
    }
    Ok(ImageSurface::create_for_data(data, Format::ARgb32, w, h, stride)?)
}

/// Split a premultiplied ARGB32 pixel into `[a, r, g, b]`.
pub fn unpack_argb(pixel: u32) -> [u8; 4] {
    [
        (pixel >> 24) as u8,
        (pixel >> 16) as u8,
        (pixel >> 8) as u8,
        pixel as u8,
    ]
}
