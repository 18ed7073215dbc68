//! Rotation about the image center with bounding-box expansion

use cairo::{Context, Filter, Format, ImageSurface, Matrix};

use crate::canvas::{surface_from_pixels, surface_pixels};
use crate::error::RenderResult;

/// Rotate `image` counter-clockwise by `degrees` about its center.
///
/// The result is large enough to hold every rotated corner, so nothing is
/// cropped. Quarter turns are exact pixel permutations; other angles are
/// resampled with nearest-neighbour filtering.
pub fn rotate_expand(image: ImageSurface, degrees: f64) -> RenderResult<ImageSurface> {
    let angle = degrees.rem_euclid(360.0);
    tracing::debug!(
        "Rotating {}x{} glyph by {} degrees",
        image.width(),
        image.height(),
        angle
    );

    if angle == 0.0 {
        Ok(image)
    } else if angle == 90.0 {
        quarter_turns(&image, 1)
    } else if angle == 180.0 {
        quarter_turns(&image, 2)
    } else if angle == 270.0 {
        quarter_turns(&image, 3)
    } else {
        resample(&image, angle)
    }
}

/// Size of the box holding a `width` x `height` image rotated by `degrees`.
pub fn expanded_size(width: i32, height: i32, degrees: f64) -> (i32, i32) {
    let (cos, sin) = rotation_terms(degrees);
    let (w, h) = (f64::from(width), f64::from(height));
    let (cx, cy) = (w / 2.0, h / 2.0);

    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for (x, y) in [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)] {
        let (dx, dy) = (x - cx, y - cy);
        let rx = cos * dx + sin * dy + cx;
        let ry = -sin * dx + cos * dy + cy;
        min = (min.0.min(rx), min.1.min(ry));
        max = (max.0.max(rx), max.1.max(ry));
    }

    // Tolerance keeps float noise from adding a pixel to exact extents
    (
        (max.0 - min.0 - 1e-9).ceil() as i32,
        (max.1 - min.1 - 1e-9).ceil() as i32,
    )
}

// cos/sin rounded to 15 places so right angles produce exact zeros
fn rotation_terms(degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    let round = |v: f64| (v * 1e15).round() / 1e15;
    (round(radians.cos()), round(radians.sin()))
}

fn quarter_turns(image: &ImageSurface, turns: u8) -> RenderResult<ImageSurface> {
    let (w, h) = (image.width() as usize, image.height() as usize);
    let src = surface_pixels(image)?;
    let (nw, nh) = if turns % 2 == 1 { (h, w) } else { (w, h) };

    let mut dst = vec![0u32; nw * nh];
    for y in 0..h {
        for x in 0..w {
            let (nx, ny) = match turns {
                1 => (y, w - 1 - x),
                2 => (w - 1 - x, h - 1 - y),
                _ => (h - 1 - y, x),
            };
            dst[ny * nw + nx] = src[y * w + x];
        }
    }
    surface_from_pixels(&dst, nw, nh)
}

fn resample(image: &ImageSurface, degrees: f64) -> RenderResult<ImageSurface> {
    let (w, h) = (f64::from(image.width()), f64::from(image.height()));
    let (nw, nh) = expanded_size(image.width(), image.height(), degrees);
    let (cos, sin) = rotation_terms(degrees);

    let out = ImageSurface::create(Format::ARgb32, nw, nh)?;
    {
        let ctx = Context::new(&out)?;
        ctx.translate(f64::from(nw) / 2.0, f64::from(nh) / 2.0);
        // Counter-clockwise on screen: y grows downward
        ctx.transform(Matrix::new(cos, -sin, sin, cos, 0.0, 0.0));
        ctx.translate(-w / 2.0, -h / 2.0);
        ctx.set_source_surface(image, 0.0, 0.0)?;
        ctx.source().set_filter(Filter::Nearest);
        ctx.paint()?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3x2 image with distinct pixels:
    // 1 2 3
    // 4 5 6
    fn sample() -> ImageSurface {
        let pixels: Vec<u32> = (1..=6).map(|v| 0xff00_0000 | v).collect();
        surface_from_pixels(&pixels, 3, 2).unwrap()
    }

    fn values(image: &ImageSurface) -> Vec<u32> {
        surface_pixels(image).unwrap().iter().map(|p| p & 0xff).collect()
    }

    #[test]
    fn test_zero_is_identity() {
        let out = rotate_expand(sample(), 0.0).unwrap();
        assert_eq!((out.width(), out.height()), (3, 2));
        assert_eq!(values(&out), vec![1, 2, 3, 4, 5, 6]);

        let full = rotate_expand(sample(), 360.0).unwrap();
        assert_eq!(values(&full), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_quarter_turn_counter_clockwise() {
        let out = rotate_expand(sample(), 90.0).unwrap();
        assert_eq!((out.width(), out.height()), (2, 3));
        // 3 6
        // 2 5
        // 1 4
        assert_eq!(values(&out), vec![3, 6, 2, 5, 1, 4]);
    }

    #[test]
    fn test_half_turn() {
        let out = rotate_expand(sample(), 180.0).unwrap();
        assert_eq!((out.width(), out.height()), (3, 2));
        assert_eq!(values(&out), vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_three_quarter_turn_and_negative_angle() {
        let out = rotate_expand(sample(), 270.0).unwrap();
        assert_eq!((out.width(), out.height()), (2, 3));
        // 4 1
        // 5 2
        // 6 3
        assert_eq!(values(&out), vec![4, 1, 5, 2, 6, 3]);

        let negative = rotate_expand(sample(), -90.0).unwrap();
        assert_eq!(values(&negative), values(&out));
    }

    #[test]
    fn test_expanded_size() {
        assert_eq!(expanded_size(3, 2, 0.0), (3, 2));
        assert_eq!(expanded_size(3, 2, 90.0), (2, 3));
        assert_eq!(expanded_size(10, 10, 45.0), (15, 15));
    }

    #[test]
    fn test_arbitrary_angle_expands() {
        let image = surface_from_pixels(&[0xffff_0000; 100], 10, 10).unwrap();
        let out = rotate_expand(image, 45.0).unwrap();
        assert_eq!((out.width(), out.height()), (15, 15));
        // The center stays covered, the corners of the larger box stay clear
        let pixels = surface_pixels(&out).unwrap();
        assert_eq!(pixels[7 * 15 + 7] >> 24, 0xff);
        assert_eq!(pixels[0], 0);
        assert_eq!(pixels[15 * 15 - 1], 0);
    }
}
