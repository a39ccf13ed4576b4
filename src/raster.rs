//! Raster buffers and canvas normalization.
//!
//! Rendered pages arrive as RGBA buffers from the external renderer. Two
//! pages of differing physical size are never cropped; each is painted at
//! the top-left origin of a shared white canvas sized to the pair's maximum
//! dimensions before pixel comparison.

use image::{Rgba, RgbaImage, imageops};

/// Rectangular buffer of RGBA samples representing one rendered page.
pub type Raster = RgbaImage;

pub(crate) const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Embeds both rasters into white canvases of the pair's maximum
/// dimensions, top-left aligned; extra area on the right/bottom stays
/// white.
pub fn normalize_pair(a: &Raster, b: &Raster) -> (Raster, Raster) {
    let width = a.width().max(b.width());
    let height = a.height().max(b.height());
    (
        paint_on_white(a, width, height),
        paint_on_white(b, width, height),
    )
}

fn paint_on_white(source: &Raster, width: u32, height: u32) -> Raster {
    let mut canvas = RgbaImage::from_pixel(width, height, WHITE);
    imageops::replace(&mut canvas, source, 0, 0);
    canvas
}
