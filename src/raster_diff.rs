//! Per-pixel classification of two same-slot page renderings.
//!
//! Every pixel of the normalized pair is classified as white-match (both
//! near-white), content-match (identical non-white color, grayed out in the
//! output), or differ (pure red in the output). Classification uses the RGB
//! channels only; output alpha is forced opaque.

use crate::config::CompareConfig;
use crate::raster::{Raster, WHITE, normalize_pair};
use crate::report::DiffStats;
use image::Rgba;

/// Annotated output raster plus aggregate pixel statistics.
///
/// `pixels` always has the normalized canvas dimensions, never the original
/// (possibly smaller) input sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffRaster {
    pub pixels: Raster,
    pub stats: DiffStats,
}

const DIFFER: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Classifies every pixel of two page renderings.
///
/// Inputs of differing dimensions are first embedded into a shared white
/// canvas; a size mismatch is never an error. Guarantees
/// `matched + differ == total` and `white <= matched`.
pub fn diff_rasters(a: &Raster, b: &Raster, config: &CompareConfig) -> DiffRaster {
    let (na, nb) = normalize_pair(a, b);
    let (width, height) = na.dimensions();

    let mut out = Raster::new(width, height);
    let mut stats = DiffStats::new(u64::from(width) * u64::from(height));

    for ((pa, pb), po) in na.pixels().zip(nb.pixels()).zip(out.pixels_mut()) {
        let Rgba([r1, g1, b1, _]) = *pa;
        let Rgba([r2, g2, b2, _]) = *pb;
        if is_white(r1, g1, b1, config.white_threshold) && is_white(r2, g2, b2, config.white_threshold)
        {
            *po = WHITE;
            stats.white += 1;
            stats.matched += 1;
        } else if (r1, g1, b1) == (r2, g2, b2) {
            let gray = luminance(r1, g1, b1);
            *po = Rgba([gray, gray, gray, 255]);
            stats.matched += 1;
        } else {
            *po = DIFFER;
            stats.differ += 1;
        }
    }

    DiffRaster { pixels: out, stats }
}

fn is_white(r: u8, g: u8, b: u8, threshold: u8) -> bool {
    r > threshold && g > threshold && b > threshold
}

/// BT.601 luma, rounded.
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)).round() as u8
}
