mod common;

use common::solid;
use image::{Rgba, RgbaImage};
use pagediff::{CompareConfig, diff_rasters, normalize_pair};

#[test]
fn diff_against_self_matches_every_pixel() {
    let mut page = solid(8, 8, [30, 60, 90]);
    page.put_pixel(3, 3, Rgba([255, 255, 255, 255]));
    let diff = diff_rasters(&page, &page, &CompareConfig::default());
    assert_eq!(diff.stats.total, 64);
    assert_eq!(diff.stats.matched, 64);
    assert_eq!(diff.stats.differ, 0);
    assert_eq!(diff.stats.white, 1);
}

#[test]
fn white_and_black_page_scenario() {
    // left = [white, white], right = [white, black]
    let left = solid(2, 1, [255, 255, 255]);
    let mut right = solid(2, 1, [255, 255, 255]);
    right.put_pixel(1, 0, Rgba([0, 0, 0, 255]));

    let diff = diff_rasters(&left, &right, &CompareConfig::default());
    assert_eq!(*diff.pixels.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    assert_eq!(*diff.pixels.get_pixel(1, 0), Rgba([255, 0, 0, 255]));
    assert_eq!(diff.stats.total, 2);
    assert_eq!(diff.stats.matched, 1);
    assert_eq!(diff.stats.white, 1);
    assert_eq!(diff.stats.differ, 1);
    assert_eq!(diff.stats.match_percent_label(), "50.00");
}

#[test]
fn conservation_holds_for_mismatched_sizes() {
    let mut left = RgbaImage::new(5, 7);
    let mut right = RgbaImage::new(6, 4);
    for (x, y, pixel) in left.enumerate_pixels_mut() {
        *pixel = Rgba([(x * 40) as u8, (y * 30) as u8, 128, 255]);
    }
    for (x, y, pixel) in right.enumerate_pixels_mut() {
        *pixel = Rgba([(y * 40) as u8, (x * 30) as u8, 96, 255]);
    }

    let diff = diff_rasters(&left, &right, &CompareConfig::default());
    assert_eq!(diff.pixels.dimensions(), (6, 7));
    assert_eq!(diff.stats.total, 42);
    assert_eq!(diff.stats.matched + diff.stats.differ, diff.stats.total);
    assert!(diff.stats.white <= diff.stats.matched);
}

#[test]
fn normalized_pair_never_shrinks_either_input() {
    let a = solid(10, 2, [0, 0, 0]);
    let b = solid(3, 9, [0, 0, 0]);
    let (na, nb) = normalize_pair(&a, &b);
    assert_eq!(na.dimensions(), (10, 9));
    assert_eq!(nb.dimensions(), (10, 9));
}

#[test]
fn padding_against_white_page_counts_as_white_match() {
    // Smaller all-white page against a larger all-white page: the padding
    // region compares white-on-white, so nothing differs.
    let small = solid(2, 2, [255, 255, 255]);
    let large = solid(4, 3, [255, 255, 255]);
    let diff = diff_rasters(&small, &large, &CompareConfig::default());
    assert_eq!(diff.stats.total, 12);
    assert_eq!(diff.stats.white, 12);
    assert_eq!(diff.stats.differ, 0);
}

#[test]
fn custom_white_threshold_reclassifies_light_gray() {
    let gray = solid(1, 1, [240, 240, 240]);
    let default_diff = diff_rasters(&gray, &gray, &CompareConfig::default());
    assert_eq!(default_diff.stats.white, 0);

    let lenient = CompareConfig::builder().white_threshold(230).build();
    let lenient_diff = diff_rasters(&gray, &gray, &lenient);
    assert_eq!(lenient_diff.stats.white, 1);
}
